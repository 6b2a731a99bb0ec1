// File: crates/linkchart-core/src/event.rs
// Summary: Cross-chart interaction events and the listener broadcaster (hover/brush sync).
// Notes:
// - Only an originating event is relayed. Listeners receive a copy with `originator = false`
//   and relaying that copy delivers nothing, so linked charts never echo back.
// - Listeners are held weakly; two charts may listen to each other without leaking.

use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Interaction type. Names outside the known set are kept as `Custom` and ignored by charts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    MouseOver,
    MouseOut,
    Brush,
    Custom(String),
}

impl EventKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "mouseover" => EventKind::MouseOver,
            "mouseout" => EventKind::MouseOut,
            "brush" => EventKind::Brush,
            other => EventKind::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::MouseOver => "mouseover",
            EventKind::MouseOut => "mouseout",
            EventKind::Brush => "brush",
            EventKind::Custom(name) => name,
        }
    }
}

impl From<String> for EventKind {
    fn from(name: String) -> Self { EventKind::parse(&name) }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self { kind.as_str().to_string() }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Payload: the hovered row, or the rows picked by a brush.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventData {
    Point(Vec<f64>),
    Selection(Vec<Vec<f64>>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub data: EventData,
    pub originator: bool,
}

impl InteractionEvent {
    /// Event raised by the chart that saw the user interaction.
    pub fn originating(kind: EventKind, data: EventData) -> Self {
        Self { kind, data, originator: true }
    }

    /// Copy handed to listeners.
    pub fn forwarded(&self) -> Self {
        Self { originator: false, ..self.clone() }
    }
}

/// Receiver of forwarded interaction events.
///
/// `handle_event` is the single entry point; implementations dispatch on
/// `event.kind` and treat unknown kinds as a no-op.
///
/// Failures must be reported as `Err`: the broadcaster isolates returned
/// errors but does not catch panics, which unwind through the chart that
/// relayed the event.
pub trait Listener {
    fn id(&self) -> &str;
    fn handle_event(&self, event: &InteractionEvent) -> Result<()>;
}

/// Outcome of one relay.
#[derive(Debug, Default)]
pub struct Delivery {
    pub delivered: usize,
    /// One `ListenerFailure` per listener that returned an error.
    pub failed: Vec<ChartError>,
    /// Listeners that were dropped since registration.
    pub dropped: usize,
}

impl Delivery {
    pub fn is_clean(&self) -> bool { self.failed.is_empty() }
}

/// Ordered list of weakly-held listeners.
#[derive(Default)]
pub struct Broadcaster {
    listeners: Vec<Weak<dyn Listener>>,
}

impl Broadcaster {
    pub fn new() -> Self { Self::default() }

    pub fn add<L: Listener + 'static>(&mut self, listener: &Rc<L>) {
        let listener: Rc<dyn Listener> = listener.clone();
        self.add_dyn(&listener);
    }

    pub fn add_dyn(&mut self, listener: &Rc<dyn Listener>) {
        self.listeners.retain(|w| w.strong_count() > 0);
        self.listeners.push(Rc::downgrade(listener));
    }

    /// Live listeners.
    pub fn len(&self) -> usize {
        self.listeners.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Live listeners in registration order, plus the count of dropped ones.
    ///
    /// The snapshot owns strong handles, so the broadcaster may be borrowed
    /// mutably (a listener registering another) while the snapshot delivers.
    pub fn snapshot(&self) -> Snapshot {
        let mut dropped = 0;
        let targets = self
            .listeners
            .iter()
            .filter_map(|w| {
                let live = w.upgrade();
                if live.is_none() {
                    dropped += 1;
                }
                live
            })
            .collect();
        Snapshot { targets, dropped }
    }

    /// Deliver `event` to every listener if it is an originating event.
    ///
    /// Forwarded events (`originator == false`) are never relayed further.
    /// A listener returning `Err` is logged and recorded; delivery continues with the next one.
    pub fn relay(&self, event: &InteractionEvent) -> Delivery {
        self.snapshot().deliver(event)
    }
}

/// Listeners captured by [`Broadcaster::snapshot`].
pub struct Snapshot {
    targets: Vec<Rc<dyn Listener>>,
    dropped: usize,
}

impl Snapshot {
    /// Same contract as [`Broadcaster::relay`].
    pub fn deliver(self, event: &InteractionEvent) -> Delivery {
        if !event.originator {
            return Delivery::default();
        }
        let mut report = Delivery { dropped: self.dropped, ..Delivery::default() };
        let forwarded = event.forwarded();
        tracing::debug!(kind = %event.kind, listeners = self.targets.len(), "Relaying interaction");
        for listener in self.targets {
            match listener.handle_event(&forwarded) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(listener = listener.id(), error = %e, "Listener failed to handle event");
                    report.failed.push(ChartError::ListenerFailure {
                        listener: listener.id().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        report
    }
}
