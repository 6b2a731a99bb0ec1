// File: crates/linkchart-core/src/interaction.rs
// Summary: Hover/brush state and the shared core of linkable charts (options, state, listeners).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use serde_json::Value;

use crate::config::{ChartConfig, Options};
use crate::error::{ChartError, Result};
use crate::event::{Broadcaster, Delivery, EventData, EventKind, InteractionEvent, Listener};

/// Visual interaction state of one chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// Row under the pointer.
    pub hovered: Option<Vec<f64>>,
    /// Rows picked by the last brush.
    pub selection: Vec<Vec<f64>>,
}

impl InteractionState {
    /// Update from an event. Returns `false` for kinds this state does not track.
    pub fn apply(&mut self, event: &InteractionEvent) -> Result<bool> {
        match (&event.kind, &event.data) {
            (EventKind::MouseOver, EventData::Point(row)) => {
                self.hovered = Some(row.clone());
                Ok(true)
            }
            (EventKind::MouseOut, EventData::Point(_)) => {
                self.hovered = None;
                Ok(true)
            }
            (EventKind::Brush, EventData::Selection(rows)) => {
                self.selection = rows.clone();
                Ok(true)
            }
            (EventKind::Brush, EventData::Point(row)) => {
                self.selection = vec![row.clone()];
                Ok(true)
            }
            (EventKind::Custom(_), _) => Ok(false),
            (kind, EventData::Selection(_)) => Err(ChartError::invalid_input(format!(
                "'{kind}' event expects a single row, got a selection"
            ))),
        }
    }

    /// Row is hovered or part of the selection.
    pub fn is_highlighted(&self, row: &[f64]) -> bool {
        self.hovered.as_deref() == Some(row) || self.selection.iter().any(|r| r.as_slice() == row)
    }
}

/// Every row must hold each of `columns`.
pub fn require_columns<'a>(rows: impl IntoIterator<Item = &'a Vec<f64>>, columns: &[usize]) -> Result<()> {
    for (r, row) in rows.into_iter().enumerate() {
        if let Some(&c) = columns.iter().find(|&&c| c >= row.len()) {
            return Err(ChartError::invalid_input(format!(
                "row {r} has {} values, column {c} required",
                row.len()
            )));
        }
    }
    Ok(())
}

/// Options, interaction state and listeners shared by linkable charts.
pub struct ChartCore<C> {
    id: String,
    options: RefCell<Options<C>>,
    state: RefCell<InteractionState>,
    listeners: RefCell<Broadcaster>,
}

impl<C: ChartConfig> ChartCore<C> {
    pub fn new(id: impl Into<String>, base: C, overrides: &Value) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            options: RefCell::new(Options::with_overrides(base, overrides)?),
            state: RefCell::new(InteractionState::default()),
            listeners: RefCell::new(Broadcaster::new()),
        })
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn attr(&self, name: &str) -> Result<Value> { self.options.borrow().get(name) }

    pub fn set_attr(&self, name: &str, value: Value) -> Result<()> {
        self.options.borrow_mut().set(name, value)
    }

    pub fn config(&self) -> Ref<'_, C> {
        Ref::map(self.options.borrow(), Options::get_ref)
    }

    pub fn state(&self) -> Ref<'_, InteractionState> { self.state.borrow() }

    pub fn add_listener<L: Listener + 'static>(&self, listener: &Rc<L>) {
        self.listeners.borrow_mut().add(listener);
    }

    pub fn listener_count(&self) -> usize { self.listeners.borrow().len() }

    /// Validate rows against `columns`, update state, then relay.
    ///
    /// State and listener borrows are released before delivery, so listeners may
    /// read this chart or register new listeners on it.
    pub fn dispatch(&self, event: &InteractionEvent, columns: &[usize]) -> Result<Delivery> {
        if let EventKind::Custom(_) = event.kind {
            tracing::trace!(chart = %self.id, kind = %event.kind, "Ignoring unrecognized event");
            return Ok(Delivery::default());
        }
        match &event.data {
            EventData::Point(row) => require_columns([row], columns)?,
            EventData::Selection(rows) => require_columns(rows, columns)?,
        }
        self.state.borrow_mut().apply(event)?;
        let targets = self.listeners.borrow().snapshot();
        Ok(targets.deliver(event))
    }
}
