// File: crates/linkchart-core/tests/event_bus.rs
// Purpose: Linked charts exchange hover/brush events once, without echo, and survive failing listeners.

use std::cell::RefCell;
use std::rc::Rc;

use linkchart_core::{
    Broadcaster, BrushExtent, ChartError, EventData, EventKind, InteractionEvent, LineChart, Listener,
    ScatterPlot,
};
use serde_json::{json, Value};

struct Recorder {
    name: String,
    seen: RefCell<Vec<InteractionEvent>>,
}

impl Recorder {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self { name: name.to_string(), seen: RefCell::new(Vec::new()) })
    }

    fn count(&self) -> usize { self.seen.borrow().len() }
}

impl Listener for Recorder {
    fn id(&self) -> &str { &self.name }

    fn handle_event(&self, event: &InteractionEvent) -> linkchart_core::Result<()> {
        self.seen.borrow_mut().push(event.clone());
        Ok(())
    }
}

fn line(id: &str) -> Rc<LineChart> {
    Rc::new(LineChart::new(id, &Value::Null).expect("line chart"))
}

#[test]
fn mutual_listeners_exchange_hover_once() {
    let a = line("a");
    let b = line("b");
    a.add_listener(&b);
    b.add_listener(&a);

    let watch_a = Recorder::new("watch-a");
    let watch_b = Recorder::new("watch-b");
    a.add_listener(&watch_a);
    b.add_listener(&watch_b);

    let delivery = a.mouse_over(vec![2.0, 4.0]).expect("hover");
    assert!(delivery.is_clean());
    assert_eq!(delivery.delivered, 2);

    // A's listeners saw one forwarded copy each.
    assert_eq!(watch_a.count(), 1);
    let got = watch_a.seen.borrow()[0].clone();
    assert_eq!(got.kind, EventKind::MouseOver);
    assert!(!got.originator);
    assert_eq!(got.data, EventData::Point(vec![2.0, 4.0]));

    // B updated its own state but did not relay the forwarded copy.
    assert_eq!(b.state().hovered, Some(vec![2.0, 4.0]));
    assert_eq!(watch_b.count(), 0);
    assert_eq!(a.state().hovered, Some(vec![2.0, 4.0]));
}

#[test]
fn mouseout_clears_hover_on_both_sides() {
    let a = line("a");
    let b = line("b");
    a.add_listener(&b);
    b.add_listener(&a);

    b.mouse_over(vec![1.0, 1.0]).expect("hover");
    assert_eq!(a.state().hovered, Some(vec![1.0, 1.0]));
    b.mouse_out(vec![1.0, 1.0]).expect("out");
    assert_eq!(a.state().hovered, None);
    assert_eq!(b.state().hovered, None);
}

#[test]
fn forwarded_events_are_never_relayed() {
    let b = line("b");
    let watch = Recorder::new("watch");
    b.add_listener(&watch);

    let forwarded = InteractionEvent::originating(EventKind::MouseOver, EventData::Point(vec![3.0, 9.0])).forwarded();
    b.handle_event(&forwarded).expect("handled");
    assert_eq!(b.state().hovered, Some(vec![3.0, 9.0]));
    assert_eq!(watch.count(), 0);

    let mut bus = Broadcaster::new();
    bus.add(&watch);
    let report = bus.relay(&forwarded);
    assert_eq!(report.delivered, 0);
    assert_eq!(watch.count(), 0);
}

#[test]
fn failing_listener_does_not_stop_delivery() {
    let source = Rc::new(ScatterPlot::new("scatter", &Value::Null).expect("scatter"));
    // Reads column 2, which the two-column rows from the scatter plot lack.
    let picky = Rc::new(LineChart::new("picky", &json!({ "yi": 2 })).expect("line"));
    let watch = Recorder::new("watch");
    source.add_listener(&picky);
    source.add_listener(&watch);

    let delivery = source.mouse_over(vec![1.0, 1.0]).expect("hover");
    assert_eq!(delivery.delivered, 1);
    assert_eq!(delivery.failed.len(), 1);
    match &delivery.failed[0] {
        ChartError::ListenerFailure { listener, .. } => assert_eq!(listener, "picky"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(watch.count(), 1);
    assert_eq!(picky.state().hovered, None);
}

/// Registers `late` on `host` the first time it hears an event.
struct Joiner {
    host: Rc<LineChart>,
    late: Rc<Recorder>,
    seen: RefCell<usize>,
}

impl Listener for Joiner {
    fn id(&self) -> &str { "joiner" }

    fn handle_event(&self, _event: &InteractionEvent) -> linkchart_core::Result<()> {
        *self.seen.borrow_mut() += 1;
        self.host.add_listener(&self.late);
        Ok(())
    }
}

#[test]
fn listener_may_register_on_the_relaying_chart() {
    let a = line("a");
    let late = Recorder::new("late");
    let joiner = Rc::new(Joiner { host: a.clone(), late: late.clone(), seen: RefCell::new(0) });
    a.add_listener(&joiner);

    let delivery = a.mouse_over(vec![1.0, 1.0]).expect("hover");
    assert_eq!(delivery.delivered, 1);
    assert_eq!(*joiner.seen.borrow(), 1);
    // Registered mid-delivery, so it only hears the next event.
    assert_eq!(late.count(), 0);
    assert_eq!(a.listener_count(), 2);

    a.mouse_out(vec![1.0, 1.0]).expect("out");
    assert_eq!(late.count(), 1);
    assert_eq!(*joiner.seen.borrow(), 2);
}

#[test]
fn snapshot_delivers_after_broadcaster_changes() {
    let first = Recorder::new("first");
    let second = Recorder::new("second");
    let mut bus = Broadcaster::new();
    bus.add(&first);
    let snapshot = bus.snapshot();
    bus.add(&second);

    let evt = InteractionEvent::originating(EventKind::Brush, EventData::Point(vec![1.0, 2.0]));
    let report = snapshot.deliver(&evt);
    assert_eq!(report.delivered, 1);
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 0);
}

#[test]
fn dropped_listeners_are_skipped() {
    let a = line("a");
    {
        let gone = Recorder::new("gone");
        a.add_listener(&gone);
        assert_eq!(a.listener_count(), 1);
    }
    assert_eq!(a.listener_count(), 0);
    let delivery = a.mouse_over(vec![0.0, 0.0]).expect("hover");
    assert_eq!(delivery.delivered, 0);
    assert_eq!(delivery.dropped, 1);
}

#[test]
fn unknown_event_kinds_are_ignored() {
    let a = line("a");
    let watch = Recorder::new("watch");
    a.add_listener(&watch);

    let zoom = InteractionEvent::originating(EventKind::parse("zoom"), EventData::Point(vec![9.0]));
    a.handle_event(&zoom).expect("no-op");
    assert_eq!(a.state().hovered, None);
    assert!(a.state().selection.is_empty());
    assert_eq!(watch.count(), 0);
}

#[test]
fn brush_selection_reaches_linked_line_chart() {
    let scatter = Rc::new(ScatterPlot::new("scatter", &Value::Null).expect("scatter"));
    let chart = line("line");
    scatter.add_listener(&chart);
    chart.add_listener(&scatter);

    let delivery = scatter.brush(BrushExtent::new(1.5, 0.0, 4.0, 10.0)).expect("brush");
    assert!(delivery.is_clean());
    let expected = vec![vec![2.0, 4.0], vec![3.0, 9.0]];
    assert_eq!(chart.state().selection, expected);
    assert_eq!(scatter.state().selection, expected);

    let layout = chart.render().expect("layout");
    assert_eq!(layout.selected.len(), 2);
}

#[test]
fn events_parse_from_json() {
    let evt: InteractionEvent =
        serde_json::from_value(json!({ "type": "brush", "data": [[1.0, 2.0]], "originator": true }))
            .expect("event");
    assert_eq!(evt.kind, EventKind::Brush);
    assert_eq!(evt.data, EventData::Selection(vec![vec![1.0, 2.0]]));
}
