// File: crates/linkchart-core/src/line.rs
// Summary: Line chart with per-row hover zones; hover and brush are shared with linked charts.

use std::cell::Ref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::axis::AxisLayout;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::event::{Delivery, EventData, EventKind, InteractionEvent, Listener};
use crate::geometry::{Point, Rect, TextLabel};
use crate::interaction::{require_columns, ChartCore, InteractionState};
use crate::palette::Color;
use crate::scale::{extent, format_value, LinearScale};

pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_COLOR: Color = Color::rgb(255, 0, 0);
/// Readout text sits this far above the marked point.
pub const LABEL_RISE: f64 = 10.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    pub labels: Vec<String>,
    pub data: Vec<Vec<f64>>,
    pub width: f64,
    pub height: f64,
    /// Column of `data` plotted on X.
    pub xi: usize,
    /// Column of `data` plotted on Y.
    pub yi: usize,
    pub xoffset: f64,
    pub yoffset: f64,
}

impl ChartConfig for LineChartConfig {
    const COMPONENT: &'static str = "LineChart";
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            labels: vec!["X".into(), "Y".into()],
            data: vec![
                vec![0.0, 0.0],
                vec![1.0, 1.0],
                vec![2.0, 4.0],
                vec![3.0, 9.0],
                vec![4.0, 16.0],
            ],
            width: 600.0,
            height: 400.0,
            xi: 0,
            yi: 1,
            xoffset: 0.0,
            yoffset: 0.0,
        }
    }
}

/// Transparent band over one data row that triggers hover.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverZone {
    pub row: usize,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineLayout {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub path: Vec<Point>,
    pub zones: Vec<HoverZone>,
    /// Marker and readout for the hovered row.
    pub hover: Option<(Marker, TextLabel)>,
    /// Markers for brushed rows.
    pub selected: Vec<Marker>,
}

pub struct LineChart {
    core: ChartCore<LineChartConfig>,
}

impl LineChart {
    pub fn new(id: impl Into<String>, overrides: &Value) -> Result<Self> {
        Ok(Self { core: ChartCore::new(id, LineChartConfig::default(), overrides)? })
    }

    pub fn attr(&self, name: &str) -> Result<Value> { self.core.attr(name) }

    pub fn set_attr(&self, name: &str, value: impl Into<Value>) -> Result<&Self> {
        self.core.set_attr(name, value.into())?;
        Ok(self)
    }

    pub fn config(&self) -> Ref<'_, LineChartConfig> { self.core.config() }

    pub fn state(&self) -> Ref<'_, InteractionState> { self.core.state() }

    pub fn add_listener<L: Listener + 'static>(&self, listener: &Rc<L>) {
        self.core.add_listener(listener);
    }

    pub fn listener_count(&self) -> usize { self.core.listener_count() }

    /// Pointer entered the zone of `row`: mark it and notify listeners.
    pub fn mouse_over(&self, row: Vec<f64>) -> Result<Delivery> {
        self.dispatch(&InteractionEvent::originating(EventKind::MouseOver, EventData::Point(row)))
    }

    /// Pointer left `row`: clear the marker and notify listeners.
    pub fn mouse_out(&self, row: Vec<f64>) -> Result<Delivery> {
        self.dispatch(&InteractionEvent::originating(EventKind::MouseOut, EventData::Point(row)))
    }

    fn dispatch(&self, event: &InteractionEvent) -> Result<Delivery> {
        let columns = {
            let p = self.core.config();
            [p.xi, p.yi]
        };
        self.core.dispatch(event, &columns)
    }

    pub fn render(&self) -> Result<LineLayout> {
        let p = self.core.config();
        if p.data.is_empty() {
            return Err(ChartError::invalid_input("line chart has no data rows"));
        }
        require_columns(&p.data, &[p.xi, p.yi])?;

        let (x0, x1) = extent(p.data.iter().map(|d| d[p.xi])).unwrap_or((0.0, 0.0));
        let (y0, y1) = extent(p.data.iter().map(|d| d[p.yi])).unwrap_or((0.0, 0.0));
        let x = LinearScale::new((x0, x1), (0.0, p.width));
        let y = LinearScale::new((y0, y1), (p.height, 0.0));
        let at = |d: &[f64]| Point::new(x.map(d[p.xi]), y.map(d[p.yi]));

        let path: Vec<Point> = p.data.iter().map(|d| at(d.as_slice())).collect();

        // Zones share the spacing of the first two rows.
        let zone_width = match p.data.as_slice() {
            [first, second, ..] => (x.map(second[p.xi]) - x.map(first[p.xi])).abs(),
            _ => p.width,
        };
        let zones = p
            .data
            .iter()
            .enumerate()
            .map(|(row, d)| HoverZone { row, rect: Rect::from_xywh(x.map(d[p.xi]), 0.0, zone_width, p.height) })
            .collect();

        let state = self.core.state();
        let marker = |d: &[f64]| Marker { center: at(d), radius: MARKER_RADIUS, color: MARKER_COLOR };
        let hover = state
            .hovered
            .as_deref()
            .filter(|d| d.len() > p.xi.max(p.yi))
            .map(|d| {
                let m = marker(d);
                let label = TextLabel {
                    text: format_value(d[p.yi]),
                    position: Point::new(m.center.x, m.center.y - LABEL_RISE),
                    font_size: LABEL_FONT_SIZE,
                };
                (m, label)
            });
        let selected = state
            .selection
            .iter()
            .filter(|d| d.len() > p.xi.max(p.yi))
            .map(|d| marker(d.as_slice()))
            .collect();

        let y_label = p.labels.get(p.yi).cloned().unwrap_or_default();
        tracing::debug!(chart = self.core.id(), rows = p.data.len(), "Line chart layout");
        Ok(LineLayout {
            origin: Point::new(p.xoffset, p.yoffset),
            width: p.width,
            height: p.height,
            x_axis: AxisLayout::bottom(x, p.height),
            y_axis: AxisLayout::left(y).with_label(y_label),
            path,
            zones,
            hover,
            selected,
        })
    }
}

impl Listener for LineChart {
    fn id(&self) -> &str { self.core.id() }

    fn handle_event(&self, event: &InteractionEvent) -> Result<()> {
        self.dispatch(event).map(|_| ())
    }
}
