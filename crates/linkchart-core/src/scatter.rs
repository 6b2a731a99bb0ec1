// File: crates/linkchart-core/src/scatter.rs
// Summary: Scatter plot with hover highlighting and rectangular brush selection.

use std::cell::Ref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::axis::AxisLayout;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::event::{Delivery, EventData, EventKind, InteractionEvent, Listener};
use crate::geometry::{Margin, Point, TextLabel};
use crate::interaction::{require_columns, ChartCore, InteractionState};
use crate::line::{LABEL_FONT_SIZE, LABEL_RISE};
use crate::palette::Color;
use crate::scale::{format_value, LinearScale};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterConfig {
    pub labels: Vec<String>,
    pub data: Vec<Vec<f64>>,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub selected_color: Color,
    pub unselected_color: Color,
    pub unselected_radius: f64,
    pub selected_radius: f64,
    pub xi: usize,
    pub yi: usize,
    pub xoffset: f64,
    pub yoffset: f64,
}

impl ChartConfig for ScatterConfig {
    const COMPONENT: &'static str = "ScatterPlot";
}

impl Default for ScatterConfig {
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
            margin: Margin::default(),
            selected_color: Color::rgb(255, 0, 0),
            unselected_color: Color::rgb(70, 130, 180),
            unselected_radius: 8.0,
            selected_radius: 8.0,
            xi: 0,
            yi: 1,
            xoffset: 0.0,
            yoffset: 0.0,
        }
    }
}

/// Finished brush rectangle in data coordinates; corners may come in any order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushExtent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushExtent {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self { Self { x0, y0, x1, y1 } }

    /// Inclusive on all edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0.min(self.x1)
            && x <= self.x0.max(self.x1)
            && y >= self.y0.min(self.y1)
            && y <= self.y0.max(self.y1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dot {
    pub row: usize,
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterLayout {
    /// Top-left of the plot area (margin plus offsets).
    pub origin: Point,
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub dots: Vec<Dot>,
    /// Readout for the hovered dot.
    pub label: Option<TextLabel>,
}

pub struct ScatterPlot {
    core: ChartCore<ScatterConfig>,
}

impl ScatterPlot {
    pub fn new(id: impl Into<String>, overrides: &Value) -> Result<Self> {
        Ok(Self { core: ChartCore::new(id, ScatterConfig::default(), overrides)? })
    }

    pub fn attr(&self, name: &str) -> Result<Value> { self.core.attr(name) }

    pub fn set_attr(&self, name: &str, value: impl Into<Value>) -> Result<&Self> {
        self.core.set_attr(name, value.into())?;
        Ok(self)
    }

    pub fn config(&self) -> Ref<'_, ScatterConfig> { self.core.config() }

    pub fn state(&self) -> Ref<'_, InteractionState> { self.core.state() }

    pub fn add_listener<L: Listener + 'static>(&self, listener: &Rc<L>) {
        self.core.add_listener(listener);
    }

    pub fn listener_count(&self) -> usize { self.core.listener_count() }

    pub fn mouse_over(&self, row: Vec<f64>) -> Result<Delivery> {
        self.dispatch(&InteractionEvent::originating(EventKind::MouseOver, EventData::Point(row)))
    }

    pub fn mouse_out(&self, row: Vec<f64>) -> Result<Delivery> {
        self.dispatch(&InteractionEvent::originating(EventKind::MouseOut, EventData::Point(row)))
    }

    /// Select every row inside `extent`, then broadcast the selection.
    pub fn brush(&self, extent: BrushExtent) -> Result<Delivery> {
        let rows: Vec<Vec<f64>> = {
            let p = self.core.config();
            require_columns(&p.data, &[p.xi, p.yi])?;
            p.data
                .iter()
                .filter(|d| extent.contains(d[p.xi], d[p.yi]))
                .cloned()
                .collect()
        };
        tracing::debug!(chart = self.core.id(), selected = rows.len(), "Brush finished");
        self.dispatch(&InteractionEvent::originating(EventKind::Brush, EventData::Selection(rows)))
    }

    fn dispatch(&self, event: &InteractionEvent) -> Result<Delivery> {
        let columns = {
            let p = self.core.config();
            [p.xi, p.yi]
        };
        self.core.dispatch(event, &columns)
    }

    pub fn render(&self) -> Result<ScatterLayout> {
        let p = self.core.config();
        if p.data.is_empty() {
            return Err(ChartError::invalid_input("scatter plot has no data rows"));
        }
        require_columns(&p.data, &[p.xi, p.yi])?;

        let plot_width = p.width - p.margin.hsum();
        let plot_height = p.height - p.margin.vsum();
        // Both domains start at zero.
        let x_max = p.data.iter().map(|d| d[p.xi]).fold(f64::NEG_INFINITY, f64::max);
        let y_max = p.data.iter().map(|d| d[p.yi]).fold(f64::NEG_INFINITY, f64::max);
        let x = LinearScale::new((0.0, x_max), (0.0, plot_width));
        let y = LinearScale::new((0.0, y_max), (plot_height, 0.0));

        let state = self.core.state();
        let dots = p
            .data
            .iter()
            .enumerate()
            .map(|(row, d)| {
                let selected = state.is_highlighted(d);
                Dot {
                    row,
                    center: Point::new(x.map(d[p.xi]), y.map(d[p.yi])),
                    radius: if selected { p.selected_radius } else { p.unselected_radius },
                    color: if selected { p.selected_color } else { p.unselected_color },
                    selected,
                }
            })
            .collect();

        let label = state
            .hovered
            .as_deref()
            .filter(|d| d.len() > p.xi.max(p.yi))
            .map(|d| TextLabel {
                text: format_value(d[p.yi]),
                position: Point::new(x.map(d[p.xi]), y.map(d[p.yi]) - LABEL_RISE),
                font_size: LABEL_FONT_SIZE,
            });

        tracing::debug!(chart = self.core.id(), rows = p.data.len(), "Scatter layout");
        Ok(ScatterLayout {
            origin: Point::new(p.margin.left + p.xoffset, p.margin.top + p.yoffset),
            plot_width,
            plot_height,
            x_axis: AxisLayout::bottom(x, plot_height),
            y_axis: AxisLayout::left(y),
            dots,
            label,
        })
    }
}

impl Listener for ScatterPlot {
    fn id(&self) -> &str { self.core.id() }

    fn handle_event(&self, event: &InteractionEvent) -> Result<()> {
        self.dispatch(event).map(|_| ())
    }
}
