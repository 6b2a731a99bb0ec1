// File: crates/linkchart-core/src/legend.rs
// Summary: Horizontal/vertical color legend: one colored cell and tick per label, plus a caption.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ChartConfig, Options};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::palette::{Color, Palette};
use crate::scale::BandScale;

/// Gap between the end of a tick and its label.
pub const TICK_PADDING: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub labels: Vec<String>,
    pub xoffset: f64,
    pub yoffset: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub tick_length: f64,
    pub caption: String,
    pub color: Palette,
    pub caption_font_size: f64,
    pub caption_x_offset: f64,
    pub caption_y_offset: f64,
}

impl ChartConfig for LegendConfig {
    const COMPONENT: &'static str = "Legend";
}

impl LegendConfig {
    pub fn horizontal() -> Self {
        Self {
            labels: vec!["A".into(), "B".into(), "C".into()],
            xoffset: 10.0,
            yoffset: 20.0,
            cell_width: 30.0,
            cell_height: 20.0,
            tick_length: 25.0,
            caption: "Legend".into(),
            color: Palette::category20c(),
            caption_font_size: 14.0,
            caption_x_offset: 0.0,
            caption_y_offset: -6.0,
        }
    }

    pub fn vertical() -> Self {
        Self {
            xoffset: 50.0,
            yoffset: 30.0,
            tick_length: 5.0,
            caption_x_offset: -30.0,
            caption_y_offset: -20.0,
            ..Self::horizontal()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendCell {
    pub label: String,
    pub rect: Rect,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendTick {
    pub label: String,
    pub from: Point,
    pub to: Point,
    /// Anchor of the tick label text.
    pub text_at: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub position: Point,
    pub font_size: f64,
}

/// Renderer-agnostic legend geometry; coordinates are relative to `origin`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendLayout {
    pub orientation: Orientation,
    pub origin: Point,
    pub cells: Vec<LegendCell>,
    pub ticks: Vec<LegendTick>,
    pub caption: Caption,
}

pub struct Legend {
    orientation: Orientation,
    options: Options<LegendConfig>,
}

impl Legend {
    /// Legend laid out left to right, ticks below the cells.
    pub fn horizontal(overrides: &Value) -> Result<Self> {
        Ok(Self {
            orientation: Orientation::Horizontal,
            options: Options::with_overrides(LegendConfig::horizontal(), overrides)?,
        })
    }

    /// Legend laid out top to bottom, ticks left of the cells.
    pub fn vertical(overrides: &Value) -> Result<Self> {
        Ok(Self {
            orientation: Orientation::Vertical,
            options: Options::with_overrides(LegendConfig::vertical(), overrides)?,
        })
    }

    pub fn orientation(&self) -> Orientation { self.orientation }

    pub fn config(&self) -> &LegendConfig { self.options.get_ref() }

    pub fn attr(&self, name: &str) -> Result<Value> { self.options.get(name) }

    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.options.set(name, value.into())?;
        Ok(self)
    }

    pub fn render(&self) -> LegendLayout {
        let p = self.options.get_ref();
        let horizontal = self.orientation == Orientation::Horizontal;
        let step = if horizontal { p.cell_width } else { p.cell_height };
        let band = BandScale::new(p.labels.len(), step);

        let mut cells = Vec::with_capacity(p.labels.len());
        let mut ticks = Vec::with_capacity(p.labels.len());
        for (i, label) in p.labels.iter().enumerate() {
            let pos = band.position(i);
            let (rect, from, to, text_at) = if horizontal {
                (
                    Rect::from_xywh(pos, 0.0, p.cell_width, p.cell_height),
                    Point::new(pos, 0.0),
                    Point::new(pos, p.tick_length),
                    Point::new(pos, p.tick_length + TICK_PADDING),
                )
            } else {
                (
                    Rect::from_xywh(0.0, pos, p.cell_width, p.cell_height),
                    Point::new(0.0, pos),
                    Point::new(-p.tick_length, pos),
                    Point::new(-p.tick_length - TICK_PADDING, pos),
                )
            };
            cells.push(LegendCell { label: label.clone(), rect, color: p.color.color(i) });
            ticks.push(LegendTick { label: label.clone(), from, to, text_at });
        }

        tracing::debug!(orientation = ?self.orientation, cells = cells.len(), "Legend layout");
        LegendLayout {
            orientation: self.orientation,
            origin: Point::new(p.xoffset, p.yoffset),
            cells,
            ticks,
            caption: Caption {
                text: p.caption.clone(),
                position: Point::new(p.caption_x_offset, p.caption_y_offset),
                font_size: p.caption_font_size,
            },
        }
    }
}
