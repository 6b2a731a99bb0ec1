// File: crates/linkchart-core/src/axis.rs
// Summary: Axis placement in layout output (orientation, origin, scale and label).

use serde::Serialize;

use crate::geometry::Point;
use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisLayout {
    pub orient: AxisOrient,
    /// Translation of the axis group relative to its chart container.
    pub origin: Point,
    pub scale: LinearScale,
    pub label: Option<String>,
}

impl AxisLayout {
    pub fn bottom(scale: LinearScale, y: f64) -> Self {
        Self { orient: AxisOrient::Bottom, origin: Point::new(0.0, y), scale, label: None }
    }

    pub fn left(scale: LinearScale) -> Self {
        Self { orient: AxisOrient::Left, origin: Point::new(0.0, 0.0), scale, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
