// File: crates/linkchart-core/src/lib.rs
// Summary: Core library entry point; tabular utilities, event bus and linkable chart components.

pub mod axis;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod event;
pub mod geometry;
pub mod interaction;
pub mod legend;
pub mod line;
pub mod palette;
pub mod scale;
pub mod scatter;
pub mod table;

pub use config::{ChartConfig, Options};
pub use csv_io::read_table;
pub use error::{ChartError, Result};
pub use event::{Broadcaster, Delivery, EventData, EventKind, InteractionEvent, Listener, Snapshot};
pub use interaction::InteractionState;
pub use legend::{Legend, LegendConfig, LegendLayout, Orientation};
pub use line::{LineChart, LineChartConfig, LineLayout};
pub use palette::{Color, Palette};
pub use scatter::{BrushExtent, ScatterConfig, ScatterLayout, ScatterPlot};
pub use table::{csv_to_map_array, is_number, CellValue, Column, Record, Table};
