// File: crates/linkchart-core/src/csv_io.rs
// Summary: CSV ingest into a `Table` (first record becomes the header row; ragged rows kept).

use std::io::Read;

use crate::error::{ChartError, Result};
use crate::table::Table;

/// Read every CSV record from `reader` into a table. Cells are trimmed.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect::<Vec<_>>());
    }
    if rows.is_empty() {
        return Err(ChartError::invalid_input("CSV input is empty"));
    }
    tracing::debug!(rows = rows.len(), columns = rows[0].len(), "Parsed CSV table");
    Table::new(rows)
}

impl Table {
    pub fn from_csv_str(text: &str) -> Result<Self> {
        read_table(text.as_bytes())
    }
}
