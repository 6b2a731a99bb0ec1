// File: crates/linkchart-core/src/table.rs
// Summary: Tabular data utilities: type inference, column extraction, min/max and record zipping.
// Notes:
// - Row 0 of a table is the header; rows 1..N hold the data cells as strings.
// - Numeric detection always scans every data row. One bad cell disqualifies a column.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ChartError, Result};

/// True iff `value` parses to a finite float (surrounding whitespace ignored).
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column selector: by zero-based position or by header name (first match).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> From<usize> for Column<'a> {
    fn from(index: usize) -> Self { Column::Index(index) }
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(name: &'a str) -> Self { Column::Name(name) }
}

/// Result of a min/max scan: a parsed number for numeric columns, the raw text otherwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// One data row keyed by column name, in header order.
///
/// Inserting a name twice keeps its first position and replaces the value,
/// so duplicate header names collapse to the right-most cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

fn zip_row(header: &[String], row: &[String]) -> Record {
    let mut record = Record::new();
    for (name, value) in header.iter().zip(row) {
        record.insert(name.as_str(), value.as_str());
    }
    record
}

/// Zip `header` against every row of `data` (no header row inside `data`).
/// Each record stops at the shorter of the header and the row.
pub fn csv_to_map_array(header: &[String], data: &[Vec<String>]) -> Vec<Record> {
    data.iter().map(|row| zip_row(header, row)).collect()
}

/// Header row plus row-major string cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table; the first row is the header. Fails when `rows` is empty.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::invalid_input("table has no header row"));
        }
        Ok(Self { rows })
    }

    pub fn from_rows<R, C, S>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    pub fn header(&self) -> &[String] { &self.rows[0] }

    /// Rows 1..N.
    pub fn data_rows(&self) -> &[Vec<String>] { &self.rows[1..] }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize { self.rows.len() - 1 }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header().iter().position(|h| h == name)
    }

    /// Resolve a column selector to a header position.
    pub fn resolve<'a>(&self, col: impl Into<Column<'a>>) -> Result<usize> {
        match col.into() {
            Column::Index(i) if i < self.header().len() => Ok(i),
            Column::Index(i) => Err(ChartError::invalid_input(format!(
                "column index {i} out of range (header has {} columns)",
                self.header().len()
            ))),
            Column::Name(name) => self
                .column_index(name)
                .ok_or_else(|| ChartError::invalid_input(format!("no column named '{name}'"))),
        }
    }

    /// Cell `index` of every data row, in row order. A row too short to hold the cell is an error.
    pub fn column(&self, index: usize) -> Result<Vec<&str>> {
        let index = self.resolve(index)?;
        self.data_rows()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.get(index).map(String::as_str).ok_or_else(|| {
                    ChartError::invalid_input(format!(
                        "row {} has {} cells, column {index} requested",
                        r + 1,
                        row.len()
                    ))
                })
            })
            .collect()
    }

    /// Every data cell at `index` is numeric. Vacuously true with no data rows;
    /// a missing cell counts as non-numeric.
    pub fn is_numeric_column(&self, index: usize) -> bool {
        self.data_rows()
            .iter()
            .all(|row| row.get(index).is_some_and(|cell| is_number(cell)))
    }

    /// Positions of numeric columns, in header order.
    pub fn numeric_indices(&self) -> Vec<usize> {
        (0..self.header().len()).filter(|&i| self.is_numeric_column(i)).collect()
    }

    /// Names of numeric columns, in header order.
    pub fn numeric_headers(&self) -> Vec<&str> {
        self.numeric_indices()
            .into_iter()
            .map(|i| self.header()[i].as_str())
            .collect()
    }

    /// Maximum of a column: float max when numeric, lexicographic otherwise.
    pub fn max(&self, index: usize) -> Result<CellValue> {
        self.extreme(index, Ordering::Greater)
    }

    /// Minimum of a column: float min when numeric, lexicographic otherwise.
    pub fn min(&self, index: usize) -> Result<CellValue> {
        self.extreme(index, Ordering::Less)
    }

    // Seeds from the first data row and scans the remaining rows.
    fn extreme(&self, index: usize, want: Ordering) -> Result<CellValue> {
        let cells = self.column(index)?;
        let (&seed, rest) = cells
            .split_first()
            .ok_or_else(|| ChartError::invalid_input(format!("column {index} has no data rows")))?;

        if self.is_numeric_column(index) {
            let mut best = numeric_cell(seed)?;
            for &cell in rest {
                let v = numeric_cell(cell)?;
                if v.partial_cmp(&best) == Some(want) {
                    best = v;
                }
            }
            Ok(CellValue::Number(best))
        } else {
            let mut best = seed;
            for &cell in rest {
                if cell.cmp(best) == want {
                    best = cell;
                }
            }
            Ok(CellValue::Text(best.to_string()))
        }
    }

    /// One record per data row (header zipped against the row).
    pub fn to_records(&self) -> Vec<Record> {
        csv_to_map_array(self.header(), self.data_rows())
    }

    /// Parse the given columns of every data row into floats, in the order given.
    pub fn numeric_matrix(&self, columns: &[usize]) -> Result<Vec<Vec<f64>>> {
        for &c in columns {
            self.resolve(c)?;
        }
        self.data_rows()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                columns
                    .iter()
                    .map(|&c| {
                        row.get(c).and_then(|cell| parse_number(cell)).ok_or_else(|| {
                            ChartError::invalid_input(format!(
                                "row {} column {c} is missing or not numeric",
                                r + 1
                            ))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

fn numeric_cell(cell: &str) -> Result<f64> {
    parse_number(cell)
        .ok_or_else(|| ChartError::invalid_input(format!("'{cell}' is not a finite number")))
}
