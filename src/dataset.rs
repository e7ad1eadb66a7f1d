//! Tabular dataset loaded from a spreadsheet
//!
//! The first worksheet row becomes the column labels; every following row is
//! stored as one `Vec<Cell>`. `Cell::Empty` is the explicit missing marker
//! and is never conflated with an empty string.

use std::fmt;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::SkuscanError;

/// One spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Missing marker, distinct from `Text("")`
    Empty,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display form for non-missing cells, `None` for missing ones.
    pub fn as_display(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            // Whole numbers print without a trailing ".0"
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(n) => Cell::Number(*n),
            Data::Int(n) => Cell::Number(*n as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

/// In-memory row/column structure loaded from a spreadsheet.
#[derive(Debug, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Load the first worksheet of an xlsx file.
    ///
    /// Any open or read failure maps to [`SkuscanError::Spreadsheet`] so the
    /// caller reports a message instead of a backtrace.
    pub fn load_xlsx(path: &Path) -> Result<Self, SkuscanError> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| SkuscanError::Spreadsheet(format!("cannot open {:?}: {}", path, e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SkuscanError::NoWorksheet)?
            .map_err(|e| SkuscanError::Spreadsheet(format!("cannot read {:?}: {}", path, e)))?;

        let mut rows = range.rows();

        // Header row supplies the column labels; blank header cells get a
        // positional label so the column set stays fixed across all rows.
        let columns = match rows.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .map(|(i, cell)| match Cell::from(cell).as_display() {
                    Some(label) if !label.trim().is_empty() => label,
                    _ => format!("column_{}", i),
                })
                .collect(),
            None => Vec::new(),
        };

        let rows: Vec<Vec<Cell>> = rows
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();

        log::debug!("Loaded {:?}: {} columns, {} rows", path, columns.len(), rows.len());

        Ok(Self { columns, rows })
    }

    /// Build a dataset directly from parts (used by reports and tests).
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// (row count, column count), excluding the header row.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All values of one column, top to bottom. Rows shorter than `col`
    /// contribute a missing entry.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &Cell> {
        const EMPTY: Cell = Cell::Empty;
        self.rows.iter().map(move |row| row.get(col).unwrap_or(&EMPTY))
    }
}
