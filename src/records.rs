//! Line-delimited JSON record loading and introspection
//!
//! Each non-empty line of the input file is one JSON object describing a
//! normalized SKU: `sku`, `name`, `type`, `pack_size`, `unit`. Loading is
//! all-or-nothing: a single malformed line fails the whole run before any
//! partial record list exists.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::error::SkuscanError;

/// Runtime category of a JSON value. JSON's value space is closed, so this
/// tag fully describes what a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Boolean => "boolean",
            JsonKind::Null => "null",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed product record.
///
/// Fields stay as parsed JSON so the structure report can classify whatever
/// the file actually contains; typed accessors cover the known fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Parse one line as a JSON object. `line_no` is 1-based and only used
    /// for the error message.
    pub fn from_line(line: &str, line_no: usize) -> Result<Self, SkuscanError> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| SkuscanError::InvalidRecord {
                line: line_no,
                message: e.to_string(),
            })?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SkuscanError::InvalidRecord {
                line: line_no,
                message: format!("expected a JSON object, got {}", JsonKind::of(&other)),
            }),
        }
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn get_number(&self, field: &str) -> Option<&Number> {
        match self.fields.get(field) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn sku(&self) -> Option<&str> {
        self.get_str("sku")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn item_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    pub fn pack_size(&self) -> Option<&Number> {
        self.get_number("pack_size")
    }

    pub fn unit(&self) -> Option<&str> {
        self.get_str("unit")
    }

    /// Field name and runtime JSON kind for every field, for the structure
    /// report.
    pub fn field_kinds(&self) -> Vec<(&str, JsonKind)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), JsonKind::of(value)))
            .collect()
    }
}

/// Load a JSONL file into an ordered record list, skipping blank lines.
///
/// The first malformed line aborts the load with its 1-based line number;
/// no partial list is returned.
pub fn load_jsonl(path: &Path) -> Result<Vec<Record>, SkuscanError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(Record::from_line(&line, index + 1)?);
    }
    log::debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Render a JSON number the way the catalog prints pack sizes: whole values
/// without a trailing ".0".
pub fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(f) = n.as_f64() {
        if f.fract() == 0.0 && f.abs() < 1e15 {
            return (f as i64).to_string();
        }
    }
    n.to_string()
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
