use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::annotation::AnnotationRecord;
use crate::parsing::variant::ParsedVariant;

/// Leading columns of every output row, in order
pub const BASE_COLUMNS: [&str; 5] = ["input_variant", "chrom", "Pos", "ref", "alt"];

/// One output row: ordered field name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputRow {
    fields: Vec<(String, Value)>,
}

impl OutputRow {
    /// Base fields for an input identifier and its parsed components
    #[must_use]
    pub fn for_variant(identifier: &str, parsed: &ParsedVariant) -> Self {
        let locus = parsed.locus();
        let mut row = Self::default();
        for (name, value) in BASE_COLUMNS.iter().zip([
            identifier,
            locus.chrom.as_str(),
            locus.pos.as_str(),
            parsed.reference.as_str(),
            parsed.alternate.as_str(),
        ]) {
            row.set(name, Value::String(value.to_string()));
        }
        row
    }

    /// A copy of this row with `record` merged in.
    ///
    /// Nested objects are flattened into `parent.child` columns. A record field
    /// named like an existing column replaces that column's value in place.
    #[must_use]
    pub fn with_record(&self, record: &AnnotationRecord) -> Self {
        let mut row = self.clone();
        row.merge_flattened("", record);
        row
    }

    /// Set `name`, replacing the value if the column already exists
    pub fn set(&mut self, name: &str, value: Value) {
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    fn merge_flattened(&mut self, prefix: &str, record: &Map<String, Value>) {
        for (key, value) in record {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::Object(nested) => self.merge_flattened(&name, nested),
                other => self.set(&name, other.clone()),
            }
        }
    }
}

/// Output rows aligned on a shared column set, ready to write as a sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    pub columns: Vec<String>,
    /// One value per column; `Value::Null` where a row lacks the column
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    /// Align rows on the union of their columns, in first-seen order
    #[must_use]
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in rows {
            for name in row.columns() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Drop rows equal to an earlier row, keeping first occurrences in order.
    ///
    /// Numbers compare by value, so `2` and `2.0` are the same cell.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(dedup_key(row)));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn dedup_key(row: &[Value]) -> String {
    let cells = row
        .iter()
        .map(|value| match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(serde_json::Number::from_f64)
                .map_or_else(|| value.clone(), Value::Number),
            other => other.clone(),
        })
        .collect();
    Value::Array(cells).to_string()
}
