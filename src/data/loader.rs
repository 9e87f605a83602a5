use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{Row, Table, Value};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file and validate its shape. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one value per cell
/// * `.json` – records-oriented array: `[{ "col": val, ... }, ...]`
///
/// Fails when the path does not exist, the table has zero rows, or
/// `required_column` is absent from the header.
pub fn load_table(path: &Path, required_column: &str) -> Result<Table, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(DataError::UnsupportedFormat(other.to_string())),
    };

    if table.is_empty() {
        return Err(DataError::EmptyInput);
    }
    if !table.has_column(required_column) {
        return Err(DataError::MissingColumn(required_column.to_string()));
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per row.
/// Cell types are guessed per cell; see [`guess_value_type`].
fn load_csv(path: &Path) -> Result<Table, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        let mut values = BTreeMap::new();
        for (col_idx, cell) in record.iter().enumerate() {
            if let Some(name) = columns.get(col_idx) {
                values.insert(name.clone(), guess_value_type(cell));
            }
        }
        rows.push(Row { values });
    }

    Ok(Table { columns, rows })
}

fn guess_value_type(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "value": 1.5, "sample": "A" },
///   { "value": 2.0, "sample": "B" }
/// ]
/// ```
///
/// Columns are the union of object keys, in first-seen order.
fn load_json(path: &Path) -> Result<Table, DataError> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| DataError::MalformedJson("expected top-level array".to_string()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::MalformedJson(format!("row {i} is not an object")))?;

        let mut values = BTreeMap::new();
        for (key, val) in obj {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            values.insert(key.clone(), json_to_value(val));
        }
        rows.push(Row { values });
    }

    Ok(Table { columns, rows })
}

fn json_to_value(val: &JsonValue) -> Value {
    match val {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        other => Value::String(other.to_string()),
    }
}
