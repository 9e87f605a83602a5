use super::error::DataError;
use super::model::Table;

/// Mean and population standard deviation of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub mean: f64,
    pub std_dev: f64,
}

/// Summarize a column: coerce each value to `f64`, drop the ones that
/// don't convert, then compute the mean and the population standard
/// deviation (divisor = count, not count − 1) of what survives.
pub fn column_summary(table: &Table, column: &str) -> Result<ColumnSummary, DataError> {
    if !table.has_column(column) {
        return Err(DataError::MissingColumn(column.to_string()));
    }

    let numeric: Vec<f64> = table
        .column_values(column)
        .filter_map(|v| v.as_f64())
        .collect();

    if numeric.is_empty() {
        return Err(DataError::NoNumericData(column.to_string()));
    }

    let dropped = table.len() - numeric.len();
    if dropped > 0 {
        log::debug!("column '{column}': dropped {dropped} non-numeric value(s)");
    }

    let count = numeric.len() as f64;
    let mean = numeric.iter().sum::<f64>() / count;
    let variance = numeric
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;

    Ok(ColumnSummary {
        mean,
        std_dev: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Row, Value};
    use std::collections::BTreeMap;

    fn table_of(values: Vec<Value>) -> Table {
        let rows = values
            .into_iter()
            .map(|v| {
                let mut row = BTreeMap::new();
                row.insert("value".to_string(), v);
                Row { values: row }
            })
            .collect();
        Table {
            columns: vec!["value".to_string()],
            rows,
        }
    }

    #[test]
    fn mean_and_population_std_dev() {
        let table = table_of(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
            Value::Integer(4),
        ]);
        let summary = column_summary(&table, "value").unwrap();
        assert!((summary.mean - 2.5).abs() < 1e-9);
        // population stdev, not the n − 1 sample estimate
        assert!((summary.std_dev - 1.118_033_988_749_895).abs() < 1e-4);
    }

    #[test]
    fn non_numeric_values_are_ignored() {
        let table = table_of(vec![
            Value::Integer(1),
            Value::String("x".into()),
            Value::Integer(3),
        ]);
        let summary = column_summary(&table, "value").unwrap();
        assert!((summary.mean - 2.0).abs() < 1e-9);
    }

    #[test]
    fn all_missing_column_is_no_numeric_data() {
        let table = table_of(vec![Value::Null, Value::String("a".into())]);
        let err = column_summary(&table, "value").unwrap_err();
        assert!(matches!(err, DataError::NoNumericData(col) if col == "value"));
    }

    #[test]
    fn empty_column_is_no_numeric_data() {
        let table = table_of(vec![]);
        let err = column_summary(&table, "value").unwrap_err();
        assert!(matches!(err, DataError::NoNumericData(_)));
    }

    #[test]
    fn unknown_column_is_missing_column() {
        let table = table_of(vec![Value::Integer(1)]);
        let err = column_summary(&table, "other").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(col) if col == "other"));
    }
}
