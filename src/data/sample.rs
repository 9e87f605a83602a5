use rand::Rng;

use super::error::DataError;
use super::model::Table;

/// Draw `n` rows uniformly at random from the table.
///
/// With `replace = true` the same row may appear more than once. With
/// `replace = false` the rows are distinct, and asking for more rows than
/// the table holds fails with [`DataError::InsufficientRows`].
///
/// An empty table or `n = 0` yields an empty table with the same column
/// structure. No seed is fixed; row order is not stable across calls.
pub fn sample_rows(table: &Table, n: usize, replace: bool) -> Result<Table, DataError> {
    if table.is_empty() || n == 0 {
        return Ok(table.empty_like());
    }

    let mut rng = rand::thread_rng();
    let rows = if replace {
        (0..n)
            .map(|_| table.rows[rng.gen_range(0..table.len())].clone())
            .collect()
    } else {
        if n > table.len() {
            return Err(DataError::InsufficientRows {
                requested: n,
                available: table.len(),
            });
        }
        rand::seq::index::sample(&mut rng, table.len(), n)
            .iter()
            .map(|i| table.rows[i].clone())
            .collect()
    };

    Ok(Table {
        columns: table.columns.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Row, Value};
    use std::collections::BTreeMap;

    fn table_with_rows(n: usize) -> Table {
        let rows = (0..n)
            .map(|i| {
                let mut values = BTreeMap::new();
                values.insert("value".to_string(), Value::Integer(i as i64));
                Row { values }
            })
            .collect();
        Table {
            columns: vec!["value".to_string()],
            rows,
        }
    }

    #[test]
    fn zero_count_returns_empty_table_with_columns() {
        let table = table_with_rows(4);
        let sampled = sample_rows(&table, 0, true).unwrap();
        assert!(sampled.is_empty());
        assert_eq!(sampled.columns, table.columns);
    }

    #[test]
    fn empty_source_returns_empty_table_with_columns() {
        let table = table_with_rows(0);
        let sampled = sample_rows(&table, 5, true).unwrap();
        assert!(sampled.is_empty());
        assert_eq!(sampled.columns, table.columns);
    }

    #[test]
    fn with_replacement_returns_exactly_n_rows() {
        let table = table_with_rows(3);
        let sampled = sample_rows(&table, 5, true).unwrap();
        assert_eq!(sampled.len(), 5);
        for row in &sampled.rows {
            assert!(table.rows.contains(row));
        }
    }

    #[test]
    fn without_replacement_returns_distinct_rows() {
        let table = table_with_rows(10);
        let sampled = sample_rows(&table, 10, false).unwrap();
        assert_eq!(sampled.len(), 10);
        let mut seen: Vec<i64> = sampled
            .rows
            .iter()
            .map(|r| match r.get("value") {
                Value::Integer(i) => *i,
                other => panic!("unexpected value {other:?}"),
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn without_replacement_over_capacity_is_an_error() {
        let table = table_with_rows(3);
        let err = sample_rows(&table, 5, false).unwrap_err();
        assert!(matches!(
            err,
            DataError::InsufficientRows {
                requested: 5,
                available: 3
            }
        ));
    }
}
