use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::path::Path;

use crate::catalog::{Column, ColumnKind, Resource};

/// One parsed record. Order-preserving so derived fields inserted by row
/// hooks keep their position in the serialized JSON.
pub type Row = serde_json::Map<String, Value>;

/// Read every record from a cached CSV file and run it through the
/// resource's row hook and coercion pass.
///
/// The file's own header row is skipped; fields are assigned positionally to
/// the declared columns. Row hooks see the rows accumulated so far and a
/// 1-based data line number.
pub fn read_rows(path: &Path, resource: &Resource) -> Result<Vec<Row>> {
    let file = File::open(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Row> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("Failed to parse CSV record in {}", resource.file_name())
        })?;

        let mut row = Row::new();
        for (col, field) in resource.columns.iter().zip(record.iter()) {
            row.insert(col.name.to_string(), Value::String(field.to_string()));
        }

        if let Some(hook) = resource.row_hook {
            row = hook.apply(row, &rows, idx + 1);
        }

        coerce_columns(&mut row, resource.columns);
        rows.push(row);
    }

    Ok(rows)
}

/// Single declarative pass over the schema. Integer columns parse to `i64`
/// with `0` on any failure (including a missing field); boolean columns map
/// the coerced integer through `!= 0`; text columns are untouched.
pub fn coerce_columns(row: &mut Row, columns: &[Column]) {
    for col in columns {
        match col.kind {
            ColumnKind::Integer => {
                let n = coerce_int(row.get(col.name));
                row.insert(col.name.to_string(), Value::from(n));
            }
            ColumnKind::Boolean => {
                let n = coerce_int(row.get(col.name));
                row.insert(col.name.to_string(), Value::from(n != 0));
            }
            ColumnKind::Text => {}
        }
    }
}

fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[Column] = &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::boolean("isDefault"),
    ];

    #[test]
    fn test_integer_coercion_defaults_to_zero() {
        let mut row = Row::new();
        row.insert("id".into(), json!("not-a-number"));
        row.insert("identifier".into(), json!("bulbasaur"));
        row.insert("isDefault".into(), json!("1"));

        coerce_columns(&mut row, COLUMNS);
        assert_eq!(row["id"], json!(0));
        assert_eq!(row["identifier"], json!("bulbasaur"));
        assert_eq!(row["isDefault"], json!(true));
    }

    #[test]
    fn test_missing_columns_coerce_to_defaults() {
        let mut row = Row::new();
        coerce_columns(&mut row, COLUMNS);
        assert_eq!(row["id"], json!(0));
        assert_eq!(row["isDefault"], json!(false));
        assert!(!row.contains_key("identifier"));
    }

    #[test]
    fn test_boolean_from_numeric_string() {
        let mut row = Row::new();
        row.insert("isDefault".into(), json!("0"));
        coerce_columns(&mut row, COLUMNS);
        assert_eq!(row["isDefault"], json!(false));

        let mut row = Row::new();
        row.insert("isDefault".into(), json!("2"));
        coerce_columns(&mut row, COLUMNS);
        assert_eq!(row["isDefault"], json!(true));
    }

    #[test]
    fn test_negative_and_whitespace_integers() {
        let mut row = Row::new();
        row.insert("id".into(), json!(" -1 "));
        coerce_columns(&mut row, COLUMNS);
        assert_eq!(row["id"], json!(-1));
    }

    #[test]
    fn test_coercion_keeps_field_order() {
        let mut row = Row::new();
        row.insert("id".into(), json!("1"));
        row.insert("identifier".into(), json!("bulbasaur"));
        row.insert("name".into(), json!("Bulbasaur"));
        row.insert("isDefault".into(), json!("1"));

        coerce_columns(&mut row, COLUMNS);
        let keys: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "identifier", "name", "isDefault"]);
    }
}
