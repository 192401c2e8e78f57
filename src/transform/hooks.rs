//! Per-row transform strategies.
//!
//! Each catalog entry names at most one of these; the strategy runs after CSV
//! parsing and before coercion, so field values are still raw strings here.
//! Hooks always return the (possibly rebuilt) row.

use serde_json::Value;

use crate::parser::Row;
use crate::transform::text::{display_name, insert_after, romanize, to_title_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHook {
    /// Title-case the existing `name` field (habitat names).
    TitleCaseName,
    /// Insert a display `name` derived from `identifier`, directly after
    /// `identifier` (pokemon).
    DisplayName,
    /// `DisplayName` plus a trailing `romanGenerationId` (moves).
    DisplayNameWithRoman,
    /// Append `romanGenerationId` for generation-numbered rows (species,
    /// types).
    RomanGeneration,
    /// Set a display `name` from `identifier` as a trailing field (items,
    /// natures).
    AppendDisplayName,
}

impl RowHook {
    /// `prior` holds the rows accumulated so far and `line` is the 1-based
    /// data line number; no current strategy reads them, but they are part of
    /// the contract so a strategy can do cross-row lookups in a single pass.
    pub fn apply(&self, row: Row, _prior: &[Row], _line: usize) -> Row {
        match self {
            RowHook::TitleCaseName => title_case_name(row),
            RowHook::DisplayName => with_display_name(row),
            RowHook::DisplayNameWithRoman => with_roman_generation(with_display_name(row)),
            RowHook::RomanGeneration => with_roman_generation(row),
            RowHook::AppendDisplayName => append_display_name(row),
        }
    }
}

fn field_str(row: &Row, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn title_case_name(mut row: Row) -> Row {
    let name = field_str(&row, "name");
    row.insert("name".to_string(), Value::String(to_title_case(&name)));
    row
}

fn with_display_name(row: Row) -> Row {
    let name = display_name(&field_str(&row, "identifier"));
    insert_after(row, "identifier", "name", Value::String(name))
}

fn append_display_name(mut row: Row) -> Row {
    let name = display_name(&field_str(&row, "identifier"));
    row.insert("name".to_string(), Value::String(name));
    row
}

/// Generation ids are still raw strings at hook time; blank or zero means the
/// row has no generation and gets no Roman numeral.
fn with_roman_generation(mut row: Row) -> Row {
    let generation: i64 = field_str(&row, "generationId").trim().parse().unwrap_or(0);
    if generation > 0 {
        row.insert(
            "romanGenerationId".to_string(),
            Value::String(romanize(generation)),
        );
    }
    row
}
