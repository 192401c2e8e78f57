use std::path::Path;

use crate::transform::{RowHook, TableReduce};

/// Typed column in a CSV resource. Coercion is driven entirely by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Parsed as `i64`; anything unparseable becomes `0`.
    Integer,
    /// Integer-coerced, then mapped to `value != 0`.
    Boolean,
    /// Left as the raw string.
    Text,
}

/// Ordered column definition, assigned positionally to CSV fields.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Boolean,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }
}

/// Processing branch, selected by the remote file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Json,
}

/// One catalog entry: where a resource lives and how to transform it.
/// Descriptors are pure configuration; no entry depends on another entry's
/// output within a run.
#[derive(Debug, Clone)]
pub struct Resource {
    /// File name resolved against the pinned PokeAPI CSV base URL, or a full
    /// URL for sources hosted elsewhere.
    pub remote: &'static str,
    /// Explicit column schema for CSV sources; empty for JSON sources.
    pub columns: &'static [Column],
    /// Per-row transform, applied after parsing and before coercion.
    pub row_hook: Option<RowHook>,
    /// Whole-table reducer, applied after coercion.
    pub table_reduce: Option<TableReduce>,
}

/// Pinned upstream revision so reruns see identical data.
pub const POKEAPI_COMMIT: &str = "5e803da514ade0d3770a8fef2ee093250f8dfc20";

impl Resource {
    /// Full URL to fetch this resource from.
    pub fn remote_url(&self) -> String {
        if self.remote.starts_with("http") {
            self.remote.to_string()
        } else {
            format!(
                "https://github.com/PokeAPI/pokeapi/raw/{}/data/v2/csv/{}",
                POKEAPI_COMMIT, self.remote
            )
        }
    }

    /// Base name without extension, used for local cache file names.
    pub fn file_name(&self) -> &str {
        Path::new(self.remote)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.remote)
    }

    pub fn kind(&self) -> SourceKind {
        if self.remote.ends_with(".json") {
            SourceKind::Json
        } else {
            SourceKind::Csv
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Resource = Resource {
        remote: "pokemon_moves.csv",
        columns: &[],
        row_hook: None,
        table_reduce: None,
    };

    #[test]
    fn test_remote_url_for_bare_file_name() {
        let url = SAMPLE.remote_url();
        assert!(url.starts_with("https://github.com/PokeAPI/pokeapi/raw/"));
        assert!(url.ends_with("/data/v2/csv/pokemon_moves.csv"));
    }

    #[test]
    fn test_file_name_and_kind() {
        assert_eq!(SAMPLE.file_name(), "pokemon_moves");
        assert_eq!(SAMPLE.kind(), SourceKind::Csv);

        let json = Resource {
            remote: "https://example.com/raw/movesets.json",
            ..SAMPLE
        };
        assert_eq!(json.file_name(), "movesets");
        assert_eq!(json.kind(), SourceKind::Json);
    }
}
