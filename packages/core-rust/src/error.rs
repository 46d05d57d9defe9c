//! Error types for table loading and lookup.
//!
//! Two failure categories exist: a resource that cannot be turned into a
//! table ([`LoadError`], wrapped in [`TableError::Load`]) and a key that is
//! absent from a table that loaded fine ([`TableError::NotFound`]).

use std::num::ParseFloatError;
use std::path::PathBuf;
use std::sync::Arc;

use crate::kind::TableKind;

/// Failure to turn a resource file into a table.
///
/// Any of these aborts the whole load; a partially parsed table is never served.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: expected at least {expected} fields, found {found}", .path.display())]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{}:{line}: field `{field}` is not a number: {value:?}", .path.display())]
    Number {
        path: PathBuf,
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Error returned by every table lookup.
///
/// Cloneable so that a cached load failure can be handed out on each call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    #[error("failed to load the {table} table")]
    Load {
        table: TableKind,
        #[source]
        source: Arc<LoadError>,
    },
    #[error("no entry `{key}` in the {table} table; call {list_fn} for the available keys")]
    NotFound {
        table: TableKind,
        key: String,
        list_fn: &'static str,
    },
}

impl TableError {
    /// Returns `true` for a missing key, the only error a caller can act on.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }

    /// The table the error originated from.
    #[must_use]
    pub fn table(&self) -> TableKind {
        match self {
            TableError::Load { table, .. } | TableError::NotFound { table, .. } => *table,
        }
    }
}

pub type TableResult<T> = Result<T, TableError>;
