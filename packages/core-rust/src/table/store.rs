//! Lazily loaded, read-only table backed by a resource file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, error, info};

use super::Table;
use crate::error::{LoadError, TableError, TableResult};
use crate::records::TableRecord;

/// A [`Table`] read from `source` on first access and kept for the lifetime
/// of the store.
///
/// The load runs at most once even under concurrent first calls. Its
/// outcome is cached either way: after a failed load every call returns
/// the same [`TableError::Load`] and the file is not read again.
///
/// A store built with [`TableStore::embedded`] parses text compiled into
/// the binary instead of reading `source`.
#[derive(Debug)]
pub struct TableStore<R> {
    source: PathBuf,
    embedded: Option<&'static str>,
    table: OnceLock<Result<Table<R>, Arc<LoadError>>>,
}

impl<R: TableRecord> TableStore<R> {
    /// Creates an unloaded store for the resource at `source`.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            embedded: None,
            table: OnceLock::new(),
        }
    }

    /// Creates an unloaded store over resource text compiled into the binary.
    ///
    /// `source` names the resource in logs and errors; it is never read.
    #[must_use]
    pub fn embedded(source: impl Into<PathBuf>, text: &'static str) -> Self {
        Self {
            source: source.into(),
            embedded: Some(text),
            table: OnceLock::new(),
        }
    }

    /// Wraps an already parsed table. `source` is informational only.
    #[must_use]
    pub fn from_table(source: impl Into<PathBuf>, table: Table<R>) -> Self {
        Self {
            source: source.into(),
            embedded: None,
            table: OnceLock::from(Ok(table)),
        }
    }

    /// Path of the backing resource.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Whether the table comes from text compiled into the binary.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    /// Whether a load has been attempted, successfully or not.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    /// Loads the table if needed and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the resource is missing or malformed.
    pub fn load(&self) -> TableResult<&Table<R>> {
        self.table
            .get_or_init(|| read_table(&self.source, self.embedded).map_err(Arc::new))
            .as_ref()
            .map_err(|source| TableError::Load {
                table: R::KIND,
                source: Arc::clone(source),
            })
    }

    /// Record whose key equals `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the table cannot be loaded and
    /// [`TableError::NotFound`] if `key` is absent.
    pub fn get(&self, key: &str) -> TableResult<&R> {
        self.load()?.get(key).ok_or_else(|| {
            debug!(table = %R::KIND, key, "lookup missed");
            TableError::NotFound {
                table: R::KIND,
                key: key.to_string(),
                list_fn: R::LIST_FN,
            }
        })
    }

    /// All keys in file order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the table cannot be loaded.
    pub fn list_keys(&self) -> TableResult<Vec<&str>> {
        Ok(self.load()?.keys().collect())
    }

    /// All records in file order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the table cannot be loaded.
    pub fn records(&self) -> TableResult<&[R]> {
        Ok(self.load()?.records())
    }

    /// Number of records.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the table cannot be loaded.
    pub fn len(&self) -> TableResult<usize> {
        Ok(self.load()?.len())
    }
}

fn read_table<R: TableRecord>(
    path: &Path,
    embedded: Option<&'static str>,
) -> Result<Table<R>, LoadError> {
    let loaded = match embedded {
        Some(text) => Table::parse(text, path),
        None => fs::read_to_string(path)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|text| Table::parse(&text, path)),
    };
    match &loaded {
        Ok(table) => info!(
            table = %R::KIND,
            rows = table.len(),
            path = %path.display(),
            embedded = embedded.is_some(),
            "loaded reference table"
        ),
        Err(err) => error!(table = %R::KIND, error = %err, "failed to load reference table"),
    }
    loaded
}
