//! Location of the table resources.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::kind::TableKind;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "MATPROP_DATA_DIR";

/// Directory holding the tables shipped with this crate.
///
/// Resolved against the crate's own location, never the working directory.
/// The path is fixed at build time; when it no longer exists the catalog
/// falls back to the copies compiled in via [`TableKind::bundled_text`].
#[must_use]
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Configuration for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Root directory; each table lives at `data_dir/<TableKind::file_name>`.
    pub data_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: bundled_data_dir(),
        }
    }
}

impl CatalogConfig {
    /// Builds a configuration rooted at `data_dir`.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Reads [`DATA_DIR_ENV`], falling back to the bundled data.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_data_dir_var(std::env::var_os(DATA_DIR_ENV))
    }

    fn from_data_dir_var(value: Option<OsString>) -> Self {
        match value {
            Some(dir) if !dir.is_empty() => Self::with_data_dir(dir),
            _ => Self::default(),
        }
    }

    /// Full path of the resource backing `kind`.
    #[must_use]
    pub fn path_for(&self, kind: TableKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}
