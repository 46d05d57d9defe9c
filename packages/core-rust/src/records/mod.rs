//! Typed records, one struct per reference table.
//!
//! Each struct implements [`TableRecord`], which ties it to its
//! [`TableKind`], its row shape, and its row parser. The key of every
//! table is the first field of the row.

pub mod materials;
pub mod propellants;

pub use materials::*;
pub use propellants::*;

use crate::error::LoadError;
use crate::kind::TableKind;
use crate::table::Row;

/// A record type that can be parsed from one resource row.
pub trait TableRecord: Sized + Send + Sync + 'static {
    /// Table this record type belongs to.
    const KIND: TableKind;

    /// Number of `;`-separated fields a record is read from, key included.
    /// Rows may carry more; the extras are ignored.
    const FIELD_COUNT: usize;

    /// Enumeration function quoted in [`TableError::NotFound`](crate::TableError::NotFound).
    const LIST_FN: &'static str;

    /// Builds a record from a row holding exactly [`Self::FIELD_COUNT`] fields.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Number`] for a field that should be numeric but is not.
    fn from_row(row: &Row<'_>) -> Result<Self, LoadError>;
}
