//! Splitting resource lines into fields.

use std::path::Path;

use crate::error::LoadError;

/// Field separator used by every resource file. Fields are never quoted or escaped.
pub const DELIMITER: char = ';';

/// One data line of a resource, split on [`DELIMITER`].
///
/// A `Row` holds exactly the number of fields its record type expects.
/// Fields past that count (a trailing `;` from a spreadsheet export, for
/// instance) are dropped when the row is split, so index-based accessors
/// cannot go out of range for a well-formed record parser.
#[derive(Debug)]
pub struct Row<'a> {
    origin: &'a Path,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Splits `text` and keeps its first `expected` fields.
    ///
    /// `line` is the 1-based line number within `origin`, used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::FieldCount`] when the line has fewer than
    /// `expected` fields.
    pub fn split(
        origin: &'a Path,
        line: usize,
        text: &'a str,
        expected: usize,
    ) -> Result<Self, LoadError> {
        let mut fields: Vec<&str> = text.split(DELIMITER).collect();
        if fields.len() < expected {
            return Err(LoadError::FieldCount {
                path: origin.to_path_buf(),
                line,
                expected,
                found: fields.len(),
            });
        }
        fields.truncate(expected);
        Ok(Self {
            origin,
            line,
            fields,
        })
    }

    /// 1-based line number in the resource.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field `index` exactly as it appears in the resource.
    ///
    /// Identifiers (keys, serial numbers) are read through this accessor.
    #[must_use]
    pub fn raw(&self, index: usize) -> &'a str {
        self.fields[index]
    }

    /// Field `index` with surrounding whitespace removed.
    #[must_use]
    pub fn text(&self, index: usize) -> &'a str {
        self.fields[index].trim()
    }

    /// Field `index` parsed as a decimal-point floating-point number.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Number`] naming `field` when the value does not parse.
    pub fn number(&self, index: usize, field: &'static str) -> Result<f64, LoadError> {
        let value = self.fields[index].trim();
        value.parse().map_err(|source| LoadError::Number {
            path: self.origin.to_path_buf(),
            line: self.line,
            field,
            value: value.to_string(),
            source,
        })
    }
}
