//! Parsed tables and their lazily loaded stores.
//!
//! - [`Row`]: one delimited resource line
//! - [`Table`]: records of one resource, in file order, indexed by key
//! - [`TableStore`]: a [`Table`] loaded from disk on first access

pub mod row;
pub mod store;

pub use row::*;
pub use store::*;

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::error::LoadError;
use crate::records::TableRecord;

/// All records of one resource, in file order.
///
/// The key of each record is the first field of its row. A key seen twice
/// keeps its first position while the later row replaces the record.
#[derive(Debug, Clone)]
pub struct Table<R> {
    keys: Vec<String>,
    records: Vec<R>,
    index: HashMap<String, usize>,
}

impl<R: TableRecord> Table<R> {
    /// Parses resource text. `origin` is only used in error messages and logs.
    ///
    /// The first line is a header and is skipped; blank lines are ignored.
    /// Fields beyond the record's field count are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] met; nothing is kept from earlier rows.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, LoadError> {
        let mut table = Self {
            keys: Vec::new(),
            records: Vec::new(),
            index: HashMap::new(),
        };
        for (offset, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let row = Row::split(origin, offset + 1, line, R::FIELD_COUNT)?;
            let record = R::from_row(&row)?;
            table.insert(row.raw(0), record, row.line());
        }
        Ok(table)
    }

    fn insert(&mut self, key: &str, record: R, line: usize) {
        if let Some(&pos) = self.index.get(key) {
            warn!(table = %R::KIND, key, line, "duplicate key, later row replaces earlier one");
            self.records[pos] = record;
            return;
        }
        self.index.insert(key.to_string(), self.records.len());
        self.keys.push(key.to_string());
        self.records.push(record);
    }

    /// Record stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&R> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// `(key, record)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.keys().zip(self.records.iter())
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Composite, StructuralMaterial};

    const HEADER: &str = "Материал;rho;sigma_r;E\n";

    fn parse(body: &str) -> Result<Table<Composite>, LoadError> {
        Table::parse(&format!("{HEADER}{body}"), Path::new("composites.csv"))
    }

    #[test]
    fn header_is_skipped() {
        let table = parse("A;1;2;3\n").unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.contains_key("Материал"));
    }

    #[test]
    fn header_only_yields_empty_table() {
        let table = parse("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.keys().count(), 0);
    }

    #[test]
    fn keys_follow_file_order() {
        let table = parse("C;1;1;1\nA;2;2;2\nB;3;3;3\n").unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn duplicate_key_last_row_wins_first_position_kept() {
        let table = parse("A;1;1;1\nB;2;2;2\nA;9;9;9\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(table.get("A").unwrap().rho, 9.0);
    }

    #[test]
    fn crlf_and_blank_lines_are_handled() {
        let text = "Материал;rho;sigma_02;sigma_v;delta;sigma_v_rho;use\r\n\
                    ВТ6;4430;850000000;950000000;0.1;21860;корпус, фланцы\r\n\
                    \r\n";
        let table: Table<StructuralMaterial> =
            Table::parse(text, Path::new("structural.csv")).unwrap();
        let vt6 = table.get("ВТ6").unwrap();
        assert_eq!(vt6.recommended_use, "корпус, фланцы");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn malformed_number_fails_whole_parse_with_line() {
        let err = parse("A;1;1;1\nB;x;2;2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Number {
                line: 3,
                field: "rho",
                ..
            }
        ));
    }

    #[test]
    fn trailing_delimiter_is_accepted() {
        let table = parse("Органопластик;1350;1500000000;60000000000;\n").unwrap();
        let record = table.get("Органопластик").unwrap();
        assert_eq!(record.rho, 1350.0);
        assert_eq!(record.sigma_r, 1.5e9);
        assert_eq!(record.modulus, 6e10);
    }

    #[test]
    fn trailing_delimiter_after_use_text_keeps_the_text() {
        let text = "Материал;rho;sigma_02;sigma_v;delta;sigma_v_rho;use\n\
                    ВТ6;4430;850000000;950000000;0.1;21860;корпус;\n";
        let table: Table<StructuralMaterial> =
            Table::parse(text, Path::new("structural.csv")).unwrap();
        assert_eq!(table.get("ВТ6").unwrap().recommended_use, "корпус");
    }

    #[test]
    fn short_row_fails_the_parse() {
        let err = parse("A;1;1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::FieldCount {
                line: 2,
                expected: 4,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn iter_pairs_keys_with_records() {
        let table = parse("A;1;1;1\nB;2;2;2\n").unwrap();
        let pairs: Vec<(&str, f64)> = table.iter().map(|(k, r)| (k, r.rho)).collect();
        assert_eq!(pairs, vec![("A", 1.0), ("B", 2.0)]);
    }
}
