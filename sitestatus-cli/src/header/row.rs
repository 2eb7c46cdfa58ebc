//! Header row cells keyed by address

use std::collections::HashMap;

/// Row number the header lives on (1-based, as in cell addresses)
pub const HEADER_ROW: u32 = 1;

/// Text of the header row, keyed by cell address ("A1", "F1", ...)
///
/// A cell that exists with empty text is kept as an empty string and is
/// different from a cell that is not present at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    cells: HashMap<String, String>,
}

impl HeaderRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from consecutive labels starting at column A
    #[cfg(test)]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        use super::column::{cell_address, column_label};

        labels
            .into_iter()
            .enumerate()
            .map(|(idx, text)| (cell_address(&column_label(idx), HEADER_ROW), text.into()))
            .collect()
    }

    pub fn insert(&mut self, address: impl Into<String>, text: impl Into<String>) {
        self.cells.insert(address.into(), text.into());
    }

    #[cfg(test)]
    pub fn remove(&mut self, address: &str) -> Option<String> {
        self.cells.remove(address)
    }

    /// Text of the cell at `address`, if present
    pub fn get(&self, address: &str) -> Option<&str> {
        self.cells.get(address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for HeaderRow {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_assigns_addresses() {
        let row = HeaderRow::from_labels(["Site", "Name", "Type"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("A1"), Some("Site"));
        assert_eq!(row.get("C1"), Some("Type"));
        assert_eq!(row.get("D1"), None);
    }

    #[test]
    fn test_empty_cell_is_present() {
        let mut row = HeaderRow::new();
        row.insert("B1", "");
        assert_eq!(row.get("B1"), Some(""));
        assert_eq!(row.get("C1"), None);
    }
}
