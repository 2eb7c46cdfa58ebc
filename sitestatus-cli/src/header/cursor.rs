//! Column cursor used to walk a header row left to right

use super::column::column_label;

/// Tracks the "current column" while a header row is being inspected
///
/// A cursor belongs to exactly one inference call. It starts at column A
/// and only moves when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCursor {
    index: usize,
}

impl ColumnCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current column
    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Label of the current column
    pub fn current(&self) -> String {
        column_label(self.index)
    }

    /// Move one column to the right and return the new label
    pub fn advance(&mut self) -> String {
        self.index += 1;
        self.current()
    }

    /// Move to an absolute column and return its label
    pub fn jump_to(&mut self, index: usize) -> String {
        self.index = index;
        self.current()
    }
}
