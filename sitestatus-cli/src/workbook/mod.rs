//! Spreadsheet loading for header inference

mod reader;

pub use reader::read_header_row;

/// Error when a workbook does not have the shape the loader accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbookError {
    /// The file must contain exactly one worksheet
    SheetCount { found: usize, names: Vec<String> },
}

impl std::fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookError::SheetCount { found: 0, .. } => write!(f, "workbook has no worksheets"),
            WorkbookError::SheetCount { found, names } => write!(
                f,
                "workbook has {} worksheets ({}); expected exactly one, refusing to continue",
                found,
                names.join(", ")
            ),
        }
    }
}

impl std::error::Error for WorkbookError {}
