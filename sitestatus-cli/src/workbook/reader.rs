//! Read the header row of a single-sheet workbook

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};

use super::WorkbookError;
use crate::header::row::HEADER_ROW;
use crate::header::{HeaderRow, cell_address, column_label};

/// Open a workbook and return the text of its first row
///
/// The workbook must contain exactly one worksheet; anything else is
/// rejected before any cell is read.
pub fn read_header_row<P: AsRef<Path>>(path: P) -> Result<HeaderRow> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let names = workbook.sheet_names();
    let sheet_name = match names.as_slice() {
        [only] => only.clone(),
        _ => {
            return Err(WorkbookError::SheetCount {
                found: names.len(),
                names,
            })
            .with_context(|| format!("Rejected spreadsheet: {}", path.display()));
        }
    };

    log::info!("Reading header row of sheet '{}' in {}", sheet_name, path.display());

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let row = header_row_from_range(&range);
    if row.is_empty() {
        log::warn!("Sheet '{}' in {} has no header cells", sheet_name, path.display());
    }
    log::debug!("Header row has {} non-empty cells", row.len());
    Ok(row)
}

/// Collect the cells of worksheet row 1 from a calamine range
///
/// Empty cells are left out, so they count as missing.
pub fn header_row_from_range(range: &Range<Data>) -> HeaderRow {
    let mut row = HeaderRow::new();

    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return row;
    };

    // Row 1 is not part of the used range
    if start.0 != 0 {
        return row;
    }

    for col in start.1..=end.1 {
        if let Some(text) = range.get_value((0, col)).and_then(cell_text) {
            row.insert(cell_address(&column_label(col as usize), HEADER_ROW), text);
        }
    }

    row
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            // Whole numbers within i64 range print without a fraction
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => Some(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::error::HeaderError;
    use crate::header::infer::Checkpoint;
    use crate::header::{Period, infer_header};
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;

    const STATUS_HEADER: [&str; 11] = [
        "Site",
        "Site Name",
        "Type",
        "Class Status 07-2013",
        "Class Status 08-2013",
        "Class Notes",
        "Internal Class Notes",
        "Weight Status 07-2013",
        "Weight Status 08-2013",
        "Weight Notes",
        "Internal Weight Notes",
    ];

    /// Temp file removed on drop
    struct Fixture(PathBuf);

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn write_fixture(sheets: &[&[&str]]) -> Fixture {
        let path = std::env::temp_dir().join(format!("sitestatus-{}.xlsx", uuid::Uuid::new_v4()));
        let mut workbook = Workbook::new();
        for labels in sheets {
            let worksheet = workbook.add_worksheet();
            for (col, label) in labels.iter().enumerate() {
                worksheet.write_string(0, col as u16, *label).unwrap();
            }
            worksheet.write_string(1, 0, "IRD-001").unwrap();
        }
        workbook.save(&path).unwrap();
        Fixture(path)
    }

    #[test]
    fn test_reads_header_row() {
        let fixture = write_fixture(&[&STATUS_HEADER]);
        let row = read_header_row(&fixture.0).unwrap();

        assert_eq!(row.len(), STATUS_HEADER.len());
        assert_eq!(row.get("A1"), Some("Site"));
        assert_eq!(row.get("F1"), Some("Class Notes"));
        assert_eq!(row.get("K1"), Some("Internal Weight Notes"));
        assert_eq!(row.get("A2"), None);
    }

    #[test]
    fn test_infers_from_loaded_workbook() {
        let fixture = write_fixture(&[&STATUS_HEADER]);
        let row = read_header_row(&fixture.0).unwrap();

        let map = infer_header(&row, Period::CurrentMonth).unwrap();
        assert_eq!(map.class_status, "E");
        assert_eq!(map.weight_status, "I");
        assert_eq!(map.internal_weight_notes.as_deref(), Some("K"));
    }

    #[test]
    fn test_rejects_multiple_sheets() {
        let fixture = write_fixture(&[&STATUS_HEADER, &STATUS_HEADER]);
        let err = read_header_row(&fixture.0).unwrap_err();

        let workbook_err = err.downcast_ref::<WorkbookError>().unwrap();
        assert_eq!(
            workbook_err,
            &WorkbookError::SheetCount {
                found: 2,
                names: vec!["Sheet1".to_string(), "Sheet2".to_string()],
            }
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("sitestatus-{}.xlsx", uuid::Uuid::new_v4()));
        assert!(read_header_row(&path).is_err());
    }

    #[test]
    fn test_range_with_gaps_and_numbers() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 6));
        range.set_value((0, 0), Data::String("Site".to_string()));
        range.set_value((0, 3), Data::Float(2013.0));
        range.set_value((0, 4), Data::Float(7.5));
        range.set_value((0, 5), Data::String("Class Notes".to_string()));
        range.set_value((1, 6), Data::String("not a header".to_string()));

        let row = header_row_from_range(&range);
        assert_eq!(row.get("A1"), Some("Site"));
        assert_eq!(row.get("B1"), None);
        assert_eq!(row.get("D1"), Some("2013"));
        assert_eq!(row.get("E1"), Some("7.5"));
        assert_eq!(row.get("G1"), None);

        let err = infer_header(&row, Period::PastMonth).unwrap_err();
        assert_eq!(err.checkpoint(), Checkpoint::WeightNotes);
        assert!(matches!(err, HeaderError::MissingCell { .. }));
    }

    #[test]
    fn test_large_whole_float_is_not_truncated() {
        assert_eq!(cell_text(&Data::Float(1e20)).as_deref(), Some("100000000000000000000"));
        assert_eq!(cell_text(&Data::Float(-1e20)).as_deref(), Some("-100000000000000000000"));
        assert_eq!(cell_text(&Data::Float(42.0)).as_deref(), Some("42"));
    }

    #[test]
    fn test_range_not_starting_at_first_row() {
        let mut range: Range<Data> = Range::new((2, 0), (3, 1));
        range.set_value((2, 0), Data::String("Site".to_string()));
        assert!(header_row_from_range(&range).is_empty());
    }

    #[test]
    fn test_range_offset_columns_keep_absolute_addresses() {
        let mut range: Range<Data> = Range::new((0, 5), (0, 6));
        range.set_value((0, 5), Data::String("Class Notes".to_string()));
        range.set_value((0, 6), Data::String("Internal Class Notes".to_string()));

        let row = header_row_from_range(&range);
        assert_eq!(row.get("F1"), Some("Class Notes"));
        assert_eq!(row.get("G1"), Some("Internal Class Notes"));
    }
}
