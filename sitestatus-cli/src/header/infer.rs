//! Header layout inference for monthly site status worksheets
//!
//! The worksheet layout is mostly fixed. Column A holds the site, D and E the
//! class status for the past and current month, and F the class notes. Each
//! notes column may be followed by an "internal notes" column; those are
//! detected by sniffing the cell text, and everything after them shifts right
//! by one. The weight status pair and weight notes come next.
//!
//! Only the notes columns are checked against their expected text.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::column::{cell_address, column_label};
use super::cursor::ColumnCursor;
use super::error::HeaderError;
use super::fields::HeaderMap;
use super::row::{HEADER_ROW, HeaderRow};

/// Column positions that never move
mod cols {
    pub const SITE: usize = 0;
    pub const CLASS_STATUS_PAST: usize = 3;
    pub const CLASS_STATUS_CURRENT: usize = 4;
    pub const CLASS_NOTES: usize = 5;
}

const CLASS_NOTES_PATTERN: &str = r"(?i)class\s*notes";
const WEIGHT_NOTES_PATTERN: &str = r"(?i)weight\s*notes";

static CLASS_NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CLASS_NOTES_PATTERN).expect("class notes pattern is valid"));
static WEIGHT_NOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(WEIGHT_NOTES_PATTERN).expect("weight notes pattern is valid"));

/// Reporting period whose status columns should be used
///
/// Every status field has two adjacent columns, past month first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    PastMonth,
    CurrentMonth,
}

impl From<bool> for Period {
    fn from(past_month: bool) -> Self {
        if past_month {
            Period::PastMonth
        } else {
            Period::CurrentMonth
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "past" | "past-month" | "past_month" | "true" => Ok(Period::PastMonth),
            "current" | "current-month" | "current_month" | "false" => Ok(Period::CurrentMonth),
            other => Err(format!(
                "unknown period '{}', expected 'past-month' or 'current-month'",
                other
            )),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::PastMonth => write!(f, "past-month"),
            Period::CurrentMonth => write!(f, "current-month"),
        }
    }
}

/// Mandatory header cells that are validated during inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    ClassNotes,
    WeightNotes,
}

impl Checkpoint {
    fn pattern(self) -> (&'static Regex, &'static str) {
        match self {
            Checkpoint::ClassNotes => (&*CLASS_NOTES_RE, CLASS_NOTES_PATTERN),
            Checkpoint::WeightNotes => (&*WEIGHT_NOTES_RE, WEIGHT_NOTES_PATTERN),
        }
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Checkpoint::ClassNotes => write!(f, "class notes"),
            Checkpoint::WeightNotes => write!(f, "weight notes"),
        }
    }
}

/// Outcome of looking for an optional column at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
enum Sniff {
    /// The column matched and the cursor moved past it
    Consumed(String),
    /// No match; the cursor did not move
    NotMatched,
}

impl Sniff {
    fn into_column(self) -> Option<String> {
        match self {
            Sniff::Consumed(col) => Some(col),
            Sniff::NotMatched => None,
        }
    }
}

/// Work out which column holds each field of a status worksheet
///
/// Fails if either notes column is missing or does not carry its expected
/// label. No partial map is returned on failure.
pub fn infer_header(row: &HeaderRow, period: Period) -> Result<HeaderMap, HeaderError> {
    let mut cursor = ColumnCursor::new();

    let site = column_label(cols::SITE);
    let class_status = match period {
        Period::PastMonth => column_label(cols::CLASS_STATUS_PAST),
        Period::CurrentMonth => column_label(cols::CLASS_STATUS_CURRENT),
    };
    log::debug!("site={}, class_status={} ({})", site, class_status, period);

    let class_notes = cursor.jump_to(cols::CLASS_NOTES);
    require(row, &class_notes, Checkpoint::ClassNotes)?;

    cursor.advance();
    let internal_class_notes = sniff(row, &mut cursor, &CLASS_NOTES_RE).into_column();

    // The status column of the other period is skipped either after or before ours
    let weight_status = match period {
        Period::PastMonth => {
            let col = cursor.current();
            cursor.advance();
            col
        }
        Period::CurrentMonth => cursor.advance(),
    };
    log::debug!("weight_status={}", weight_status);

    let weight_notes = cursor.advance();
    require(row, &weight_notes, Checkpoint::WeightNotes)?;

    cursor.advance();
    let internal_weight_notes = sniff(row, &mut cursor, &WEIGHT_NOTES_RE).into_column();

    Ok(HeaderMap {
        site,
        class_status,
        class_notes,
        internal_class_notes,
        weight_status,
        weight_notes,
        internal_weight_notes,
    })
}

/// Check a mandatory header cell against its expected text
fn require(row: &HeaderRow, col: &str, checkpoint: Checkpoint) -> Result<(), HeaderError> {
    let address = cell_address(col, HEADER_ROW);
    let Some(text) = row.get(&address) else {
        return Err(HeaderError::MissingCell {
            checkpoint,
            address,
        });
    };

    let (re, pattern) = checkpoint.pattern();
    if !re.is_match(text) {
        return Err(HeaderError::HeaderMismatch {
            checkpoint,
            address,
            expected: pattern,
            found: text.to_string(),
        });
    }

    log::debug!("{} checkpoint matched at {} ('{}')", checkpoint, address, text);
    Ok(())
}

/// Consume the current column if its text matches `re`
///
/// A cell that is absent counts as not matching.
fn sniff(row: &HeaderRow, cursor: &mut ColumnCursor, re: &Regex) -> Sniff {
    let col = cursor.current();
    let address = cell_address(&col, HEADER_ROW);

    match row.get(&address) {
        Some(text) if re.is_match(text) => {
            log::debug!("optional column {} matched ('{}')", address, text);
            cursor.advance();
            Sniff::Consumed(col)
        }
        Some(text) => {
            log::debug!("optional column {} not matched ('{}')", address, text);
            Sniff::NotMatched
        }
        None => {
            log::debug!("optional column {} not present", address);
            Sniff::NotMatched
        }
    }
}
