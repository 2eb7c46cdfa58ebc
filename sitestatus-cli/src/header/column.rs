//! Spreadsheet column labels (A, B, ..., Z, AA, AB, ...)
//!
//! Labels are the bijective base-26 form of a zero-based column index:
//! there is no zero digit, so "A" is 0, "Z" is 25 and "AA" is 26.

use super::error::ColumnError;

/// Encode a zero-based column index as its label
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;

    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }

    letters.reverse();
    // Only ASCII uppercase letters are ever pushed
    letters.into_iter().map(char::from).collect()
}

/// Decode a column label back into its zero-based index
///
/// Lowercase letters are accepted. Anything other than ASCII letters is rejected.
pub fn column_index(label: &str) -> Result<usize, ColumnError> {
    if label.is_empty() {
        return Err(ColumnError::invalid(label, "column label is empty"));
    }

    let mut result: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(ColumnError::invalid(
                label,
                "column label may only contain letters A-Z",
            ));
        }

        let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result
            .checked_mul(26)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| ColumnError::invalid(label, "column label is too long"))?;
    }

    Ok(result - 1)
}

/// Parse user input that names a column either by zero-based index or by label
pub fn parse_column(input: &str) -> Result<usize, ColumnError> {
    let trimmed = input.trim();

    if trimmed.starts_with('-') {
        return Err(ColumnError::invalid(input, "column index cannot be negative"));
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) && !trimmed.is_empty() {
        return trimmed
            .parse::<usize>()
            .map_err(|_| ColumnError::invalid(input, "column index is out of range"));
    }

    if trimmed.chars().any(|c| c.is_ascii_digit() || c == '.') {
        return Err(ColumnError::invalid(
            input,
            "expected a non-negative integer or a column label",
        ));
    }

    column_index(trimmed)
}

/// Build a cell address such as "F1"
pub fn cell_address(label: &str, row: u32) -> String {
    format!("{}{}", label, row)
}
