//! Spreadsheet-style column addressing

use crate::error::ExtractError;

/// Convert a column letter label to a 0-based index (A -> 0, Z -> 25, AA -> 26).
///
/// Labels are trimmed and case-insensitive. Each letter is a digit 1-26 in a
/// positional system with no zero digit, so this is not plain base-26.
pub fn column_label_to_index(label: &str) -> Result<usize, ExtractError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::InvalidColumnLabel {
            label: label.to_string(),
        });
    }

    let mut acc: usize = 0;
    for ch in trimmed.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(ExtractError::InvalidColumnLabel {
                label: label.to_string(),
            });
        }
        acc = acc * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }

    Ok(acc - 1)
}

/// Convert a 0-based column index to its letter label (0 -> A, 25 -> Z, 26 -> AA)
pub fn column_index_to_label(index: usize) -> String {
    let mut result = String::new();
    let mut col = index + 1;

    while col > 0 {
        col -= 1;
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }

    result
}
