//! Source specifications: which column flags a row and which columns to keep

use crate::table::CellValue;

/// Truthiness test applied to a source's flag column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagPredicate {
    /// Native booleans pass through; otherwise the text form, trimmed and
    /// lowercased, counts as true for "true", "1", "yes" or "y"
    BoolFlag,
    /// Only the exact text "yes" (trimmed, case-insensitive) counts
    YesFlag,
}

impl FlagPredicate {
    /// Evaluate the predicate over a flag cell. Missing cells are never true.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            FlagPredicate::BoolFlag => match cell {
                CellValue::Empty => false,
                CellValue::Boolean(b) => *b,
                other => matches!(
                    other.to_text().trim().to_lowercase().as_str(),
                    "true" | "1" | "yes" | "y"
                ),
            },
            FlagPredicate::YesFlag => match cell {
                CellValue::Empty => false,
                other => other.to_text().trim().to_lowercase() == "yes",
            },
        }
    }
}

/// Immutable per-source configuration
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Source name, doubles as the output sheet name
    pub name: String,
    /// Letter label of the column whose value decides row inclusion
    pub flag_column: String,
    /// Truthiness test applied to the flag column
    pub predicate: FlagPredicate,
    /// Letter labels of the columns projected into the output, in order
    pub keep_columns: Vec<String>,
}

impl SourceSpec {
    pub fn new(
        name: &str,
        flag_column: &str,
        predicate: FlagPredicate,
        keep_columns: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            flag_column: flag_column.to_string(),
            predicate,
            keep_columns: keep_columns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The built-in sources. Adding a source means adding a record here, the
/// processing logic is shared.
pub fn builtin_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "LEX",
            "AS",
            FlagPredicate::BoolFlag,
            &[
                "A", "F", "AF", "AG", "AH", "AI", "AJ", "AK", "AL", "AM", "AN", "AO", "AP", "AQ",
                "AV",
            ],
        ),
        SourceSpec::new(
            "SPX",
            "BI",
            FlagPredicate::YesFlag,
            &["A", "S", "V", "W", "Y", "BK", "BU", "BV"],
        ),
    ]
}
