//! Row-level column comparison

use crate::workbook::normalize_cell_text;
use serde::Serialize;
use std::fmt;

/// A 1-based column number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Returns `None` for zero; column numbers start at 1
    pub fn new(column: usize) -> Option<Self> {
        (column > 0).then_some(Self(column))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Whether this column lies within `1..=column_count`
    pub fn is_within(self, column_count: usize) -> bool {
        self.0 <= column_count
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two columns to compare and the report mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub column1: ColumnIndex,
    pub column2: ColumnIndex,
    pub full_row_enabled: bool,
}

impl ComparisonRequest {
    pub fn new(column1: ColumnIndex, column2: ColumnIndex, full_row_enabled: bool) -> Self {
        Self {
            column1,
            column2,
            full_row_enabled,
        }
    }

    /// Whether both columns exist in a sheet with `column_count` columns
    pub fn fits(&self, column_count: usize) -> bool {
        self.column1.is_within(column_count) && self.column2.is_within(column_count)
    }
}

/// A row whose two compared cells differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferenceRecord {
    pub row: usize,
    pub column1: usize,
    pub column2: usize,
    pub text1: String,
    pub text2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_row: Option<Vec<String>>,
}

impl DifferenceRecord {
    pub fn with_full_row(mut self, values: Vec<String>) -> Self {
        self.full_row = Some(values);
        self
    }

    /// `(row:R, column1:C1) - [text1] - (row:R, column2:C2) - [text2]`
    pub fn summary_line(&self) -> String {
        format!(
            "(row:{row}, column1:{}) - [{}] - (row:{row}, column2:{}) - [{}]",
            self.column1,
            self.text1,
            self.column2,
            self.text2,
            row = self.row
        )
    }
}

/// Compare the two columns of one row.
///
/// Both texts are blank-normalized and compared by exact string equality.
/// Returns a record only when they differ.
pub fn compare_row<F>(row: usize, column1: usize, column2: usize, read: F) -> Option<DifferenceRecord>
where
    F: Fn(usize, usize) -> String,
{
    let text1 = normalize_cell_text(&read(row, column1));
    let text2 = normalize_cell_text(&read(row, column2));

    if text1 == text2 {
        return None;
    }

    Some(DifferenceRecord {
        row,
        column1,
        column2,
        text1,
        text2,
        full_row: None,
    })
}
