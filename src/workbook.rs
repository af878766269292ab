//! Read-only tabular data provider interface
//!
//! The comparison engine only ever sees workbooks and sheets through these
//! traits. All row and column indices are 1-based.

use crate::error::{ComparerError, Result};

/// One sheet of a workbook
pub trait TabularSheet {
    fn name(&self) -> &str;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Text of the cell at `(row, column)`, blank-normalized.
    ///
    /// Cells outside the sheet, or that cannot be read, are the empty string.
    fn cell_text(&self, row: usize, column: usize) -> String;

    /// All cell texts of `row`, left to right, for columns `1..=column_count`
    fn row_texts(&self, row: usize) -> Vec<String> {
        (1..=self.column_count())
            .map(|column| self.cell_text(row, column))
            .collect()
    }
}

impl<T: TabularSheet + ?Sized> TabularSheet for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn cell_text(&self, row: usize, column: usize) -> String {
        (**self).cell_text(row, column)
    }
}

/// An ordered collection of sheets
pub trait TabularWorkbook {
    fn sheet_count(&self) -> usize;

    /// Load the sheet at zero-based `index`, in the workbook's natural order
    fn sheet(&mut self, index: usize) -> Result<Box<dyn TabularSheet + '_>>;
}

/// Convert whitespace-only text to the empty string; other text is kept as is
pub fn normalize_cell_text(text: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        text.to_string()
    }
}

/// A sheet held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySheet {
    name: String,
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl MemorySheet {
    /// Build a sheet from rows of cell text. Ragged rows read as blank past
    /// their end; the column count is the length of the longest row.
    pub fn new<R, C, S>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);

        Self {
            name: name.into(),
            rows,
            column_count,
        }
    }
}

impl TabularSheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell_text(&self, row: usize, column: usize) -> String {
        if row == 0 || column == 0 {
            return String::new();
        }
        self.rows
            .get(row - 1)
            .and_then(|cells| cells.get(column - 1))
            .map(|text| normalize_cell_text(text))
            .unwrap_or_default()
    }
}

/// A workbook held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new(sheets: Vec<MemorySheet>) -> Self {
        Self { sheets }
    }
}

impl TabularWorkbook for MemoryWorkbook {
    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn sheet(&mut self, index: usize) -> Result<Box<dyn TabularSheet + '_>> {
        let sheet = self
            .sheets
            .get(index)
            .ok_or_else(|| ComparerError::sheet_not_found(index))?;
        Ok(Box::new(sheet))
    }
}
