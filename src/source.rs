//! File-backed workbook sources
//!
//! Spreadsheet formats are read with calamine; delimited text files are read
//! with the csv crate into a single in-memory sheet.

use crate::error::{ComparerError, Result};
use crate::workbook::{normalize_cell_text, MemorySheet, MemoryWorkbook, TabularSheet, TabularWorkbook};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Open the workbook at `path`, choosing a reader from the file extension
pub fn open_workbook(path: &Path) -> Result<Box<dyn TabularWorkbook>> {
    if !path.is_file() {
        return Err(ComparerError::invalid_input(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => {
            Ok(Box::new(SpreadsheetWorkbook::open(path)?))
        }
        "csv" => Ok(Box::new(read_delimited(path, b',')?)),
        "tsv" => Ok(Box::new(read_delimited(path, b'\t')?)),
        _ => Err(ComparerError::unsupported_format(path)),
    }
}

/// Workbook backed by a spreadsheet file; sheets are read on demand
pub struct SpreadsheetWorkbook {
    sheets: Sheets<BufReader<File>>,
    names: Vec<String>,
}

impl SpreadsheetWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path)?;
        let names = sheets.sheet_names();
        log::debug!("Opened {} with {} sheet(s)", path.display(), names.len());
        Ok(Self { sheets, names })
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.names
    }
}

impl TabularWorkbook for SpreadsheetWorkbook {
    fn sheet_count(&self) -> usize {
        self.names.len()
    }

    fn sheet(&mut self, index: usize) -> Result<Box<dyn TabularSheet + '_>> {
        let name = self
            .names
            .get(index)
            .ok_or_else(|| ComparerError::sheet_not_found(index))?
            .clone();
        let range = self.sheets.worksheet_range(&name)?;
        Ok(Box::new(RangeSheet::new(name, range)))
    }
}

/// A worksheet's used range, addressed absolutely from A1
pub struct RangeSheet {
    name: String,
    range: Range<Data>,
    row_count: usize,
    column_count: usize,
}

impl RangeSheet {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        // Extent runs from A1 to the bottom-right used cell so that row and
        // column numbers match the sheet's own addresses.
        let (row_count, column_count) = match range.end() {
            Some((row, column)) if !range.is_empty() => (row as usize + 1, column as usize + 1),
            _ => (0, 0),
        };

        Self {
            name: name.into(),
            range,
            row_count,
            column_count,
        }
    }
}

impl TabularSheet for RangeSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell_text(&self, row: usize, column: usize) -> String {
        if row == 0 || column == 0 {
            return String::new();
        }
        let (Ok(r), Ok(c)) = (u32::try_from(row - 1), u32::try_from(column - 1)) else {
            return String::new();
        };

        match self.range.get_value((r, c)) {
            None | Some(Data::Empty) => String::new(),
            Some(value) => normalize_cell_text(&value.to_string()),
        }
    }
}

/// Read a delimited text file as a single-sheet workbook named after the file
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<MemoryWorkbook> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string());
    log::debug!("Read {} row(s) from {}", rows.len(), path.display());

    Ok(MemoryWorkbook::new(vec![MemorySheet::new(name, rows)]))
}
