//! Report output sinks

use crate::compare::{ComparisonRequest, DifferenceRecord};
use crate::error::Result;
use crate::walk::ScanTally;
use serde::Serialize;
use std::io::Write;

/// Header information emitted before a sheet's differences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHeader {
    /// 1-based position of the sheet in the workbook
    pub number: usize,
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns_in_range: bool,
}

/// Receives report events in workbook order
pub trait ReportSink {
    fn start(&mut self, request: &ComparisonRequest) -> Result<()>;

    fn sheet_started(&mut self, header: &SheetHeader) -> Result<()>;

    /// `line` is the display text for the difference
    fn difference(&mut self, record: &DifferenceRecord, line: &str) -> Result<()>;

    fn sheet_finished(&mut self, difference_count: usize) -> Result<()>;

    fn finish(&mut self, tally: &ScanTally) -> Result<()>;
}

/// Line-oriented text report
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn start(&mut self, request: &ComparisonRequest) -> Result<()> {
        writeln!(
            self.out,
            "column1: {}, column2: {}",
            request.column1, request.column2
        )?;
        Ok(())
    }

    fn sheet_started(&mut self, header: &SheetHeader) -> Result<()> {
        writeln!(
            self.out,
            "sheet{} - row count: {}, column count: {}",
            header.number, header.row_count, header.column_count
        )?;
        Ok(())
    }

    fn difference(&mut self, _record: &DifferenceRecord, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn sheet_finished(&mut self, difference_count: usize) -> Result<()> {
        writeln!(self.out, "Sheet difference count: {}", difference_count)?;
        Ok(())
    }

    fn finish(&mut self, tally: &ScanTally) -> Result<()> {
        writeln!(self.out, "Difference count: {}", tally.difference_count)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable report for a whole workbook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkbookReport {
    pub column1: usize,
    pub column2: usize,
    pub full_row_enabled: bool,
    pub sheets: Vec<SheetReport>,
    pub difference_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetReport {
    pub number: usize,
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns_in_range: bool,
    pub differences: Vec<DifferenceRecord>,
    pub difference_count: usize,
}

/// Collects report events into a [`WorkbookReport`]
#[derive(Debug, Default)]
pub struct JsonReport {
    report: WorkbookReport,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &WorkbookReport {
        &self.report
    }

    pub fn into_report(self) -> WorkbookReport {
        self.report
    }

    /// Write the collected report as pretty-printed JSON
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.report)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn current_sheet(&mut self) -> Option<&mut SheetReport> {
        self.report.sheets.last_mut()
    }
}

impl ReportSink for JsonReport {
    fn start(&mut self, request: &ComparisonRequest) -> Result<()> {
        self.report = WorkbookReport {
            column1: request.column1.get(),
            column2: request.column2.get(),
            full_row_enabled: request.full_row_enabled,
            ..WorkbookReport::default()
        };
        Ok(())
    }

    fn sheet_started(&mut self, header: &SheetHeader) -> Result<()> {
        self.report.sheets.push(SheetReport {
            number: header.number,
            name: header.name.clone(),
            row_count: header.row_count,
            column_count: header.column_count,
            columns_in_range: header.columns_in_range,
            differences: Vec::new(),
            difference_count: 0,
        });
        Ok(())
    }

    fn difference(&mut self, record: &DifferenceRecord, _line: &str) -> Result<()> {
        if let Some(sheet) = self.current_sheet() {
            sheet.differences.push(record.clone());
        }
        Ok(())
    }

    fn sheet_finished(&mut self, difference_count: usize) -> Result<()> {
        if let Some(sheet) = self.current_sheet() {
            sheet.difference_count = difference_count;
        }
        Ok(())
    }

    fn finish(&mut self, tally: &ScanTally) -> Result<()> {
        self.report.difference_count = tally.difference_count;
        Ok(())
    }
}
