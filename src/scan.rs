//! Sheet scanning

use crate::compare::{compare_row, ComparisonRequest, DifferenceRecord};
use crate::csv_encoder::CsvEncoder;
use crate::error::Result;
use crate::output::{ReportSink, SheetHeader};
use crate::progress::ScanProgress;
use crate::workbook::TabularSheet;

/// Outcome of scanning one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetScan {
    pub row_count: usize,
    pub column_count: usize,
    pub columns_in_range: bool,
    pub difference_count: usize,
}

/// Compares the requested columns of every row of a sheet
#[derive(Debug, Clone, Copy)]
pub struct SheetScanner<'a> {
    request: &'a ComparisonRequest,
    encoder: CsvEncoder,
}

impl<'a> SheetScanner<'a> {
    pub fn new(request: &'a ComparisonRequest, encoder: CsvEncoder) -> Self {
        Self { request, encoder }
    }

    /// Scan `sheet`, emitting its header, each difference in ascending row
    /// order, and its difference count to `sink`.
    ///
    /// When either requested column lies outside the sheet, no rows are
    /// compared and the sheet contributes zero differences.
    pub fn scan<S, R>(
        &self,
        number: usize,
        sheet: &S,
        sink: &mut R,
        progress: &mut ScanProgress,
    ) -> Result<SheetScan>
    where
        S: TabularSheet + ?Sized,
        R: ReportSink + ?Sized,
    {
        let row_count = sheet.row_count();
        let column_count = sheet.column_count();
        let columns_in_range = self.request.fits(column_count);

        sink.sheet_started(&SheetHeader {
            number,
            name: sheet.name().to_string(),
            row_count,
            column_count,
            columns_in_range,
        })?;

        let mut difference_count = 0;
        if columns_in_range {
            let column1 = self.request.column1.get();
            let column2 = self.request.column2.get();

            progress.start_sheet(sheet.name(), row_count);
            for row in 1..=row_count {
                if let Some(record) = compare_row(row, column1, column2, |r, c| sheet.cell_text(r, c)) {
                    let record = if self.request.full_row_enabled {
                        record.with_full_row(sheet.row_texts(row))
                    } else {
                        record
                    };
                    sink.difference(&record, &self.display_line(&record))?;
                    difference_count += 1;
                }
                progress.row_done();
            }
            progress.finish_sheet();
        } else {
            log::debug!(
                "Skipping sheet '{}': columns {} and {} not within 1..={}",
                sheet.name(),
                self.request.column1,
                self.request.column2,
                column_count
            );
        }

        sink.sheet_finished(difference_count)?;

        Ok(SheetScan {
            row_count,
            column_count,
            columns_in_range,
            difference_count,
        })
    }

    /// The report line for a difference: the CSV-encoded full row when one
    /// was captured, otherwise the two compared values
    pub fn display_line(&self, record: &DifferenceRecord) -> String {
        match &record.full_row {
            Some(values) => self.encoder.encode(values),
            None => record.summary_line(),
        }
    }
}
