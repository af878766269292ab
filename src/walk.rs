//! Workbook traversal

use crate::compare::ComparisonRequest;
use crate::csv_encoder::CsvEncoder;
use crate::error::Result;
use crate::output::ReportSink;
use crate::progress::ScanProgress;
use crate::scan::{SheetScan, SheetScanner};
use crate::workbook::TabularWorkbook;

/// Totals accumulated across the sheets of a workbook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTally {
    pub sheet_count: usize,
    pub difference_count: usize,
}

impl ScanTally {
    /// Fold one sheet's outcome into the running totals
    pub fn add(self, scan: &SheetScan) -> Self {
        Self {
            sheet_count: self.sheet_count + 1,
            difference_count: self.difference_count + scan.difference_count,
        }
    }
}

/// Scan every sheet of `workbook` in its natural order.
///
/// Sheets are scanned one at a time; a sheet that cannot be loaded aborts
/// the walk with the provider's error.
pub fn walk_workbook<W, R>(
    workbook: &mut W,
    request: &ComparisonRequest,
    encoder: CsvEncoder,
    sink: &mut R,
    progress: &mut ScanProgress,
) -> Result<ScanTally>
where
    W: TabularWorkbook + ?Sized,
    R: ReportSink + ?Sized,
{
    sink.start(request)?;

    let scanner = SheetScanner::new(request, encoder);
    let mut tally = ScanTally::default();
    for index in 0..workbook.sheet_count() {
        let sheet = workbook.sheet(index)?;
        let scan = scanner.scan(index + 1, sheet.as_ref(), sink, progress)?;
        log::debug!(
            "Sheet '{}': {} difference(s) in {} row(s)",
            sheet.name(),
            scan.difference_count,
            scan.row_count
        );
        tally = tally.add(&scan);
    }

    sink.finish(&tally)?;
    Ok(tally)
}
