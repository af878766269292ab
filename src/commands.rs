//! Command implementation for colcompare

use crate::cli::{CompareConfig, OutputFormat};
use crate::error::Result;
use crate::output::{JsonReport, TextReport};
use crate::progress::ScanProgress;
use crate::source::open_workbook;
use crate::walk::{walk_workbook, ScanTally};
use std::io::Write;

/// Open the configured workbook, compare its columns and write the report
/// to `out`
pub fn run_compare<W: Write>(config: &CompareConfig, out: W) -> Result<ScanTally> {
    log::info!("Comparing {}", config.source.display());

    let mut workbook = open_workbook(&config.source)?;
    let mut progress = ScanProgress::new(config.progress);

    let tally = match config.format {
        OutputFormat::Text => {
            let mut sink = TextReport::new(out);
            walk_workbook(
                workbook.as_mut(),
                &config.request,
                config.encoder,
                &mut sink,
                &mut progress,
            )?
        }
        OutputFormat::Json => {
            let mut sink = JsonReport::new();
            let tally = walk_workbook(
                workbook.as_mut(),
                &config.request,
                config.encoder,
                &mut sink,
                &mut progress,
            )?;
            sink.write_to(out)?;
            tally
        }
    };

    log::info!(
        "Compared {} sheet(s), {} difference(s)",
        tally.sheet_count,
        tally.difference_count
    );
    Ok(tally)
}
