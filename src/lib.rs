//! # colcompare
//!
//! Compares two columns of every sheet in a workbook, row by row, and reports
//! the rows where the two values differ.

pub mod cli;
pub mod commands;
pub mod compare;
pub mod csv_encoder;
pub mod error;
pub mod output;
pub mod progress;
pub mod scan;
pub mod source;
pub mod walk;
pub mod workbook;

pub use compare::{ColumnIndex, ComparisonRequest, DifferenceRecord};
pub use csv_encoder::CsvEncoder;
pub use error::{ComparerError, Result};
pub use walk::ScanTally;
pub use workbook::{TabularSheet, TabularWorkbook};
