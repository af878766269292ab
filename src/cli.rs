//! Command-line interface for colcompare

use crate::compare::{ColumnIndex, ComparisonRequest};
use crate::csv_encoder::{CsvEncoder, DEFAULT_SEPARATOR};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage text printed when the required parameters are missing or invalid
pub const USAGE: &str = "Usage:
colcompare -i targetExcelFilePath -c column1,column2 -f

-i targetExcelFilePath\tExcel file path.
-c column1,column2\tFirst column and second column to compare.
-f\t\t\tShow full row.

Options:
-s separator\t\tSeparator for full rows (default ',').
--format text|json\tReport format (default text).
--progress\t\tShow progress on stderr.
-v\t\t\tVerbose logging.

ex.

colcompare -i xxx.xlsx -c 1,2";

/// Single-letter switches that take a value
const VALUE_SWITCHES: &[char] = &['i', 'c', 's'];

/// Single-letter switches without a value. `-V` is left alone so that it
/// still prints the version.
const FLAG_SWITCHES: &[char] = &['f', 'h'];

#[derive(Parser, Debug)]
#[command(name = "colcompare")]
#[command(about = "Compare two columns of every sheet in a workbook, row by row")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Workbook file path (must exist)
    #[arg(short = 'i', value_name = "PATH", value_parser = parse_existing_path)]
    pub input: Option<PathBuf>,

    /// Columns to compare, as "column1,column2"
    #[arg(short = 'c', value_name = "COLUMN1,COLUMN2", value_parser = parse_column_pair)]
    pub columns: Option<ColumnPair>,

    /// Show the full row for each difference
    #[arg(short = 'f')]
    pub full_row: bool,

    /// Separator used when printing full rows
    #[arg(short = 's', long, default_value_t = DEFAULT_SEPARATOR, value_parser = parse_separator)]
    pub separator: char,

    /// Report format: "text" or "json"
    #[arg(long, default_value = "text", value_parser = OutputFormat::parse)]
    pub format: OutputFormat,

    /// Show a progress bar on stderr while scanning
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the run configuration, or `None` when the workbook path or
    /// the column pair is missing
    pub fn into_config(self) -> Option<CompareConfig> {
        let source = self.input?;
        let ColumnPair(column1, column2) = self.columns?;

        Some(CompareConfig {
            source,
            request: ComparisonRequest::new(column1, column2, self.full_row),
            encoder: CsvEncoder::new(self.separator),
            format: self.format,
            progress: self.progress,
        })
    }
}

/// Immutable configuration for one comparison run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub source: PathBuf,
    pub request: ComparisonRequest,
    pub encoder: CsvEncoder,
    pub format: OutputFormat,
    pub progress: bool,
}

/// The two columns given with `-c`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPair(pub ColumnIndex, pub ColumnIndex);

/// Parse output format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'text' or 'json'", s)),
        }
    }
}

/// Rewrite single-letter switches so that `-X`, `/x` and `/X` all read as
/// `-x`. The value following a value-taking switch is passed through as is.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut args = args.into_iter().map(Into::<OsString>::into);

    if let Some(program) = args.next() {
        normalized.push(program);
    }

    while let Some(arg) = args.next() {
        match arg.to_str().and_then(switch_letter) {
            Some(letter) => {
                normalized.push(OsString::from(format!("-{}", letter)));
                if VALUE_SWITCHES.contains(&letter) {
                    if let Some(value) = args.next() {
                        normalized.push(value);
                    }
                }
            }
            None => normalized.push(arg),
        }
    }

    normalized
}

fn switch_letter(arg: &str) -> Option<char> {
    let mut chars = arg.chars();
    let prefix = chars.next()?;
    let letter = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() || !(prefix == '-' || prefix == '/') {
        return None;
    }
    (VALUE_SWITCHES.contains(&letter) || FLAG_SWITCHES.contains(&letter)).then_some(letter)
}

/// Require an existing file and resolve it to an absolute path
fn parse_existing_path(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("File path must not be empty".to_string());
    }
    let path = std::fs::canonicalize(s).map_err(|e| format!("Cannot resolve '{}': {}", s, e))?;
    if !path.is_file() {
        return Err(format!("Not a file: '{}'", s));
    }
    Ok(path)
}

/// Parse "column1,column2" into two positive column numbers
fn parse_column_pair(s: &str) -> Result<ColumnPair, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("Expected two columns as 'column1,column2': '{}'", s));
    }

    let column = |text: &str| {
        text.parse::<usize>()
            .ok()
            .and_then(ColumnIndex::new)
            .ok_or_else(|| format!("Invalid column: '{}'. Must be a positive integer.", text))
    };

    Ok(ColumnPair(column(parts[0])?, column(parts[1])?))
}

fn parse_separator(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" => return Ok('\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\n' && c != '\r' => Ok(c),
        _ => Err(format!("Invalid separator: '{}'. Must be a single character.", s)),
    }
}
