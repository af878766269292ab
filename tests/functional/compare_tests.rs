//! Functional tests for column comparison across sheets

use crate::common::{expect_report, sample_data, TestFixture};
use colcompare::output::{JsonReport, TextReport};
use colcompare::progress::ScanProgress;
use colcompare::walk::walk_workbook;
use colcompare::workbook::{MemorySheet, MemoryWorkbook};
use colcompare::{ColumnIndex, ComparisonRequest, CsvEncoder};

fn request(column1: usize, column2: usize, full_row_enabled: bool) -> ComparisonRequest {
    ComparisonRequest::new(
        ColumnIndex::new(column1).unwrap(),
        ColumnIndex::new(column2).unwrap(),
        full_row_enabled,
    )
}

fn text_report(workbook: &mut MemoryWorkbook, request: &ComparisonRequest, encoder: CsvEncoder) -> (usize, String) {
    let mut sink = TextReport::new(Vec::new());
    let tally = walk_workbook(workbook, request, encoder, &mut sink, &mut ScanProgress::hidden()).unwrap();
    (tally.difference_count, String::from_utf8(sink.into_inner()).unwrap())
}

#[test]
fn test_single_sheet_scenario() {
    let mut workbook = MemoryWorkbook::new(vec![MemorySheet::new("Sheet1", sample_data::two_column_rows())]);
    let (total, text) = text_report(&mut workbook, &request(1, 2, false), CsvEncoder::default());

    assert_eq!(total, 1);
    assert_eq!(
        text,
        "column1: 1, column2: 2\n\
         sheet1 - row count: 3, column count: 2\n\
         (row:2, column1:1) - [y] - (row:2, column2:2) - [z]\n\
         Sheet difference count: 1\n\
         Difference count: 1\n"
    );
}

#[test]
fn test_single_sheet_scenario_records() {
    let mut workbook = MemoryWorkbook::new(vec![MemorySheet::new("Sheet1", sample_data::two_column_rows())]);
    let mut sink = JsonReport::new();
    walk_workbook(&mut workbook, &request(1, 2, false), CsvEncoder::default(), &mut sink, &mut ScanProgress::hidden()).unwrap();

    let report = sink.into_report();
    let sheet = &report.sheets[0];
    assert_eq!(sheet.row_count, 3);
    assert_eq!(sheet.column_count, 2);
    assert_eq!(sheet.difference_count, 1);
    assert_eq!(sheet.differences.len(), 1);
    assert_eq!(sheet.differences[0].row, 2);
    assert_eq!(sheet.differences[0].text1, "y");
    assert_eq!(sheet.differences[0].text2, "z");
    assert_eq!(report.difference_count, 1);
}

#[test]
fn test_full_row_scenario() {
    let mut workbook = MemoryWorkbook::new(vec![MemorySheet::new("Sheet1", sample_data::noted_rows())]);
    let (total, text) = text_report(&mut workbook, &request(1, 2, true), CsvEncoder::default());

    assert_eq!(total, 1);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "sheet1 - row count: 3, column count: 3");
    assert_eq!(lines[2], "y,z,\"note,1\"");
    assert_eq!(lines[3], "Sheet difference count: 1");
}

#[test]
fn test_range_skip_still_reports_counts() {
    let mut workbook = MemoryWorkbook::new(vec![MemorySheet::new("Sheet1", sample_data::two_column_rows())]);
    let (total, text) = text_report(&mut workbook, &request(3, 1, false), CsvEncoder::default());

    assert_eq!(total, 0);
    assert_eq!(
        text,
        "column1: 3, column2: 1\n\
         sheet1 - row count: 3, column count: 2\n\
         Sheet difference count: 0\n\
         Difference count: 0\n"
    );
}

#[test]
fn test_range_is_checked_per_sheet() {
    let mut workbook = MemoryWorkbook::new(vec![
        MemorySheet::new("narrow", vec![vec!["a", "b"]]),
        MemorySheet::new("wide", vec![vec!["a", "b", "c"], vec!["d", "e", "d"]]),
    ]);
    let (total, text) = text_report(&mut workbook, &request(1, 3, false), CsvEncoder::default());

    assert_eq!(total, 1);
    assert!(text.contains("sheet1 - row count: 1, column count: 2\nSheet difference count: 0\n"));
    assert!(text.contains("sheet2 - row count: 2, column count: 3\n(row:1, column1:1) - [a] - (row:1, column2:3) - [c]\n"));
}

#[test]
fn test_global_count_sums_sheets_in_order() {
    let mut workbook = MemoryWorkbook::new(vec![
        MemorySheet::new("a", vec![vec!["1", "2"], vec!["3", "4"]]),
        MemorySheet::new("b", vec![vec!["1", "1"]]),
        MemorySheet::new("c", vec![vec!["5", "6"]]),
    ]);
    let (total, text) = text_report(&mut workbook, &request(2, 1, false), CsvEncoder::default());

    assert_eq!(total, 3);
    let sheet_counts: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("Sheet difference count"))
        .collect();
    assert_eq!(
        sheet_counts,
        vec![
            "Sheet difference count: 2",
            "Sheet difference count: 0",
            "Sheet difference count: 1"
        ]
    );
    assert!(text.ends_with("Difference count: 3\n"));
}

#[test]
fn test_blank_cells_compare_equal() {
    let mut workbook = MemoryWorkbook::new(vec![MemorySheet::new(
        "s",
        vec![vec!["", "   "], vec!["\t", ""], vec![" ", "x"]],
    )]);
    let (total, text) = text_report(&mut workbook, &request(1, 2, false), CsvEncoder::default());

    assert_eq!(total, 1);
    assert!(text.contains("(row:3, column1:1) - [] - (row:3, column2:2) - [x]"));
}

#[test]
fn test_cli_end_to_end_with_csv_source() {
    let fixture = TestFixture::new();
    let path = fixture.create_csv("book.csv", &sample_data::two_column_rows());

    let (tally, text) = expect_report(&["-i", path.to_str().unwrap(), "-c", "1,2"]);
    assert_eq!(tally.sheet_count, 1);
    assert_eq!(tally.difference_count, 1);
    assert!(text.starts_with("column1: 1, column2: 2\nsheet1 - row count: 3, column count: 2\n"));
}

#[test]
fn test_cli_full_row_with_separator() {
    let fixture = TestFixture::new();
    let path = fixture.create_csv("book.csv", &sample_data::noted_rows());

    let (_, text) = expect_report(&["/i", path.to_str().unwrap(), "/c", "1,2", "/f", "-s", ";"]);
    assert!(text.contains("\ny;z;\"note,1\"\n"));
}

#[test]
fn test_cli_json_report() {
    let fixture = TestFixture::new();
    let path = fixture.create_csv("book.csv", &sample_data::noted_rows());

    let (tally, text) = expect_report(&["-i", path.to_str().unwrap(), "-c", "1,2", "-f", "--format", "json"]);
    assert_eq!(tally.difference_count, 1);

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["column1"], 1);
    assert_eq!(json["full_row_enabled"], true);
    assert_eq!(json["difference_count"], 1);
    assert_eq!(json["sheets"][0]["name"], "book");
    assert_eq!(json["sheets"][0]["differences"][0]["row"], 2);
    assert_eq!(
        json["sheets"][0]["differences"][0]["full_row"],
        serde_json::json!(["y", "z", "note,1"])
    );
}
