//! Tests for the row reader and its traversal machinery.

use super::mapper::PassThroughMapper;
use super::resource::{BytesResource, FileResource};
use super::row_reader::RowReader;
use super::rowset::{DefaultRowSet, RowSet, RowSetFactory};
use crate::document::{
    CellValue, DocumentDecoder, DocumentReader, MemoryDecoder, MemoryDocument, ReadSeek, Sheet,
};
use crate::error::{BoxedError, Error, Result};
use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn sheet(name: &str, rows: &[&[&str]]) -> Sheet {
    Sheet::new(
        name,
        rows.iter()
            .map(|row| row.iter().map(|cell| CellValue::from(*cell)).collect())
            .collect(),
    )
}

fn passthrough_reader(sheets: Vec<Sheet>) -> RowReader<Vec<CellValue>> {
    RowReader::new(
        BytesResource::new("fixture", Vec::new()),
        MemoryDecoder::new(sheets),
        PassThroughMapper,
    )
}

fn drain(reader: &mut RowReader<Vec<CellValue>>) -> Vec<String> {
    let mut rows = Vec::new();
    while let Some(row) = reader.read().unwrap() {
        rows.push(row[0].to_string());
    }
    rows
}

#[test]
fn test_reads_every_row_across_sheets() {
    let mut reader = passthrough_reader(vec![
        sheet("First", &[&["a"], &["b"], &["c"]]),
        sheet("Empty", &[]),
        sheet("Last", &[&["d"], &["e"]]),
    ]);
    reader.open().unwrap();
    assert_eq!(drain(&mut reader), ["a", "b", "c", "d", "e"]);
    // exhaustion is idempotent
    assert!(reader.read().unwrap().is_none());
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_zero_sheets_is_immediately_exhausted() {
    let mut reader = passthrough_reader(Vec::new());
    reader.open().unwrap();
    assert!(reader.read().unwrap().is_none());
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_consecutive_empty_sheets_fall_through() {
    let mut reader = passthrough_reader(vec![
        sheet("E1", &[]),
        sheet("E2", &[]),
        sheet("Data", &[&["x"]]),
        sheet("E3", &[]),
    ]);
    reader.open().unwrap();
    assert_eq!(drain(&mut reader), ["x"]);
}

#[test]
fn test_lines_to_skip_and_callback() {
    let skipped = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&skipped);
    let mut reader = passthrough_reader(vec![
        sheet("Data", &[&["header"], &["r1"], &["r2"]]),
        sheet("Short", &[&["only"]]),
    ])
    .with_lines_to_skip(2)
    .with_skip_callback(move |rowset: &dyn RowSet| {
        seen.borrow_mut().push((
            rowset.sheet_name().to_string(),
            rowset.row_index(),
            rowset.current_row()[0].to_string(),
        ));
    });
    reader.open().unwrap();
    // "Data" loses its first two rows, "Short" has fewer rows than the skip
    // count and contributes nothing
    assert_eq!(drain(&mut reader), ["r2"]);
    let skipped = skipped.borrow();
    assert_eq!(
        *skipped,
        vec![
            ("Data".to_string(), 0, "header".to_string()),
            ("Data".to_string(), 1, "r1".to_string()),
            ("Short".to_string(), 0, "only".to_string()),
        ]
    );
}

#[test]
fn test_skip_longer_than_every_sheet_yields_nothing() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let mut reader = passthrough_reader(vec![sheet("A", &[&["1"]]), sheet("B", &[&["2"], &["3"]])])
        .with_lines_to_skip(5)
        .with_skip_callback(move |_rowset: &dyn RowSet| counter.set(counter.get() + 1));
    reader.open().unwrap();
    assert!(reader.read().unwrap().is_none());
    assert_eq!(fired.get(), 3);
}

#[test]
fn test_row_parse_error_carries_row_coordinates() {
    let failing = |rowset: &dyn RowSet| -> std::result::Result<String, BoxedError> {
        match rowset.current_row().first() {
            Some(CellValue::String(s)) if s == "bad" => Err("unmappable row".into()),
            Some(cell) => Ok(cell.to_string()),
            None => Ok(String::new()),
        }
    };
    let sheets = vec![
        sheet("Sheet1", &[&["ok"]]),
        sheet(
            "Sheet2",
            &[
                &["r0"],
                &["r1"],
                &["r2"],
                &["r3"],
                &["r4"],
                &["r5"],
                &["r6"],
                &["bad"],
                &["r8"],
            ],
        ),
    ];
    let mut reader = RowReader::new(
        BytesResource::new("batch-input", Vec::new()),
        MemoryDecoder::new(sheets),
        failing,
    );
    reader.open().unwrap();

    let mut records = Vec::new();
    let err = loop {
        match reader.read() {
            Ok(Some(record)) => records.push(record),
            Ok(None) => panic!("expected a mapping failure"),
            Err(err) => break err,
        }
    };
    assert_eq!(records.len(), 8);

    let Error::RowParse(parse) = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(parse.resource, "bytes [batch-input]");
    assert_eq!(parse.sheet_name, "Sheet2");
    assert_eq!(parse.row_index, 7);
    assert_eq!(parse.row, vec![CellValue::from("bad")]);
    assert!(parse.to_string().contains("row 7 of sheet 'Sheet2'"));

    // the failure does not end the session, the next read continues behind it
    assert_eq!(reader.read().unwrap(), Some("r8".to_string()));
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_strict_open_fails_for_missing_resource() {
    let mut reader = RowReader::new(
        FileResource::new("/definitely/not/here.xlsx"),
        MemoryDecoder::new(Vec::new()),
        PassThroughMapper,
    );
    let err = reader.open().unwrap_err();
    assert!(matches!(err, Error::ResourceMissing(_)));
    // a never-opened reader reads as empty
    assert!(reader.read().unwrap().is_none());
}

struct TrackingDecoder {
    opened: Rc<Cell<bool>>,
}

impl DocumentDecoder for TrackingDecoder {
    fn open(&self, _input: Box<dyn ReadSeek>) -> Result<Box<dyn DocumentReader>> {
        self.opened.set(true);
        Ok(Box::new(MemoryDocument::new(Vec::new())))
    }
}

#[test]
fn test_lenient_open_soft_skips_missing_resource() {
    let opened = Rc::new(Cell::new(false));
    let mut reader = RowReader::new(
        FileResource::new("/definitely/not/here.xlsx"),
        TrackingDecoder {
            opened: Rc::clone(&opened),
        },
        PassThroughMapper,
    )
    .with_strict(false);
    reader.open().unwrap();
    assert!(!reader.input_available());
    assert!(reader.read().unwrap().is_none());
    assert!(reader.read().unwrap().is_none());
    // the decoder was never touched
    assert!(!opened.get());
}

#[test]
fn test_empty_document_still_counts_as_input() {
    let mut reader = passthrough_reader(Vec::new());
    reader.open().unwrap();
    assert!(reader.input_available());
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_read_before_open_is_empty() {
    let mut reader = passthrough_reader(vec![sheet("Data", &[&["a"]])]);
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_reopen_starts_fresh() {
    let mut reader = passthrough_reader(vec![sheet("Data", &[&["a"], &["b"]])]);
    reader.open().unwrap();
    assert!(reader.read().unwrap().is_some());
    reader.close();
    assert!(reader.read().unwrap().is_none());
    reader.open().unwrap();
    assert_eq!(drain(&mut reader), ["a", "b"]);
}

#[test]
fn test_default_rowset_positioning() {
    let mut rowset = DefaultRowSet::new(sheet("S", &[&["x"], &["y"]]));
    assert!(rowset.current_row().is_empty());
    assert!(rowset.advance());
    assert_eq!(rowset.row_index(), 0);
    assert_eq!(rowset.current_row()[0], CellValue::from("x"));
    assert!(rowset.advance());
    assert_eq!(rowset.row_index(), 1);
    assert_eq!(rowset.current_row()[0], CellValue::from("y"));
    assert!(!rowset.advance());
    assert!(!rowset.advance());
    // stays on the last row once exhausted
    assert_eq!(rowset.row_index(), 1);
}

#[test]
fn test_empty_sheet_rowset_never_positions() {
    let mut rowset = DefaultRowSet::new(sheet("S", &[]));
    assert!(!rowset.advance());
    assert!(rowset.current_row().is_empty());
}

struct ReversingFactory;

impl RowSetFactory for ReversingFactory {
    fn create(&self, sheet: Sheet) -> Box<dyn RowSet> {
        let name = sheet.name().to_string();
        let mut rows: Vec<Vec<CellValue>> = (0..sheet.row_count())
            .filter_map(|index| sheet.row(index).map(<[CellValue]>::to_vec))
            .collect();
        rows.reverse();
        Box::new(DefaultRowSet::new(Sheet::new(name, rows)))
    }
}

#[test]
fn test_custom_rowset_factory_is_honored() {
    let mut reader = passthrough_reader(vec![sheet("Data", &[&["a"], &["b"], &["c"]])])
        .with_rowset_factory(ReversingFactory);
    reader.open().unwrap();
    assert_eq!(drain(&mut reader), ["c", "b", "a"]);
}

proptest! {
    #[test]
    fn prop_record_count_matches_sheet_shapes(
        shapes in proptest::collection::vec(0usize..8, 0..6),
        lines_to_skip in 0usize..4,
    ) {
        let sheets: Vec<Sheet> = shapes
            .iter()
            .enumerate()
            .map(|(sheet_index, &rows)| {
                Sheet::new(
                    format!("S{sheet_index}"),
                    (0..rows)
                        .map(|row_index| {
                            vec![
                                CellValue::Int(row_index as i64),
                                CellValue::Int(sheet_index as i64),
                            ]
                        })
                        .collect(),
                )
            })
            .collect();
        let expected: usize = shapes
            .iter()
            .map(|&rows| rows.saturating_sub(lines_to_skip))
            .sum();

        let mut reader = passthrough_reader(sheets).with_lines_to_skip(lines_to_skip);
        reader.open().unwrap();
        let mut produced = Vec::new();
        while let Some(row) = reader.read().unwrap() {
            produced.push(row);
        }

        prop_assert_eq!(produced.len(), expected);
        for window in produced.windows(2) {
            // sheets are visited in order, rows in order within a sheet
            prop_assert!(window[1][1].as_i64() >= window[0][1].as_i64());
            if window[0][1] == window[1][1] {
                prop_assert!(window[1][0].as_i64() > window[0][0].as_i64());
            }
        }
        prop_assert!(reader.read().unwrap().is_none());
    }
}
