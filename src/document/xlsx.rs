//! Excel (.xlsx) document support backed by calamine.

use super::traits::{DocumentDecoder, DocumentReader, ReadSeek};
use super::types::{CellValue, Sheet};
use crate::error::{Error, Result};
use calamine::{Data, Reader, Xlsx};

/// Convert a calamine cell to a CellValue.
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
    }
}

/// A workbook decoded by calamine, exposing sheets by zero-based index.
pub struct XlsxDocument {
    workbook: Xlsx<Box<dyn ReadSeek>>,
    sheet_names: Vec<String>,
}

impl XlsxDocument {
    /// Open a workbook from a seekable stream.
    pub fn new(input: Box<dyn ReadSeek>) -> Result<Self> {
        let workbook = Xlsx::new(input)?;
        let sheet_names = workbook.sheet_names().to_vec();
        Ok(XlsxDocument {
            workbook,
            sheet_names,
        })
    }
}

impl DocumentReader for XlsxDocument {
    fn sheet_count(&self) -> usize {
        self.sheet_names.len()
    }

    fn sheet_at(&mut self, index: usize) -> Result<Sheet> {
        let name = self
            .sheet_names
            .get(index)
            .cloned()
            .ok_or(Error::SheetOutOfRange {
                index,
                count: self.sheet_names.len(),
            })?;
        let range = self.workbook.worksheet_range(&name)?;
        let rows = range
            .rows()
            .map(|row| row.iter().map(data_to_cell_value).collect())
            .collect();
        Ok(Sheet::new(name, rows))
    }
}

/// Decoder for .xlsx workbooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxDecoder;

impl DocumentDecoder for XlsxDecoder {
    fn open(&self, input: Box<dyn ReadSeek>) -> Result<Box<dyn DocumentReader>> {
        Ok(Box::new(XlsxDocument::new(input)?))
    }
}
