//! Forward-only row views over a single sheet.

use crate::document::{CellValue, Sheet};

/// A forward-only cursor over one sheet's rows.
///
/// A row set starts positioned before the first row; [`advance`](RowSet::advance)
/// moves it one row forward and reports whether a row is available. The
/// position accessors are meaningful only after `advance` has returned true.
pub trait RowSet {
    /// Move to the next row. Returns false when the sheet is exhausted.
    fn advance(&mut self) -> bool;

    /// Name of the sheet this row set reads from.
    fn sheet_name(&self) -> &str;

    /// Zero-based ordinal of the current row within the sheet.
    fn row_index(&self) -> usize;

    /// Raw cell contents of the current row.
    fn current_row(&self) -> &[CellValue];
}

/// Strategy for constructing a row view over a freshly opened sheet.
pub trait RowSetFactory {
    /// Build a row set positioned before the sheet's first row.
    fn create(&self, sheet: Sheet) -> Box<dyn RowSet>;
}

/// Row set over an owned sheet snapshot.
pub struct DefaultRowSet {
    sheet: Sheet,
    position: Option<usize>,
}

impl DefaultRowSet {
    /// Create a row set positioned before the first row of the sheet.
    pub fn new(sheet: Sheet) -> Self {
        DefaultRowSet {
            sheet,
            position: None,
        }
    }
}

impl RowSet for DefaultRowSet {
    fn advance(&mut self) -> bool {
        let next = self.position.map_or(0, |current| current + 1);
        if next < self.sheet.row_count() {
            self.position = Some(next);
            true
        } else {
            false
        }
    }

    fn sheet_name(&self) -> &str {
        self.sheet.name()
    }

    fn row_index(&self) -> usize {
        self.position.unwrap_or(0)
    }

    fn current_row(&self) -> &[CellValue] {
        match self.position {
            Some(index) => self.sheet.row(index).unwrap_or(&[]),
            None => &[],
        }
    }
}

/// Factory producing [`DefaultRowSet`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRowSetFactory;

impl RowSetFactory for DefaultRowSetFactory {
    fn create(&self, sheet: Sheet) -> Box<dyn RowSet> {
        Box::new(DefaultRowSet::new(sheet))
    }
}
