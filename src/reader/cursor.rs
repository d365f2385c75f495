//! Sheet-boundary traversal state.

use super::rowset::{RowSet, RowSetFactory};
use crate::document::DocumentReader;
use crate::error::Result;
use tracing::debug;

/// How each sheet is entered: row-view construction plus leading-row
/// skipping.
pub(crate) struct SheetPolicy {
    pub(crate) rowset_factory: Box<dyn RowSetFactory>,
    pub(crate) lines_to_skip: usize,
    pub(crate) skip_callback: Option<Box<dyn FnMut(&dyn RowSet)>>,
}

/// Tracks which sheet the traversal is on and crosses sheet boundaries
/// without surfacing them to the caller.
///
/// The sheet index only ever moves forward, and the row view is replaced
/// wholesale on every sheet transition.
pub(crate) struct SheetCursor {
    document: Box<dyn DocumentReader>,
    current_sheet: usize,
    rowset: Option<Box<dyn RowSet>>,
}

impl SheetCursor {
    /// Start a traversal over a freshly decoded document.
    pub(crate) fn open(
        document: Box<dyn DocumentReader>,
        policy: &mut SheetPolicy,
    ) -> Result<Self> {
        let mut cursor = SheetCursor {
            document,
            current_sheet: 0,
            rowset: None,
        };
        if cursor.document.sheet_count() > 0 {
            cursor.open_sheet(policy)?;
        }
        Ok(cursor)
    }

    /// Advance to the next row, crossing sheet boundaries as needed, and
    /// return the positioned row view.
    ///
    /// Returns `None` once every sheet is exhausted; from then on the cursor
    /// is terminal.
    pub(crate) fn advance(&mut self, policy: &mut SheetPolicy) -> Result<Option<&dyn RowSet>> {
        loop {
            match self.rowset.as_mut() {
                None => return Ok(None),
                Some(rowset) => {
                    if rowset.advance() {
                        break;
                    }
                }
            }
            self.current_sheet += 1;
            if self.current_sheet >= self.document.sheet_count() {
                debug!("no more sheets");
                self.rowset = None;
                return Ok(None);
            }
            self.open_sheet(policy)?;
        }
        Ok(self.rowset.as_deref())
    }

    fn open_sheet(&mut self, policy: &mut SheetPolicy) -> Result<()> {
        let sheet = self.document.sheet_at(self.current_sheet)?;
        debug!(sheet = sheet.name(), rows = sheet.row_count(), "opening sheet");
        let mut rowset = policy.rowset_factory.create(sheet);
        for _ in 0..policy.lines_to_skip {
            if !rowset.advance() {
                break;
            }
            if let Some(callback) = policy.skip_callback.as_mut() {
                callback(rowset.as_ref());
            }
        }
        self.rowset = Some(rowset);
        Ok(())
    }
}
