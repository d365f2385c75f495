//! Row-to-record mapping collaborators.

use super::rowset::RowSet;
use crate::document::CellValue;
use crate::error::BoxedError;

/// Maps one positioned row view to a caller-defined record.
///
/// Implemented for plain closures, so a mapper can be supplied inline:
///
/// ```
/// use rowmill::{BoxedError, RowMapper, RowSet};
///
/// let mapper = |rowset: &dyn RowSet| -> Result<usize, BoxedError> {
///     Ok(rowset.current_row().len())
/// };
/// # fn takes_mapper(_m: impl RowMapper<Item = usize>) {}
/// # takes_mapper(mapper);
/// ```
pub trait RowMapper {
    /// The record type produced per row.
    type Item;

    /// Map the row the view is currently positioned on.
    fn map_row(&self, rowset: &dyn RowSet) -> std::result::Result<Self::Item, BoxedError>;
}

impl<T, F> RowMapper for F
where
    F: Fn(&dyn RowSet) -> std::result::Result<T, BoxedError>,
{
    type Item = T;

    fn map_row(&self, rowset: &dyn RowSet) -> std::result::Result<T, BoxedError> {
        self(rowset)
    }
}

/// Mapper that hands rows through unmapped, as raw cell values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughMapper;

impl RowMapper for PassThroughMapper {
    type Item = Vec<CellValue>;

    fn map_row(&self, rowset: &dyn RowSet) -> std::result::Result<Vec<CellValue>, BoxedError> {
        Ok(rowset.current_row().to_vec())
    }
}
