//! The open/read/close entry point driven by batch pipelines.

use super::cursor::{SheetCursor, SheetPolicy};
use super::mapper::RowMapper;
use super::resource::Resource;
use super::rowset::{DefaultRowSetFactory, RowSet, RowSetFactory};
use crate::document::DocumentDecoder;
use crate::error::{Error, Result, RowParseError};
use tracing::{debug, warn};

#[cfg(feature = "xlsx")]
use super::resource::FileResource;
#[cfg(feature = "xlsx")]
use crate::document::XlsxDecoder;
#[cfg(feature = "xlsx")]
use std::path::Path;

/// Sequential row reader over a multi-sheet document.
///
/// A reader is assembled from a [`Resource`], a
/// [`DocumentDecoder`](crate::document::DocumentDecoder), and a
/// [`RowMapper`], then driven one record at a time through
/// [`open`](RowReader::open) / [`read`](RowReader::read) /
/// [`close`](RowReader::close). Sheet boundaries are crossed transparently:
/// `read` keeps yielding rows in document order until every sheet is
/// exhausted.
///
/// # Examples
///
/// ```
/// use rowmill::{BytesResource, CellValue, MemoryDecoder, PassThroughMapper, RowReader, Sheet};
///
/// # fn main() -> rowmill::Result<()> {
/// let sheets = vec![Sheet::new(
///     "Sheet1",
///     vec![
///         vec![CellValue::Int(1), CellValue::from("first")],
///         vec![CellValue::Int(2), CellValue::from("second")],
///     ],
/// )];
///
/// let mut reader = RowReader::new(
///     BytesResource::new("inline", Vec::new()),
///     MemoryDecoder::new(sheets),
///     PassThroughMapper,
/// );
///
/// reader.open()?;
/// while let Some(row) = reader.read()? {
///     println!("{:?}", row);
/// }
/// reader.close();
/// # Ok(())
/// # }
/// ```
pub struct RowReader<T> {
    resource: Box<dyn Resource>,
    decoder: Box<dyn DocumentDecoder>,
    mapper: Box<dyn RowMapper<Item = T>>,
    strict: bool,
    policy: SheetPolicy,
    cursor: Option<SheetCursor>,
    no_input: bool,
}

impl<T> RowReader<T> {
    /// Create a reader over a resource, decoder, and row mapper.
    ///
    /// The reader starts unopened; call [`open`](RowReader::open) before
    /// reading.
    pub fn new(
        resource: impl Resource + 'static,
        decoder: impl DocumentDecoder + 'static,
        mapper: impl RowMapper<Item = T> + 'static,
    ) -> Self {
        RowReader {
            resource: Box::new(resource),
            decoder: Box::new(decoder),
            mapper: Box::new(mapper),
            strict: true,
            policy: SheetPolicy {
                rowset_factory: Box::new(DefaultRowSetFactory),
                lines_to_skip: 0,
                skip_callback: None,
            },
            cursor: None,
            no_input: false,
        }
    }

    /// Set the number of leading rows to skip on entry to every sheet.
    pub fn with_lines_to_skip(mut self, lines_to_skip: usize) -> Self {
        self.policy.lines_to_skip = lines_to_skip;
        self
    }

    /// Register an observer invoked once per skipped leading row.
    pub fn with_skip_callback(mut self, callback: impl FnMut(&dyn RowSet) + 'static) -> Self {
        self.policy.skip_callback = Some(Box::new(callback));
        self
    }

    /// Set the resource-absence policy: strict (the default) fails `open`
    /// when the resource is missing or unreadable, lenient proceeds with no
    /// input.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the strategy used to build the row view over each sheet.
    pub fn with_rowset_factory(mut self, factory: impl RowSetFactory + 'static) -> Self {
        self.policy.rowset_factory = Box::new(factory);
        self
    }

    /// Validate the resource, decode the document, and position the
    /// traversal on the first sheet.
    ///
    /// In lenient mode a missing or unreadable resource is soft-skipped: the
    /// call succeeds, every subsequent [`read`](RowReader::read) returns
    /// `Ok(None)`, and [`input_available`](RowReader::input_available) turns
    /// false. The decoder is never invoked in that case.
    pub fn open(&mut self) -> Result<()> {
        self.cursor = None;
        self.no_input = false;
        let description = self.resource.description();
        if !self.resource.exists() {
            if self.strict {
                return Err(Error::ResourceMissing(description));
            }
            warn!(
                resource = description.as_str(),
                "input resource does not exist, reader will produce no rows"
            );
            self.no_input = true;
            return Ok(());
        }
        if !self.resource.is_readable() {
            if self.strict {
                return Err(Error::ResourceUnreadable(description));
            }
            warn!(
                resource = description.as_str(),
                "input resource is not readable, reader will produce no rows"
            );
            self.no_input = true;
            return Ok(());
        }
        let input = self.resource.open()?;
        let document = self.decoder.open(input)?;
        debug!(
            resource = description.as_str(),
            sheets = document.sheet_count(),
            "opened document"
        );
        self.cursor = Some(SheetCursor::open(document, &mut self.policy)?);
        Ok(())
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` once all sheets are exhausted (and on every call
    /// after that), and when the reader was never successfully opened. A
    /// mapping failure surfaces as [`Error::RowParse`] without ending the
    /// session; the next call continues with the following row.
    pub fn read(&mut self) -> Result<Option<T>> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Ok(None);
        };
        let Some(rowset) = cursor.advance(&mut self.policy)? else {
            // exhausted: release the document handle right away
            self.cursor = None;
            return Ok(None);
        };
        match self.mapper.map_row(rowset) {
            Ok(record) => Ok(Some(record)),
            Err(source) => Err(Error::RowParse(RowParseError {
                resource: self.resource.description(),
                sheet_name: rowset.sheet_name().to_string(),
                row_index: rowset.row_index(),
                row: rowset.current_row().to_vec(),
                source,
            })),
        }
    }

    /// Release the document handle and reset to the unopened state.
    pub fn close(&mut self) {
        self.cursor = None;
        self.no_input = false;
    }

    /// Whether the last [`open`](RowReader::open) found input to read.
    ///
    /// False only after a lenient-mode open soft-skipped a missing or
    /// unreadable resource; an empty-but-present document leaves this true.
    pub fn input_available(&self) -> bool {
        !self.no_input
    }
}

#[cfg(feature = "xlsx")]
impl<T> RowReader<T> {
    /// Create a reader over an `.xlsx` workbook on disk.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rowmill::{PassThroughMapper, RowReader};
    ///
    /// # fn main() -> rowmill::Result<()> {
    /// let mut reader = RowReader::xlsx("data.xlsx", PassThroughMapper).with_lines_to_skip(1);
    /// reader.open()?;
    /// while let Some(row) = reader.read()? {
    ///     println!("{:?}", row);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn xlsx(path: impl AsRef<Path>, mapper: impl RowMapper<Item = T> + 'static) -> Self {
        RowReader::new(FileResource::new(path), XlsxDecoder, mapper)
    }
}
