//! Rowmill - a streaming row reader for multi-sheet spreadsheet documents
//!
//! This library converts a seekable spreadsheet resource into a lazily
//! produced, ordered sequence of typed records, the shape batch ingestion
//! pipelines pull from one item at a time. Rows are surfaced sheet by sheet
//! in document order; sheet boundaries, leading-row skipping, and positional
//! error context are handled by the reader so the pipeline only sees records.
//!
//! # Features
//!
//! - **Pull-based reading**: one `read()` call per record, crossing empty
//!   sheets and sheet boundaries transparently
//! - **Pluggable decoding**: any document format behind the
//!   [`DocumentDecoder`] trait; calamine-backed `.xlsx` support built in
//! - **Pluggable mapping**: rows become caller-defined records through a
//!   [`RowMapper`] (plain closures work too)
//! - **Precise diagnostics**: every mapping failure carries resource
//!   identity, sheet name, row ordinal, and the raw row contents
//! - **Strict or lenient inputs**: a missing resource is either a hard error
//!   or an explicit, observable empty run
//!
//! # Example - Reading an Excel workbook
//!
//! ```no_run
//! use rowmill::{PassThroughMapper, RowReader};
//!
//! # fn main() -> rowmill::Result<()> {
//! // Skip one header row per sheet, then pull raw rows
//! let mut reader = RowReader::xlsx("report.xlsx", PassThroughMapper).with_lines_to_skip(1);
//!
//! reader.open()?;
//! while let Some(row) = reader.read()? {
//!     println!("{:?}", row);
//! }
//! reader.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Mapping rows to records
//!
//! ```no_run
//! use rowmill::{BoxedError, RowReader, RowSet};
//!
//! struct Trade {
//!     symbol: String,
//!     quantity: i64,
//! }
//!
//! # fn main() -> rowmill::Result<()> {
//! let mapper = |rowset: &dyn RowSet| -> Result<Trade, BoxedError> {
//!     let row = rowset.current_row();
//!     Ok(Trade {
//!         symbol: row[0].as_str().ok_or("symbol must be text")?.to_string(),
//!         quantity: row[1].as_i64().ok_or("quantity must be numeric")?,
//!     })
//! };
//!
//! let mut reader = RowReader::xlsx("trades.xlsx", mapper).with_lines_to_skip(1);
//! reader.open()?;
//! while let Some(trade) = reader.read()? {
//!     println!("{} x{}", trade.symbol, trade.quantity);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - In-memory documents
//!
//! ```
//! use rowmill::{BytesResource, CellValue, MemoryDecoder, PassThroughMapper, RowReader, Sheet};
//!
//! # fn main() -> rowmill::Result<()> {
//! let sheets = vec![Sheet::new(
//!     "Sheet1",
//!     vec![vec![CellValue::from("a")], vec![CellValue::from("b")]],
//! )];
//!
//! let mut reader = RowReader::new(
//!     BytesResource::new("inline", Vec::new()),
//!     MemoryDecoder::new(sheets),
//!     PassThroughMapper,
//! );
//! reader.open()?;
//! assert_eq!(reader.read()?.unwrap()[0], CellValue::from("a"));
//! # Ok(())
//! # }
//! ```

/// Document decoding boundary: cell values, sheets, and decoder traits
pub mod document;
/// Unified error types
pub mod error;
/// The row reader and its collaborators
pub mod reader;

pub use document::{
    CellValue, DocumentDecoder, DocumentReader, MemoryDecoder, MemoryDocument, ReadSeek, Sheet,
};
#[cfg(feature = "xlsx")]
pub use document::{XlsxDecoder, XlsxDocument};
pub use error::{BoxedError, Error, Result, RowParseError};
pub use reader::{
    BytesResource, DefaultRowSet, DefaultRowSetFactory, FileResource, PassThroughMapper, Resource,
    RowMapper, RowReader, RowSet, RowSetFactory,
};
