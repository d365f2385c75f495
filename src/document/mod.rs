//! Document decoding boundary.
//!
//! The traversal engine never inspects a file format itself; it consumes
//! documents through the [`DocumentDecoder`] / [`DocumentReader`] traits and
//! receives sheets as owned [`Sheet`] snapshots. Concrete decoders plug in
//! behind that boundary:
//!
//! - [`MemoryDecoder`] serves sheets built in memory (always available).
//! - [`XlsxDecoder`] decodes Excel workbooks through calamine (feature
//!   `xlsx`, enabled by default).

// Submodule declarations
pub mod memory;
pub mod traits;
pub mod types;
#[cfg(feature = "xlsx")]
pub mod xlsx;

// Re-exports
pub use memory::{MemoryDecoder, MemoryDocument};
pub use traits::{DocumentDecoder, DocumentReader, ReadSeek};
pub use types::{CellValue, Sheet};
#[cfg(feature = "xlsx")]
pub use xlsx::{XlsxDecoder, XlsxDocument};
