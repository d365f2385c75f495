//! Input resource abstraction and readiness checks.

use crate::document::ReadSeek;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

/// A locatable input the reader can check for readiness and open as a
/// seekable byte stream.
///
/// The traversal engine only consults `exists` and `is_readable` before
/// opening; the stream itself is passed opaquely to the document decoder.
pub trait Resource {
    /// Check whether the resource exists.
    fn exists(&self) -> bool;

    /// Check whether the resource can be read.
    fn is_readable(&self) -> bool;

    /// Human-readable identity used in diagnostics.
    fn description(&self) -> String;

    /// Open the resource as a seekable byte stream.
    fn open(&self) -> Result<Box<dyn ReadSeek>>;
}

/// A resource backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    /// Create a file resource from a path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileResource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_readable(&self) -> bool {
        File::open(&self.path).is_ok()
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }

    fn open(&self) -> Result<Box<dyn ReadSeek>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A resource held entirely in memory; always present and readable.
#[derive(Debug, Clone)]
pub struct BytesResource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesResource {
    /// Create a named in-memory resource.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        BytesResource {
            name: name.into(),
            bytes,
        }
    }
}

impl Resource for BytesResource {
    fn exists(&self) -> bool {
        true
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        format!("bytes [{}]", self.name)
    }

    fn open(&self) -> Result<Box<dyn ReadSeek>> {
        Ok(Box::new(Cursor::new(self.bytes.clone())))
    }
}
