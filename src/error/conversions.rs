//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from backend
//! decoder error types to the unified Error type.

#[cfg(feature = "xlsx")]
use super::types::Error;

#[cfg(feature = "xlsx")]
impl From<calamine::XlsxError> for Error {
    fn from(err: calamine::XlsxError) -> Self {
        Error::Decode(err.to_string())
    }
}
