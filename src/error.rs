//! Error types for quire operations.

use thiserror::Error;

use crate::export::Format;
use crate::model::FieldKind;

/// Errors that can occur while building or emitting a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Style not found: {0}")]
    StyleNotFound(String),

    #[error("Style {name} is not a {expected} style")]
    StyleKindMismatch { name: String, expected: &'static str },

    #[error("Field {field} is not supported by {format}")]
    UnsupportedField { field: FieldKind, format: Format },

    #[error("Unknown field type: {0}")]
    InvalidField(String),

    #[error("Invalid paper size: {0}")]
    InvalidPaperSize(String),

    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),

    #[error("Invalid tab position: {0}")]
    InvalidTabPosition(String),

    #[error("Invalid section options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, Error>;
