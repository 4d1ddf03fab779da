//! Crate error type
//!
//! Building an [`Orders`](crate::domain::Orders) collection never fails; errors
//! only occur at the edges: parsing a sort type from text, or loading a captured
//! exchange page from disk.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersError {
    /// Sort type text matched neither ID nor timestamp sorting
    #[error("unknown order sort type: '{0}'")]
    UnknownSortType(String),

    /// Input format text is not one of the supported encodings
    #[error("unknown page format: '{0}'")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode decode error: {0}")]
    BincodeDecode(#[from] bincode::error::DecodeError),

    #[error("bincode encode error: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),
}

pub type Result<T> = std::result::Result<T, OrdersError>;
