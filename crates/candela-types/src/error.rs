//! Error types for candela.

use thiserror::Error;

use crate::{SymbolParseError, TimeframeParseError};

/// Result type alias for candela operations.
pub type Result<T> = std::result::Result<T, CandelaError>;

/// Errors that can occur while retrieving market data and producing a report.
#[derive(Error, Debug)]
pub enum CandelaError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status.
    #[error("Failed to fetch data: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Invalid payload from the provider.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid trading pair.
    #[error(transparent)]
    Symbol(#[from] SymbolParseError),

    /// Invalid timeframe label.
    #[error(transparent)]
    Timeframe(#[from] TimeframeParseError),

    /// Input vectors disagree in length.
    #[error("Series error: {0}")]
    Series(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
