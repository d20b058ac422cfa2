//! JSON candle parsing.

use candela_types::Candle;
use thiserror::Error;

/// Errors that can occur during candle parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not a JSON array of number arrays.
    #[error("Malformed candle payload: {0}")]
    Malformed(String),

    /// A row does not have exactly five fields.
    #[error("Candle row {row} has {len} fields (expected 5)")]
    Arity {
        /// Index of the offending row.
        row: usize,
        /// Number of fields found.
        len: usize,
    },

    /// A row's timestamp is outside the representable range.
    #[error("Candle row {row} has an invalid timestamp")]
    Timestamp {
        /// Index of the offending row.
        row: usize,
    },
}

/// Parses a provider response body into candles.
///
/// The body is a JSON array of `[timestamp_ms, open, high, low, close]`
/// arrays. Order is preserved.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON of that shape, or any row
/// has a field count other than five.
///
/// # Example
///
/// ```
/// use candela_fetch::parse_candles;
///
/// let candles = parse_candles(b"[[1700000000000, 1.0, 2.0, 0.5, 1.5]]").unwrap();
/// assert_eq!(candles.len(), 1);
/// assert_eq!(candles[0].close, 1.5);
/// ```
pub fn parse_candles(data: &[u8]) -> Result<Vec<Candle>, ParseError> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_slice(data).map_err(|e| ParseError::Malformed(e.to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(row, fields)| parse_row(row, fields))
        .collect()
}

fn parse_row(row: usize, fields: &[f64]) -> Result<Candle, ParseError> {
    let &[timestamp, open, high, low, close] = fields else {
        return Err(ParseError::Arity {
            row,
            len: fields.len(),
        });
    };
    if !timestamp.is_finite() {
        return Err(ParseError::Timestamp { row });
    }
    Candle::from_millis(timestamp as i64, open, high, low, close)
        .ok_or(ParseError::Timestamp { row })
}
