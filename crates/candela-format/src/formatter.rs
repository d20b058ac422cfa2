//! Output format abstraction.

use candela_advice::{DcaPlan, SmartAdvice};
use candela_indicators::IndicatorSnapshot;
use candela_types::{Symbol, Timeframe};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Numbered plain-text report.
    #[default]
    Text,
    /// JSON object.
    Json,
}

impl OutputFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Unknown locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes an indicator snapshot for `symbol` on `timeframe`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_snapshot<W: Write + Send>(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        snapshot: &IndicatorSnapshot,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a DCA summary for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_dca<W: Write + Send>(
        &self,
        symbol: &Symbol,
        plan: &DcaPlan,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes investment advice for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_advice<W: Write + Send>(
        &self,
        symbol: &Symbol,
        advice: &SmartAdvice,
        writer: W,
    ) -> Result<(), FormatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in OutputFormat::all() {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), *format);
        }
    }
}
