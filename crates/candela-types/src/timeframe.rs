//! Analysis timeframe definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Analysis timeframe.
///
/// Each timeframe fixes how many days of raw candles are requested upstream
/// and the stride used to downsample them. The stride is positional: the
/// provider is assumed to return roughly hourly candles, so keeping every
/// 4th candle approximates 4-hour buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    /// 15-minute analysis.
    #[serde(rename = "15m")]
    Minute15,
    /// 1-hour analysis.
    #[default]
    #[serde(rename = "1h")]
    Hour1,
    /// 4-hour analysis.
    #[serde(rename = "4h")]
    Hour4,
    /// Daily analysis.
    #[serde(rename = "1d")]
    Day1,
}

impl Timeframe {
    /// Returns the number of days of raw candles to request upstream.
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Minute15 | Self::Hour1 => 1,
            Self::Hour4 => 7,
            Self::Day1 => 30,
        }
    }

    /// Returns the default downsampling stride (keep every Nth raw candle).
    #[must_use]
    pub const fn stride(&self) -> usize {
        match self {
            Self::Hour1 => 1,
            Self::Minute15 | Self::Hour4 => 4,
            Self::Day1 => 24,
        }
    }

    /// Returns the timeframe as a string label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
        }
    }

    /// Returns all available timeframes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Minute15, Self::Hour1, Self::Hour4, Self::Day1]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "15m" | "m15" => Ok(Self::Minute15),
            "1h" | "h1" => Ok(Self::Hour1),
            "4h" | "h4" => Ok(Self::Hour4),
            "1d" | "d1" | "daily" => Ok(Self::Day1),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected one of: 15m, 1h, 4h, 1d",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}
