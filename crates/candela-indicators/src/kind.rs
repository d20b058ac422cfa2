//! Fixed indicator names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The 33 indicators of a snapshot, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Relative strength index.
    Rsi,
    /// Moving average convergence/divergence.
    Macd,
    /// Bollinger bands.
    Bollinger,
    /// Slow stochastic oscillator.
    Stochastic,
    /// Ichimoku tenkan/kijun lines.
    Ichimoku,
    /// Average true range.
    Atr,
    /// Average directional index.
    Adx,
    /// Money flow index.
    Mfi,
    /// Parabolic stop and reverse.
    ParabolicSar,
    /// Commodity channel index.
    Cci,
    /// Price momentum.
    Momentum,
    /// Volume-weighted average price.
    Vwap,
    /// Rate of change.
    Roc,
    /// Triple-smoothed EMA rate of change.
    Trix,
    /// On-balance volume.
    Obv,
    /// Keltner channel.
    Keltner,
    /// Williams %R.
    WilliamsR,
    /// Classic floor pivot.
    Pivot,
    /// Support and resistance extremes.
    SupportResistance,
    /// Fibonacci retracement levels.
    Fibonacci,
    /// Directional movement index (DX).
    Dmi,
    /// Chaikin accumulation/distribution line.
    Chaikin,
    /// Elder ray bull/bear power.
    #[serde(rename = "elderray")]
    ElderRay,
    /// Supertrend.
    Supertrend,
    /// Donchian channel.
    Donchian,
    /// Aroon up/down.
    Aroon,
    /// Trailing mean close.
    Ultimate,
    /// Stochastic RSI.
    StochRsi,
    /// Parabolic SAR trend direction.
    PsarTrend,
    /// Heikin-Ashi close.
    HeikinAshi,
    /// Price channels.
    PriceChannels,
}

impl IndicatorKind {
    /// Returns the snapshot key for this indicator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
            Self::Bollinger => "bollinger",
            Self::Stochastic => "stochastic",
            Self::Ichimoku => "ichimoku",
            Self::Atr => "atr",
            Self::Adx => "adx",
            Self::Mfi => "mfi",
            Self::ParabolicSar => "parabolic_sar",
            Self::Cci => "cci",
            Self::Momentum => "momentum",
            Self::Vwap => "vwap",
            Self::Roc => "roc",
            Self::Trix => "trix",
            Self::Obv => "obv",
            Self::Keltner => "keltner",
            Self::WilliamsR => "williams_r",
            Self::Pivot => "pivot",
            Self::SupportResistance => "support_resistance",
            Self::Fibonacci => "fibonacci",
            Self::Dmi => "dmi",
            Self::Chaikin => "chaikin",
            Self::ElderRay => "elderray",
            Self::Supertrend => "supertrend",
            Self::Donchian => "donchian",
            Self::Aroon => "aroon",
            Self::Ultimate => "ultimate",
            Self::StochRsi => "stoch_rsi",
            Self::PsarTrend => "psar_trend",
            Self::HeikinAshi => "heikin_ashi",
            Self::PriceChannels => "price_channels",
        }
    }

    /// Returns all indicators in report order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sma,
            Self::Ema,
            Self::Rsi,
            Self::Macd,
            Self::Bollinger,
            Self::Stochastic,
            Self::Ichimoku,
            Self::Atr,
            Self::Adx,
            Self::Mfi,
            Self::ParabolicSar,
            Self::Cci,
            Self::Momentum,
            Self::Vwap,
            Self::Roc,
            Self::Trix,
            Self::Obv,
            Self::Keltner,
            Self::WilliamsR,
            Self::Pivot,
            Self::SupportResistance,
            Self::Fibonacci,
            Self::Dmi,
            Self::Chaikin,
            Self::ElderRay,
            Self::Supertrend,
            Self::Donchian,
            Self::Aroon,
            Self::Ultimate,
            Self::StochRsi,
            Self::PsarTrend,
            Self::HeikinAshi,
            Self::PriceChannels,
        ]
    }

    /// Returns the 1-based position of this indicator in the report.
    #[must_use]
    pub fn position(&self) -> usize {
        Self::all()
            .iter()
            .position(|kind| kind == self)
            .map_or(0, |index| index + 1)
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = UnknownIndicator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == key)
            .ok_or(UnknownIndicator(key))
    }
}

/// Error returned when parsing an unknown indicator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator '{0}'")]
pub struct UnknownIndicator(String);
