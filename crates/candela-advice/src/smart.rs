//! Rule-based investment advice.

use candela_indicators::{IndicatorKind, IndicatorSnapshot};
use serde::Serialize;

/// RSI below this is oversold.
pub const OVERSOLD: f64 = 30.0;

/// RSI above this is overbought.
pub const OVERBOUGHT: f64 = 70.0;

/// Investment call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Oversold with MACD above its signal line.
    StrongBuy,
    /// Overbought; wait or sell.
    Sell,
    /// No clear signal.
    Wait,
}

impl Advice {
    /// Applies the rules to RSI and MACD readings.
    ///
    /// Buy when RSI is below [`OVERSOLD`] and MACD is above its signal,
    /// sell when RSI is above [`OVERBOUGHT`], wait otherwise.
    #[must_use]
    pub fn from_readings(rsi: f64, macd: f64, signal: f64) -> Self {
        if rsi < OVERSOLD && macd > signal {
            Self::StrongBuy
        } else if rsi > OVERBOUGHT {
            Self::Sell
        } else {
            Self::Wait
        }
    }

    /// Returns the advice as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrongBuy => "strong_buy",
            Self::Sell => "sell",
            Self::Wait => "wait",
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advice together with the readings it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmartAdvice {
    /// The call.
    pub advice: Advice,
    /// Latest RSI.
    pub rsi: f64,
    /// Latest MACD line value.
    pub macd: f64,
    /// Latest MACD signal value.
    pub signal: f64,
}

/// Derives advice from a snapshot. Missing readings count as 0.
#[must_use]
pub fn smart_advice(snapshot: &IndicatorSnapshot) -> SmartAdvice {
    let rsi = snapshot.scalar(IndicatorKind::Rsi).unwrap_or(0.0);
    let macd = snapshot.get(IndicatorKind::Macd);
    let line = macd.and_then(|value| value.field("macd")).unwrap_or(0.0);
    let signal = macd.and_then(|value| value.field("signal")).unwrap_or(0.0);

    SmartAdvice {
        advice: Advice::from_readings(rsi, line, signal),
        rsi,
        macd: line,
        signal,
    }
}
