//! Numbered plain-text reports.

use candela_advice::{DcaPlan, SmartAdvice};
use candela_indicators::{IndicatorKind, IndicatorSnapshot, IndicatorValue};
use candela_types::{Symbol, Timeframe};
use std::io::Write;

use crate::{FormatError, Formatter, Locale};

/// Which part of an indicator value a report line shows.
#[derive(Debug, Clone, Copy)]
enum Reading {
    Latest,
    Field(&'static str),
    Level(usize),
    Trend,
    Direction,
}

/// Label and reading of a report line.
const fn report_line(kind: IndicatorKind) -> (&'static str, Reading) {
    match kind {
        IndicatorKind::Sma => ("SMA", Reading::Latest),
        IndicatorKind::Ema => ("EMA", Reading::Latest),
        IndicatorKind::Rsi => ("RSI", Reading::Latest),
        IndicatorKind::Macd => ("MACD", Reading::Field("macd")),
        IndicatorKind::Bollinger => ("Bollinger Upper", Reading::Field("upper")),
        IndicatorKind::Stochastic => ("Stochastic %K", Reading::Field("k")),
        IndicatorKind::Ichimoku => ("Ichimoku Tenkan", Reading::Field("tenkan")),
        IndicatorKind::Atr => ("ATR", Reading::Latest),
        IndicatorKind::Adx => ("ADX", Reading::Latest),
        IndicatorKind::Mfi => ("MFI", Reading::Latest),
        IndicatorKind::ParabolicSar => ("Parabolic SAR", Reading::Latest),
        IndicatorKind::Cci => ("CCI", Reading::Latest),
        IndicatorKind::Momentum => ("Momentum", Reading::Latest),
        IndicatorKind::Vwap => ("VWAP", Reading::Latest),
        IndicatorKind::Roc => ("ROC", Reading::Latest),
        IndicatorKind::Trix => ("TRIX", Reading::Latest),
        IndicatorKind::Obv => ("OBV", Reading::Latest),
        IndicatorKind::Keltner => ("Keltner Upper", Reading::Field("upper")),
        IndicatorKind::WilliamsR => ("Williams %R", Reading::Latest),
        IndicatorKind::Pivot => ("Pivot R1", Reading::Field("r1")),
        IndicatorKind::SupportResistance => ("Support", Reading::Field("support")),
        IndicatorKind::Fibonacci => ("Fibonacci 0.618", Reading::Level(4)),
        IndicatorKind::Dmi => ("DMI +DI", Reading::Latest),
        IndicatorKind::Chaikin => ("Chaikin", Reading::Latest),
        IndicatorKind::ElderRay => ("Elder Ray Bull", Reading::Field("bull_power")),
        IndicatorKind::Supertrend => ("Supertrend", Reading::Trend),
        IndicatorKind::Donchian => ("Donchian Upper", Reading::Field("upper")),
        IndicatorKind::Aroon => ("Aroon Up", Reading::Field("up")),
        IndicatorKind::Ultimate => ("Ultimate", Reading::Latest),
        IndicatorKind::StochRsi => ("Stoch RSI", Reading::Latest),
        IndicatorKind::PsarTrend => ("PSAR Trend", Reading::Direction),
        IndicatorKind::HeikinAshi => ("Heikin Ashi Close", Reading::Latest),
        IndicatorKind::PriceChannels => ("Price Channel Upper", Reading::Field("upper")),
    }
}

/// Returns the report label of an indicator.
#[must_use]
pub const fn report_label(kind: IndicatorKind) -> &'static str {
    report_line(kind).0
}

/// Formats a number with two decimals, or `N/A` when missing or non-finite.
fn number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "N/A".to_string(),
    }
}

fn render(reading: Reading, value: Option<&IndicatorValue>) -> String {
    match reading {
        Reading::Latest => number(value.and_then(IndicatorValue::latest)),
        Reading::Field(name) => number(value.and_then(|v| v.field(name))),
        Reading::Level(index) => number(
            value
                .and_then(IndicatorValue::as_levels)
                .and_then(|levels| levels.get(index).copied()),
        ),
        Reading::Trend => match value {
            Some(IndicatorValue::Trend { value, direction }) => {
                format!("{} ({direction})", number(Some(*value)))
            }
            _ => "N/A".to_string(),
        },
        Reading::Direction => value
            .and_then(IndicatorValue::direction)
            .map_or_else(|| "N/A".to_string(), |d| d.to_string()),
    }
}

/// Plain-text formatter.
///
/// Snapshot reports are a header followed by one numbered line per standard
/// indicator, e.g. `1. SMA: 123.45`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    locale: Locale,
}

impl TextFormatter {
    /// Creates a formatter for the given locale.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

impl Formatter for TextFormatter {
    fn write_snapshot<W: Write + Send>(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        snapshot: &IndicatorSnapshot,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", self.locale.analysis_header(symbol, timeframe))?;
        for kind in IndicatorKind::all() {
            let (label, reading) = report_line(*kind);
            let rendered = render(reading, snapshot.get(*kind));
            writeln!(writer, "{}. {label}: {rendered}", kind.position())?;
        }
        Ok(())
    }

    fn write_dca<W: Write + Send>(
        &self,
        symbol: &Symbol,
        plan: &DcaPlan,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", self.locale.dca_header(symbol))?;
        writeln!(writer, "{}", self.locale.dca_average(plan.avg_price, symbol.quote()))?;
        writeln!(
            writer,
            "{}",
            self.locale
                .dca_total(plan.total_coins, plan.investment, symbol.quote())
        )?;
        Ok(())
    }

    fn write_advice<W: Write + Send>(
        &self,
        symbol: &Symbol,
        advice: &SmartAdvice,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", self.locale.advice_header(symbol))?;
        writeln!(writer, "{}", self.locale.advice(advice.advice))?;
        Ok(())
    }
}
