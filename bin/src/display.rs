//! Display utilities and output formatting for the candela CLI.

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Output format of reports.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Language of text reports and error lines.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum LocaleArg {
    En,
    Ar,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::En,
            LocaleArg::Ar => Self::Ar,
        }
    }
}

/// The selected formatter.
///
/// Reports are rendered to a buffer first so a failure never leaves partial
/// output on stdout.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Output {
    Text(TextFormatter),
    Json(JsonFormatter),
}

impl Output {
    pub(crate) const fn new(format: Format, locale: Locale, pretty: bool) -> Self {
        match format {
            Format::Text => Self::Text(TextFormatter::new(locale)),
            Format::Json => Self::Json(JsonFormatter::new().with_pretty(pretty)),
        }
    }

    pub(crate) fn snapshot(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        snapshot: &IndicatorSnapshot,
    ) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        match self {
            Self::Text(f) => f.write_snapshot(symbol, timeframe, snapshot, &mut buffer)?,
            Self::Json(f) => f.write_snapshot(symbol, timeframe, snapshot, &mut buffer)?,
        }
        Ok(buffer)
    }

    pub(crate) fn dca(&self, symbol: &Symbol, plan: &DcaPlan) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        match self {
            Self::Text(f) => f.write_dca(symbol, plan, &mut buffer)?,
            Self::Json(f) => f.write_dca(symbol, plan, &mut buffer)?,
        }
        Ok(buffer)
    }

    pub(crate) fn advice(&self, symbol: &Symbol, advice: &SmartAdvice) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        match self {
            Self::Text(f) => f.write_advice(symbol, advice, &mut buffer)?,
            Self::Json(f) => f.write_advice(symbol, advice, &mut buffer)?,
        }
        Ok(buffer)
    }
}

/// Writes rendered reports to stdout.
pub(crate) fn emit(reports: &[Vec<u8>]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for report in reports {
        stdout.write_all(report)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Creates a spinner on stderr, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Loads indicator windows from a JSON file. Missing fields keep defaults.
pub(crate) fn load_config(path: &Path) -> Result<IndicatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: IndicatorConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
