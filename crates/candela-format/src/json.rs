//! JSON output format.

use candela_advice::{DcaPlan, SmartAdvice};
use candela_indicators::IndicatorSnapshot;
use candela_types::{Symbol, Timeframe};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    symbol: &'a Symbol,
    timeframe: Timeframe,
    indicators: &'a IndicatorSnapshot,
}

#[derive(Serialize)]
struct DcaDocument<'a> {
    symbol: &'a Symbol,
    #[serde(flatten)]
    plan: &'a DcaPlan,
}

#[derive(Serialize)]
struct AdviceDocument<'a> {
    symbol: &'a Symbol,
    #[serde(flatten)]
    advice: &'a SmartAdvice,
}

/// JSON formatter.
///
/// Every document is one object followed by a newline. Snapshot indicators
/// keep report order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_document<W: Write, T: Serialize>(
        &self,
        document: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, document)?;
        } else {
            serde_json::to_writer(&mut writer, document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_snapshot<W: Write + Send>(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        snapshot: &IndicatorSnapshot,
        writer: W,
    ) -> Result<(), FormatError> {
        let document = SnapshotDocument {
            symbol,
            timeframe,
            indicators: snapshot,
        };
        self.write_document(&document, writer)
    }

    fn write_dca<W: Write + Send>(
        &self,
        symbol: &Symbol,
        plan: &DcaPlan,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_document(&DcaDocument { symbol, plan }, writer)
    }

    fn write_advice<W: Write + Send>(
        &self,
        symbol: &Symbol,
        advice: &SmartAdvice,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_document(&AdviceDocument { symbol, advice }, writer)
    }
}
