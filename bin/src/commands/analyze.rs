//! Analyze command implementation.
//!
//! Fetches candles for a pair and prints its indicator report.

use super::Session;
use crate::display::emit;
use anyhow::Result;
use candela_lib::prelude::*;

/// Print the indicator report for `symbol` on `timeframe`.
pub(crate) async fn analyze(session: &Session, symbol: &Symbol, timeframe: Timeframe) -> Result<()> {
    let series = session.series(symbol, timeframe).await?;
    let snapshot = session.engine.compute(&series)?;
    tracing::debug!(
        symbol = %symbol,
        points = series.len(),
        indicators = snapshot.len(),
        "Computed snapshot"
    );
    emit(&[session.output.snapshot(symbol, timeframe, &snapshot)?])
}
