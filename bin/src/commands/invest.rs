//! DCA and smart-advice command implementations.
//!
//! Both always work on daily candles.

use super::Session;
use crate::display::emit;
use anyhow::Result;
use candela_lib::DEFAULT_INVESTMENT;
use candela_lib::prelude::*;

/// Timeframe used by the investment services.
const INVEST_TIMEFRAME: Timeframe = Timeframe::Day1;

/// Print the DCA summary for `symbol`.
pub(crate) async fn dca(session: &Session, symbol: &Symbol) -> Result<()> {
    let series = session.series(symbol, INVEST_TIMEFRAME).await?;
    let plan = calculate_dca(&series, DEFAULT_INVESTMENT);
    emit(&[session.output.dca(symbol, &plan)?])
}

/// Print buy/sell/wait advice for `symbol`.
pub(crate) async fn smart(session: &Session, symbol: &Symbol) -> Result<()> {
    let series = session.series(symbol, INVEST_TIMEFRAME).await?;
    let snapshot = session.engine.compute(&series)?;
    let advice = smart_advice(&snapshot);
    tracing::debug!(rsi = advice.rsi, macd = advice.macd, signal = advice.signal, "Advice readings");
    emit(&[session.output.advice(symbol, &advice)?])
}
