//! Interactive service menu.

use super::{Session, analyze, invest};
use anyhow::{Context, Result};
use candela_lib::prelude::*;
use inquire::Select;

/// Prompt for a service (and a timeframe for technical analysis), then run it.
pub(crate) async fn menu(session: &Session, symbol: &Symbol) -> Result<()> {
    let locale = session.locale;

    let service = Select::new(locale.menu_prompt(), locale.menu_services().to_vec())
        .raw_prompt()
        .context("Service selection cancelled")?;

    match service.index {
        0 => {
            let timeframes = Timeframe::all();
            let labels = timeframes
                .iter()
                .map(|tf| locale.timeframe_label(*tf))
                .collect();
            let choice = Select::new(locale.timeframe_prompt(), labels)
                .raw_prompt()
                .context("Timeframe selection cancelled")?;
            let timeframe = timeframes
                .get(choice.index)
                .copied()
                .context("Unknown timeframe selection")?;
            analyze::analyze(session, symbol, timeframe).await
        }
        1 => invest::dca(session, symbol).await,
        _ => invest::smart(session, symbol).await,
    }
}
