//! Timeframe and coin listings.

use candela_lib::prelude::*;

/// List supported timeframes with their history and stride.
pub(crate) fn list_timeframes(locale: Locale) {
    println!("{:<8} {:<14} {:>6} {:>8}", "LABEL", "NAME", "DAYS", "STRIDE");
    println!("{}", "-".repeat(40));

    for timeframe in Timeframe::all() {
        println!(
            "{:<8} {:<14} {:>6} {:>8}",
            timeframe.as_str(),
            locale.timeframe_label(*timeframe),
            timeframe.days(),
            timeframe.stride()
        );
    }
}

/// List known coins with an optional search pattern.
pub(crate) fn list_coins(search: Option<&str>) {
    let registry = CoinRegistry::global();

    let coins = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.sorted(),
    };

    if coins.is_empty() {
        println!("No coins found.");
        return;
    }

    println!("{:<10} {:<28} {:<20}", "TICKER", "PROVIDER ID", "NAME");
    println!("{}", "-".repeat(60));

    for coin in &coins {
        println!(
            "{:<10} {:<28} {:<20}",
            coin.ticker(),
            coin.provider_id(),
            coin.name()
        );
    }

    println!("\nTotal: {} coins", coins.len());
}
