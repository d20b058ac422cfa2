//! Coin metadata for the market data provider.

use serde::{Deserialize, Serialize};

/// A coin known to the market data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Exchange ticker (e.g., "BTC").
    ticker: String,
    /// Provider coin identifier used in request URLs (e.g., "bitcoin").
    provider_id: String,
    /// Human-readable name (e.g., "Bitcoin").
    name: String,
}

impl Coin {
    /// Creates a new coin entry.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        provider_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            provider_id: provider_id.into(),
            name: name.into(),
        }
    }

    /// Returns the exchange ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the provider coin identifier.
    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
