//! The ordered set of indicators an engine evaluates.

use crate::directional::{Adx, Aroon, Dmi, Ichimoku, ParabolicSar, PsarTrend};
use crate::levels::{Donchian, Fibonacci, Pivot, PriceChannels, SupportResistance};
use crate::moving_average::{Ema, HeikinAshi, Macd, Sma, Trix};
use crate::oscillator::{Cci, ElderRay, Momentum, Roc, Rsi, StochRsi, Stochastic, Ultimate, WilliamsR};
use crate::volatility::{Atr, Bollinger, Keltner, Supertrend};
use crate::volume::{Chaikin, Mfi, Obv, Vwap};
use crate::{Indicator, IndicatorConfig, IndicatorKind};

/// Indicators in evaluation order.
#[derive(Debug, Default)]
pub struct IndicatorRegistry {
    indicators: Vec<Box<dyn Indicator>>,
}

impl IndicatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indicators: Vec::new(),
        }
    }

    /// Builds the 33 standard indicators in report order.
    #[must_use]
    pub fn standard(config: &IndicatorConfig) -> Self {
        let mut registry = Self::new();
        registry
            .register(Sma::new(config.sma_period))
            .register(Ema::new(config.ema_period))
            .register(Rsi::new(config.rsi_period))
            .register(Macd::new(config.macd_fast, config.macd_slow, config.macd_signal))
            .register(Bollinger::new(config.bollinger_period, config.bollinger_std_dev))
            .register(Stochastic::new(
                config.stochastic_k,
                config.stochastic_slow,
                config.stochastic_d,
            ))
            .register(Ichimoku::new(config.ichimoku_tenkan, config.ichimoku_kijun))
            .register(Atr::new(config.atr_period))
            .register(Adx::new(config.adx_period))
            .register(Mfi::new(config.mfi_period))
            .register(ParabolicSar::new(config.sar_step, config.sar_max))
            .register(Cci::new(config.cci_period))
            .register(Momentum::new(config.momentum_period))
            .register(Vwap)
            .register(Roc::new(config.roc_period))
            .register(Trix::new(config.trix_period))
            .register(Obv)
            .register(Keltner::new(config.keltner_period, config.keltner_multiplier))
            .register(WilliamsR::new(config.williams_period))
            .register(Pivot)
            .register(SupportResistance)
            .register(Fibonacci::new(config.fibonacci_levels.clone()))
            .register(Dmi::new(config.dmi_period))
            .register(Chaikin)
            .register(ElderRay::new(config.elder_period))
            .register(Supertrend::new(config.supertrend_period))
            .register(Donchian::new(config.donchian_period))
            .register(Aroon::new(config.aroon_period))
            .register(Ultimate::new(config.ultimate_period))
            .register(StochRsi::new(config.stoch_rsi_period, config.stoch_rsi_k))
            .register(PsarTrend::new(config.sar_step, config.sar_max))
            .register(HeikinAshi)
            .register(PriceChannels::new(config.price_channel_period));
        registry
    }

    /// Appends an indicator. When evaluated, it replaces the value of any
    /// earlier indicator with the same kind.
    pub fn register<I: Indicator + 'static>(&mut self, indicator: I) -> &mut Self {
        self.indicators.push(Box::new(indicator));
        self
    }

    /// Iterates over the indicators in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Indicator>> {
        self.indicators.iter()
    }

    /// Returns the registered kinds in evaluation order.
    #[must_use]
    pub fn kinds(&self) -> Vec<IndicatorKind> {
        self.iter().map(|indicator| indicator.kind()).collect()
    }

    /// Returns the number of registered indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Returns true if no indicators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
