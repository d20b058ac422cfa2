//! Indicator windows and multipliers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by an invalid [`IndicatorConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A window length is zero.
    #[error("window '{0}' must be at least 1")]
    ZeroWindow(&'static str),

    /// A multiplier or step is not a positive finite number.
    #[error("parameter '{name}' must be positive, got {value}")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The MACD fast window is not shorter than the slow window.
    #[error("MACD fast window ({fast}) must be shorter than the slow window ({slow})")]
    MacdWindows {
        /// Fast EMA window.
        fast: usize,
        /// Slow EMA window.
        slow: usize,
    },
}

/// Windows used by the standard indicator set.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// config file only needs to name the windows it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// SMA window.
    pub sma_period: usize,
    /// EMA window.
    pub ema_period: usize,
    /// RSI window.
    pub rsi_period: usize,
    /// MACD fast EMA window.
    pub macd_fast: usize,
    /// MACD slow EMA window.
    pub macd_slow: usize,
    /// MACD signal EMA window.
    pub macd_signal: usize,
    /// Bollinger window.
    pub bollinger_period: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_std_dev: f64,
    /// Stochastic fast %K window.
    pub stochastic_k: usize,
    /// Stochastic slow %K smoothing.
    pub stochastic_slow: usize,
    /// Stochastic %D smoothing.
    pub stochastic_d: usize,
    /// Ichimoku tenkan window.
    pub ichimoku_tenkan: usize,
    /// Ichimoku kijun window.
    pub ichimoku_kijun: usize,
    /// ATR window.
    pub atr_period: usize,
    /// ADX window.
    pub adx_period: usize,
    /// MFI window.
    pub mfi_period: usize,
    /// Parabolic SAR acceleration step.
    pub sar_step: f64,
    /// Parabolic SAR maximum acceleration.
    pub sar_max: f64,
    /// CCI window.
    pub cci_period: usize,
    /// Momentum lag.
    pub momentum_period: usize,
    /// Rate of change lag.
    pub roc_period: usize,
    /// TRIX EMA window.
    pub trix_period: usize,
    /// Keltner EMA and ATR window.
    pub keltner_period: usize,
    /// Keltner ATR multiplier.
    pub keltner_multiplier: f64,
    /// Williams %R window.
    pub williams_period: usize,
    /// Fibonacci retracement ratios.
    pub fibonacci_levels: Vec<f64>,
    /// DMI window.
    pub dmi_period: usize,
    /// Elder ray EMA window.
    pub elder_period: usize,
    /// Supertrend ATR window.
    pub supertrend_period: usize,
    /// Donchian window.
    pub donchian_period: usize,
    /// Aroon window.
    pub aroon_period: usize,
    /// Trailing window of the mean-close "ultimate" value.
    pub ultimate_period: usize,
    /// RSI window feeding the stochastic RSI.
    pub stoch_rsi_period: usize,
    /// Stochastic window applied to the RSI line.
    pub stoch_rsi_k: usize,
    /// Price channel window.
    pub price_channel_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            stochastic_k: 14,
            stochastic_slow: 3,
            stochastic_d: 3,
            ichimoku_tenkan: 9,
            ichimoku_kijun: 26,
            atr_period: 14,
            adx_period: 14,
            mfi_period: 14,
            sar_step: 0.02,
            sar_max: 0.2,
            cci_period: 20,
            momentum_period: 10,
            roc_period: 12,
            trix_period: 15,
            keltner_period: 20,
            keltner_multiplier: 2.0,
            williams_period: 14,
            fibonacci_levels: vec![0.0, 0.236, 0.382, 0.5, 0.618, 1.0],
            dmi_period: 14,
            elder_period: 13,
            supertrend_period: 10,
            donchian_period: 20,
            aroon_period: 25,
            ultimate_period: 7,
            stoch_rsi_period: 14,
            stoch_rsi_k: 14,
            price_channel_period: 20,
        }
    }
}

impl IndicatorConfig {
    /// Checks that every window is non-zero and every multiplier positive.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("sma_period", self.sma_period),
            ("ema_period", self.ema_period),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
            ("stochastic_k", self.stochastic_k),
            ("stochastic_slow", self.stochastic_slow),
            ("stochastic_d", self.stochastic_d),
            ("ichimoku_tenkan", self.ichimoku_tenkan),
            ("ichimoku_kijun", self.ichimoku_kijun),
            ("atr_period", self.atr_period),
            ("adx_period", self.adx_period),
            ("mfi_period", self.mfi_period),
            ("cci_period", self.cci_period),
            ("momentum_period", self.momentum_period),
            ("roc_period", self.roc_period),
            ("trix_period", self.trix_period),
            ("keltner_period", self.keltner_period),
            ("williams_period", self.williams_period),
            ("dmi_period", self.dmi_period),
            ("elder_period", self.elder_period),
            ("supertrend_period", self.supertrend_period),
            ("donchian_period", self.donchian_period),
            ("aroon_period", self.aroon_period),
            ("ultimate_period", self.ultimate_period),
            ("stoch_rsi_period", self.stoch_rsi_period),
            ("stoch_rsi_k", self.stoch_rsi_k),
            ("price_channel_period", self.price_channel_period),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, window)| *window == 0) {
            return Err(ConfigError::ZeroWindow(name));
        }

        let factors = [
            ("bollinger_std_dev", self.bollinger_std_dev),
            ("sar_step", self.sar_step),
            ("sar_max", self.sar_max),
            ("keltner_multiplier", self.keltner_multiplier),
        ];
        if let Some(&(name, value)) = factors
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::NonPositive { name, value });
        }

        if self.macd_fast >= self.macd_slow {
            return Err(ConfigError::MacdWindows {
                fast: self.macd_fast,
                slow: self.macd_slow,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(IndicatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: IndicatorConfig =
            serde_json::from_str(r#"{"sma_period": 50, "sar_max": 0.3}"#).unwrap();
        assert_eq!(config.sma_period, 50);
        assert_eq!(config.ema_period, 20);
        assert_eq!(config.fibonacci_levels.len(), 6);
        assert!((config.sar_max - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = IndicatorConfig {
            aroon_period: 0,
            ..IndicatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWindow("aroon_period")));
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        let config = IndicatorConfig {
            keltner_multiplier: -1.0,
            ..IndicatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "keltner_multiplier",
                ..
            })
        ));
    }

    #[test]
    fn test_macd_windows_rejected() {
        let config = IndicatorConfig {
            macd_fast: 26,
            macd_slow: 12,
            ..IndicatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MacdWindows { fast: 26, slow: 12 })
        );
    }
}
