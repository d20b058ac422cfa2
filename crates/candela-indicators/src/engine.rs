//! Evaluates a registry against a series.

use candela_series::{OhlcSeries, SeriesError};

use crate::{ConfigError, IndicatorConfig, IndicatorRegistry, IndicatorSnapshot};

/// Computes indicator snapshots.
///
/// # Example
///
/// ```
/// use candela_indicators::{IndicatorEngine, IndicatorConfig, IndicatorKind};
/// use candela_series::OhlcSeries;
///
/// let engine = IndicatorEngine::new(&IndicatorConfig::default()).unwrap();
/// let snapshot = engine.compute(&OhlcSeries::new()).unwrap();
/// assert_eq!(snapshot.len(), 33);
/// assert_eq!(snapshot.scalar(IndicatorKind::Sma), Some(0.0));
/// ```
#[derive(Debug, Default)]
pub struct IndicatorEngine {
    registry: IndicatorRegistry,
}

impl IndicatorEngine {
    /// Creates an engine over the standard indicators.
    ///
    /// # Errors
    ///
    /// Returns the first invalid window or multiplier in `config`.
    pub fn new(config: &IndicatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_registry(IndicatorRegistry::standard(config)))
    }

    /// Creates an engine over a custom registry.
    #[must_use]
    pub const fn with_registry(registry: IndicatorRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    /// Returns a mutable reference to the registry.
    pub fn registry_mut(&mut self) -> &mut IndicatorRegistry {
        &mut self.registry
    }

    /// Computes every registered indicator over `series`.
    ///
    /// Indicators whose minimum history exceeds the series length get their
    /// neutral default. Non-finite results are replaced by 0.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the series columns differ
    /// in length.
    pub fn compute(&self, series: &OhlcSeries) -> Result<IndicatorSnapshot, SeriesError> {
        series.validate()?;

        let mut snapshot = IndicatorSnapshot::new();
        for indicator in self.registry.iter() {
            let kind = indicator.kind();
            let value = if series.len() < indicator.min_periods() {
                tracing::trace!(
                    indicator = %kind,
                    bars = series.len(),
                    needed = indicator.min_periods(),
                    "insufficient history, using neutral value"
                );
                indicator.neutral(series)
            } else {
                let value = indicator.compute(series);
                if !value.is_finite() {
                    tracing::debug!(indicator = %kind, "non-finite result replaced by 0");
                }
                value.sanitized()
            };
            snapshot.insert(kind, value);
        }

        tracing::debug!(bars = series.len(), indicators = snapshot.len(), "computed snapshot");
        Ok(snapshot)
    }
}

/// Computes the standard indicators with default windows.
///
/// # Errors
///
/// Returns [`SeriesError::LengthMismatch`] if the series columns differ in
/// length.
pub fn compute_indicators(series: &OhlcSeries) -> Result<IndicatorSnapshot, SeriesError> {
    IndicatorEngine::with_registry(IndicatorRegistry::standard(&IndicatorConfig::default()))
        .compute(series)
}
