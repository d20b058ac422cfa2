//! Indicator result values.

use candela_types::Direction;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Result of a single indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    /// Latest value of a single line.
    Scalar(f64),
    /// A full line aligned with the input series.
    Line(Vec<f64>),
    /// Two labeled values.
    Pair {
        /// Field labels.
        labels: [&'static str; 2],
        /// Field values.
        values: [f64; 2],
    },
    /// Three labeled values.
    Triple {
        /// Field labels.
        labels: [&'static str; 3],
        /// Field values.
        values: [f64; 3],
    },
    /// Price levels.
    Levels(Vec<f64>),
    /// A value with a trend direction.
    Trend {
        /// Indicator value.
        value: f64,
        /// Trend direction.
        direction: Direction,
    },
    /// A bare trend direction.
    Direction(Direction),
}

impl IndicatorValue {
    /// Creates a pair value.
    #[must_use]
    pub const fn pair(labels: [&'static str; 2], values: [f64; 2]) -> Self {
        Self::Pair { labels, values }
    }

    /// Creates a triple value.
    #[must_use]
    pub const fn triple(labels: [&'static str; 3], values: [f64; 3]) -> Self {
        Self::Triple { labels, values }
    }

    /// Returns the value if this is a scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the line if this is a line.
    #[must_use]
    pub fn as_line(&self) -> Option<&[f64]> {
        match self {
            Self::Line(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the levels if this is a level list.
    #[must_use]
    pub fn as_levels(&self) -> Option<&[f64]> {
        match self {
            Self::Levels(levels) => Some(levels),
            _ => None,
        }
    }

    /// Returns the direction of a trend or direction value.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Trend { direction, .. } | Self::Direction(direction) => Some(*direction),
            _ => None,
        }
    }

    /// Looks up a labeled field of a pair, triple or trend value.
    #[must_use]
    pub fn field(&self, label: &str) -> Option<f64> {
        match self {
            Self::Pair { labels, values } => labels
                .iter()
                .zip(values)
                .find_map(|(l, v)| (*l == label).then_some(*v)),
            Self::Triple { labels, values } => labels
                .iter()
                .zip(values)
                .find_map(|(l, v)| (*l == label).then_some(*v)),
            Self::Trend { value, .. } if label == "value" => Some(*value),
            _ => None,
        }
    }

    /// Returns the most recent number carried by this value.
    ///
    /// Scalars return themselves, lines their last element, and labeled
    /// structures their first field. Levels and bare directions have no
    /// single latest number.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) | Self::Trend { value, .. } => Some(*value),
            Self::Line(values) => values.last().copied(),
            Self::Pair { values, .. } => Some(values[0]),
            Self::Triple { values, .. } => Some(values[0]),
            Self::Levels(_) | Self::Direction(_) => None,
        }
    }

    /// Returns true if every number in this value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(value) | Self::Trend { value, .. } => value.is_finite(),
            Self::Line(values) | Self::Levels(values) => values.iter().all(|v| v.is_finite()),
            Self::Pair { values, .. } => values.iter().all(|v| v.is_finite()),
            Self::Triple { values, .. } => values.iter().all(|v| v.is_finite()),
            Self::Direction(_) => true,
        }
    }

    /// Replaces every NaN or infinite number with 0.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        match &mut self {
            Self::Scalar(value) | Self::Trend { value, .. } => zero_if_not_finite(value),
            Self::Line(values) | Self::Levels(values) => {
                values.iter_mut().for_each(zero_if_not_finite);
            }
            Self::Pair { values, .. } => values.iter_mut().for_each(zero_if_not_finite),
            Self::Triple { values, .. } => values.iter_mut().for_each(zero_if_not_finite),
            Self::Direction(_) => {}
        }
        self
    }
}

fn zero_if_not_finite(value: &mut f64) {
    if !value.is_finite() {
        *value = 0.0;
    }
}

impl Serialize for IndicatorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(value) => serializer.serialize_f64(*value),
            Self::Line(values) | Self::Levels(values) => values.serialize(serializer),
            Self::Pair { labels, values } => serialize_fields(serializer, labels, values),
            Self::Triple { labels, values } => serialize_fields(serializer, labels, values),
            Self::Trend { value, direction } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("direction", direction)?;
                map.end()
            }
            Self::Direction(direction) => direction.serialize(serializer),
        }
    }
}

fn serialize_fields<S: Serializer>(
    serializer: S,
    labels: &[&'static str],
    values: &[f64],
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(labels.len()))?;
    for (label, value) in labels.iter().zip(values) {
        map.serialize_entry(label, value)?;
    }
    map.end()
}

/// Output shape of an indicator, used to build its neutral default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single latest value.
    Scalar,
    /// A full line aligned with the input series.
    Line,
    /// Two labeled values.
    Pair([&'static str; 2]),
    /// Three labeled values.
    Triple([&'static str; 3]),
    /// A fixed number of price levels.
    Levels(usize),
    /// A value with a trend direction.
    Trend,
    /// A bare trend direction.
    Direction,
}

impl Shape {
    /// Returns the neutral default for a series of `len` bars.
    ///
    /// Numbers are zero, lines are all-zero vectors of length `len`, and
    /// directions are [`Direction::Down`].
    #[must_use]
    pub fn neutral(&self, len: usize) -> IndicatorValue {
        match *self {
            Self::Scalar => IndicatorValue::Scalar(0.0),
            Self::Line => IndicatorValue::Line(vec![0.0; len]),
            Self::Pair(labels) => IndicatorValue::pair(labels, [0.0; 2]),
            Self::Triple(labels) => IndicatorValue::triple(labels, [0.0; 3]),
            Self::Levels(count) => IndicatorValue::Levels(vec![0.0; count]),
            Self::Trend => IndicatorValue::Trend {
                value: 0.0,
                direction: Direction::Down,
            },
            Self::Direction => IndicatorValue::Direction(Direction::Down),
        }
    }
}
