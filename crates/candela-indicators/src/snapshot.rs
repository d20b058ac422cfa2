//! Ordered indicator results.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::{IndicatorKind, IndicatorValue};

/// Indicator values keyed by kind, in insertion order.
///
/// Inserting a kind that is already present replaces its value in place,
/// so the order of first insertion is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSnapshot {
    entries: Vec<(IndicatorKind, IndicatorValue)>,
}

impl IndicatorSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, returning the previous value for `kind` if any.
    pub fn insert(&mut self, kind: IndicatorKind, value: IndicatorValue) -> Option<IndicatorValue> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((kind, value));
        None
    }

    /// Returns the value for `kind`.
    #[must_use]
    pub fn get(&self, kind: IndicatorKind) -> Option<&IndicatorValue> {
        self.entries
            .iter()
            .find_map(|(k, value)| (*k == kind).then_some(value))
    }

    /// Returns the scalar value for `kind`, if present and scalar.
    #[must_use]
    pub fn scalar(&self, kind: IndicatorKind) -> Option<f64> {
        self.get(kind).and_then(IndicatorValue::as_scalar)
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, &IndicatorValue)> {
        self.entries.iter().map(|(kind, value)| (*kind, value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the standard kinds with no entry.
    #[must_use]
    pub fn missing(&self) -> Vec<IndicatorKind> {
        IndicatorKind::all()
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }

    /// Returns true if every standard kind is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        IndicatorKind::all()
            .iter()
            .all(|kind| self.get(*kind).is_some())
    }
}

impl<'a> IntoIterator for &'a IndicatorSnapshot {
    type Item = (IndicatorKind, &'a IndicatorValue);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for IndicatorSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, value) in &self.entries {
            map.serialize_entry(kind.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut snapshot = IndicatorSnapshot::new();
        snapshot.insert(IndicatorKind::Sma, IndicatorValue::Scalar(1.0));
        snapshot.insert(IndicatorKind::Ema, IndicatorValue::Scalar(2.0));
        let previous = snapshot.insert(IndicatorKind::Sma, IndicatorValue::Scalar(3.0));

        assert_eq!(previous, Some(IndicatorValue::Scalar(1.0)));
        assert_eq!(snapshot.len(), 2);
        let kinds: Vec<_> = snapshot.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![IndicatorKind::Sma, IndicatorKind::Ema]);
        assert_eq!(snapshot.scalar(IndicatorKind::Sma), Some(3.0));
    }

    #[test]
    fn test_missing() {
        let mut snapshot = IndicatorSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.missing().len(), 33);
        snapshot.insert(IndicatorKind::Rsi, IndicatorValue::Scalar(50.0));
        assert_eq!(snapshot.missing().len(), 32);
        assert!(!snapshot.is_complete());
    }

    #[test]
    fn test_serializes_in_order() {
        let mut snapshot = IndicatorSnapshot::new();
        snapshot.insert(IndicatorKind::Rsi, IndicatorValue::Scalar(50.0));
        snapshot.insert(IndicatorKind::Sma, IndicatorValue::Scalar(1.5));
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"rsi":50.0,"sma":1.5}"#
        );
    }
}
