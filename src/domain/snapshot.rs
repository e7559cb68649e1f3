// Snapshot - the named measurements available for one render pass
use super::measurement::Measurement;
use std::collections::BTreeMap;

/// Read-only once built. Composition borrows it; nothing hands out `&mut`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    taken_at_ms: i64,
    measurements: BTreeMap<String, Measurement>,
}

impl Snapshot {
    pub fn new(taken_at_ms: i64) -> Self {
        Self {
            taken_at_ms,
            measurements: BTreeMap::new(),
        }
    }

    /// Builder step. A later insert under the same name replaces the earlier one.
    pub fn with(mut self, name: impl Into<String>, measurement: Measurement) -> Self {
        self.measurements.insert(name.into(), measurement);
        self
    }

    #[cfg(test)]
    pub fn without(mut self, name: &str) -> Self {
        self.measurements.remove(name);
        self
    }

    pub fn taken_at_ms(&self) -> i64 {
        self.taken_at_ms
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.measurements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_replaces_and_removes() {
        let snapshot = Snapshot::new(0)
            .with("leak_loss", Measurement::scalar(3.5, None, "%"))
            .with("leak_loss", Measurement::scalar(-2.5, None, "%"))
            .with("steam_per_kg", Measurement::scalar(6.2, None, "kg/kg"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get("leak_loss"),
            Some(&Measurement::scalar(-2.5, None, "%"))
        );

        let snapshot = snapshot.without("leak_loss");
        assert!(snapshot.get("leak_loss").is_none());
        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["steam_per_kg"]);
    }
}
