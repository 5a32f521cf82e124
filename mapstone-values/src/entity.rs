use crate::MappedValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The generic property record an embedded entity maps into.
///
/// Properties are kept in a BTreeMap so iteration order is deterministic,
/// which keeps serialized entities stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappedEntity {
    properties: BTreeMap<String, MappedValue>,
}

impl MappedEntity {
    /// Creates an empty entity record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: MappedValue) {
        self.properties.insert(name.into(), value);
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: MappedValue) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MappedValue> {
        self.properties.get(name)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true when the record has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &MappedValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
