//! The lookup log a scenario leaves behind.

use crate::identifier::Identifier;

/// One lookup and whether it found a keyspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// The identifier exactly as it was looked up.
    pub identifier: Identifier,
    /// Whether the authority resolved it to an entry.
    pub found: bool,
}

/// Every `(identifier, found)` pair one scenario observed, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationResult {
    observations: Vec<Observation>,
}

impl ObservationResult {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observation.
    pub fn record(&mut self, identifier: Identifier, found: bool) {
        self.observations.push(Observation { identifier, found });
    }

    /// Observations in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Number of recorded lookups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether nothing was looked up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The most recent result for `identifier`, if it was ever looked up.
    #[must_use]
    pub fn last_found(&self, identifier: &Identifier) -> Option<bool> {
        self.observations.iter().rev().find(|o| &o.identifier == identifier).map(|o| o.found)
    }
}

impl<'a> IntoIterator for &'a ObservationResult {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
