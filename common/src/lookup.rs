//! # Lookup Data Model
//!
//! Values produced by the lookup engine and consumed by the presenters.
//! All of them are plain data; nothing here performs I/O.

use std::collections::BTreeMap;
use std::fmt;

/// Result of asking one source about one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupStatus {
    /// The source knows the prefix; carries the raw vendor text it returned.
    Found(String),
    /// The source answered but has no data for the prefix.
    NotFound,
    /// The source could not be reached (timeout, refused, DNS, ...).
    ConnectionError,
}

impl LookupStatus {
    /// Human facing label used by every output format.
    pub fn label(&self) -> &str {
        match self {
            LookupStatus::Found(vendor) => vendor,
            LookupStatus::NotFound => "No encontrado",
            LookupStatus::ConnectionError => "Error de conexión",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupStatus::Found(_))
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `(source, status)` pair. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOutcome {
    source: String,
    status: LookupStatus,
}

impl LookupOutcome {
    pub fn new(source: impl Into<String>, status: LookupStatus) -> Self {
        Self {
            source: source.into(),
            status,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    pub fn into_status(self) -> LookupStatus {
        self.status
    }
}

/// Every outcome gathered for one requested address.
///
/// Outcomes are stored in completion order, which says nothing about the
/// order the sources were declared in. Look them up by source name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressResult {
    pub address: String,
    pub prefix: String,
    pub outcomes: Vec<LookupOutcome>,
}

impl AddressResult {
    pub fn new(address: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            prefix: prefix.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: LookupOutcome) {
        self.outcomes.push(outcome);
    }

    /// Status reported by `source`, if it contributed an outcome.
    pub fn status_of(&self, source: &str) -> Option<&LookupStatus> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.source == source)
            .map(LookupOutcome::status)
    }

    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_found()).count()
    }
}

/// Address → results for a whole batch.
///
/// Keyed by the raw address string, so a raw string requested twice
/// collapses into a single entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: BTreeMap<String, AddressResult>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, result: AddressResult) {
        self.entries.insert(result.address.clone(), result);
    }

    pub fn get(&self, address: &str) -> Option<&AddressResult> {
        self.entries.get(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AddressResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AddressResult> for BatchResult {
    fn from_iter<I: IntoIterator<Item = AddressResult>>(iter: I) -> Self {
        let mut batch = BatchResult::new();
        for result in iter {
            batch.insert(result);
        }
        batch
    }
}
