//! Symptom store
//!
//! The per-session set of reported symptoms. Only keys present in the
//! symptom catalog can be added. Every operation is idempotent.

use crate::error::TriageError;
use crate::symptoms::{Symptom, SymptomCatalog};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Snapshot of active symptoms handed to the inference engine
pub type SymptomSet = BTreeSet<Symptom>;

#[derive(Debug, Clone)]
pub struct SymptomStore {
    catalog: Arc<SymptomCatalog>,
    active: SymptomSet,
}

impl SymptomStore {
    /// Empty store validating against `catalog`
    pub fn new(catalog: Arc<SymptomCatalog>) -> Self {
        Self {
            catalog,
            active: SymptomSet::new(),
        }
    }

    /// Report a symptom. Returns `true` if it was not already active.
    pub fn add(&mut self, symptom: &str) -> Result<bool, TriageError> {
        if !self.catalog.contains(symptom) {
            return Err(TriageError::InvalidSymptomKey(symptom.to_string()));
        }
        let inserted = self.active.insert(symptom.to_string());
        debug!(symptom, inserted, "symptom added");
        Ok(inserted)
    }

    /// Withdraw a symptom. Absent keys are ignored.
    pub fn remove(&mut self, symptom: &str) -> bool {
        let removed = self.active.remove(symptom);
        debug!(symptom, removed, "symptom removed");
        removed
    }

    pub fn clear(&mut self) {
        debug!(count = self.active.len(), "symptoms cleared");
        self.active.clear();
    }

    /// Independent copy of the active set
    pub fn snapshot(&self) -> SymptomSet {
        self.active.clone()
    }

    /// Active keys in ascending key order
    pub fn list_active(&self) -> Vec<Symptom> {
        self.active.iter().cloned().collect()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.active.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
