//! Symptom catalog
//!
//! The fixed set of symptom keys a session may report, each with a display
//! label. Presentation only: the inference engine never reads labels.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Atomic symptom identifier, e.g. `chest_pain`
pub type Symptom = String;

/// One recognized symptom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub key: Symptom,
    pub label: String,
}

impl SymptomEntry {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Ordered, immutable table of recognized symptoms
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    entries: Vec<SymptomEntry>,
}

impl SymptomCatalog {
    /// Build a catalog, rejecting empty or duplicate keys and empty labels
    pub fn new(entries: Vec<SymptomEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.key.trim().is_empty() {
                return Err(CatalogError::EmptySymptomKey);
            }
            if entry.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel(entry.key.clone()));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateSymptomKey(entry.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The compiled-in symptom table
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = [
            ("chest_pain", "Chest pain"),
            ("shortness_of_breath", "Shortness of breath"),
            ("left_arm_pain", "Pain radiating to the left arm"),
            ("unresponsive", "Unresponsive / unconscious"),
            ("severe_bleeding", "Severe bleeding"),
            ("seizure", "Seizure"),
            ("sudden_numbness", "Sudden numbness or weakness"),
            ("confusion", "Confusion or disorientation"),
            ("severe_headache", "Sudden severe headache"),
            ("high_fever", "High fever (above 39.5 C)"),
            ("persistent_vomiting", "Persistent vomiting"),
            ("stiff_neck", "Stiff neck"),
            ("severe_abdominal_pain", "Severe abdominal pain"),
            ("fever", "Fever"),
            ("cough", "Cough"),
            ("headache", "Headache"),
            ("dizziness", "Dizziness"),
            ("body_ache", "Body aches"),
            ("joint_pain", "Joint pain"),
            ("swelling", "Swelling"),
            ("runny_nose", "Runny nose"),
            ("sore_throat", "Sore throat"),
            ("fatigue", "Fatigue"),
            ("nausea", "Nausea"),
            ("rash", "Skin rash"),
        ];

        Self::new(
            entries
                .iter()
                .map(|(key, label)| SymptomEntry::new(key, label))
                .collect(),
        )
    }

    /// All symptoms in catalog order
    pub fn list_available_symptoms(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    /// Entry by zero-based position, for numbered menus
    pub fn get(&self, index: usize) -> Option<&SymptomEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
