//! Error types for the triage core.

use crate::level::PriorityLevel;
use thiserror::Error;

/// Runtime errors surfaced to callers of a triage session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Invalid symptom key: {0}")]
    InvalidSymptomKey(String),
}

impl TriageError {
    pub fn code(&self) -> i32 {
        match self {
            TriageError::InvalidSymptomKey(_) => 1001,
        }
    }
}

/// Defects in a symptom or rule catalog. Raised only while building a
/// catalog; a catalog that exists has passed every check.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Rule {level}/{id} has an empty condition")]
    EmptyCondition { level: PriorityLevel, id: String },

    #[error("Duplicate rule id {id} at level {level}")]
    DuplicateRuleId { level: PriorityLevel, id: String },

    #[error("Rule {level}/{id} lists symptom {symptom} more than once")]
    DuplicateConditionSymptom {
        level: PriorityLevel,
        id: String,
        symptom: String,
    },

    #[error("Rule {level}/{id} has an empty explanation")]
    EmptyExplanation { level: PriorityLevel, id: String },

    #[error("Rule {level}/{id} references unknown symptom {symptom}")]
    UnknownConditionSymptom {
        level: PriorityLevel,
        id: String,
        symptom: String,
    },

    #[error("Duplicate symptom key: {0}")]
    DuplicateSymptomKey(String),

    #[error("Symptom catalog contains an empty key")]
    EmptySymptomKey,

    #[error("Symptom {0} has an empty label")]
    EmptyLabel(String),

    #[error("Knowledge base defines no symptoms")]
    NoSymptoms,

    #[error("Knowledge base defines no rules")]
    NoRules,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Knowledge base parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    pub fn code(&self) -> i32 {
        match self {
            CatalogError::EmptyCondition { .. } => 2001,
            CatalogError::DuplicateRuleId { .. } => 2002,
            CatalogError::DuplicateConditionSymptom { .. } => 2003,
            CatalogError::EmptyExplanation { .. } => 2004,
            CatalogError::UnknownConditionSymptom { .. } => 2005,
            CatalogError::DuplicateSymptomKey(_) => 2006,
            CatalogError::EmptySymptomKey => 2007,
            CatalogError::EmptyLabel(_) => 2008,
            CatalogError::NoSymptoms => 2009,
            CatalogError::NoRules => 2010,
            CatalogError::Io(_) => 2100,
            CatalogError::Parse(_) => 2101,
        }
    }
}
