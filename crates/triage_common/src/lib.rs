//! Triage Common - rule-based symptom triage
//!
//! Classifies reported symptoms into an urgency level by evaluating a fixed
//! catalog of conjunctive rules in priority order.
//!
//! - [`symptoms`]: recognized symptom keys and labels
//! - [`rules`]: the rule catalog
//! - [`knowledge`]: both catalogs, built in or loaded from TOML
//! - [`store`]: per-session reported symptoms
//! - [`engine`]: rule matching and priority resolution
//! - [`session`]: the operations an interaction layer calls

pub mod engine;
pub mod error;
pub mod knowledge;
pub mod level;
pub mod rules;
pub mod session;
pub mod store;
pub mod symptoms;

pub use engine::{LevelFindings, TriageResult, FALLBACK_MESSAGE};
pub use error::{CatalogError, TriageError};
pub use knowledge::KnowledgeBase;
pub use level::{PriorityLevel, NO_MATCH_ACTION};
pub use rules::{RuleCatalog, TriageRule};
pub use session::{assess, Assessment, TriageSession};
pub use store::{SymptomSet, SymptomStore};
pub use symptoms::{Symptom, SymptomCatalog, SymptomEntry};
