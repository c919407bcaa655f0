//! Triage session
//!
//! The operations exposed to an interaction layer. A session owns its
//! symptom store; sessions never share symptom state with each other.
//! All methods take `&self` so a session can sit behind an `Arc` and be
//! used from several threads. Store mutations and snapshots are serialized
//! by one lock; rule evaluation runs outside it.

use crate::engine::{self, LevelFindings, TriageResult};
use crate::error::TriageError;
use crate::knowledge::KnowledgeBase;
use crate::store::{SymptomSet, SymptomStore};
use crate::symptoms::{Symptom, SymptomEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

pub struct TriageSession {
    kb: Arc<KnowledgeBase>,
    store: Mutex<SymptomStore>,
}

impl TriageSession {
    /// New session with no reported symptoms
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let store = SymptomStore::new(Arc::clone(kb.symptoms()));
        Self {
            kb,
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> MutexGuard<'_, SymptomStore> {
        // A poisoned lock still guards a valid set
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Report a symptom. Returns `true` if it was newly added.
    pub fn add_symptom(&self, key: &str) -> Result<bool, TriageError> {
        self.store().add(key)
    }

    /// Withdraw a symptom. Returns `true` if it was active.
    pub fn remove_symptom(&self, key: &str) -> bool {
        self.store().remove(key)
    }

    pub fn clear_symptoms(&self) {
        self.store().clear();
    }

    pub fn list_active_symptoms(&self) -> Vec<Symptom> {
        self.store().list_active()
    }

    pub fn snapshot(&self) -> SymptomSet {
        self.store().snapshot()
    }

    pub fn triage(&self) -> TriageResult {
        let active = self.snapshot();
        let result = engine::triage(self.kb.rules(), &active);
        info!(
            symptoms = active.len(),
            level = result.level_key(),
            "triage evaluated"
        );
        result
    }

    pub fn triage_all(&self) -> Vec<LevelFindings> {
        let active = self.snapshot();
        engine::triage_all(self.kb.rules(), &active)
    }

    pub fn list_available_symptoms(&self) -> &[SymptomEntry] {
        self.kb.symptoms().list_available_symptoms()
    }

    /// Both views over a single snapshot
    pub fn assessment(&self) -> Assessment {
        let active = self.snapshot();
        let result = engine::triage(self.kb.rules(), &active);
        let all_levels = engine::triage_all(self.kb.rules(), &active);
        info!(
            symptoms = active.len(),
            level = result.level_key(),
            levels_fired = all_levels.len(),
            "assessment complete"
        );

        Assessment {
            result,
            all_levels,
            symptoms: active.into_iter().collect(),
            assessed_at: Utc::now(),
        }
    }
}

/// Complete report for one set of symptoms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub result: TriageResult,
    pub all_levels: Vec<LevelFindings>,
    pub symptoms: Vec<Symptom>,
    pub assessed_at: DateTime<Utc>,
}

impl Assessment {
    pub fn level_key(&self) -> &'static str {
        self.result.level_key()
    }

    /// Levels below the one `result` reports
    pub fn other_levels(&self) -> impl Iterator<Item = &LevelFindings> {
        let reported = self.result.level();
        self.all_levels
            .iter()
            .filter(move |f| Some(f.level) != reported)
    }
}

/// One-shot triage of `symptoms` in a fresh session. Any unknown key fails
/// the whole call.
pub fn assess<S: AsRef<str>>(
    kb: Arc<KnowledgeBase>,
    symptoms: &[S],
) -> Result<Assessment, TriageError> {
    let session = TriageSession::new(kb);
    for symptom in symptoms {
        session.add_symptom(symptom.as_ref())?;
    }

    Ok(session.assessment())
}
