//! Inference engine
//!
//! Stateless evaluation of a rule catalog against a symptom snapshot.
//! A rule fires when its condition is a subset of the active symptoms;
//! there is no chaining between rules.
//!
//! Two views are offered and intentionally not reconciled:
//! - [`triage`] stops at the most urgent level with a fired rule.
//! - [`triage_all`] reports every level with a fired rule.

use crate::level::{PriorityLevel, NO_MATCH_ACTION};
use crate::rules::{RuleCatalog, TriageRule};
use crate::store::SymptomSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Advisory text returned when no rule fired at any level
pub const FALLBACK_MESSAGE: &str =
    "No triage rule matched the reported symptoms. Consider consulting a healthcare provider if concerned.";

/// Outcome of a priority-ordered triage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum TriageResult {
    Matched {
        level: PriorityLevel,
        explanations: Vec<String>,
    },
    Fallback {
        message: String,
    },
}

impl TriageResult {
    pub fn level(&self) -> Option<PriorityLevel> {
        match self {
            TriageResult::Matched { level, .. } => Some(*level),
            TriageResult::Fallback { .. } => None,
        }
    }

    /// Level key, `"none"` for the fallback
    pub fn level_key(&self) -> &'static str {
        self.level().map(|l| l.as_str()).unwrap_or("none")
    }

    /// Explanations of the fired rules, or the advisory message
    pub fn explanations(&self) -> Vec<&str> {
        match self {
            TriageResult::Matched { explanations, .. } => {
                explanations.iter().map(String::as_str).collect()
            }
            TriageResult::Fallback { message } => vec![message.as_str()],
        }
    }

    pub fn recommended_action(&self) -> &'static str {
        match self {
            TriageResult::Matched { level, .. } => level.recommended_action(),
            TriageResult::Fallback { .. } => NO_MATCH_ACTION,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TriageResult::Fallback { .. })
    }
}

/// Fired explanations for one level, as reported by [`triage_all`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFindings {
    pub level: PriorityLevel,
    pub explanations: Vec<String>,
}

/// True iff every condition symptom is active
pub fn matches(rule: &TriageRule, active: &SymptomSet) -> bool {
    rule.condition.iter().all(|s| active.contains(s))
}

/// Rules at `level` that fire, in catalog order
pub fn fired_rules<'a>(
    catalog: &'a RuleCatalog,
    level: PriorityLevel,
    active: &SymptomSet,
) -> Vec<&'a TriageRule> {
    catalog
        .rules_for_level(level)
        .filter(|rule| matches(rule, active))
        .collect()
}

fn explanations_of(rules: &[&TriageRule]) -> Vec<String> {
    rules.iter().map(|r| r.explanation.clone()).collect()
}

/// Classify `active` by the most urgent level with at least one fired rule.
/// Lower levels are never consulted once a level fires.
pub fn triage(catalog: &RuleCatalog, active: &SymptomSet) -> TriageResult {
    for level in PriorityLevel::ALL {
        let fired = fired_rules(catalog, level, active);
        if !fired.is_empty() {
            debug!(
                level = level.as_str(),
                rules = ?fired.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
                "triage matched"
            );
            return TriageResult::Matched {
                level,
                explanations: explanations_of(&fired),
            };
        }
    }

    debug!(symptoms = active.len(), "triage fell back: no rule fired");
    TriageResult::Fallback {
        message: FALLBACK_MESSAGE.to_string(),
    }
}

/// Evaluate every level independently. Levels with no fired rule are
/// omitted; output is in priority order.
pub fn triage_all(catalog: &RuleCatalog, active: &SymptomSet) -> Vec<LevelFindings> {
    PriorityLevel::ALL
        .iter()
        .filter_map(|&level| {
            let fired = fired_rules(catalog, level, active);
            if fired.is_empty() {
                None
            } else {
                Some(LevelFindings {
                    level,
                    explanations: explanations_of(&fired),
                })
            }
        })
        .collect()
}
