//! Rule catalog
//!
//! Every rule is a flat conjunction: it fires when all of its condition
//! symptoms are reported. Rules are grouped by level and kept in authored
//! order, which is also the order their explanations are reported in.
//!
//! The catalog is fixed once built. Adding a rule means editing the table
//! below (or a knowledge-base file, see [`crate::knowledge`]) and restarting.

use crate::error::CatalogError;
use crate::level::PriorityLevel;
use crate::symptoms::Symptom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single triage rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRule {
    pub level: PriorityLevel,
    /// Unique within its level
    pub id: String,
    /// Conjunctive condition; every symptom must be active
    #[serde(alias = "conditions")]
    pub condition: Vec<Symptom>,
    pub explanation: String,
}

impl TriageRule {
    pub fn new(level: PriorityLevel, id: &str, condition: &[&str], explanation: &str) -> Self {
        Self {
            level,
            id: id.to_string(),
            condition: condition.iter().map(|s| s.to_string()).collect(),
            explanation: explanation.to_string(),
        }
    }
}

/// Validated, immutable set of triage rules
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<TriageRule>,
}

impl RuleCatalog {
    /// Build a catalog. Fails on the first malformed rule.
    pub fn new(rules: Vec<TriageRule>) -> Result<Self, CatalogError> {
        let mut ids: HashSet<(PriorityLevel, &str)> = HashSet::new();

        for rule in &rules {
            if rule.condition.is_empty() {
                return Err(CatalogError::EmptyCondition {
                    level: rule.level,
                    id: rule.id.clone(),
                });
            }
            if rule.explanation.trim().is_empty() {
                return Err(CatalogError::EmptyExplanation {
                    level: rule.level,
                    id: rule.id.clone(),
                });
            }
            if !ids.insert((rule.level, rule.id.as_str())) {
                return Err(CatalogError::DuplicateRuleId {
                    level: rule.level,
                    id: rule.id.clone(),
                });
            }

            let mut seen = HashSet::new();
            for symptom in &rule.condition {
                if !seen.insert(symptom.as_str()) {
                    return Err(CatalogError::DuplicateConditionSymptom {
                        level: rule.level,
                        id: rule.id.clone(),
                        symptom: symptom.clone(),
                    });
                }
            }
        }

        Ok(Self { rules })
    }

    /// The compiled-in rule table
    pub fn builtin() -> Result<Self, CatalogError> {
        use PriorityLevel::*;

        let rules = vec![
            // Critical: call emergency services
            TriageRule::new(
                Critical,
                "cardiac_pulmonary",
                &["chest_pain", "shortness_of_breath"],
                "Chest pain with shortness of breath may indicate a cardiac or pulmonary emergency.",
            ),
            TriageRule::new(
                Critical,
                "myocardial_infarction",
                &["chest_pain", "left_arm_pain"],
                "Chest pain radiating to the left arm is a warning sign of myocardial infarction (heart attack).",
            ),
            TriageRule::new(
                Critical,
                "unresponsive",
                &["unresponsive"],
                "Unresponsiveness requires immediate emergency assessment.",
            ),
            TriageRule::new(
                Critical,
                "severe_bleeding",
                &["severe_bleeding"],
                "Severe bleeding can rapidly lead to hemorrhagic shock.",
            ),
            TriageRule::new(
                Critical,
                "seizure",
                &["seizure"],
                "A seizure requires emergency evaluation.",
            ),
            TriageRule::new(
                Critical,
                "stroke",
                &["sudden_numbness", "confusion", "severe_headache"],
                "Sudden numbness, confusion and severe headache are warning signs of stroke.",
            ),
            // Urgent: seen within hours
            TriageRule::new(
                Urgent,
                "fever_vomiting",
                &["high_fever", "persistent_vomiting"],
                "High fever with persistent vomiting risks dehydration and may indicate a serious infection.",
            ),
            TriageRule::new(
                Urgent,
                "meningitis_risk",
                &["high_fever", "stiff_neck"],
                "High fever with a stiff neck may indicate meningitis.",
            ),
            TriageRule::new(
                Urgent,
                "acute_abdomen",
                &["severe_abdominal_pain"],
                "Severe abdominal pain may indicate appendicitis or another acute abdominal condition.",
            ),
            TriageRule::new(
                Urgent,
                "chest_pain",
                &["chest_pain"],
                "Chest pain on its own should be evaluated promptly to rule out a cardiac cause.",
            ),
            TriageRule::new(
                Urgent,
                "breathing_difficulty",
                &["shortness_of_breath"],
                "Shortness of breath should be assessed promptly.",
            ),
            // Moderate: appointment within 24-48 hours
            TriageRule::new(
                Moderate,
                "respiratory_infection",
                &["fever", "cough"],
                "Fever with cough suggests a respiratory infection that should be assessed by a clinician.",
            ),
            TriageRule::new(
                Moderate,
                "headache_dizziness",
                &["headache", "dizziness"],
                "Headache with dizziness may have several causes and should be checked by a clinician.",
            ),
            TriageRule::new(
                Moderate,
                "flu_like",
                &["fever", "body_ache"],
                "Fever with body aches suggests an influenza-like illness.",
            ),
            TriageRule::new(
                Moderate,
                "joint_inflammation",
                &["joint_pain", "swelling"],
                "Joint pain with swelling may indicate inflammation or injury.",
            ),
            TriageRule::new(
                Moderate,
                "persistent_vomiting",
                &["persistent_vomiting"],
                "Persistent vomiting can lead to dehydration.",
            ),
            // Low: self-care and monitoring
            TriageRule::new(
                Low,
                "mild_headache",
                &["headache"],
                "Mild headache: rest, hydrate and monitor.",
            ),
            TriageRule::new(
                Low,
                "mild_fever",
                &["fever"],
                "Mild fever: rest, fluids and monitor your temperature.",
            ),
            TriageRule::new(
                Low,
                "mild_cough",
                &["cough"],
                "Mild cough: usually viral and self-limiting.",
            ),
            TriageRule::new(
                Low,
                "runny_nose",
                &["runny_nose"],
                "Runny nose: likely a common cold.",
            ),
            TriageRule::new(
                Low,
                "sore_throat",
                &["sore_throat"],
                "Sore throat: usually viral; seek care if it lasts more than a week.",
            ),
            TriageRule::new(
                Low,
                "fatigue",
                &["fatigue"],
                "Fatigue: rest and monitor; seek care if it persists.",
            ),
            TriageRule::new(
                Low,
                "nausea",
                &["nausea"],
                "Mild nausea: small sips of fluid and bland food.",
            ),
            TriageRule::new(
                Low,
                "rash",
                &["rash"],
                "Skin rash without other symptoms: monitor for spreading or fever.",
            ),
        ];

        Self::new(rules)
    }

    /// Rules at `level`, in catalog order
    pub fn rules_for_level(&self, level: PriorityLevel) -> impl Iterator<Item = &TriageRule> {
        self.rules.iter().filter(move |r| r.level == level)
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
