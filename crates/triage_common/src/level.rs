//! Triage priority levels
//!
//! Levels are totally ordered by urgency. Declaration order is scan order:
//! Critical is evaluated first, Low last.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advice shown when no rule at any level fired
pub const NO_MATCH_ACTION: &str =
    "No matching rules. Consider consulting a healthcare provider if concerned.";

/// Urgency level of a triage rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Critical,
    Urgent,
    Moderate,
    Low,
}

impl PriorityLevel {
    /// All levels in evaluation order (highest urgency first)
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::Critical,
        PriorityLevel::Urgent,
        PriorityLevel::Moderate,
        PriorityLevel::Low,
    ];

    /// Numeric rank, 1 = most urgent
    pub fn rank(&self) -> u8 {
        match self {
            PriorityLevel::Critical => 1,
            PriorityLevel::Urgent => 2,
            PriorityLevel::Moderate => 3,
            PriorityLevel::Low => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "critical",
            PriorityLevel::Urgent => "urgent",
            PriorityLevel::Moderate => "moderate",
            PriorityLevel::Low => "low",
        }
    }

    /// What the patient should do at this level
    pub fn recommended_action(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => {
                "Seek IMMEDIATE emergency medical attention. Call emergency services NOW."
            }
            PriorityLevel::Urgent => "Seek medical attention as soon as possible (within hours).",
            PriorityLevel::Moderate => {
                "Schedule a medical appointment soon (within 24-48 hours)."
            }
            PriorityLevel::Low => {
                "Monitor symptoms. Visit a healthcare provider if they persist or worsen."
            }
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(PriorityLevel::Critical),
            "urgent" => Ok(PriorityLevel::Urgent),
            "moderate" => Ok(PriorityLevel::Moderate),
            "low" => Ok(PriorityLevel::Low),
            other => Err(format!("unknown priority level: {}", other)),
        }
    }
}
