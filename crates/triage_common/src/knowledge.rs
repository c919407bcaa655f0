//! Knowledge base: symptom catalog plus rule catalog
//!
//! The compiled-in tables are the default. A TOML file with the same shape
//! can replace them without rebuilding:
//!
//! ```toml
//! [[symptoms]]
//! key = "cough"
//! label = "Cough"
//!
//! [[rules]]
//! level = "low"
//! id = "mild_cough"
//! condition = ["cough"]
//! explanation = "Mild cough: usually viral and self-limiting."
//! ```
//!
//! Loading validates everything up front. A file with any defect is
//! rejected as a whole, including unknown top-level tables (e.g. a
//! misspelled `[[rule]]`) and an empty symptom or rule table.

use crate::error::CatalogError;
use crate::rules::{RuleCatalog, TriageRule};
use crate::symptoms::{SymptomCatalog, SymptomEntry};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeFile {
    #[serde(default)]
    symptoms: Vec<SymptomEntry>,
    #[serde(default)]
    rules: Vec<TriageRule>,
}

/// Read-only catalogs shared by every session in the process
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symptoms: Arc<SymptomCatalog>,
    rules: RuleCatalog,
}

impl KnowledgeBase {
    /// Pair a symptom catalog with a rule catalog. Both must be non-empty
    /// and every condition symptom must be a recognized key.
    pub fn new(symptoms: SymptomCatalog, rules: RuleCatalog) -> Result<Self, CatalogError> {
        if symptoms.is_empty() {
            return Err(CatalogError::NoSymptoms);
        }
        if rules.is_empty() {
            return Err(CatalogError::NoRules);
        }

        for rule in rules.rules() {
            if let Some(unknown) = rule.condition.iter().find(|s| !symptoms.contains(s)) {
                return Err(CatalogError::UnknownConditionSymptom {
                    level: rule.level,
                    id: rule.id.clone(),
                    symptom: unknown.clone(),
                });
            }
        }

        debug!(
            "Knowledge base ready: {} symptoms, {} rules",
            symptoms.len(),
            rules.len()
        );

        Ok(Self {
            symptoms: Arc::new(symptoms),
            rules,
        })
    }

    pub fn symptoms(&self) -> &Arc<SymptomCatalog> {
        &self.symptoms
    }

    pub fn rules(&self) -> &RuleCatalog {
        &self.rules
    }

    /// The compiled-in knowledge base
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(SymptomCatalog::builtin()?, RuleCatalog::builtin()?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: KnowledgeFile = toml::from_str(contents)?;
        Self::new(SymptomCatalog::new(file.symptoms)?, RuleCatalog::new(file.rules)?)
    }

    /// Load and validate a knowledge-base file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&contents)?;
        info!(
            "Loaded knowledge base from {}: {} symptoms, {} rules",
            path.display(),
            kb.symptoms.len(),
            kb.rules.len()
        );
        Ok(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::PriorityLevel;
    use std::io::Write;

    const SMALL_KB: &str = r#"
[[symptoms]]
key = "fever"
label = "Fever"

[[symptoms]]
key = "cough"
label = "Cough"

[[rules]]
level = "moderate"
id = "respiratory"
condition = ["fever", "cough"]
explanation = "Fever with cough."

[[rules]]
level = "low"
id = "mild_cough"
conditions = ["cough"]
explanation = "Mild cough."
"#;

    #[test]
    fn test_builtin_knowledge_base_is_consistent() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.symptoms().len() > 20);
        assert!(!kb.rules().is_empty());
    }

    #[test]
    fn test_parse_small_knowledge_base() {
        let kb = KnowledgeBase::from_toml_str(SMALL_KB).unwrap();
        assert_eq!(kb.symptoms().len(), 2);
        assert_eq!(kb.rules().len(), 2);

        let low: Vec<_> = kb.rules().rules_for_level(PriorityLevel::Low).collect();
        assert_eq!(low[0].condition, vec!["cough".to_string()]);
    }

    #[test]
    fn test_unknown_condition_symptom_rejected() {
        let text = r#"
[[symptoms]]
key = "fever"
label = "Fever"

[[rules]]
level = "urgent"
id = "typo"
condition = ["fevr"]
explanation = "Misspelled."
"#;
        let result = KnowledgeBase::from_toml_str(text);
        assert!(matches!(
            result,
            Err(CatalogError::UnknownConditionSymptom { symptom, .. }) if symptom == "fevr"
        ));
    }

    #[test]
    fn test_unknown_level_is_parse_error() {
        let text = r#"
[[symptoms]]
key = "fever"
label = "Fever"

[[rules]]
level = "whenever"
id = "x"
condition = ["fever"]
explanation = "x"
"#;
        assert!(matches!(
            KnowledgeBase::from_toml_str(text),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_condition_in_file_rejected() {
        let text = r#"
[[symptoms]]
key = "fever"
label = "Fever"

[[rules]]
level = "low"
id = "always"
condition = []
explanation = "Always fires."
"#;
        assert!(matches!(
            KnowledgeBase::from_toml_str(text),
            Err(CatalogError::EmptyCondition { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_KB.as_bytes()).unwrap();

        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.rules().len(), 2);
    }

    #[test]
    fn test_new_cross_checks_catalogs() {
        let symptoms = SymptomCatalog::new(vec![SymptomEntry::new("cough", "Cough")]).unwrap();
        let rules = RuleCatalog::new(vec![TriageRule::new(
            PriorityLevel::Critical,
            "seizure",
            &["seizure"],
            "Seizure.",
        )])
        .unwrap();

        assert!(matches!(
            KnowledgeBase::new(symptoms.clone(), rules),
            Err(CatalogError::UnknownConditionSymptom { symptom, .. }) if symptom == "seizure"
        ));

        let kb = KnowledgeBase::new(symptoms, RuleCatalog::builtin().unwrap());
        assert!(kb.is_err());
    }

    #[test]
    fn test_misspelled_rules_table_rejected() {
        let text = r#"
[[symptoms]]
key = "fever"
label = "Fever"

[[rule]]
level = "low"
id = "mild_fever"
condition = ["fever"]
explanation = "Mild fever."
"#;
        assert!(matches!(
            KnowledgeBase::from_toml_str(text),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = KnowledgeBase::from_toml_str("").unwrap_err();
        assert!(matches!(err, CatalogError::NoSymptoms));
        assert_eq!(err.code(), 2009);
    }

    #[test]
    fn test_symptoms_without_rules_rejected() {
        let err = KnowledgeBase::from_toml_str("[[symptoms]]\nkey = \"fever\"\nlabel = \"Fever\"\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoRules));
        assert_eq!(err.code(), 2010);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = KnowledgeBase::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
