//! Terminal rendering
//!
//! All output goes through a `Write` so the same code serves stdout and
//! tests. Colors are applied only when the painter is enabled.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use triage_common::{Assessment, SymptomEntry, TriageRule};

const RULE_WIDTH: usize = 70;

const DISCLAIMER: &str = "\
  DISCLAIMER
  Neutral Minds is a DEMONSTRATION rule-based triage system.
  It is NOT a medical diagnostic tool and does NOT replace professional
  medical advice, diagnosis, or treatment.
  If you are experiencing a medical emergency, call your local emergency
  number immediately.";

/// Applies terminal colors when enabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color `text` by level key (`"critical"` .. `"low"`, anything else dim)
    pub fn level(&self, text: &str, level_key: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match level_key {
            "critical" => text.bright_red().bold().to_string(),
            "urgent" => text.bright_yellow().to_string(),
            "moderate" => text.bright_cyan().to_string(),
            "low" => text.bright_green().to_string(),
            _ => text.bright_black().to_string(),
        }
    }
}

pub fn banner<W: Write>(out: &mut W, painter: Painter) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", painter.bold(&"=".repeat(RULE_WIDTH)))?;
    writeln!(out, "{}", painter.bold("  NEUTRAL MINDS - Medical Triage Expert System"))?;
    writeln!(out, "  Rule-Based Urgency Classification")?;
    writeln!(out, "{}", painter.bold(&"=".repeat(RULE_WIDTH)))?;
    Ok(())
}

pub fn disclaimer<W: Write>(out: &mut W, painter: Painter) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", painter.level(DISCLAIMER, "urgent"))?;
    writeln!(out)
}

pub fn symptom_menu<W: Write>(
    out: &mut W,
    painter: Painter,
    symptoms: &[SymptomEntry],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", painter.bold("Available Symptoms:"))?;
    writeln!(out, "{}", "-".repeat(50))?;
    for (i, entry) in symptoms.iter().enumerate() {
        writeln!(out, "  {:>2}. {} ({})", i + 1, entry.label, entry.key)?;
    }
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "  {}", painter.bold(" 0.  Done - Run triage"))?;
    writeln!(out, "  {}", painter.bold("-1.  Clear all symptoms"))?;
    writeln!(out, "  {}", painter.bold("-2.  Quit"))?;
    writeln!(out)
}

/// Result block: top level, optional lower levels, recommended action
pub fn triage_result<W: Write>(
    out: &mut W,
    painter: Painter,
    assessment: &Assessment,
    show_other_levels: bool,
) -> io::Result<()> {
    let key = assessment.level_key();
    let upper = key.to_uppercase();

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{}",
        painter.level(&format!("  TRIAGE RESULT:  {}", upper), key)
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        painter.bold(&format!("Triggered Rules (highest priority - {}):", upper))
    )?;
    for (i, explanation) in assessment.result.explanations().iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            painter.level(&format!("> Rule {}:", i + 1), key),
            explanation
        )?;
    }

    if show_other_levels {
        let others: Vec<_> = assessment.other_levels().collect();
        if !others.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", painter.bold("Other matching levels (lower priority):"))?;
            for findings in others {
                let level_key = findings.level.as_str();
                writeln!(out)?;
                writeln!(
                    out,
                    "  {}",
                    painter.level(&format!("[{}]", level_key.to_uppercase()), level_key)
                )?;
                for explanation in &findings.explanations {
                    writeln!(out, "    > {}", explanation)?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", painter.bold("Recommended Action:"))?;
    writeln!(
        out,
        "  {}",
        painter.level(assessment.result.recommended_action(), key)
    )?;
    writeln!(out)
}

pub fn symptom_list<W: Write>(out: &mut W, symptoms: &[SymptomEntry]) -> io::Result<()> {
    let width = symptoms.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for entry in symptoms {
        writeln!(out, "{:<width$}  {}", entry.key, entry.label, width = width)?;
    }
    Ok(())
}

pub fn rule_list<'a, W, I>(out: &mut W, painter: Painter, rules: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TriageRule>,
{
    for rule in rules {
        let level_key = rule.level.as_str();
        writeln!(
            out,
            "{} {}",
            painter.level(&format!("[{}]", level_key.to_uppercase()), level_key),
            painter.bold(&rule.id)
        )?;
        writeln!(out, "    when: {}", rule.condition.join(" + "))?;
        writeln!(out, "    {}", rule.explanation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use triage_common::{assess, KnowledgeBase};

    fn render(symptoms: &[&str], show_other_levels: bool) -> String {
        let kb = Arc::new(KnowledgeBase::builtin().unwrap());
        let assessment = assess(kb, symptoms).unwrap();
        let mut out = Vec::new();
        triage_result(&mut out, Painter::new(false), &assessment, show_other_levels).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_painter_adds_no_escape_codes() {
        let painter = Painter::new(false);
        assert_eq!(painter.level("x", "critical"), "x");
        assert_eq!(painter.bold("y"), "y");
    }

    #[test]
    fn test_color_painter_adds_escape_codes() {
        let painter = Painter::new(true);
        assert!(painter.level("x", "low").contains('\u{1b}'));
    }

    #[test]
    fn test_result_lists_other_levels() {
        let text = render(&["fever", "cough"], true);
        assert!(text.contains("TRIAGE RESULT:  MODERATE"));
        assert!(text.contains("Other matching levels"));
        assert!(text.contains("[LOW]"));
        assert!(text.contains("within 24-48 hours"));
    }

    #[test]
    fn test_result_top_only_hides_other_levels() {
        let text = render(&["fever", "cough"], false);
        assert!(!text.contains("Other matching levels"));
    }

    #[test]
    fn test_fallback_result() {
        let text = render(&[], true);
        assert!(text.contains("TRIAGE RESULT:  NONE"));
        assert!(text.contains("No matching rules"));
    }
}
