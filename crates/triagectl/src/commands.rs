//! Subcommand handlers

use crate::config::CtlConfig;
use crate::display::{self, Painter};
use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use triage_common::{assess, KnowledgeBase, PriorityLevel};

/// What every command needs: the catalogs and output preferences
pub struct Context {
    pub kb: Arc<KnowledgeBase>,
    pub painter: Painter,
    pub show_other_levels: bool,
}

impl Context {
    /// Resolve the knowledge base (flag, then config, then built-in)
    pub fn from_config(
        config: &CtlConfig,
        knowledge_base: Option<&Path>,
        no_color: bool,
    ) -> Result<Self> {
        let kb = match knowledge_base.or(config.knowledge_base.as_deref()) {
            Some(path) => KnowledgeBase::load(path)
                .with_context(|| format!("Failed to load knowledge base {}", path.display()))?,
            None => KnowledgeBase::builtin().context("Built-in knowledge base is invalid")?,
        };

        Ok(Self {
            kb: Arc::new(kb),
            painter: Painter::new(config.color && !no_color),
            show_other_levels: config.show_all_levels,
        })
    }
}

pub fn assess_symptoms<W: Write>(
    ctx: &Context,
    symptoms: &[String],
    json: bool,
    top_only: bool,
    out: &mut W,
) -> Result<()> {
    let assessment = assess(Arc::clone(&ctx.kb), symptoms)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&assessment)?)?;
        return Ok(());
    }

    display::triage_result(
        out,
        ctx.painter,
        &assessment,
        ctx.show_other_levels && !top_only,
    )?;
    display::disclaimer(out, ctx.painter)?;
    Ok(())
}

pub fn list_symptoms<W: Write>(ctx: &Context, json: bool, out: &mut W) -> Result<()> {
    let symptoms = ctx.kb.symptoms().list_available_symptoms();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(symptoms)?)?;
    } else {
        display::symptom_list(out, symptoms)?;
    }
    Ok(())
}

pub fn list_rules<W: Write>(
    ctx: &Context,
    level: Option<PriorityLevel>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let rules: Vec<_> = ctx
        .kb
        .rules()
        .rules()
        .iter()
        .filter(|r| level.map_or(true, |l| r.level == l))
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rules)?)?;
    } else {
        display::rule_list(out, ctx.painter, rules)?;
    }
    Ok(())
}

/// Validate a knowledge-base file and print a summary
pub fn check_knowledge_base<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let kb = KnowledgeBase::load(path)
        .with_context(|| format!("Knowledge base {} is invalid", path.display()))?;

    let per_level: Vec<String> = PriorityLevel::ALL
        .iter()
        .map(|&level| format!("{} {}", kb.rules().rules_for_level(level).count(), level))
        .collect();

    info!("Knowledge base {} passed validation", path.display());
    writeln!(
        out,
        "OK: {} symptoms, {} rules ({})",
        kb.symptoms().len(),
        kb.rules().len(),
        per_level.join(", ")
    )?;
    Ok(())
}
