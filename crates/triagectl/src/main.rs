//! triagectl - Neutral Minds triage CLI
//!
//! Interactive symptom menu by default; subcommands for scripted use.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing::debug;
use triage_common::TriageSession;
use triagectl::cli::{Cli, Commands};
use triagectl::commands::{self, Context};
use triagectl::config::CtlConfig;
use triagectl::{errors, interactive, logging};

fn run(cli: Cli) -> Result<()> {
    let config = CtlConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_level, cli.verbose);
    debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();
    let load_context = || Context::from_config(&config, cli.knowledge_base.as_deref(), cli.no_color);

    match cli.command {
        None => {
            let ctx = load_context()?;
            let session = TriageSession::new(Arc::clone(&ctx.kb));
            interactive::run(
                &session,
                ctx.painter,
                ctx.show_other_levels,
                io::stdin().lock(),
                stdout,
            )
        }
        Some(Commands::Assess {
            symptoms,
            json,
            top_only,
        }) => commands::assess_symptoms(&load_context()?, &symptoms, json, top_only, &mut stdout),
        Some(Commands::Symptoms { json }) => {
            commands::list_symptoms(&load_context()?, json, &mut stdout)
        }
        Some(Commands::Rules { level, json }) => {
            commands::list_rules(&load_context()?, level, json, &mut stdout)
        }
        // Validates its own file; the configured knowledge base is not loaded
        Some(Commands::Check { path }) => commands::check_knowledge_base(&path, &mut stdout),
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => errors::EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            errors::exit_code_for(&e)
        }
    };

    std::process::exit(code);
}
