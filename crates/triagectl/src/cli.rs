//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triage_common::PriorityLevel;

/// Neutral Minds triage CLI
#[derive(Parser, Debug)]
#[command(name = "triagectl")]
#[command(about = "Neutral Minds - rule-based medical triage (demonstration only)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (overrides $TRIAGECTL_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base TOML file to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub knowledge_base: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand (if not provided, starts the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Triage a list of symptom keys
    Assess {
        /// Symptom keys, e.g. chest_pain fever
        #[arg(required = true)]
        symptoms: Vec<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,

        /// Show only the highest matching level
        #[arg(long)]
        top_only: bool,
    },

    /// List recognized symptoms
    Symptoms {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// List triage rules
    Rules {
        /// Only rules at this level (critical, urgent, moderate, low)
        #[arg(long)]
        level: Option<PriorityLevel>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Validate a knowledge base file
    Check {
        /// Path to the TOML knowledge base
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["triagectl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_assess_requires_symptoms() {
        assert!(Cli::try_parse_from(["triagectl", "assess"]).is_err());

        let cli = Cli::try_parse_from(["triagectl", "assess", "fever", "cough", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Assess { symptoms, json, top_only }) => {
                assert_eq!(symptoms, vec!["fever", "cough"]);
                assert!(json);
                assert!(!top_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rules_level_parses() {
        let cli = Cli::try_parse_from(["triagectl", "rules", "--level", "Urgent"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Rules { level: Some(PriorityLevel::Urgent), .. })
        ));
        assert!(Cli::try_parse_from(["triagectl", "rules", "--level", "none"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["triagectl", "symptoms", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}
