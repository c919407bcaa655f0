//! Interactive symptom menu
//!
//! Each input line holds comma-separated entries. An entry is a menu
//! number, a symptom key (spaces allowed in place of underscores), or a
//! command: `0` runs triage, `-1` clears, `-2` quits.

use crate::display::{self, Painter};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;
use triage_common::{SymptomCatalog, TriageSession};

const GOODBYE: &str = "Goodbye! Remember: consult a real medical professional.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Add(String),
    RunTriage,
    Clear,
    Quit,
    InvalidNumber(i64),
    Unknown(String),
}

/// Parse one menu line against `catalog`
pub fn parse_menu_input(line: &str, catalog: &SymptomCatalog) -> Vec<MenuCommand> {
    line.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse::<i64>() {
            Ok(0) => MenuCommand::RunTriage,
            Ok(-1) => MenuCommand::Clear,
            Ok(-2) => MenuCommand::Quit,
            Ok(n) if n >= 1 => match usize::try_from(n - 1).ok().and_then(|i| catalog.get(i)) {
                Some(symptom) => MenuCommand::Add(symptom.key.clone()),
                None => MenuCommand::InvalidNumber(n),
            },
            Ok(n) => MenuCommand::InvalidNumber(n),
            Err(_) => {
                let key = entry.to_lowercase().replace(' ', "_");
                if catalog.contains(&key) {
                    MenuCommand::Add(key)
                } else {
                    MenuCommand::Unknown(entry.to_string())
                }
            }
        })
        .collect()
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until the user quits or input ends
pub fn run<R: BufRead, W: Write>(
    session: &TriageSession,
    painter: Painter,
    show_other_levels: bool,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let catalog = session.knowledge_base().symptoms();

    display::banner(&mut out, painter)?;
    display::disclaimer(&mut out, painter)?;

    loop {
        let active = session.list_active_symptoms();
        if !active.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", painter.bold("Currently selected symptoms:"))?;
            for key in &active {
                let label = catalog.label(key).unwrap_or(key);
                writeln!(out, "  + {} ({})", label, key)?;
            }
        }

        display::symptom_menu(&mut out, painter, session.list_available_symptoms())?;

        let line = match prompt(
            &mut input,
            &mut out,
            &painter.bold("Enter symptom number(s) (comma-separated) or command: "),
        )? {
            Some(line) => line,
            None => {
                writeln!(out, "\n\nGoodbye!")?;
                return Ok(());
            }
        };

        let mut run_triage = false;
        for command in parse_menu_input(&line, catalog) {
            debug!(?command, "menu command");
            match command {
                MenuCommand::Add(key) => {
                    let label = catalog.label(&key).unwrap_or(&key).to_string();
                    match session.add_symptom(&key) {
                        Ok(true) => writeln!(out, "  + Added: {}", label)?,
                        Ok(false) => writeln!(out, "  i Already selected: {}", label)?,
                        Err(e) => writeln!(out, "  x {}", e)?,
                    }
                }
                MenuCommand::RunTriage => run_triage = true,
                MenuCommand::Clear => {
                    session.clear_symptoms();
                    writeln!(out, "  + All symptoms cleared.")?;
                }
                MenuCommand::Quit => {
                    writeln!(out, "\n{}\n", GOODBYE)?;
                    return Ok(());
                }
                MenuCommand::InvalidNumber(n) => writeln!(out, "  x Invalid number: {}", n)?,
                MenuCommand::Unknown(entry) => writeln!(out, "  x Unknown input: '{}'", entry)?,
            }
        }

        if !run_triage {
            continue;
        }

        if session.list_active_symptoms().is_empty() {
            writeln!(out, "\n  ! No symptoms selected. Please add at least one symptom.")?;
            continue;
        }

        let assessment = session.assessment();
        display::triage_result(&mut out, painter, &assessment, show_other_levels)?;
        display::disclaimer(&mut out, painter)?;

        let again = prompt(&mut input, &mut out, &painter.bold("Run another triage? (y/n): "))?;
        match again.as_deref().map(str::to_lowercase).as_deref() {
            Some("y") | Some("yes") => {
                session.clear_symptoms();
                writeln!(out, "\n  + Symptoms cleared for new assessment.\n")?;
            }
            _ => {
                writeln!(out, "\n{}\n", GOODBYE)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;
    use triage_common::KnowledgeBase;

    fn session() -> TriageSession {
        TriageSession::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    fn drive(script: &str) -> (TriageSession, String) {
        let session = session();
        let mut out = Vec::new();
        run(&session, Painter::new(false), true, Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_numbers_keys_and_commands() {
        let catalog = SymptomCatalog::builtin().unwrap();
        let commands = parse_menu_input(" 1, sore throat ,0, -1,-2, 99, -7, nope ,", &catalog);
        assert_eq!(
            commands,
            vec![
                MenuCommand::Add("chest_pain".to_string()),
                MenuCommand::Add("sore_throat".to_string()),
                MenuCommand::RunTriage,
                MenuCommand::Clear,
                MenuCommand::Quit,
                MenuCommand::InvalidNumber(99),
                MenuCommand::InvalidNumber(-7),
                MenuCommand::Unknown("nope".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_huge_number_is_invalid() {
        let catalog = SymptomCatalog::builtin().unwrap();
        assert_eq!(
            parse_menu_input(&i64::MAX.to_string(), &catalog),
            vec![MenuCommand::InvalidNumber(i64::MAX)]
        );
        let wraps_on_32_bit = (1i64 << 32) + 1;
        assert_eq!(
            parse_menu_input(&wraps_on_32_bit.to_string(), &catalog),
            vec![MenuCommand::InvalidNumber(wraps_on_32_bit)]
        );
    }

    #[test]
    fn test_parse_empty_line() {
        let catalog = SymptomCatalog::builtin().unwrap();
        assert!(parse_menu_input("   ", &catalog).is_empty());
    }

    #[test]
    fn test_triage_then_quit() {
        let (_, text) = drive("fever, cough\n0\nn\n");
        assert!(text.contains("+ Added: Fever"));
        assert!(text.contains("TRIAGE RESULT:  MODERATE"));
        assert!(text.contains("[LOW]"));
        assert!(text.contains(GOODBYE));
    }

    #[test]
    fn test_repeat_assessment_clears_symptoms() {
        let (session, text) = drive("seizure,0\ny\nheadache\n0\nno\n");
        assert!(text.contains("TRIAGE RESULT:  CRITICAL"));
        assert!(text.contains("Symptoms cleared for new assessment"));
        assert!(text.contains("TRIAGE RESULT:  LOW"));
        assert_eq!(session.list_active_symptoms(), vec!["headache".to_string()]);
    }

    #[test]
    fn test_run_without_symptoms_warns() {
        let (_, text) = drive("0\n-2\n");
        assert!(text.contains("No symptoms selected"));
        assert!(!text.contains("TRIAGE RESULT"));
    }

    #[test]
    fn test_duplicate_and_unknown_entries() {
        let (session, text) = drive("fever\nfever, bogus\n");
        assert!(text.contains("Already selected: Fever"));
        assert!(text.contains("Unknown input: 'bogus'"));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(session.list_active_symptoms(), vec!["fever".to_string()]);
    }

    #[test]
    fn test_clear_command() {
        let (session, text) = drive("fever, cough\n-1\n-2\n");
        assert!(text.contains("All symptoms cleared"));
        assert!(session.list_active_symptoms().is_empty());
    }
}
