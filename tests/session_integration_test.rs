use anyhow::Result;
use combo_finder::core::reporter;
use combo_finder::{Console, SessionController, SessionSettings};
use std::io::Cursor;

/// Runs a full session over the given stdin text and returns stdout.
fn run_session(input: &str, settings: SessionSettings) -> Result<String> {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
    SessionController::new(&mut console, settings).run()?;
    Ok(String::from_utf8(console.into_output())?)
}

fn found_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|l| l.starts_with("Combinação encontrada"))
        .collect()
}

#[test]
fn test_round_streams_every_match_in_order() -> Result<()> {
    let output = run_session("5\n2;3;5\nsair\n", SessionSettings::default())?;

    assert!(output.starts_with(reporter::welcome()));
    assert!(output.contains("Números fornecidos: [2.0, 3.0, 5.0]"));
    assert!(output.contains("Procurando combinações que somam aproximadamente 5.0..."));
    assert_eq!(
        found_lines(&output),
        vec!["Combinação encontrada: [5.0]", "Combinação encontrada: [2.0, 3.0]"]
    );
    assert!(output.contains(reporter::all_shown()));
    assert!(output.trim_end().ends_with(reporter::farewell()));
    Ok(())
}

#[test]
fn test_no_match_names_target() -> Result<()> {
    let output = run_session("10\n1;2;3\nsair\n", SessionSettings::default())?;

    assert!(found_lines(&output).is_empty());
    assert!(output.contains("Não foi encontrada nenhuma combinação que soma 10.0."));
    assert!(!output.contains(reporter::all_shown()));
    Ok(())
}

#[test]
fn test_positional_duplicates() -> Result<()> {
    let output = run_session("3\n1,5;1,5;2\nsair\n", SessionSettings::default())?;
    assert_eq!(found_lines(&output), vec!["Combinação encontrada: [1.5, 1.5]"]);
    Ok(())
}

#[test]
fn test_sentinel_at_target_prompt_ends_immediately() -> Result<()> {
    let output = run_session("SAIR\n1;2;3\n", SessionSettings::default())?;

    assert!(!output.contains(reporter::NUMBERS_PROMPT));
    assert!(!output.contains("Números fornecidos"));
    assert!(output.trim_end().ends_with(reporter::farewell()));
    Ok(())
}

#[test]
fn test_sentinel_at_numbers_prompt_ends_immediately() -> Result<()> {
    let output = run_session("4\nsair\n4\n1;3\n", SessionSettings::default())?;

    assert!(!output.contains("Procurando"));
    assert_eq!(output.matches(reporter::TARGET_PROMPT).count(), 1);
    Ok(())
}

#[test]
fn test_invalid_list_rejected_whole_and_reprompted() -> Result<()> {
    let output = run_session("4\n1;abc;3\n1;3\nsair\n", SessionSettings::default())?;

    assert!(output.contains(reporter::invalid_numbers()));
    assert_eq!(output.matches(reporter::NUMBERS_PROMPT).count(), 2);
    assert_eq!(output.matches(reporter::TARGET_PROMPT).count(), 1);
    assert_eq!(found_lines(&output), vec!["Combinação encontrada: [1.0, 3.0]"]);
    Ok(())
}

#[test]
fn test_invalid_target_reprompted() -> Result<()> {
    let output = run_session("dez\n10\n10\nsair\n", SessionSettings::default())?;

    assert!(output.contains(reporter::invalid_target()));
    assert_eq!(output.matches(reporter::TARGET_PROMPT).count(), 2);
    assert_eq!(found_lines(&output), vec!["Combinação encontrada: [10.0]"]);
    Ok(())
}

#[test]
fn test_enter_starts_a_fresh_round() -> Result<()> {
    let output = run_session("5\n2;3;5\n\n1\n0,5;0,5\nSair\n", SessionSettings::default())?;

    assert_eq!(output.matches(reporter::TARGET_PROMPT).count(), 2);
    assert_eq!(
        found_lines(&output),
        vec![
            "Combinação encontrada: [5.0]",
            "Combinação encontrada: [2.0, 3.0]",
            "Combinação encontrada: [0.5, 0.5]",
        ]
    );
    Ok(())
}

#[test]
fn test_closed_input_ends_session() -> Result<()> {
    let output = run_session("5\n", SessionSettings::default())?;
    assert!(output.trim_end().ends_with(reporter::farewell()));
    Ok(())
}

#[test]
fn test_undecodable_target_is_reprompted() -> Result<()> {
    let mut console = Console::new(Cursor::new(b"\xff\xfe\n5\n2;3;5\nsair\n".to_vec()), Vec::new());
    SessionController::new(&mut console, SessionSettings::default()).run()?;
    let output = String::from_utf8(console.into_output())?;

    assert!(output.contains(reporter::invalid_target()));
    assert_eq!(output.matches(reporter::TARGET_PROMPT).count(), 2);
    assert_eq!(
        found_lines(&output),
        vec!["Combinação encontrada: [5.0]", "Combinação encontrada: [2.0, 3.0]"]
    );
    assert!(output.trim_end().ends_with(reporter::farewell()));
    Ok(())
}
