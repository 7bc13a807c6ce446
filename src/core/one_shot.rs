use crate::config::OutputFormat;
use crate::core::parser::{self, ParseOutcome};
use crate::core::reporter;
use crate::core::search::search_with_tolerance;
use crate::core::session::SessionSettings;
use crate::utils::error::Result;
use std::io::Write;

/// Runs a single search from command-line text, without prompting.
/// Returns the number of combinations written, or `None` when either
/// argument was the exit sentinel.
pub fn run_one_shot<W: Write>(
    target_raw: &str,
    numbers_raw: &str,
    settings: &SessionSettings,
    format: OutputFormat,
    out: &mut W,
) -> Result<Option<usize>> {
    let target = match parser::parse_target(target_raw)? {
        ParseOutcome::Value(target) => target,
        ParseOutcome::ExitRequested => return Ok(None),
    };
    let numbers = match parser::parse_number_list(numbers_raw)? {
        ParseOutcome::Value(numbers) => numbers,
        ParseOutcome::ExitRequested => return Ok(None),
    };

    if format == OutputFormat::Text {
        writeln!(out, "{}", reporter::numbers_received(&numbers))?;
        writeln!(out, "{}", reporter::searching(target))?;
    }

    let mut found = 0usize;
    for combination in search_with_tolerance(numbers.values(), target, settings.tolerance) {
        found += 1;
        match format {
            OutputFormat::Text => writeln!(out, "{}", reporter::combination_found(&combination))?,
            OutputFormat::Json => writeln!(out, "{}", reporter::combination_json(&combination)?)?,
        }
    }

    if format == OutputFormat::Text {
        if found > 0 {
            writeln!(out, "{}", reporter::all_shown())?;
        } else {
            writeln!(out, "{}", reporter::no_combination(target))?;
        }
    }

    tracing::info!(found, "One-shot search finished");
    Ok(Some(found))
}
