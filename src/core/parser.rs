use crate::domain::model::{NumberList, EXIT_SENTINEL};
use crate::utils::error::{ComboError, Result};

/// What a prompt answer turned into, when it was not invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    Value(T),
    ExitRequested,
}

pub fn is_exit_sentinel(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Decimal-comma text to `f64` ("12,5" -> 12.5).
fn parse_decimal(raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| ComboError::invalid_number(raw.trim()))
}

pub fn parse_target(raw: &str) -> Result<ParseOutcome<f64>> {
    if is_exit_sentinel(raw) {
        return Ok(ParseOutcome::ExitRequested);
    }
    parse_decimal(raw).map(ParseOutcome::Value)
}

/// Semicolon-separated decimal-comma list. One bad segment rejects the list.
pub fn parse_number_list(raw: &str) -> Result<ParseOutcome<NumberList>> {
    if is_exit_sentinel(raw) {
        return Ok(ParseOutcome::ExitRequested);
    }

    let values = raw
        .split(';')
        .map(parse_decimal)
        .collect::<Result<Vec<f64>>>()
        .map_err(|_| ComboError::invalid_number(raw.trim()))?;

    Ok(ParseOutcome::Value(NumberList::new(values)))
}
