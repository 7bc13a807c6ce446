use crate::core::parser::{self, ParseOutcome};
use crate::core::reporter;
use crate::core::search::search_with_tolerance;
use crate::domain::model::{NumberList, TOLERANCE};
use crate::domain::ports::SessionIo;
use crate::utils::error::Result;

pub const DEFAULT_LARGE_INPUT_WARNING: usize = 20;

/// Resolved settings the controller runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub tolerance: f64,
    /// Number-list length above which a warning about exponential work is logged.
    pub large_input_warning: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            large_input_warning: DEFAULT_LARGE_INPUT_WARNING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingTarget,
    AwaitingNumbers { target: f64 },
    Searching { target: f64, numbers: NumberList },
    Reporting { target: f64, found: bool },
    AwaitingContinueOrExit,
    Terminated,
}

/// Drives rounds of target -> numbers -> search -> report -> continue?
/// until the user types the exit sentinel or the input closes.
pub struct SessionController<IO: SessionIo> {
    io: IO,
    settings: SessionSettings,
}

impl<IO: SessionIo> SessionController<IO> {
    pub fn new(io: IO, settings: SessionSettings) -> Self {
        Self { io, settings }
    }

    pub fn into_io(self) -> IO {
        self.io
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!(tolerance = self.settings.tolerance, "Starting session");
        self.io.write_line(reporter::welcome())?;

        let mut state = SessionState::AwaitingTarget;
        while state != SessionState::Terminated {
            state = self.step(state)?;
        }

        self.io.write_line(reporter::farewell())?;
        tracing::info!("Session terminated");
        Ok(())
    }

    /// Performs the work of `state` and returns the state to move to.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        tracing::debug!(?state, "session step");

        let next = match state {
            SessionState::AwaitingTarget => {
                self.io.write_line("")?;
                let Some(raw) = self.io.read_line(reporter::TARGET_PROMPT)? else {
                    return Ok(SessionState::Terminated);
                };
                match parser::parse_target(&raw) {
                    Ok(ParseOutcome::ExitRequested) => SessionState::Terminated,
                    Ok(ParseOutcome::Value(target)) => SessionState::AwaitingNumbers { target },
                    Err(e) => {
                        tracing::warn!("Rejected target input: {}", e);
                        self.io.write_line(reporter::invalid_target())?;
                        SessionState::AwaitingTarget
                    }
                }
            }

            SessionState::AwaitingNumbers { target } => {
                let Some(raw) = self.io.read_line(reporter::NUMBERS_PROMPT)? else {
                    return Ok(SessionState::Terminated);
                };
                match parser::parse_number_list(&raw) {
                    Ok(ParseOutcome::ExitRequested) => SessionState::Terminated,
                    Ok(ParseOutcome::Value(numbers)) => {
                        self.io.write_line(&reporter::numbers_received(&numbers))?;
                        SessionState::Searching { target, numbers }
                    }
                    Err(e) => {
                        tracing::warn!("Rejected number list: {}", e);
                        self.io.write_line(reporter::invalid_numbers())?;
                        SessionState::AwaitingNumbers { target }
                    }
                }
            }

            SessionState::Searching { target, numbers } => {
                if numbers.len() > self.settings.large_input_warning {
                    tracing::warn!(
                        "{} numbers means {} candidate subsets; the search may take a while",
                        numbers.len(),
                        candidate_count(numbers.len())
                    );
                }

                self.io.write_line(&reporter::searching(target))?;
                let mut found = 0usize;
                for combination in
                    search_with_tolerance(numbers.values(), target, self.settings.tolerance)
                {
                    found += 1;
                    self.io.write_line(&reporter::combination_found(&combination))?;
                }
                tracing::debug!(found, "search finished");

                SessionState::Reporting {
                    target,
                    found: found > 0,
                }
            }

            SessionState::Reporting { target, found } => {
                if found {
                    self.io.write_line(reporter::all_shown())?;
                } else {
                    self.io.write_line(&reporter::no_combination(target))?;
                }
                SessionState::AwaitingContinueOrExit
            }

            SessionState::AwaitingContinueOrExit => {
                self.io.write_line("")?;
                self.io.write_line(reporter::CONTINUE_PROMPT)?;
                match self.io.read_line("")? {
                    Some(raw) if !parser::is_exit_sentinel(&raw) => SessionState::AwaitingTarget,
                    _ => SessionState::Terminated,
                }
            }

            SessionState::Terminated => SessionState::Terminated,
        };

        Ok(next)
    }
}

/// 2^n - 1, saturating.
fn candidate_count(n: usize) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}
