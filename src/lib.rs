pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::Console;
pub use crate::config::{toml_config::TomlConfig, OutputFormat, ResolvedConfig};
pub use crate::core::parser::{parse_number_list, parse_target, ParseOutcome};
pub use crate::core::search::{search, search_with_tolerance, CombinationSearch};
pub use crate::core::session::{SessionController, SessionSettings, SessionState};
pub use crate::domain::model::{Combination, NumberList, EXIT_SENTINEL, TOLERANCE};
pub use crate::utils::error::{ComboError, Result};
