pub mod toml_config;

use crate::core::session::SessionSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_float, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// How one-shot mode prints its matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "combo-finder")]
#[command(about = "Find every subset of a number list whose sum approximates a target")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the match tolerance (default 0.01)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Target for a single non-interactive search, e.g. "12,5"
    #[arg(long, allow_hyphen_values = true, requires = "numbers")]
    pub target: Option<String>,

    /// Numbers for a single non-interactive search, e.g. "1,5;2;9"
    #[arg(long, allow_hyphen_values = true, requires = "target")]
    pub numbers: Option<String>,

    /// Output format of the non-interactive search
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

/// Everything the binary needs after merging CLI flags over the TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub session: SessionSettings,
    pub log_directive: Option<String>,
    pub log_json: bool,
    pub verbose: bool,
}

impl ResolvedConfig {
    /// CLI flags win over the file, the file wins over defaults.
    pub fn merge(
        file: Option<&TomlConfig>,
        tolerance: Option<f64>,
        verbose: bool,
        log_json: bool,
    ) -> Self {
        let defaults = SessionSettings::default();
        let session = SessionSettings {
            tolerance: tolerance
                .or_else(|| file.and_then(|f| f.search.tolerance))
                .unwrap_or(defaults.tolerance),
            large_input_warning: file
                .and_then(|f| f.search.large_input_warning)
                .unwrap_or(defaults.large_input_warning),
        };

        Self {
            session,
            log_directive: file.and_then(|f| f.logging.level.clone()),
            log_json: log_json || file.map(TomlConfig::is_json_logging).unwrap_or(false),
            verbose,
        }
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_float("tolerance", self.session.tolerance)?;
        crate::utils::validation::validate_positive_number(
            "large_input_warning",
            self.session.large_input_warning,
            1,
        )
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn is_one_shot(&self) -> bool {
        self.target.is_some() || self.numbers.is_some()
    }

    /// Loads the TOML file when one was given and merges it under the flags.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let resolved =
            ResolvedConfig::merge(file.as_ref(), self.tolerance, self.verbose, self.log_json);
        resolved.validate()?;
        Ok(resolved)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tolerance) = self.tolerance {
            validate_positive_float("--tolerance", tolerance)?;
        }
        if self.is_one_shot() {
            crate::utils::validation::validate_required_field("--target", &self.target)?;
            crate::utils::validation::validate_required_field("--numbers", &self.numbers)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults() {
        let resolved = ResolvedConfig::merge(None, None, false, false);
        assert_eq!(resolved.session, SessionSettings::default());
        assert_eq!(resolved.session.tolerance, 0.01);
        assert!(!resolved.log_json);
        assert!(resolved.log_directive.is_none());
    }

    #[test]
    fn test_merge_precedence() {
        let file = TomlConfig::from_toml_str(
            "[search]\ntolerance = 0.5\nlarge_input_warning = 8\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let from_file = ResolvedConfig::merge(Some(&file), None, false, false);
        assert_eq!(from_file.session.tolerance, 0.5);
        assert_eq!(from_file.session.large_input_warning, 8);
        assert!(from_file.log_json);

        let overridden = ResolvedConfig::merge(Some(&file), Some(0.2), true, false);
        assert_eq!(overridden.session.tolerance, 0.2);
        assert!(overridden.verbose);
    }

    #[test]
    fn test_resolved_validation() {
        let resolved = ResolvedConfig::merge(None, Some(0.0), false, false);
        assert!(resolved.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from([
            "combo-finder",
            "--target",
            "-5",
            "--numbers",
            "-2;-3",
            "--format",
            "json",
        ]);
        assert!(cli.is_one_shot());
        assert_eq!(cli.target.as_deref(), Some("-5"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_target_requires_numbers() {
        let parsed = CliConfig::try_parse_from(["combo-finder", "--target", "5"]);
        assert!(parsed.is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_resolve_with_file() {
        use std::io::Write;
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file.write_all(b"[search]\ntolerance = 0.3\n").unwrap();

        let cli = CliConfig::parse_from([
            "combo-finder",
            "--config",
            temp_file.path().to_str().unwrap(),
        ]);
        let resolved = cli.resolve().unwrap();
        assert_eq!(resolved.session.tolerance, 0.3);
        assert!(!cli.is_one_shot());
    }
}
