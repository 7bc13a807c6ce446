use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComboError {
    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl ComboError {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidNumber { .. } => ErrorCategory::Input,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code used by the binary when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidNumber { input } => {
                format!("'{}' não é um número válido.", input)
            }
            Self::IoError(e) => format!("Falha de entrada/saída: {}", e),
            Self::SerializationError(e) => format!("Falha ao gerar JSON: {}", e),
            Self::TomlError(e) => format!("Arquivo de configuração inválido: {}", e),
            Self::ConfigError { message } => format!("Configuração inválida: {}", message),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Valor '{}' inválido para '{}': {}", value, field, reason),
            Self::MissingConfigError { field } => {
                format!("Campo de configuração ausente: '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use vírgula para decimais e ponto e vírgula (;) entre números.",
            ErrorCategory::Configuration => "Revise o arquivo TOML e as opções de linha de comando.",
            ErrorCategory::System => "Verifique se a entrada e a saída padrão ainda estão disponíveis.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ComboError>;
