use crate::domain::model::PartId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomizerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Catalog parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Part {0} is not in the catalog")]
    UnknownPart(PartId),

    #[error("Model '{0}' is not in the catalog")]
    UnknownModel(String),

    #[error("Part {id} does not fit the {model}")]
    IncompatiblePart { id: PartId, model: String },

    #[error("No model selected")]
    NoModelSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CustomizerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Serialization,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::UnknownPart(_)
            | Self::UnknownModel(_)
            | Self::IncompatiblePart { .. }
            | Self::NoModelSelected => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the catalog path exists and is readable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different output format"
            }
            Self::TomlError(_) => "Make sure the catalog file is valid TOML",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the reported catalog or argument value and run again"
            }
            Self::UnknownPart(_) => "Run `moto-customizer parts` to list valid part ids",
            Self::IncompatiblePart { .. } => {
                "Run `moto-customizer parts --model <MODEL>` to list parts that fit"
            }
            Self::UnknownModel(_) | Self::NoModelSelected => {
                "Run `moto-customizer catalog` to list brands and models"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the catalog: {}", e),
            Self::TomlError(e) => format!("The catalog file is malformed: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("{} is required", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CustomizerError>;
