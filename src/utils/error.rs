use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarastoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Step {step} refers to unknown store '{store}'")]
    UnknownStoreError { step: usize, store: String },

    #[error("Report error: {message}")]
    ReportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Scenario,
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VarastoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VarastoError::IoError(_) => ErrorCategory::Io,
            VarastoError::TomlError(_)
            | VarastoError::ConfigValidationError { .. }
            | VarastoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            VarastoError::UnknownStoreError { .. } => ErrorCategory::Scenario,
            VarastoError::CsvError(_)
            | VarastoError::SerializationError(_)
            | VarastoError::ReportError { .. } => ErrorCategory::Report,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Report => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Scenario => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            VarastoError::IoError(e) => format!("Could not access a file: {}", e),
            VarastoError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            VarastoError::ConfigValidationError { field, .. }
            | VarastoError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value '{}' is not usable", field)
            }
            VarastoError::UnknownStoreError { store, .. } => {
                format!("The scenario uses a store named '{}' that is never declared", store)
            }
            VarastoError::CsvError(_)
            | VarastoError::SerializationError(_)
            | VarastoError::ReportError { .. } => "The report could not be written".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and that you have permission to use it",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Scenario => "Declare every store under [[stores]] before using it in [[steps]]",
            ErrorCategory::Report => "Check the output directory or choose another report format",
        }
    }
}

pub type Result<T> = std::result::Result<T, VarastoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_store_is_scenario_error() {
        let err = VarastoError::UnknownStoreError {
            step: 3,
            store: "wine".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Scenario);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Step 3 refers to unknown store 'wine'");
        assert!(err.user_friendly_message().contains("wine"));
    }

    #[test]
    fn test_invalid_value_names_the_field() {
        let err = VarastoError::InvalidConfigValueError {
            field: "output.path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.user_friendly_message(),
            "The configuration value 'output.path' is not usable"
        );
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: VarastoError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
