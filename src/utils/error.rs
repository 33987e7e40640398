use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        employee_ids: Vec<String>,
    },

    #[error("Export error: {message}")]
    ExportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        RosterError::ValidationError {
            message: message.into(),
            employee_ids: Vec::new(),
        }
    }

    pub fn validation_with_ids(message: impl Into<String>, employee_ids: Vec<String>) -> Self {
        RosterError::ValidationError {
            message: message.into(),
            employee_ids,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RosterError::ConfigError {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        RosterError::ExportError {
            message: message.into(),
        }
    }

    /// Employee ids named by a validation failure; empty for every other kind.
    pub fn employee_ids(&self) -> &[String] {
        match self {
            RosterError::ValidationError { employee_ids, .. } => employee_ids,
            _ => &[],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::IoError(_) => ErrorCategory::Io,
            RosterError::CsvError(_) | RosterError::ExportError { .. } => ErrorCategory::Export,
            RosterError::SerializationError(_)
            | RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Export => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Validation => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::IoError(e) => format!("Could not read or write a file: {}", e),
            RosterError::CsvError(e) => format!("Failed to write the CSV report: {}", e),
            RosterError::SerializationError(e) => format!("The pool file is not valid JSON: {}", e),
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
            RosterError::ValidationError { message, .. } => {
                format!("Cannot assign reviewers: {}", message)
            }
            RosterError::ExportError { message } => format!("Export failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::IoError(_) => "Check that the paths exist and are readable/writable",
            RosterError::CsvError(_) | RosterError::ExportError { .. } => {
                "Check the output path and that the assignment is not empty"
            }
            RosterError::SerializationError(_) => {
                "Fix the JSON syntax of the pool file (expected a `people` array or `poolA`/`poolB` sections)"
            }
            RosterError::ConfigError { .. } | RosterError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML run file"
            }
            RosterError::ValidationError { .. } => {
                "Fix the people lists (unique, non-empty employee ids; pools must not overlap) and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_ids() {
        let err = RosterError::validation_with_ids("overlap: E2", vec!["E2".to_string()]);
        assert_eq!(err.employee_ids(), ["E2".to_string()]);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Validation error: overlap: E2");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = RosterError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.employee_ids().is_empty());
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = RosterError::config("bad run file");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.severity() < ErrorSeverity::Critical);
    }
}
