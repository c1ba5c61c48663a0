use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PayrollError {
    /// Short message meant for the operator rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PayrollError::IoError(e) => format!("Console I/O failed: {}", e),
            PayrollError::InputClosed => "Input ended before the session finished".to_string(),
            PayrollError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            PayrollError::ConfigValidationError { field, message } => {
                format!("Configuration is not valid ({}): {}", field, message)
            }
            PayrollError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is not valid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PayrollError::IoError(_) => "Check that the terminal is still attached and retry",
            PayrollError::InputClosed => {
                "Run the program interactively or provide the full script on stdin"
            }
            PayrollError::ConfigError { .. } => "Make sure the config file exists and is readable",
            PayrollError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            PayrollError::InvalidConfigValueError { .. } => {
                "Adjust the setting to an allowed value"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PayrollError::ConfigError { .. }
                | PayrollError::ConfigValidationError { .. }
                | PayrollError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PayrollError>;
