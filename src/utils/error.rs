use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, DescribeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DescribeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DescribeError::IoError(_) => ErrorCategory::Io,
            DescribeError::ConfigError { .. }
            | DescribeError::InvalidConfigValueError { .. }
            | DescribeError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DescribeError::IoError(_) => ErrorSeverity::High,
            DescribeError::ConfigError { .. }
            | DescribeError::InvalidConfigValueError { .. }
            | DescribeError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DescribeError::IoError(_) => {
                "Check that the input file exists and the output path is writable".to_string()
            }
            DescribeError::ConfigError { .. } => {
                "Review the command line arguments and try again".to_string()
            }
            DescribeError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for --{}", field)
            }
            DescribeError::MissingConfigError { field } => {
                format!("Provide the required --{} argument", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DescribeError::IoError(e) => format!("Could not read or write data: {}", e),
            DescribeError::ConfigError { message } => {
                format!("The configuration is invalid: {}", message)
            }
            DescribeError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value given for '{}' is invalid: {}", field, reason)
            }
            DescribeError::MissingConfigError { field } => {
                format!("The required option '{}' was not provided", field)
            }
        }
    }
}
