use thiserror::Error;

/// Reasons a single personal number is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter a valid 10 or 12 digit personal number")]
    Format { digits: usize },

    #[error("Invalid date in personal number")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid personal number (checksum failed)")]
    Checksum { expected: u32, found: u32 },
}

impl ParseError {
    /// Short machine-friendly tag, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Format { .. } => "format",
            ParseError::InvalidDate { .. } => "invalid_date",
            ParseError::Checksum { .. } => "checksum",
        }
    }
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// A number was rejected; the run itself worked.
    Low,
    /// The run could not start because of bad settings.
    High,
    /// Reading or writing files failed.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CheckError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::Parse(_) => ErrorSeverity::Low,
            CheckError::ConfigError { .. }
            | CheckError::ConfigValidationError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => ErrorSeverity::High,
            CheckError::IoError(_) | CheckError::CsvError(_) | CheckError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::Parse(e) => e.to_string(),
            CheckError::IoError(e) => format!("Could not access file: {}", e),
            CheckError::CsvError(e) => format!("Could not read CSV input: {}", e),
            CheckError::SerializationError(e) => format!("Could not write report: {}", e),
            CheckError::ConfigError { message } => message.clone(),
            CheckError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CheckError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::Parse(ParseError::Format { .. }) => {
                "Use the form YYMMDD-NNNN or YYYYMMDD-NNNN"
            }
            CheckError::Parse(ParseError::InvalidDate { .. }) => {
                "Check the birth date part of the number"
            }
            CheckError::Parse(ParseError::Checksum { .. }) => {
                "Check the number for typing mistakes"
            }
            CheckError::IoError(_) => "Make sure the file exists and is readable",
            CheckError::CsvError(_) => "Make sure the input is valid CSV with a header row",
            CheckError::SerializationError(_) => "Check that the output directory is writable",
            _ => "Review the command line arguments or configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
