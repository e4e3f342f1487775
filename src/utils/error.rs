use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Failed to acquire document from {source_name}: {message}")]
    AcquisitionError {
        source_name: String,
        message: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Acquisition,
    Configuration,
    Storage,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) | ScrapeError::AcquisitionError { .. } => {
                ErrorCategory::Acquisition
            }
            ScrapeError::IoError(_) => ErrorCategory::Storage,
            ScrapeError::SerializationError(_) => ErrorCategory::Serialization,
            ScrapeError::PatternError(_)
            | ScrapeError::SelectorError { .. }
            | ScrapeError::MissingConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the page may come back on the next run
            ErrorCategory::Acquisition => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::HttpError(_) => {
                "Check network connectivity and that the league URL is reachable"
            }
            ScrapeError::AcquisitionError { .. } => {
                "The site may be blocking plain HTTP clients; save the page in a browser and pass it with --input"
            }
            ScrapeError::IoError(_) => "Check that the output directory exists and is writable",
            ScrapeError::SerializationError(_) => "Report this as a bug: the record could not be encoded",
            ScrapeError::PatternError(_) => "Fix the regular expression in the [extraction] section",
            ScrapeError::SelectorError { .. } => "Fix the CSS selector in extraction.team_selectors",
            ScrapeError::MissingConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::ConfigValidationError { .. } => {
                "Review the configuration file and command line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Acquisition => format!("Could not download the league page: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Storage => format!("Could not save the league record: {}", self),
            ErrorCategory::Serialization => format!("Could not encode the league record: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
