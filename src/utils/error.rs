use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Dataset request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Dataset source returned status {status} for {location}")]
    SourceStatusError { location: String, status: u16 },

    #[error("Malformed dataset: {message}")]
    DatasetError { message: String },

    #[error("Malformed course at position {index}: {reason}")]
    InvalidCourseError { index: usize, reason: String },

    #[error("Duplicate course id {id} at positions {first} and {second}")]
    DuplicateCourseIdError { id: u64, first: usize, second: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dataset,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CatalogError::SerializationError(_)
            | CatalogError::DatasetError { .. }
            | CatalogError::InvalidCourseError { .. }
            | CatalogError::DuplicateCourseIdError { .. } => ErrorCategory::Dataset,
            CatalogError::HttpError(_) | CatalogError::SourceStatusError { .. } => {
                ErrorCategory::Network
            }
            CatalogError::IoError(_) | CatalogError::BindError { .. } => ErrorCategory::System,
        }
    }

    /// 決定錯誤嚴重程度，main 依此決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Dataset => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read a required file: {}", e),
            CatalogError::SerializationError(e) => {
                format!("The course dataset is not valid JSON: {}", e)
            }
            CatalogError::HttpError(e) => format!("Could not download the course dataset: {}", e),
            CatalogError::SourceStatusError { location, status } => {
                format!("Dataset server {} answered with HTTP {}", location, status)
            }
            CatalogError::DatasetError { message } => {
                format!("The course dataset is malformed: {}", message)
            }
            CatalogError::InvalidCourseError { index, reason } => {
                format!("Course #{} in the dataset is invalid: {}", index, reason)
            }
            CatalogError::DuplicateCourseIdError { id, .. } => {
                format!("Course id {} appears more than once in the dataset", id)
            }
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CatalogError::ConfigValidationError { field, message } => {
                format!("Setting '{}' could not be validated: {}", field, message)
            }
            CatalogError::BindError { address, .. } => {
                format!("Could not listen on {}", address)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the dataset and config paths exist and are readable",
            CatalogError::SerializationError(_) | CatalogError::DatasetError { .. } => {
                "The dataset must be a JSON array of course objects"
            }
            CatalogError::InvalidCourseError { .. } => {
                "Every course needs a positive integer 'id' and a non-empty 'title'"
            }
            CatalogError::DuplicateCourseIdError { .. } => "Give every course a unique 'id'",
            CatalogError::HttpError(_) | CatalogError::SourceStatusError { .. } => {
                "Verify the dataset URL is reachable from this host"
            }
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::ConfigValidationError { .. } => {
                "Review the TOML config file and command line flags"
            }
            CatalogError::BindError { .. } => {
                "Make sure the port is free or choose another one with --port"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
