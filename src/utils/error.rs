use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Unexpected content format: {message}")]
    ContentFormatError { message: String },

    #[error("Content source '{source_name}' responded with status {status}")]
    SourceError { source_name: String, status: u16 },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::SourceError { .. } => ErrorCategory::Network,
            Self::SerializationError(_) | Self::ContentFormatError { .. } | Self::TemplateError(_) => {
                ErrorCategory::Data
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check that the content endpoint is reachable and retry",
            Self::SourceError { .. } => "Verify the content endpoint URL and that the CMS is up",
            Self::SerializationError(_) | Self::ContentFormatError { .. } => {
                "Make sure the content source returns blog records as JSON"
            }
            Self::TemplateError(_) => "The page template failed to render; check the logs",
            Self::IoError(_) => "Check file paths and permissions",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration flags or TOML file and fix the reported field"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load shop content: {}", self),
            ErrorCategory::Data => format!("Shop content could not be processed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
