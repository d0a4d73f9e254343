use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Repository error: {message}")]
    RepositoryError { message: String },

    #[error("Notification error: {message}")]
    NotificationError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Persistence,
    Notification,
    Validation,
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

impl OnboardingError {
    pub fn repository(message: impl Into<String>) -> Self {
        Self::RepositoryError {
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::NotificationError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Reclassifies a field-level failure as invalid account data.
    pub fn into_validation(self) -> Self {
        match self {
            Self::InvalidConfigValueError { field, reason, .. } => {
                Self::validation(format!("{}: {}", field, reason))
            }
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RepositoryError { .. } => ErrorCategory::Persistence,
            Self::NotificationError { .. } => ErrorCategory::Notification,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the account was persisted, only the welcome message is missing
            ErrorCategory::Notification => ErrorSeverity::Low,
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Persistence => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RepositoryError { message } => {
                format!("The account could not be saved: {}", message)
            }
            Self::NotificationError { message } => format!(
                "The account was opened but the welcome message was not sent: {}",
                message
            ),
            Self::ValidationError { message } => format!("Invalid account data: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Persistence => {
                "Check that the account number is not already taken and try again"
            }
            ErrorCategory::Notification => "Resend the welcome message manually",
            ErrorCategory::Validation => "Fix the holder name or email and retry",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, OnboardingError>;
