use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonumentError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Source '{source_tag}' answered with HTTP {status}")]
    UpstreamStatus { source_tag: String, status: u16 },

    #[error("Source '{source_tag}' returned a malformed payload: {message}")]
    MalformedPayload { source_tag: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Invalid user id '{user_id}': {reason}")]
    InvalidUserId { user_id: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MonumentError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MonumentError::ApiError(_)
            | MonumentError::UpstreamStatus { .. }
            | MonumentError::MalformedPayload { .. } => ErrorSeverity::Medium,
            MonumentError::IoError(_) | MonumentError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MonumentError::ApiError(_) | MonumentError::UpstreamStatus { .. } => {
                "無法連線到開放資料來源".to_string()
            }
            MonumentError::MalformedPayload { source_tag, .. } => {
                format!("來源 '{}' 的資料格式無法解析", source_tag)
            }
            MonumentError::InvalidUserId { reason, .. } => reason.clone(),
            MonumentError::IoError(_) | MonumentError::SerializationError(_) => {
                "收藏清單讀寫失敗".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MonumentError::ApiError(_) | MonumentError::UpstreamStatus { .. } => {
                "Check network access to the open-data portal and retry later"
            }
            MonumentError::MalformedPayload { .. } => {
                "Verify the configured endpoint points to an explore v2.1 records URL"
            }
            MonumentError::IoError(_) | MonumentError::SerializationError(_) => {
                "Check that the favorites directory exists and is writable"
            }
            MonumentError::InvalidUserId { .. } => {
                "Pass a non-empty --user-id without path separators"
            }
            _ => "Review the configuration file and command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, MonumentError>;
