use thiserror::Error;

#[derive(Error, Debug)]
pub enum OriginError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Lookup source returned status {status}")]
    SourceStatus { status: u16 },

    #[error("Lookup source did not answer within {seconds}s")]
    SourceTimeout { seconds: u64 },

    #[error("Malformed response from lookup source: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl OriginError {
    /// 外部來源失敗 (會被降級為 unknown，而非回報給呼叫端)
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            OriginError::ApiError(_)
                | OriginError::SerializationError(_)
                | OriginError::SourceStatus { .. }
                | OriginError::SourceTimeout { .. }
                | OriginError::MalformedResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OriginError>;
