use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Search backend error: {message}")]
    SearchBackend { message: String },

    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MapError {
    pub fn backend(message: impl Into<String>) -> Self {
        MapError::SearchBackend {
            message: message.into(),
        }
    }

    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        MapError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 呼叫端錯誤（參數）與後端錯誤分開處理
    pub fn is_caller_error(&self) -> bool {
        matches!(self, MapError::InvalidParameter { .. })
    }
}

// 傳輸層錯誤一律視為搜尋後端失敗
impl From<reqwest::Error> for MapError {
    fn from(err: reqwest::Error) -> Self {
        MapError::backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
