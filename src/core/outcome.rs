use crate::utils::error::MapError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub success: bool,
    pub error: String,
}

/// 工具回傳值：成功時為原始結果，失敗時為 `{"success": false, "error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutcome<T> {
    Failure(ToolFailure),
    Success(T),
}

impl<T> ToolOutcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        ToolOutcome::Failure(ToolFailure {
            success: false,
            error: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ToolOutcome::Success(value) => Some(value),
            ToolOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ToolOutcome::Success(_) => None,
            ToolOutcome::Failure(failure) => Some(&failure.error),
        }
    }
}

impl<T> From<std::result::Result<T, MapError>> for ToolOutcome<T> {
    fn from(result: std::result::Result<T, MapError>) -> Self {
        match result {
            Ok(value) => ToolOutcome::Success(value),
            Err(e) => ToolOutcome::failure(e.to_string()),
        }
    }
}
