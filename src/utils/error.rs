use std::time::Duration;
use thiserror::Error;

/// 單一浮標類別抓取失敗的種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    Status,
    Decode,
}

/// 單一類別的抓取錯誤，只影響該類別，不會中斷整批
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out after {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network { .. } => FailureKind::Network,
            FetchError::Timeout { .. } => FailureKind::Timeout,
            FetchError::Status { .. } => FailureKind::Status,
            FetchError::Decode(_) => FailureKind::Decode,
        }
    }

    /// 將 reqwest 錯誤歸類；`timeout` 為該次請求設定的上限
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { timeout }
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network {
                message: err.to_string(),
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum BuoyError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown buoy type: {0}")]
    UnknownCategory(String),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BuoyError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BuoyError::HttpClientError(_) => "Check the TLS setup of this machine",
            BuoyError::IoError(_) => "Make sure the config file exists and is readable",
            BuoyError::SerializationError(_) => "Report this as a bug",
            BuoyError::UnknownCategory(_) => "Use one of: moored, aws, drifting, argo",
            BuoyError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            BuoyError::InvalidConfigValueError { .. } => {
                "Fix the value named above in the config file or command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BuoyError::IoError(e) => format!("Could not read configuration: {}", e),
            BuoyError::UnknownCategory(label) => format!("'{}' is not a buoy type", label),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuoyError>;
