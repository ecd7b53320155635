use crate::error::config::ConfigError;
use crate::error::publish_failure::PublishFailure;
use std::fmt::{self, Display};

pub type TablecastResult<T> = Result<T, TablecastError>;

#[derive(Debug)]
pub enum TablecastError {
    ConfigError(ConfigError),
    ConnectionError(mysql_async::Error),
    PublishFailure(PublishFailure),
    HttpError(reqwest::Error),
    TimeoutError(tokio::time::error::Elapsed),
    SerdeJsonError(serde_json::Error),
}

impl Display for TablecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TablecastError::ConfigError(e) => write!(f, "{}", e),
            TablecastError::ConnectionError(e) => write!(f, "database connection error: {}", e),
            TablecastError::PublishFailure(e) => write!(f, "{}", e),
            TablecastError::HttpError(e) => write!(f, "http transport error: {}", e),
            TablecastError::TimeoutError(_) => write!(f, "request timed out"),
            TablecastError::SerdeJsonError(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for TablecastError {}

impl From<ConfigError> for TablecastError {
    fn from(error: ConfigError) -> Self {
        TablecastError::ConfigError(error)
    }
}

impl From<mysql_async::Error> for TablecastError {
    fn from(error: mysql_async::Error) -> Self {
        TablecastError::ConnectionError(error)
    }
}

impl From<PublishFailure> for TablecastError {
    fn from(error: PublishFailure) -> Self {
        TablecastError::PublishFailure(error)
    }
}

impl From<reqwest::Error> for TablecastError {
    fn from(error: reqwest::Error) -> Self {
        TablecastError::HttpError(error)
    }
}

impl From<tokio::time::error::Elapsed> for TablecastError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        TablecastError::TimeoutError(error)
    }
}

impl From<serde_json::Error> for TablecastError {
    fn from(error: serde_json::Error) -> Self {
        TablecastError::SerdeJsonError(error)
    }
}
