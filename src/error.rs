//! Custom error types for the date widget

use thiserror::Error;

/// Main error type for widget operations
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for WidgetError {
    fn from(e: toml::de::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for WidgetError {
    fn from(e: toml::ser::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}

/// Result type alias for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;
