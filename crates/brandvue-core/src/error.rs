//! Errors raised while configuring, opening and migrating the metadata store

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A setting is missing or malformed
    #[error("Invalid setting {key}: {message}")]
    Configuration { key: String, message: String },

    #[error("Could not connect to the metadata store: {0}")]
    Connection(String),

    /// Listing or applying migrations failed
    #[error("Migration failed: {0}")]
    Migration(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub(crate) fn configuration(key: &str, message: impl Into<String>) -> Self {
        StoreError::Configuration {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
