//! Error type shared by the model, persistence and session layers.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RepError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("not allowed: {0}")]
    Unauthorized(String),

    #[error("invalid input: {0}")]
    Validation(String),
}

impl RepError {
    pub fn not_found<K: std::fmt::Display>(entity: &'static str, key: K) -> Self {
        RepError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RepError>;
