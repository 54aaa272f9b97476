//! Error type for a single rotation run.
//!
//! Messages are stable strings suitable for logs and for the scheduler's
//! failure output. The API token never appears in any message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotaError {
    /// A required configuration value is missing or malformed.
    #[error("config error: {0}")]
    Config(String),

    /// An HTTP call to the hosted database failed (network, status, decode).
    #[error("notion api error: {0}")]
    Api(String),

    /// The roomies collection was empty. Without roomies there is nobody to
    /// assign chores to, so the run fails fast instead of silently skipping.
    #[error("no roomies found; cannot assign chores")]
    NoRoomies,

    /// Some task creations failed partway through the chore list.
    /// Already-created tasks remain; there is no rollback.
    #[error("partial run: created {created} task(s), {failed} failed")]
    Partial { created: usize, failed: usize },
}

impl From<reqwest::Error> for RotaError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors do not carry request headers, so no token leaks here.
        RotaError::Api(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RotaError>;
