//! Error types for alphanum.
//!
//! Comparison and sorting are total and never fail. Errors only arise when
//! reading [`SortOptions`](crate::SortOptions) from JSON text that is not
//! valid JSON.

use thiserror::Error;

/// Errors raised at the configuration boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The options text is not valid JSON.
    #[error("invalid sort options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
