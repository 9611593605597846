//! Error types for rate computation

use l1menu_core::L1MenuError;
use thiserror::Error;

/// Errors from a [`crate::MenuRateEngine`] run.
#[derive(Debug, Error)]
pub enum RateError {
    /// A trigger or sample operation failed.
    #[error(transparent)]
    Core(#[from] L1MenuError),

    /// The dedicated worker pool could not be built.
    #[error("Failed to build rate worker pool: {0}")]
    ThreadPool(String),

    /// A live snapshot was handed to `MenuRate::precomputed`.
    #[error("Trigger rate at position {position} is live; freeze it before reuse")]
    LiveSnapshot { position: usize },

    /// The sample carried no weight and the configuration rejects that.
    #[error("Sample of {events} events has zero total weight")]
    DegenerateSample { events: usize },
}
