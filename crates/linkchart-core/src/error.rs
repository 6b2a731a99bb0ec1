// File: crates/linkchart-core/src/error.rs
// Summary: Error taxonomy shared by table utilities, configuration and the event bus.

use thiserror::Error;

/// Errors raised by the core crate.
///
/// A cell that fails to parse as a number is not an error: it is reported as
/// `false` by [`crate::table::is_number`] and the numeric predicates.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Malformed table or chart data (missing header, ragged row, bad index).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An option name that the component's schema does not know.
    #[error("unknown option '{name}' for {component}")]
    UnknownOption { component: &'static str, name: String },

    /// A known option was given a value of the wrong shape.
    #[error("invalid value for option '{name}': {source}")]
    InvalidOption {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A listener rejected a forwarded interaction event.
    #[error("listener '{listener}' failed: {reason}")]
    ListenerFailure { listener: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ChartError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
