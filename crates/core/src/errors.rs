//! Core error types for the analysis engine.
//!
//! The calculators themselves never fail: malformed numeric input degrades
//! to zero at the coercion boundary. These types cover the surrounding
//! state transitions and request parsing.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Comparison set is full: at most {0} buildings can be compared")]
    ComparisonFull(usize),

    #[error("Unknown analysis type: '{0}'")]
    UnknownAnalysisType(String),
}
