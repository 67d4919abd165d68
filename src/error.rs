//! Error types for the form flow engine
//!
//! Only the JSON loading surface can fail. Evaluation, resolution,
//! projection, and the eligibility queries are total: every anomaly they
//! meet degrades to false, End, or a truncated path.

use thiserror::Error;

/// Main error type for the form flow engine
#[derive(Error, Debug)]
pub enum FormFlowError {
    #[error("invalid form definition: {0}")]
    InvalidDefinition(serde_json::Error),

    #[error("invalid answer payload: {0}")]
    InvalidAnswers(serde_json::Error),
}

/// Result type alias for the form flow engine
pub type Result<T> = std::result::Result<T, FormFlowError>;
