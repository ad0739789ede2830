//! Error types for ingestion and evaluation

use thiserror::Error;

/// Failure while evaluating a single record
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    /// Average points per month cannot be formed (zero valuation months)
    #[error("person {person_id}: average points undefined ({points} points over {valuation_months} valuation months)")]
    UndefinedAverage {
        person_id: u64,
        points: f64,
        valuation_months: u32,
    },

    /// An input field carried NaN or infinity into the pipeline
    #[error("person {person_id}: non-finite input field `{field}`")]
    NonFiniteInput { person_id: u64, field: &'static str },

    /// A derived field came out NaN or infinite
    #[error("person {person_id}: non-finite result in `{field}`")]
    NonFiniteResult { person_id: u64, field: &'static str },
}

/// Failure while loading records or rule sets
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record rejected at ingestion (1-based data row)
    #[error("row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("invalid rule set: {0}")]
    InvalidRules(String),
}

/// Failure while writing evaluation results
#[derive(Debug, Error)]
pub enum OutputError {
    /// Strict run hit a record that could not be evaluated
    #[error("evaluation aborted: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
