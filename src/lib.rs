//! Grundrente - rule evaluation for the German pension top-up
//!
//! This library provides:
//! - Average Entgeltpunkte, Höchstwert and eligibility categories
//! - Bonus points and the monthly Grundrente before and after income crediting
//! - Grundsicherung im Alter / Wohngeld interaction
//! - Versioned rule sets selected by variant or loaded from JSON
//! - Parallel evaluation over a population of individual records

pub mod error;
pub mod person;
pub mod rules;
pub mod pipeline;
pub mod runner;
pub mod output;

// Re-export commonly used types
pub use error::{EvaluationError, LoadError, OutputError};
pub use person::IndividualRecord;
pub use rules::{RuleSet, RuleVariant};
pub use pipeline::{BenefitPath, Category, Evaluation, Evaluator, PopulationSummary};
pub use runner::{PopulationResult, PopulationRunner};
pub use output::write_results;
