//! Grundrente rule pipeline
//!
//! Seven stages run strictly in order for each person:
//! average point rate, Höchstwert, category, bonus points, top-up before
//! income, income crediting, and the minimum-income / housing-benefit test.

pub mod rate;
pub mod category;
pub mod bonus;
pub mod crediting;
pub mod minimum_income;
mod engine;
mod evaluation;

pub use category::Category;
pub use crediting::IncomeCredit;
pub use engine::Evaluator;
pub use evaluation::{Evaluation, PopulationSummary};
pub use minimum_income::{BenefitPath, MinimumIncomeAssessment};
