//! Income crediting against the Grundrente top-up
//!
//! Combined income (wage plus existing pension) up to the lower threshold is
//! ignored, the slice up to the upper threshold is credited at the partial
//! rate, and everything above at the full rate.

use crate::rules::IncomeCreditingParams;
use serde::{Deserialize, Serialize};

/// Breakdown of the crediting step for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeCredit {
    pub combined_income: f64,
    /// Credited slice between the two thresholds
    pub partial_deduction: f64,
    /// Credited income above the upper threshold
    pub full_deduction: f64,
    /// Top-up after crediting, floored at zero
    pub grundrente_final: f64,
}

impl IncomeCredit {
    pub fn total_deduction(&self) -> f64 {
        self.partial_deduction + self.full_deduction
    }
}

/// Credit wage and existing pension against the top-up
pub fn credit_income(
    topup_before_income: f64,
    gross_wage: f64,
    existing_pension: f64,
    params: &IncomeCreditingParams,
) -> IncomeCredit {
    let combined_income = gross_wage + existing_pension;

    let partial_deduction = (combined_income.min(params.upper_threshold) - params.lower_threshold)
        .max(0.0)
        * params.partial_rate;
    let full_deduction = (combined_income - params.upper_threshold).max(0.0) * params.full_rate;

    let grundrente_final = (topup_before_income - partial_deduction - full_deduction).max(0.0);

    IncomeCredit {
        combined_income,
        partial_deduction,
        full_deduction,
        grundrente_final,
    }
}
