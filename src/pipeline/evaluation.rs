//! Evaluation output structures

use super::category::Category;
use super::minimum_income::BenefitPath;
use serde::{Deserialize, Serialize};

/// Derived fields for one person, in pipeline order
///
/// Kept flat so it serialises directly to one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub person_id: u64,
    pub qualifying_months: u32,
    pub grundrente_entitled: bool,

    // Rate, cap, category
    /// Absent only for ineligible persons without valuation months
    pub avg_points_per_month: Option<f64>,
    pub cap_value: f64,
    pub category: Category,

    // Bonus and top-up
    pub bonus_points: f64,
    pub topup_months: u32,
    pub topup_before_income: f64,

    // Income crediting
    pub combined_income: f64,
    pub income_deduction: f64,
    pub grundrente_final: f64,

    // Minimum income / housing benefit
    pub total_income: f64,
    pub creditable_pension: f64,
    pub minimum_income_amount: f64,
    pub housing_benefit_amount: f64,
    pub baseline_minimum_income: f64,
    pub benefit_path: BenefitPath,
}

impl Evaluation {
    /// Name of the first derived field that is NaN or infinite
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let fields = [
            ("avg_points_per_month", self.avg_points_per_month.unwrap_or(0.0)),
            ("cap_value", self.cap_value),
            ("bonus_points", self.bonus_points),
            ("topup_before_income", self.topup_before_income),
            ("combined_income", self.combined_income),
            ("income_deduction", self.income_deduction),
            ("grundrente_final", self.grundrente_final),
            ("total_income", self.total_income),
            ("creditable_pension", self.creditable_pension),
            ("minimum_income_amount", self.minimum_income_amount),
            ("housing_benefit_amount", self.housing_benefit_amount),
            ("baseline_minimum_income", self.baseline_minimum_income),
        ];
        fields
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| *name)
    }

    /// Grundrente gain after crediting plus any benefit received
    pub fn total_support(&self) -> f64 {
        self.grundrente_final + self.minimum_income_amount + self.housing_benefit_amount
    }
}

/// Totals over a population of evaluations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    pub evaluated: usize,
    pub failed: usize,
    /// Counts indexed by `Category::index`
    pub category_counts: [usize; 4],
    pub total_topup_before_income: f64,
    pub total_grundrente_final: f64,
    pub total_minimum_income: f64,
    pub total_housing_benefit: f64,
    pub total_baseline_minimum_income: f64,
}

impl PopulationSummary {
    /// Add one successful evaluation
    pub fn add(&mut self, evaluation: &Evaluation) {
        self.evaluated += 1;
        self.category_counts[evaluation.category.index()] += 1;
        self.total_topup_before_income += evaluation.topup_before_income;
        self.total_grundrente_final += evaluation.grundrente_final;
        self.total_minimum_income += evaluation.minimum_income_amount;
        self.total_housing_benefit += evaluation.housing_benefit_amount;
        self.total_baseline_minimum_income += evaluation.baseline_minimum_income;
    }

    /// Record a failed evaluation
    pub fn add_failure(&mut self) {
        self.failed += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.category_counts[category.index()]
    }

    /// Persons in a bonus-earning category
    pub fn recipients(&self) -> usize {
        self.count(Category::Doubled) + self.count(Category::ToppedUp)
    }

    /// Change in minimum-income spending against the flat baseline
    pub fn minimum_income_change(&self) -> f64 {
        self.total_minimum_income - self.total_baseline_minimum_income
    }
}
