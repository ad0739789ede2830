//! Per-person evaluation of the full Grundrente pipeline

use super::bonus::{bonus_points, topup_before_income, topup_months};
use super::category::{classify, Category};
use super::crediting::credit_income;
use super::evaluation::Evaluation;
use super::minimum_income::assess;
use super::rate::{average_points_per_month, cap_value};
use crate::error::EvaluationError;
use crate::person::IndividualRecord;
use crate::rules::{RuleSet, RuleVariant};

/// Main evaluation engine
///
/// Holds one rule set and evaluates records against it. Evaluation is a pure
/// function of the record and the rules, so one engine can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    rules: RuleSet,
}

impl Evaluator {
    /// Create a new evaluator for the given rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create an evaluator for a built-in rule variant
    pub fn for_variant(variant: RuleVariant) -> Self {
        Self::new(RuleSet::for_variant(variant))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run steps 1 to 7 for a single record
    pub fn evaluate(&self, record: &IndividualRecord) -> Result<Evaluation, EvaluationError> {
        check_inputs(record)?;

        let g = &self.rules.grundrente;
        let entitled = g.is_entitled(record.qualifying_months);

        // Rate and cap
        let avg_points = self.average_points(record, entitled)?;
        let cap = cap_value(record.qualifying_months, g);

        // Category and bonus
        let (category, bonus) = match avg_points {
            Some(avg) => {
                let category = classify(record.qualifying_months, avg, cap, g);
                (category, bonus_points(category, avg, cap, g))
            }
            None => (Category::Ineligible, 0.0),
        };

        // Top-up before income
        let months = topup_months(record.qualifying_months, record.valuation_months, g);
        let topup = topup_before_income(
            bonus,
            months,
            record.pension_point_value,
            record.access_factor,
            g,
        );

        // Income crediting
        let credit = credit_income(
            topup,
            record.gross_wage,
            record.existing_pension,
            &self.rules.income_crediting,
        );

        // Minimum income / housing benefit
        let assessment = assess(
            entitled,
            record.existing_pension,
            credit.grundrente_final,
            record.gross_wage,
            &self.rules.minimum_income,
        );

        log::debug!(
            "person {}: category={} bonus={:.6} topup={:.2} final={:.2}",
            record.person_id,
            category,
            bonus,
            topup,
            credit.grundrente_final
        );

        let evaluation = Evaluation {
            person_id: record.person_id,
            qualifying_months: record.qualifying_months,
            grundrente_entitled: entitled,
            avg_points_per_month: avg_points,
            cap_value: cap,
            category,
            bonus_points: bonus,
            topup_months: months,
            topup_before_income: topup,
            combined_income: credit.combined_income,
            income_deduction: credit.total_deduction(),
            grundrente_final: credit.grundrente_final,
            total_income: assessment.total_income,
            creditable_pension: assessment.creditable_pension,
            minimum_income_amount: assessment.minimum_income,
            housing_benefit_amount: assessment.housing_benefit,
            baseline_minimum_income: assessment.baseline_minimum_income,
            benefit_path: assessment.path,
        };

        match evaluation.first_non_finite() {
            Some(field) => Err(EvaluationError::NonFiniteResult {
                person_id: record.person_id,
                field,
            }),
            None => Ok(evaluation),
        }
    }

    /// Average points per month, `None` when it is undefined but not needed
    fn average_points(
        &self,
        record: &IndividualRecord,
        entitled: bool,
    ) -> Result<Option<f64>, EvaluationError> {
        if record.valuation_months > 0 {
            return Ok(Some(average_points_per_month(
                record.grundrente_points,
                record.valuation_months,
            )));
        }

        if !entitled && record.grundrente_points == 0.0 {
            return Ok(None);
        }

        Err(EvaluationError::UndefinedAverage {
            person_id: record.person_id,
            points: record.grundrente_points,
            valuation_months: record.valuation_months,
        })
    }
}

fn check_inputs(record: &IndividualRecord) -> Result<(), EvaluationError> {
    let fields = [
        ("grundrente_points", record.grundrente_points),
        ("pension_point_value", record.pension_point_value),
        ("access_factor", record.access_factor),
        ("gross_wage", record.gross_wage),
        ("existing_pension", record.existing_pension),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, _)) => Err(EvaluationError::NonFiniteInput {
            person_id: record.person_id,
            field,
        }),
        None => Ok(()),
    }
}
