//! Population runner for batch evaluation
//!
//! Records never interact, so the population is evaluated as a parallel map.
//! Output order always matches input order.

use crate::error::EvaluationError;
use crate::person::IndividualRecord;
use crate::pipeline::{Evaluation, Evaluator, PopulationSummary};
use crate::rules::{RuleSet, RuleVariant};
use rayon::prelude::*;

/// Outcome of evaluating a whole population
#[derive(Debug, Clone)]
pub struct PopulationResult {
    /// One entry per input record, in input order
    pub outcomes: Vec<Result<Evaluation, EvaluationError>>,
}

impl PopulationResult {
    /// Successful evaluations only
    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    /// Failed records only
    pub fn errors(&self) -> impl Iterator<Item = &EvaluationError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// Aggregate totals, counting failures separately
    pub fn summary(&self) -> PopulationSummary {
        let mut summary = PopulationSummary::default();
        for outcome in &self.outcomes {
            match outcome {
                Ok(evaluation) => summary.add(evaluation),
                Err(_) => summary.add_failure(),
            }
        }
        summary
    }
}

/// Pre-configured runner holding one evaluator
///
/// # Example
/// ```ignore
/// let runner = PopulationRunner::for_variant(RuleVariant::Pensions);
/// let result = runner.run(&records);
/// println!("{} failed", result.summary().failed);
/// ```
#[derive(Debug, Clone)]
pub struct PopulationRunner {
    evaluator: Evaluator,
}

impl PopulationRunner {
    /// Create runner for a custom rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            evaluator: Evaluator::new(rules),
        }
    }

    /// Create runner for a built-in rule variant
    pub fn for_variant(variant: RuleVariant) -> Self {
        Self {
            evaluator: Evaluator::for_variant(variant),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Evaluate every record, keeping failures in place
    pub fn run(&self, records: &[IndividualRecord]) -> PopulationResult {
        let outcomes: Vec<_> = records
            .par_iter()
            .map(|record| self.evaluator.evaluate(record))
            .collect();

        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        if failed > 0 {
            log::warn!(
                "{} of {} records failed under rule set '{}'",
                failed,
                records.len(),
                self.evaluator.rules().label
            );
        }

        PopulationResult { outcomes }
    }

    /// Evaluate every record, failing on the first bad one
    pub fn run_strict(
        &self,
        records: &[IndividualRecord],
    ) -> Result<Vec<Evaluation>, EvaluationError> {
        records
            .par_iter()
            .map(|record| self.evaluator.evaluate(record))
            .collect()
    }

    /// Evaluate the same population under several rule sets
    pub fn compare(
        rule_sets: &[RuleSet],
        records: &[IndividualRecord],
    ) -> Vec<(String, PopulationSummary)> {
        rule_sets
            .iter()
            .map(|rules| {
                let runner = PopulationRunner::new(rules.clone());
                (rules.label.clone(), runner.run(records).summary())
            })
            .collect()
    }
}

impl Default for PopulationRunner {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Category;

    fn population() -> Vec<IndividualRecord> {
        vec![
            IndividualRecord::new(1, 396, 396, 13.0, 34.19, 700.0),
            IndividualRecord::new(2, 300, 300, 9.0, 34.19, 600.0),
            IndividualRecord::new(3, 420, 420, 6.3, 34.19, 400.0),
            IndividualRecord::new(4, 480, 470, 40.0, 34.19, 1500.0),
            IndividualRecord::new(5, 400, 0, 3.0, 34.19, 500.0),
        ]
    }

    #[test]
    fn test_run_preserves_order_and_failures() {
        let runner = PopulationRunner::for_variant(RuleVariant::Grundrente);
        let result = runner.run(&population());

        assert_eq!(result.outcomes.len(), 5);
        let ids: Vec<u64> = result.evaluations().map(|e| e.person_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(result.errors().count(), 1);

        let summary = result.summary();
        assert_eq!(summary.evaluated, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.count(Category::ToppedUp), 1);
        assert_eq!(summary.count(Category::Ineligible), 1);
        assert_eq!(summary.count(Category::Doubled), 1);
        assert_eq!(summary.count(Category::Excess), 1);
    }

    #[test]
    fn test_run_strict_fails_on_bad_record() {
        let runner = PopulationRunner::default();
        assert!(runner.run_strict(&population()).is_err());

        let clean: Vec<_> = population().into_iter().take(4).collect();
        let evaluations = runner.run_strict(&clean).unwrap();
        assert_eq!(evaluations.len(), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<_> = (0..500u32)
            .map(|i| {
                IndividualRecord::new(
                    i as u64,
                    350 + i % 100,
                    340 + i % 90,
                    (i % 37) as f64 * 0.5,
                    34.19,
                    300.0 + (i % 20) as f64 * 80.0,
                )
                .with_gross_wage((i % 5) as f64 * 120.0)
            })
            .collect();

        let runner = PopulationRunner::for_variant(RuleVariant::Pensions);
        let parallel = runner.run_strict(&records).unwrap();
        let sequential: Vec<_> = records
            .iter()
            .map(|r| runner.evaluator().evaluate(r).unwrap())
            .collect();
        assert_eq!(parallel, sequential);

        // Re-running gives identical output
        assert_eq!(runner.run_strict(&records).unwrap(), parallel);
    }

    #[test]
    fn test_compare_rule_sets() {
        let records: Vec<_> = population().into_iter().take(4).collect();
        let results = PopulationRunner::compare(
            &[RuleSet::grundrente_2021(), RuleSet::pensions_2021()],
            &records,
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "grundrente-2021");
        assert_eq!(results[1].0, "pensions-2021");
        // Grundrente itself does not depend on the variant for these records
        assert_eq!(
            results[0].1.total_grundrente_final,
            results[1].1.total_grundrente_final
        );
    }
}
