//! Grundsicherung im Alter and Wohngeld after Grundrente
//!
//! Grundrente-entitled persons keep part of their pension out of the means
//! test (a base allowance plus a share of the remainder, capped at half the
//! standard need). Everyone else is tested on their full income. The
//! creditable amount is then turned into payments by the rule set's
//! payout method.

use crate::rules::{MinimumIncomeParams, PayoutMethod};
use serde::{Deserialize, Serialize};

/// Which benefit, if any, a person ends up drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitPath {
    None,
    MinimumIncome,
    HousingBenefit,
}

/// Result of the minimum-income stage for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumIncomeAssessment {
    /// Existing pension + Grundrente + wage
    pub total_income: f64,
    /// Income counted against the need after any allowance
    pub creditable_pension: f64,
    pub minimum_income: f64,
    pub housing_benefit: f64,
    /// Flat legacy amount ignoring Grundrente, for comparison
    pub baseline_minimum_income: f64,
    pub path: BenefitPath,
}

/// Pension amount left out of the means test for an entitled person
pub fn means_tested_allowance(pension: f64, params: &MinimumIncomeParams) -> f64 {
    (params.base_allowance + (pension - params.base_allowance) * params.allowance_rate)
        .min(params.allowance_cap())
}

/// Income counted against the minimum-income need
pub fn creditable_pension(
    entitled: bool,
    existing_pension: f64,
    grundrente_final: f64,
    gross_wage: f64,
    params: &MinimumIncomeParams,
) -> f64 {
    if !entitled {
        return existing_pension + grundrente_final + gross_wage;
    }

    let wage = if params.include_wage_in_means_test {
        gross_wage
    } else {
        0.0
    };
    let pension = existing_pension + grundrente_final + wage;
    (pension - means_tested_allowance(pension, params)).max(0.0)
}

/// Flat minimum income that ignores Grundrente and wage
pub fn baseline_minimum_income(existing_pension: f64, params: &MinimumIncomeParams) -> f64 {
    (params.total_need() - existing_pension).max(0.0)
}

/// Run the means test and split the shortfall into benefits
pub fn assess(
    entitled: bool,
    existing_pension: f64,
    grundrente_final: f64,
    gross_wage: f64,
    params: &MinimumIncomeParams,
) -> MinimumIncomeAssessment {
    let total_income = existing_pension + grundrente_final + gross_wage;
    let creditable = creditable_pension(
        entitled,
        existing_pension,
        grundrente_final,
        gross_wage,
        params,
    );
    let baseline = baseline_minimum_income(existing_pension, params);
    let need = params.total_need();

    let (minimum_income, housing_benefit) = match params.payout_method {
        PayoutMethod::Threshold => {
            if creditable < need {
                (need - creditable, 0.0)
            } else {
                (0.0, 0.0)
            }
        }
        PayoutMethod::HousingSplit => {
            let gap = need - creditable;
            if gap > params.standard_need {
                (gap, 0.0)
            } else if gap > 0.0 {
                (0.0, gap)
            } else {
                (0.0, 0.0)
            }
        }
        PayoutMethod::Flat => (baseline, 0.0),
    };

    let path = if minimum_income > 0.0 {
        BenefitPath::MinimumIncome
    } else if housing_benefit > 0.0 {
        BenefitPath::HousingBenefit
    } else {
        BenefitPath::None
    };

    log::debug!(
        "means test: entitled={} creditable={:.2} path={:?}",
        entitled,
        creditable,
        path
    );

    MinimumIncomeAssessment {
        total_income,
        creditable_pension: creditable,
        minimum_income,
        housing_benefit,
        baseline_minimum_income: baseline,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn threshold_params() -> MinimumIncomeParams {
        MinimumIncomeParams::default()
    }

    fn split_params() -> MinimumIncomeParams {
        MinimumIncomeParams {
            include_wage_in_means_test: false,
            payout_method: PayoutMethod::HousingSplit,
            ..MinimumIncomeParams::default()
        }
    }

    #[test]
    fn test_allowance_capped_at_half_need() {
        let params = threshold_params();
        assert_abs_diff_eq!(means_tested_allowance(100.0, &params), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(means_tested_allowance(300.0, &params), 160.0, epsilon = 1e-12);
        assert_eq!(means_tested_allowance(750.0, &params), 216.0);
        assert_eq!(means_tested_allowance(5000.0, &params), 216.0);
    }

    #[test]
    fn test_threshold_entitled() {
        let a = assess(true, 700.0, 50.0, 0.0, &threshold_params());
        assert_eq!(a.total_income, 750.0);
        assert_abs_diff_eq!(a.creditable_pension, 534.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.minimum_income, 398.0, epsilon = 1e-9);
        assert_eq!(a.housing_benefit, 0.0);
        assert_eq!(a.path, BenefitPath::MinimumIncome);
        assert_eq!(a.baseline_minimum_income, 232.0);
    }

    #[test]
    fn test_threshold_not_entitled_counts_everything() {
        let a = assess(false, 700.0, 0.0, 150.0, &threshold_params());
        assert_eq!(a.creditable_pension, 850.0);
        assert_abs_diff_eq!(a.minimum_income, 82.0, epsilon = 1e-9);

        let above = assess(false, 900.0, 0.0, 100.0, &threshold_params());
        assert_eq!(above.minimum_income, 0.0);
        assert_eq!(above.path, BenefitPath::None);
    }

    #[test]
    fn test_wage_in_means_test_flag() {
        let with_wage = creditable_pension(true, 700.0, 50.0, 300.0, &threshold_params());
        let without_wage = creditable_pension(true, 700.0, 50.0, 300.0, &split_params());
        assert_abs_diff_eq!(with_wage, 834.0, epsilon = 1e-9);
        assert_abs_diff_eq!(without_wage, 534.0, epsilon = 1e-9);
    }

    #[test]
    fn test_small_pension_floors_creditable_at_zero() {
        let a = assess(true, 50.0, 0.0, 0.0, &threshold_params());
        assert_eq!(a.creditable_pension, 0.0);
        assert_eq!(a.minimum_income, 932.0);
    }

    #[test]
    fn test_housing_split_buckets() {
        let params = split_params();

        // Gap 398 <= 432: housing benefit
        let housing = assess(true, 700.0, 50.0, 300.0, &params);
        assert_abs_diff_eq!(housing.housing_benefit, 398.0, epsilon = 1e-9);
        assert_eq!(housing.minimum_income, 0.0);
        assert_eq!(housing.path, BenefitPath::HousingBenefit);

        // Pension 380, allowance 184, creditable 196, gap 736 > 432
        let support = assess(true, 300.0, 80.0, 0.0, &params);
        assert_abs_diff_eq!(support.creditable_pension, 196.0, epsilon = 1e-9);
        assert_abs_diff_eq!(support.minimum_income, 736.0, epsilon = 1e-9);
        assert_eq!(support.housing_benefit, 0.0);
        assert_eq!(support.path, BenefitPath::MinimumIncome);

        // Not entitled, income above need
        let none = assess(false, 1000.0, 0.0, 0.0, &params);
        assert_eq!(none.minimum_income, 0.0);
        assert_eq!(none.housing_benefit, 0.0);
        assert_eq!(none.path, BenefitPath::None);
    }

    #[test]
    fn test_housing_split_counts_wage_when_not_entitled() {
        // 400 pension + 200 wage leaves a gap of 332: housing benefit
        let a = assess(false, 400.0, 0.0, 200.0, &split_params());
        assert_eq!(a.creditable_pension, 600.0);
        assert_abs_diff_eq!(a.housing_benefit, 332.0, epsilon = 1e-9);
        assert_eq!(a.minimum_income, 0.0);
        assert_eq!(a.path, BenefitPath::HousingBenefit);

        // Without the wage the gap of 532 would have been minimum income
        let no_wage = assess(false, 400.0, 0.0, 0.0, &split_params());
        assert_eq!(no_wage.path, BenefitPath::MinimumIncome);
        assert_abs_diff_eq!(no_wage.minimum_income, 532.0, epsilon = 1e-9);
    }

    #[test]
    fn test_housing_split_ceiling_is_housing_benefit() {
        // Gap of exactly the standard need stays housing benefit
        let a = assess(false, 500.0, 0.0, 0.0, &split_params());
        assert_eq!(a.housing_benefit, 432.0);
        assert_eq!(a.minimum_income, 0.0);
    }

    #[test]
    fn test_flat_method_ignores_grundrente() {
        let params = MinimumIncomeParams {
            payout_method: PayoutMethod::Flat,
            ..MinimumIncomeParams::default()
        };
        let a = assess(true, 600.0, 120.0, 400.0, &params);
        assert_eq!(a.minimum_income, 332.0);
        assert_eq!(a.housing_benefit, 0.0);
        assert_eq!(a.minimum_income, a.baseline_minimum_income);

        let rich = assess(true, 1200.0, 0.0, 0.0, &params);
        assert_eq!(rich.minimum_income, 0.0);
        assert_eq!(rich.path, BenefitPath::None);
    }

    #[test]
    fn test_amounts_never_negative() {
        for params in [threshold_params(), split_params()] {
            for pension in (0..30).map(|i| i as f64 * 75.0) {
                for entitled in [true, false] {
                    let a = assess(entitled, pension, 20.0, 100.0, &params);
                    assert!(a.minimum_income >= 0.0);
                    assert!(a.housing_benefit >= 0.0);
                    assert!(a.creditable_pension >= 0.0);
                    assert!(a.minimum_income == 0.0 || a.housing_benefit == 0.0);
                }
            }
        }
    }
}
