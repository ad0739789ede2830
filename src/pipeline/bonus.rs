//! Bonus Entgeltpunkte and the monthly top-up before income crediting

use super::category::Category;
use crate::rules::{GrundrenteParams, MonthsBasis};

/// Bonus points per valuation month for a classified person
pub fn bonus_points(category: Category, avg_points: f64, cap: f64, params: &GrundrenteParams) -> f64 {
    let factor = 1.0 - params.bonus_deduction;
    match category {
        Category::Ineligible | Category::Excess => 0.0,
        Category::Doubled => avg_points * factor,
        Category::ToppedUp => (cap - avg_points) * factor,
    }
}

/// Months multiplied into the top-up, after the credited-month cap
pub fn topup_months(qualifying_months: u32, valuation_months: u32, params: &GrundrenteParams) -> u32 {
    let months = match params.topup_months_basis {
        MonthsBasis::Qualifying => qualifying_months,
        MonthsBasis::Valuation => valuation_months,
    };
    params.credited_months(months)
}

/// Monthly Grundrente before other income is credited
///
/// The Zugangsfaktor cap applies here only; it does not alter the factor
/// used anywhere else.
pub fn topup_before_income(
    bonus: f64,
    months: u32,
    pension_point_value: f64,
    access_factor: f64,
    params: &GrundrenteParams,
) -> f64 {
    bonus * months as f64 * pension_point_value * access_factor.min(params.max_access_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bonus_by_category() {
        let params = GrundrenteParams::default();
        let cap = 0.0334;

        assert_eq!(bonus_points(Category::Ineligible, 0.01, cap, &params), 0.0);
        assert_eq!(bonus_points(Category::Excess, 0.05, cap, &params), 0.0);
        assert_abs_diff_eq!(
            bonus_points(Category::Doubled, 0.01, cap, &params),
            0.00875,
            epsilon = 1e-12
        );

        let avg = 13.0 / 396.0;
        assert_abs_diff_eq!(
            bonus_points(Category::ToppedUp, avg, cap, &params),
            (0.0334 - avg) * 0.875,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bonus_continuous_at_half_cap() {
        let params = GrundrenteParams::default();
        let cap = 0.0501;
        let half = 0.5 * cap;
        assert_abs_diff_eq!(
            bonus_points(Category::Doubled, half, cap, &params),
            bonus_points(Category::ToppedUp, half, cap, &params),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_topup_months_basis() {
        let mut params = GrundrenteParams::default();
        assert_eq!(topup_months(430, 400, &params), 420);
        assert_eq!(topup_months(400, 380, &params), 400);

        params.topup_months_basis = MonthsBasis::Valuation;
        assert_eq!(topup_months(400, 380, &params), 380);
        assert_eq!(topup_months(480, 450, &params), 420);
    }

    #[test]
    fn test_topup_caps_access_factor() {
        let params = GrundrenteParams::default();
        let capped = topup_before_income(0.01, 400, 34.19, 1.08, &params);
        let unit = topup_before_income(0.01, 400, 34.19, 1.0, &params);
        assert_eq!(capped, unit);
        assert_abs_diff_eq!(unit, 136.76, epsilon = 1e-9);

        let reduced = topup_before_income(0.01, 400, 34.19, 0.964, &params);
        assert_abs_diff_eq!(reduced, 136.76 * 0.964, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_bonus_gives_zero_topup() {
        let params = GrundrenteParams::default();
        assert_eq!(topup_before_income(0.0, 420, 34.19, 1.0, &params), 0.0);
    }
}
