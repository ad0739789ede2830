//! Average point rate and Höchstwert

use crate::rules::GrundrenteParams;

/// Entgeltpunkte per valuation month
///
/// Plain division: zero valuation months yield a non-finite value, which the
/// engine rejects before classification.
pub fn average_points_per_month(grundrente_points: f64, valuation_months: u32) -> f64 {
    grundrente_points / valuation_months as f64
}

/// Höchstwert for a given number of qualifying months
///
/// Linear in the months above the entitlement threshold, flat beyond the
/// credited-month cap. Below the threshold the value is only a comparison
/// number and carries no meaning of its own.
pub fn cap_value(qualifying_months: u32, params: &GrundrenteParams) -> f64 {
    let credited = params.credited_months(qualifying_months) as f64;
    let excess = credited - params.min_qualifying_months as f64;
    round_half_even(
        params.cap_base + params.cap_slope * excess,
        params.cap_rounding_digits,
    )
}

/// Round to `digits` decimals, ties to even
pub fn round_half_even(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round_ties_even() / scale
}
