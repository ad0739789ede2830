//! Statutory parameters for each stage of the Grundrente pipeline

use serde::{Deserialize, Serialize};

/// Comparison used at the DOUBLED / TOPPED_UP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubledBoundary {
    /// avg <= 0.5 * cap counts as DOUBLED
    Inclusive,
    /// avg < 0.5 * cap counts as DOUBLED
    Strict,
}

impl DoubledBoundary {
    /// Check whether an average point rate falls into the DOUBLED band
    pub fn is_doubled(&self, avg_points: f64, half_cap: f64) -> bool {
        match self {
            DoubledBoundary::Inclusive => avg_points <= half_cap,
            DoubledBoundary::Strict => avg_points < half_cap,
        }
    }
}

/// Which month count multiplies the bonus points in the top-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthsBasis {
    /// Grundrentenzeiten
    Qualifying,
    /// Grundrentenbewertungszeiten
    Valuation,
}

/// How the minimum-income stage turns creditable pension into payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    /// Minimum income = need - creditable pension while below the need
    Threshold,
    /// Gap above the standard need is minimum income, smaller gaps are housing benefit
    HousingSplit,
    /// Legacy flat rule: need - existing pension, ignoring Grundrente
    Flat,
}

/// Parameters for rate, cap, classification, bonus and top-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrundrenteParams {
    /// Minimum Grundrentenzeiten for entitlement (33 years)
    pub min_qualifying_months: u32,

    /// Months beyond this no longer raise the cap or the top-up (35 years)
    pub max_credited_months: u32,

    /// Höchstwert at exactly `min_qualifying_months`
    pub cap_base: f64,

    /// Höchstwert increase per month above `min_qualifying_months`
    pub cap_slope: f64,

    /// Decimal digits the Höchstwert is rounded to
    pub cap_rounding_digits: u32,

    /// Abschlag applied to bonus points
    pub bonus_deduction: f64,

    /// Upper limit on the Zugangsfaktor for the top-up only
    pub max_access_factor: f64,

    pub doubled_boundary: DoubledBoundary,

    pub topup_months_basis: MonthsBasis,
}

impl Default for GrundrenteParams {
    fn default() -> Self {
        Self {
            min_qualifying_months: 33 * 12,
            max_credited_months: 35 * 12,
            cap_base: 0.0334,
            cap_slope: 0.001389,
            cap_rounding_digits: 4,
            bonus_deduction: 0.125,
            max_access_factor: 1.0,
            doubled_boundary: DoubledBoundary::Inclusive,
            topup_months_basis: MonthsBasis::Qualifying,
        }
    }
}

impl GrundrenteParams {
    /// Whether a person with these qualifying months is Grundrente-entitled
    pub fn is_entitled(&self, qualifying_months: u32) -> bool {
        qualifying_months >= self.min_qualifying_months
    }

    /// Qualifying months after the 35-year cap
    pub fn credited_months(&self, months: u32) -> u32 {
        months.min(self.max_credited_months)
    }
}

/// Two-tier income crediting against the top-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeCreditingParams {
    /// Income up to this amount is disregarded
    pub lower_threshold: f64,

    /// Income above this amount is credited at `full_rate`
    pub upper_threshold: f64,

    /// Share of income between the thresholds that is credited
    pub partial_rate: f64,

    /// Share of income above the upper threshold that is credited
    pub full_rate: f64,
}

impl Default for IncomeCreditingParams {
    fn default() -> Self {
        Self {
            lower_threshold: 1250.0,
            upper_threshold: 1600.0,
            partial_rate: 0.6,
            full_rate: 1.0,
        }
    }
}

/// Grundsicherung im Alter / Wohngeld parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumIncomeParams {
    /// Regelbedarf
    pub standard_need: f64,

    /// Flat housing cost added to the standard need
    pub housing_cost: f64,

    /// Pension amount always left uncounted for entitled persons
    pub base_allowance: f64,

    /// Share of pension above `base_allowance` left uncounted
    pub allowance_rate: f64,

    /// Allowance ceiling as a share of `standard_need`
    pub allowance_cap_share: f64,

    /// Whether gross wage enters the means test of entitled persons
    pub include_wage_in_means_test: bool,

    pub payout_method: PayoutMethod,
}

impl Default for MinimumIncomeParams {
    fn default() -> Self {
        Self {
            standard_need: 432.0,
            housing_cost: 500.0,
            base_allowance: 100.0,
            allowance_rate: 0.3,
            allowance_cap_share: 0.5,
            include_wage_in_means_test: true,
            payout_method: PayoutMethod::Threshold,
        }
    }
}

impl MinimumIncomeParams {
    /// Total monthly need (standard need plus housing cost)
    pub fn total_need(&self) -> f64 {
        self.standard_need + self.housing_cost
    }

    /// Maximum pension allowance
    pub fn allowance_cap(&self) -> f64 {
        self.allowance_cap_share * self.standard_need
    }
}
