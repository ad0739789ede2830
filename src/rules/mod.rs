//! Statutory rule sets for the Grundrente and minimum-income calculation

mod params;
pub mod loader;

pub use params::{
    DoubledBoundary, GrundrenteParams, IncomeCreditingParams, MinimumIncomeParams, MonthsBasis,
    PayoutMethod,
};

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rentenwert from July 2020, used when a record carries no point value
pub const DEFAULT_PENSION_POINT_VALUE: f64 = 34.19;

/// Largest Höchstwert rounding precision that stays within f64 resolution
pub const MAX_CAP_ROUNDING_DIGITS: u32 = 15;

/// Built-in rule variants
///
/// The two variants share every threshold and differ in the DOUBLED boundary
/// operator and in how the minimum-income stage is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleVariant {
    /// Inclusive boundary, wage in the means test, single 932 threshold
    Grundrente,
    /// Strict boundary, wage outside the means test, housing-benefit split
    Pensions,
}

impl RuleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleVariant::Grundrente => "grundrente",
            RuleVariant::Pensions => "pensions",
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grundrente" => Ok(RuleVariant::Grundrente),
            "pensions" => Ok(RuleVariant::Pensions),
            other => Err(format!("Unknown rule variant: {}", other)),
        }
    }
}

/// Container for all statutory parameters of one rule year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Human-readable label, e.g. "grundrente-2021"
    pub label: String,

    /// Point value applied to records that do not carry their own
    pub pension_point_value: f64,

    pub grundrente: GrundrenteParams,

    #[serde(default)]
    pub income_crediting: IncomeCreditingParams,

    pub minimum_income: MinimumIncomeParams,
}

impl RuleSet {
    /// Rule set for a built-in variant
    pub fn for_variant(variant: RuleVariant) -> Self {
        match variant {
            RuleVariant::Grundrente => Self::grundrente_2021(),
            RuleVariant::Pensions => Self::pensions_2021(),
        }
    }

    /// Grundrentengesetz rules with the single Grundsicherung threshold
    pub fn grundrente_2021() -> Self {
        Self {
            label: "grundrente-2021".to_string(),
            pension_point_value: DEFAULT_PENSION_POINT_VALUE,
            grundrente: GrundrenteParams::default(),
            income_crediting: IncomeCreditingParams::default(),
            minimum_income: MinimumIncomeParams::default(),
        }
    }

    /// Pension-module rules with the Wohngeld / Grundsicherung split
    pub fn pensions_2021() -> Self {
        Self {
            label: "pensions-2021".to_string(),
            pension_point_value: DEFAULT_PENSION_POINT_VALUE,
            grundrente: GrundrenteParams {
                doubled_boundary: DoubledBoundary::Strict,
                ..GrundrenteParams::default()
            },
            income_crediting: IncomeCreditingParams::default(),
            minimum_income: MinimumIncomeParams {
                include_wage_in_means_test: false,
                payout_method: PayoutMethod::HousingSplit,
                ..MinimumIncomeParams::default()
            },
        }
    }

    /// Reject parameter combinations the pipeline cannot evaluate meaningfully
    pub fn validate(&self) -> Result<(), LoadError> {
        let g = &self.grundrente;
        let ic = &self.income_crediting;
        let mi = &self.minimum_income;

        let finite = [
            ("pension_point_value", self.pension_point_value),
            ("grundrente.cap_base", g.cap_base),
            ("grundrente.cap_slope", g.cap_slope),
            ("grundrente.bonus_deduction", g.bonus_deduction),
            ("grundrente.max_access_factor", g.max_access_factor),
            ("income_crediting.lower_threshold", ic.lower_threshold),
            ("income_crediting.upper_threshold", ic.upper_threshold),
            ("income_crediting.partial_rate", ic.partial_rate),
            ("income_crediting.full_rate", ic.full_rate),
            ("minimum_income.standard_need", mi.standard_need),
            ("minimum_income.housing_cost", mi.housing_cost),
            ("minimum_income.base_allowance", mi.base_allowance),
            ("minimum_income.allowance_rate", mi.allowance_rate),
            ("minimum_income.allowance_cap_share", mi.allowance_cap_share),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(LoadError::InvalidRules(format!("{} is not finite", name)));
            }
        }

        if self.pension_point_value <= 0.0 {
            return Err(LoadError::InvalidRules(
                "pension_point_value must be positive".to_string(),
            ));
        }
        if g.cap_rounding_digits > MAX_CAP_ROUNDING_DIGITS {
            return Err(LoadError::InvalidRules(format!(
                "cap_rounding_digits ({}) above {}",
                g.cap_rounding_digits, MAX_CAP_ROUNDING_DIGITS
            )));
        }
        if g.max_access_factor <= 0.0 {
            return Err(LoadError::InvalidRules(
                "max_access_factor must be positive".to_string(),
            ));
        }
        if g.max_credited_months < g.min_qualifying_months {
            return Err(LoadError::InvalidRules(format!(
                "max_credited_months ({}) below min_qualifying_months ({})",
                g.max_credited_months, g.min_qualifying_months
            )));
        }
        if !(0.0..=1.0).contains(&g.bonus_deduction) {
            return Err(LoadError::InvalidRules(
                "bonus_deduction must lie in [0, 1]".to_string(),
            ));
        }
        if ic.lower_threshold > ic.upper_threshold {
            return Err(LoadError::InvalidRules(format!(
                "income crediting lower threshold ({}) above upper threshold ({})",
                ic.lower_threshold, ic.upper_threshold
            )));
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::grundrente_2021()
    }
}
