//! Individual record as supplied by the data-loading layer

use serde::{Deserialize, Serialize};

/// Per-person inputs for one evaluation period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRecord {
    /// Unique person identifier
    pub person_id: u64,

    /// Grundrentenzeiten in months
    pub qualifying_months: u32,

    /// Grundrentenbewertungszeiten in months
    pub valuation_months: u32,

    /// Entgeltpunkte earned during the valuation months
    pub grundrente_points: f64,

    /// Rentenwert (currency value of one pension point)
    pub pension_point_value: f64,

    /// Zugangsfaktor
    pub access_factor: f64,

    /// Monthly gross wage
    pub gross_wage: f64,

    /// Monthly statutory pension before Grundrente
    pub existing_pension: f64,
}

impl IndividualRecord {
    /// Create a record with a full-entitlement access factor and no wage
    pub fn new(
        person_id: u64,
        qualifying_months: u32,
        valuation_months: u32,
        grundrente_points: f64,
        pension_point_value: f64,
        existing_pension: f64,
    ) -> Self {
        Self {
            person_id,
            qualifying_months,
            valuation_months,
            grundrente_points,
            pension_point_value,
            access_factor: 1.0,
            gross_wage: 0.0,
            existing_pension,
        }
    }

    /// Set the Zugangsfaktor
    pub fn with_access_factor(mut self, access_factor: f64) -> Self {
        self.access_factor = access_factor;
        self
    }

    /// Set the monthly gross wage
    pub fn with_gross_wage(mut self, gross_wage: f64) -> Self {
        self.gross_wage = gross_wage;
        self
    }

    /// Qualifying years, rounded down
    pub fn qualifying_years(&self) -> u32 {
        self.qualifying_months / 12
    }

    /// Wage plus existing pension, the income base for crediting
    pub fn combined_income(&self) -> f64 {
        self.gross_wage + self.existing_pension
    }

    /// Ingestion check for out-of-range values
    ///
    /// Months are unsigned, so only the float fields need checking.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("grundrente_points", self.grundrente_points),
            ("access_factor", self.access_factor),
            ("gross_wage", self.gross_wage),
            ("existing_pension", self.existing_pension),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(format!("{} is not finite", name));
            }
            if value < 0.0 {
                return Err(format!("{} is negative ({})", name, value));
            }
        }

        if !self.pension_point_value.is_finite() || self.pension_point_value <= 0.0 {
            return Err(format!(
                "pension_point_value must be positive ({})",
                self.pension_point_value
            ));
        }

        if self.valuation_months == 0 && self.grundrente_points > 0.0 {
            return Err(format!(
                "{} points with zero valuation months",
                self.grundrente_points
            ));
        }

        Ok(())
    }

    /// Valuation months should not exceed qualifying months
    pub fn has_consistent_months(&self) -> bool {
        self.valuation_months <= self.qualifying_months
    }
}
