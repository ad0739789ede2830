//! Eligibility categories

use crate::rules::GrundrenteParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grundrente eligibility category of one person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Fewer qualifying months than required
    Ineligible,
    /// Average rate at or below half the Höchstwert: the rate is doubled
    Doubled,
    /// Average rate between half the Höchstwert and the Höchstwert: topped up to it
    ToppedUp,
    /// Average rate at or above the Höchstwert: no bonus
    Excess,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ineligible,
        Category::Doubled,
        Category::ToppedUp,
        Category::Excess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ineligible => "INELIGIBLE",
            Category::Doubled => "DOUBLED",
            Category::ToppedUp => "TOPPED_UP",
            Category::Excess => "EXCESS",
        }
    }

    /// Whether this category can produce bonus points
    pub fn earns_bonus(&self) -> bool {
        matches!(self, Category::Doubled | Category::ToppedUp)
    }

    /// Stable index for per-category tallies
    pub fn index(&self) -> usize {
        match self {
            Category::Ineligible => 0,
            Category::Doubled => 1,
            Category::ToppedUp => 2,
            Category::Excess => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign exactly one category
///
/// Checked in order INELIGIBLE, DOUBLED, TOPPED_UP; everything left is
/// EXCESS. An average exactly at the Höchstwert lands in EXCESS, whose bonus
/// of zero equals the TOPPED_UP bonus at that point. `avg_points` must be
/// finite whenever the person meets the month threshold.
pub fn classify(
    qualifying_months: u32,
    avg_points: f64,
    cap: f64,
    params: &GrundrenteParams,
) -> Category {
    if !params.is_entitled(qualifying_months) {
        return Category::Ineligible;
    }

    let half_cap = 0.5 * cap;
    if params.doubled_boundary.is_doubled(avg_points, half_cap) {
        Category::Doubled
    } else if avg_points >= half_cap && avg_points < cap {
        Category::ToppedUp
    } else {
        Category::Excess
    }
}
