//! Term presets and published scenario cards

use serde::{Deserialize, Serialize};

use super::{PlanInput, PlanLimits};

/// A quick-pick term chip on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOption {
    pub label: &'static str,
    pub months: u32,
}

/// Quick-pick terms from 6 months to 15 years
pub const TERM_OPTIONS: [TermOption; 11] = [
    TermOption { label: "6 mo", months: 6 },
    TermOption { label: "1 yr", months: 12 },
    TermOption { label: "18 mo", months: 18 },
    TermOption { label: "2 yr", months: 24 },
    TermOption { label: "3 yr", months: 36 },
    TermOption { label: "4 yr", months: 48 },
    TermOption { label: "5 yr", months: 60 },
    TermOption { label: "7 yr", months: 84 },
    TermOption { label: "10 yr", months: 120 },
    TermOption { label: "12 yr", months: 144 },
    TermOption { label: "15 yr", months: 180 },
];

/// A featured scenario card.
///
/// `advertised_result` is the rounded maturity value printed on the card
/// itself. It is copy, not engine output - the comparison tooling in
/// [`scenario`](crate::scenario) reports how far each card drifts from the
/// projected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCard {
    pub title: String,
    pub deposit: f64,
    pub term_months: u32,
    pub apy: f64,
    pub advertised_result: f64,
    pub blurb: String,
}

impl ScenarioCard {
    /// Convert the card into a plan input, clamped the same way the
    /// calculator clamps when a card is applied
    pub fn to_input(&self, limits: &PlanLimits) -> PlanInput {
        PlanInput {
            deposit: limits.clamp_deposit(self.deposit),
            apy_percent: limits.clamp_apy(self.apy),
            term_months: limits.clamp_term(self.term_months as f64),
        }
    }
}

/// The three scenario cards published on the planning page
pub fn default_scenarios() -> Vec<ScenarioCard> {
    vec![
        ScenarioCard {
            title: "College jump-start".to_string(),
            deposit: 15_000.0,
            term_months: 60,
            apy: 4.3,
            advertised_result: 18_691.0,
            blurb: "Map tuition boosts that stay separate from daily spending.".to_string(),
        },
        ScenarioCard {
            title: "Dream home reserve".to_string(),
            deposit: 60_000.0,
            term_months: 84,
            apy: 4.8,
            advertised_result: 78_755.0,
            blurb: "Keep your down payment untouched while it grows quietly alongside the housing hunt.".to_string(),
        },
        ScenarioCard {
            title: "Allowance vault".to_string(),
            deposit: 2_500.0,
            term_months: 18,
            apy: 3.9,
            advertised_result: 2_638.0,
            blurb: "Teach kids patience by letting them watch interest drizzle in every month.".to_string(),
        },
    ]
}
