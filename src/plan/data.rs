//! Core plan input record

use serde::{Deserialize, Serialize};

/// A single CD plan as captured from the calculator controls.
///
/// Values are assumed to already be clamped to domain limits (see
/// [`PlanLimits`](crate::plan::PlanLimits)); the projection engine does not
/// re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Initial deposit in dollars
    #[serde(default = "default_deposit")]
    pub deposit: f64,

    /// Annual percentage yield, quoted as a percentage (4.25 = 4.25%)
    #[serde(default = "default_apy")]
    pub apy_percent: f64,

    /// Term length in whole months
    #[serde(default = "default_term_months")]
    pub term_months: u32,
}

fn default_deposit() -> f64 {
    5_000.0
}

fn default_apy() -> f64 {
    4.25
}

fn default_term_months() -> u32 {
    12
}

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            deposit: default_deposit(),
            apy_percent: default_apy(),
            term_months: default_term_months(),
        }
    }
}

impl PlanInput {
    pub fn new(deposit: f64, apy_percent: f64, term_months: u32) -> Self {
        Self {
            deposit,
            apy_percent,
            term_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator() {
        let input = PlanInput::default();
        assert_eq!(input.deposit, 5_000.0);
        assert_eq!(input.apy_percent, 4.25);
        assert_eq!(input.term_months, 12);
    }

    #[test]
    fn test_deserialize_partial_input() {
        let input: PlanInput = serde_json::from_str(r#"{"deposit": 12000.0}"#).unwrap();
        assert_eq!(input.deposit, 12_000.0);
        assert_eq!(input.apy_percent, 4.25);
        assert_eq!(input.term_months, 12);
    }
}
