//! Maturity projection under monthly compounding
//!
//! The engine is a pure function from a plan input to a fully derived result.
//! There is no error path: the two degenerate inputs (zero deposit, zero
//! term) fall back to defined values instead of dividing by zero.

use serde::{Deserialize, Serialize};

use super::COMPOUNDS_PER_YEAR;
use crate::plan::PlanInput;

/// Fully derived projection for one plan.
///
/// Every field is a function of the input; none is ever mutated
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Principal plus compounded interest at the end of the term
    pub maturity_value: f64,

    /// Interest earned over the full term
    pub total_interest: f64,

    /// Average interest credited per month of the term
    pub monthly_interest: f64,

    /// Total growth over the term as a percentage of the deposit
    pub effective_yield_percent: f64,

    /// Multiplier applied to the deposit to reach maturity
    pub growth_factor: f64,
}

/// Monthly crediting rate for a quoted APY percentage
fn monthly_rate(apy_percent: f64) -> f64 {
    apy_percent / 100.0 / COMPOUNDS_PER_YEAR as f64
}

/// Project the maturity value of a plan.
///
/// Pure and deterministic: identical inputs produce bit-identical results.
/// Inputs are assumed clamped (positive deposit, non-negative APY and term);
/// out-of-domain values are the caller's responsibility.
pub fn project(input: &PlanInput) -> PlanResult {
    let growth_factor = (1.0 + monthly_rate(input.apy_percent)).powi(input.term_months as i32);
    let maturity_value = input.deposit * growth_factor;
    let total_interest = maturity_value - input.deposit;

    // A zero-month term still reports a monthly figure rather than NaN
    let months = input.term_months.max(1) as f64;

    let effective_yield_percent = if input.deposit > 0.0 {
        (growth_factor - 1.0) * 100.0
    } else {
        0.0
    };

    PlanResult {
        maturity_value,
        total_interest,
        monthly_interest: total_interest / months,
        effective_yield_percent,
        growth_factor,
    }
}

/// Share of the final balance that is interest, as a percentage.
///
/// Zero when there is no balance to take a share of.
pub fn interest_share_percent(result: &PlanResult) -> f64 {
    if result.maturity_value > 0.0 {
        result.total_interest / result.maturity_value * 100.0
    } else {
        0.0
    }
}

/// The "tiny nudge" deposit suggestion shown next to a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostSuggestion {
    /// Suggested extra deposit, rounded to the nearest $100 with a $100 floor
    pub amount: f64,
    /// Maturity value with the extra deposit included
    pub boosted_value: f64,
}

/// Suggest a small deposit boost: one-tenth of a percent of the deposit per
/// $100 unit, never less than $100.
///
/// The rounding rule is a planning convenience carried over from the
/// published calculator, not a financial guarantee.
pub fn suggest_boost(input: &PlanInput, result: &PlanResult) -> BoostSuggestion {
    let amount = ((input.deposit * 0.001).round() * 100.0).max(100.0);
    let boosted_value = if input.deposit > 0.0 {
        (input.deposit + amount) * result.growth_factor
    } else {
        result.maturity_value
    };

    BoostSuggestion {
        amount,
        boosted_value,
    }
}

/// Side-by-side with the same dollars left idle at 0% APY
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckingComparison {
    /// What an idle checking balance ends with: the deposit itself
    pub idle_value: f64,
    /// Extra dollars the CD earns over the idle baseline
    pub cd_advantage: f64,
}

impl CheckingComparison {
    pub fn new(input: &PlanInput, result: &PlanResult) -> Self {
        Self {
            idle_value: input.deposit,
            cd_advantage: result.maturity_value - input.deposit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_apy_earns_nothing() {
        let result = project(&PlanInput::new(10_000.0, 0.0, 36));

        assert_eq!(result.maturity_value, 10_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.monthly_interest, 0.0);
        assert_eq!(result.effective_yield_percent, 0.0);
        assert_eq!(result.growth_factor, 1.0);
    }

    #[test]
    fn test_zero_deposit_has_no_yield() {
        let result = project(&PlanInput::new(0.0, 4.25, 12));

        assert_eq!(result.maturity_value, 0.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.effective_yield_percent, 0.0);
        // The factor itself is still well defined
        assert!(result.growth_factor > 1.0);
    }

    #[test]
    fn test_zero_term_never_divides_by_zero() {
        let result = project(&PlanInput::new(5_000.0, 4.25, 0));

        assert_eq!(result.maturity_value, 5_000.0);
        assert_eq!(result.monthly_interest, 0.0);
        assert!(result.monthly_interest.is_finite());
    }

    #[test]
    fn test_college_jump_start_scenario() {
        // 15000 at 4.3% for 60 months
        let result = project(&PlanInput::new(15_000.0, 4.3, 60));

        assert_relative_eq!(result.maturity_value, 18_590.8, max_relative = 1e-4);
        assert_relative_eq!(result.total_interest, 3_590.8, max_relative = 1e-3);
        assert_relative_eq!(result.effective_yield_percent, 23.94, max_relative = 1e-3);
    }

    #[test]
    fn test_allowance_vault_scenario() {
        // 2500 at 3.9% for 18 months
        let result = project(&PlanInput::new(2_500.0, 3.9, 18));

        assert_relative_eq!(result.maturity_value, 2_650.4, max_relative = 1e-4);
        assert_relative_eq!(
            result.monthly_interest,
            result.total_interest / 18.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_dream_home_scenario() {
        // 60000 at 4.8% for 84 months
        let result = project(&PlanInput::new(60_000.0, 4.8, 84));

        assert_relative_eq!(result.maturity_value, 83_904.0, max_relative = 1e-4);
    }

    #[test]
    fn test_maturity_monotone_in_term() {
        let mut previous = 0.0;
        for term in [3u32, 6, 12, 24, 60, 120, 180] {
            let result = project(&PlanInput::new(15_000.0, 4.3, term));
            assert!(result.maturity_value >= previous);
            previous = result.maturity_value;
        }
    }

    #[test]
    fn test_maturity_monotone_in_apy() {
        let mut previous = 0.0;
        for apy in [0.0, 0.25, 1.0, 2.5, 4.3, 8.0, 12.0] {
            let result = project(&PlanInput::new(15_000.0, apy, 60));
            assert!(result.maturity_value >= previous);
            previous = result.maturity_value;
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let input = PlanInput::new(7_777.77, 5.55, 55);
        let first = project(&input);
        let second = project(&input);

        // Bit-identical, not just approximately equal
        assert_eq!(first, second);
    }

    #[test]
    fn test_invariants_tie_fields_together() {
        let input = PlanInput::new(42_000.0, 3.15, 48);
        let result = project(&input);

        assert_relative_eq!(
            result.maturity_value,
            input.deposit * result.growth_factor,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.total_interest,
            result.maturity_value - input.deposit,
            max_relative = 1e-12
        );
        assert!(result.growth_factor >= 1.0);
    }

    #[test]
    fn test_interest_share() {
        let input = PlanInput::new(15_000.0, 4.3, 60);
        let result = project(&input);
        let share = interest_share_percent(&result);

        assert!(share > 0.0 && share < 100.0);
        assert_relative_eq!(
            share,
            result.total_interest / result.maturity_value * 100.0,
            max_relative = 1e-12
        );

        let empty = project(&PlanInput::new(0.0, 4.3, 60));
        assert_eq!(interest_share_percent(&empty), 0.0);
    }

    #[test]
    fn test_boost_rounding_rule() {
        let cases = [
            (5_000.0, 500.0),
            (500.0, 100.0),
            (40.0, 100.0),
            (123_456.0, 12_300.0),
            (1_234_560.0, 123_500.0),
        ];

        for (deposit, expected) in cases {
            let input = PlanInput::new(deposit, 4.25, 12);
            let boost = suggest_boost(&input, &project(&input));
            assert_eq!(boost.amount, expected, "deposit {deposit}");
        }
    }

    #[test]
    fn test_boost_applies_growth_factor() {
        let input = PlanInput::new(5_000.0, 4.25, 12);
        let result = project(&input);
        let boost = suggest_boost(&input, &result);

        assert_relative_eq!(
            boost.boosted_value,
            (5_000.0 + 500.0) * result.growth_factor,
            max_relative = 1e-12
        );

        // Nothing to boost from an empty deposit
        let empty = PlanInput::new(0.0, 4.25, 12);
        let empty_boost = suggest_boost(&empty, &project(&empty));
        assert_eq!(empty_boost.boosted_value, 0.0);
    }

    #[test]
    fn test_checking_comparison() {
        let input = PlanInput::new(15_000.0, 4.3, 60);
        let result = project(&input);
        let comparison = CheckingComparison::new(&input, &result);

        assert_eq!(comparison.idle_value, 15_000.0);
        assert_relative_eq!(
            comparison.cd_advantage,
            result.total_interest,
            max_relative = 1e-12
        );
    }
}
