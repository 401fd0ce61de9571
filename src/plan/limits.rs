//! Domain limits and raw input clamping
//!
//! The projection engine assumes clamped inputs; these helpers are the single
//! place where raw control values (sliders, typed amounts, nudge buttons) get
//! normalized before a projection runs.

use serde::{Deserialize, Serialize};

use super::PlanInput;

/// Calculator domain limits.
///
/// Deposits and APY only get floored on manual entry - the calculator lets
/// users type past the configured maximums (promo rates, jumbo deposits), and
/// the slider ranges stretch to follow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Minimum deposit in dollars
    pub min_deposit: f64,
    /// Deposit slider ceiling in dollars
    pub max_deposit: f64,
    /// Minimum APY percentage
    pub min_apy: f64,
    /// APY slider ceiling percentage
    pub max_apy: f64,
    /// Minimum term in months
    pub min_term_months: u32,
    /// Term slider ceiling in months
    pub max_term_months: u32,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            min_deposit: 500.0,
            max_deposit: 2_000_000.0,
            min_apy: 0.25,
            max_apy: 8.0,
            min_term_months: 3,
            max_term_months: 180,
        }
    }
}

impl PlanLimits {
    /// Floor a raw deposit entry at the minimum
    pub fn clamp_deposit(&self, raw: f64) -> f64 {
        raw.max(self.min_deposit)
    }

    /// Floor a raw APY entry at the minimum
    pub fn clamp_apy(&self, raw: f64) -> f64 {
        raw.max(self.min_apy)
    }

    /// Round a raw term entry to whole months and floor at the minimum
    pub fn clamp_term(&self, raw: f64) -> u32 {
        let months = raw.round().max(0.0) as u32;
        months.max(self.min_term_months)
    }

    /// Apply a nudge-button delta to the current deposit
    pub fn nudge_deposit(&self, current: f64, delta: f64) -> f64 {
        self.clamp_deposit(current + delta)
    }

    /// Deposit slider ceiling, stretched when the typed value exceeds it
    pub fn slider_deposit_max(&self, current: f64) -> f64 {
        self.max_deposit.max(current)
    }

    /// APY slider ceiling, stretched when the typed value exceeds it
    pub fn slider_apy_max(&self, current: f64) -> f64 {
        self.max_apy.max(current)
    }

    /// Term slider ceiling, stretched when the typed value exceeds it
    pub fn slider_term_max(&self, current: u32) -> u32 {
        self.max_term_months.max(current)
    }

    /// Clamp all three plan fields at once
    pub fn clamp_input(&self, deposit: f64, apy_percent: f64, term_months: f64) -> PlanInput {
        PlanInput {
            deposit: self.clamp_deposit(deposit),
            apy_percent: self.clamp_apy(apy_percent),
            term_months: self.clamp_term(term_months),
        }
    }
}
