//! Month-by-month growth series and maturity dates

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::COMPOUNDS_PER_YEAR;
use crate::plan::PlanInput;

/// One charted point: the balance after `month` whole months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: u32,
    pub value: f64,
}

/// Build the growth series for a plan, one point per whole month from 0
/// through the term inclusive.
///
/// The series is rebuilt from scratch on every call - chart rendering always
/// sees a complete, consistent curve rather than an incremental update. A
/// zero-month term still produces a minimal two-point curve.
pub fn build_growth_series(input: &PlanInput) -> Vec<GrowthPoint> {
    let total_months = input.term_months.max(1);
    let monthly_rate = input.apy_percent / 100.0 / COMPOUNDS_PER_YEAR as f64;

    (0..=total_months)
        .map(|month| GrowthPoint {
            month,
            value: input.deposit * (1.0 + monthly_rate).powi(month as i32),
        })
        .collect()
}

/// Calendar date a CD opened on `opened` matures, by whole-month addition.
///
/// `None` only if the date arithmetic overflows chrono's range.
pub fn maturity_date(opened: NaiveDate, term_months: u32) -> Option<NaiveDate> {
    opened.checked_add_months(Months::new(term_months))
}
