//! Projection engine for CD maturity values and growth series

mod engine;
mod series;

pub use engine::{
    interest_share_percent, project, suggest_boost, BoostSuggestion, CheckingComparison,
    PlanResult,
};
pub use series::{build_growth_series, maturity_date, GrowthPoint};

// ============================================================================
// Compounding Convention
// ============================================================================
// CDs are quoted the way banks quote them: a nominal annual percentage yield
// credited in twelve monthly periods. The whole engine hangs off this one
// constant.

/// Compounding periods per year (monthly crediting)
pub const COMPOUNDS_PER_YEAR: u32 = 12;
