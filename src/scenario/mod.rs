//! Batch scenario projection, CD ladders, and published-card verification

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plan::{PlanInput, PlanLimits, ScenarioCard};
use crate::projection::{project, PlanResult};

/// One projected plan within a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub input: PlanInput,
    pub result: PlanResult,
    /// Extra dollars over the same deposit left idle at 0% APY
    pub cd_advantage: f64,
}

/// Project a batch of plans in parallel, preserving input order.
///
/// The engine is pure, so the parallel run is identical to projecting each
/// plan sequentially.
pub fn run_batch(inputs: &[PlanInput]) -> Vec<ScenarioOutcome> {
    inputs
        .par_iter()
        .map(|input| {
            let result = project(input);
            ScenarioOutcome {
                input: *input,
                result,
                cd_advantage: result.maturity_value - input.deposit,
            }
        })
        .collect()
}

/// One rung of a CD ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderRung {
    pub input: PlanInput,
    pub result: PlanResult,
}

/// A deposit split evenly across CDs of staggered terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ladder {
    pub rungs: Vec<LadderRung>,
}

impl Ladder {
    pub fn total_deposit(&self) -> f64 {
        self.rungs.iter().map(|r| r.input.deposit).sum()
    }

    pub fn total_maturity(&self) -> f64 {
        self.rungs.iter().map(|r| r.result.maturity_value).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.rungs.iter().map(|r| r.result.total_interest).sum()
    }
}

/// Split a deposit evenly across staggered terms and project each rung.
///
/// Rungs keep the caller's term order. An empty term list yields an empty
/// ladder.
pub fn build_ladder(total_deposit: f64, apy_percent: f64, rung_terms: &[u32]) -> Ladder {
    if rung_terms.is_empty() {
        return Ladder { rungs: Vec::new() };
    }

    let per_rung = total_deposit / rung_terms.len() as f64;
    let inputs: Vec<PlanInput> = rung_terms
        .iter()
        .map(|&term_months| PlanInput::new(per_rung, apy_percent, term_months))
        .collect();

    let rungs = run_batch(&inputs)
        .into_iter()
        .map(|outcome| LadderRung {
            input: outcome.input,
            result: outcome.result,
        })
        .collect();

    Ladder { rungs }
}

/// Drift between a published card and what the engine computes for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDeviation {
    pub title: String,
    pub advertised_result: f64,
    pub computed_maturity: f64,
    /// `computed_maturity - advertised_result`
    pub deviation: f64,
}

/// Project each published card and report how far its advertised maturity
/// drifts from the engine output.
///
/// Card values are rounded marketing copy; the engine is the source of
/// truth. This keeps the two visibly reconciled instead of silently
/// diverging.
pub fn verify_scenarios(cards: &[ScenarioCard], limits: &PlanLimits) -> Vec<ScenarioDeviation> {
    cards
        .iter()
        .map(|card| {
            let result = project(&card.to_input(limits));
            let deviation = result.maturity_value - card.advertised_result;
            if deviation.abs() > 1.0 {
                log::warn!(
                    "scenario '{}' advertises {:.0} but projects {:.2}",
                    card.title,
                    card.advertised_result,
                    result.maturity_value
                );
            }
            ScenarioDeviation {
                title: card.title.clone(),
                advertised_result: card.advertised_result,
                computed_maturity: result.maturity_value,
                deviation,
            }
        })
        .collect()
}
