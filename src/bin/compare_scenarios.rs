//! Compare published scenario cards with live engine output
//!
//! The cards on the planning page carry rounded maturity values written as
//! copy; this prints each card's advertised number next to the projected one
//! so the drift stays visible.

use cdcalcula::plan::{default_scenarios, PlanLimits};
use cdcalcula::scenario::verify_scenarios;

fn main() {
    env_logger::init();

    let limits = PlanLimits::default();
    let cards = default_scenarios();
    let deviations = verify_scenarios(&cards, &limits);

    println!("Published card vs engine output (monthly compounding)");
    println!(
        "{:<22} {:>10} {:>6} {:>6} {:>14} {:>14} {:>10}",
        "Scenario", "Deposit", "APY", "Term", "Advertised", "Computed", "Diff"
    );

    for (card, deviation) in cards.iter().zip(&deviations) {
        println!(
            "{:<22} {:>10.0} {:>6.1} {:>6} {:>14.0} {:>14.2} {:>10.2}",
            card.title,
            card.deposit,
            card.apy,
            card.term_months,
            deviation.advertised_result,
            deviation.computed_maturity,
            deviation.deviation,
        );
    }
}
