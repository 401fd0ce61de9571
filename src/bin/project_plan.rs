//! Project a single CD plan from the command line
//!
//! Clamps raw arguments the same way the calculator controls do, prints the
//! full projection summary, and can export the growth series as CSV or the
//! whole projection as JSON.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use cdcalcula::format;
use cdcalcula::plan::PlanLimits;
use cdcalcula::projection::{
    build_growth_series, interest_share_percent, maturity_date, project, suggest_boost,
    CheckingComparison,
};

#[derive(Parser, Debug)]
#[command(name = "project_plan", about = "Project a CD plan's maturity value")]
struct Args {
    /// Initial deposit in dollars
    #[arg(long, default_value_t = 5_000.0)]
    deposit: f64,

    /// Annual percentage yield (4.25 = 4.25%)
    #[arg(long, default_value_t = 4.25)]
    apy: f64,

    /// Term length in months
    #[arg(long = "term-months", default_value_t = 12.0)]
    term_months: f64,

    /// CD open date for the maturity date line (defaults to today)
    #[arg(long)]
    opened: Option<NaiveDate>,

    /// Write the month-by-month growth series to this CSV file
    #[arg(long)]
    series_out: Option<PathBuf>,

    /// Emit the projection as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let limits = PlanLimits::default();
    let input = limits.clamp_input(args.deposit, args.apy, args.term_months);

    if input.deposit != args.deposit
        || input.apy_percent != args.apy
        || input.term_months as f64 != args.term_months
    {
        log::info!(
            "clamped inputs to deposit={} apy={} term={}",
            input.deposit,
            input.apy_percent,
            input.term_months
        );
    }

    let result = project(&input);
    let series = build_growth_series(&input);
    let boost = suggest_boost(&input, &result);
    let comparison = CheckingComparison::new(&input, &result);
    let opened = args.opened.unwrap_or_else(|| Local::now().date_naive());

    if args.json {
        let payload = serde_json::json!({
            "input": input,
            "result": result,
            "interest_share_percent": interest_share_percent(&result),
            "boost": boost,
            "checking_comparison": comparison,
            "growth_series": series,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "CD plan: {} at {}% APY for {}",
            format::currency(input.deposit),
            format::percent(input.apy_percent),
            format::duration(input.term_months),
        );
        println!();
        println!("  Maturity value:    {}", format::currency_precise(result.maturity_value));
        println!("  Interest earned:   {}", format::currency_precise(result.total_interest));
        println!("  Effective yield:   {}%", format::percent(result.effective_yield_percent));
        println!("  Monthly interest:  {}", format::currency_precise(result.monthly_interest));
        println!(
            "  Interest share:    {}% of the final balance",
            format::percent(interest_share_percent(&result)),
        );
        println!();
        println!(
            "  Add {} more and the CD grows to {}.",
            format::currency(boost.amount),
            format::currency_precise(boost.boosted_value),
        );
        println!(
            "  Idle at 0% APY the same {} stays {}; this CD earns an extra {}.",
            format::currency(comparison.idle_value),
            format::currency(comparison.idle_value),
            format::currency_precise(comparison.cd_advantage),
        );
        if let Some(matures) = maturity_date(opened, input.term_months) {
            println!("  Opened {opened}, matures {matures}.");
        }
    }

    if let Some(path) = &args.series_out {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        for point in &series {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!();
        println!("Growth series written to {}", path.display());
    }

    Ok(())
}
