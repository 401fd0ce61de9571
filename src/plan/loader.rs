//! Scenario card loading from CSV
//!
//! Expected headers: title,deposit,term_months,apy,advertised_result,blurb

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::ScenarioCard;

#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to open scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario row: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario file contains no rows")]
    Empty,
}

/// Load scenario cards from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioCard>, ScenarioLoadError> {
    let file = File::open(path.as_ref())?;
    let cards = load_scenarios_from_reader(file)?;
    log::info!(
        "Loaded {} scenario cards from {}",
        cards.len(),
        path.as_ref().display()
    );
    Ok(cards)
}

/// Load scenario cards from any reader
pub fn load_scenarios_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<ScenarioCard>, ScenarioLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cards = Vec::new();

    for row in csv_reader.deserialize() {
        let card: ScenarioCard = row?;
        cards.push(card);
    }

    if cards.is_empty() {
        return Err(ScenarioLoadError::Empty);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
title,deposit,term_months,apy,advertised_result,blurb
College jump-start,15000,60,4.3,18691,Tuition boost
Allowance vault,2500,18,3.9,2638,Watch interest drizzle in
";

    #[test]
    fn test_load_from_reader() {
        let cards = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "College jump-start");
        assert_eq!(cards[0].deposit, 15_000.0);
        assert_eq!(cards[0].term_months, 60);
        assert_eq!(cards[1].apy, 3.9);
        assert_eq!(cards[1].advertised_result, 2_638.0);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let header_only = "title,deposit,term_months,apy,advertised_result,blurb\n";
        let err = load_scenarios_from_reader(header_only.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Empty));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let bad = "title,deposit,term_months,apy,advertised_result,blurb\nBroken,abc,60,4.3,1,x\n";
        let err = load_scenarios_from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Csv(_)));
    }
}
