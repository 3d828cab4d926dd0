mod tables;

pub use self::tables::{
    classification as print_classification, picked as print_picked, stats as print_stats,
};

use dicetwist_core::ClassifiedRolls;
use serde::Serialize;
use std::fmt::Display;

/// One classification row, ready for a table or the JSON report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    pub group: String,
    pub occurrences: u64,
    pub probability: f64,
}

/// Flatten a tally into display rows, normalizing probabilities against the
/// given denominator (total rolls, or total dice for face groups).
pub fn entries<G>(classified: &ClassifiedRolls<G>, total: u64) -> Vec<GroupEntry>
where
    G: Display + Clone + PartialEq,
{
    classified
        .iter()
        .map(|(group, occurrences)| GroupEntry {
            group: group.to_string(),
            occurrences,
            probability: classified.probability_of(group, total),
        })
        .collect()
}
