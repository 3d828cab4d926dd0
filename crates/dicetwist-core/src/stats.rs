//! Batch-level aggregates: roll statistics, global face and tuple totals.

use serde::Serialize;

use crate::error::{DiceError, DiceResult};
use crate::store::RollResults;

/// Aggregate over all rolls of a batch.
///
/// `average` is the arithmetic mean; `mean` is the midpoint between the
/// observed min and max. The naming is historical and kept for report
/// compatibility; renaming `mean` would silently change what downstream
/// readers get.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollStats {
    pub min: u32,
    pub max: u32,
    pub average: f64,
    pub mean: f64,
}

/// Scan all rolls and aggregate the roll sum, or a single die's value per
/// roll when `dice` is given. An empty batch yields all-zero stats.
pub fn roll_stats(results: &RollResults, dice: Option<usize>) -> DiceResult<RollStats> {
    if let Some(d) = dice {
        if d >= results.dice_count() {
            return Err(DiceError::IndexOutOfRange {
                kind: "dice",
                index: d,
                len: results.dice_count(),
            });
        }
    }

    let rolls = results.rolls_count();
    if rolls == 0 {
        return Ok(RollStats {
            min: 0,
            max: 0,
            average: 0.0,
            mean: 0.0,
        });
    }

    let mut min = u32::MAX;
    let mut max = 0u32;
    let mut total = 0u64;
    for roll in 0..rolls {
        let value = match dice {
            Some(d) => results.raw_values(roll)[d] as u32,
            None => results.raw_sum(roll),
        };
        min = min.min(value);
        max = max.max(value);
        total += value as u64;
    }

    Ok(RollStats {
        min,
        max,
        average: total as f64 / rolls as f64,
        mean: min as f64 + (max - min) as f64 / 2.0,
    })
}

/// Per-face occurrence totals across every roll, indexed by `face - 1`.
pub fn face_totals(results: &RollResults) -> Vec<u64> {
    let mut totals = vec![0u64; results.face_count()];
    for roll in 0..results.rolls_count() {
        for (face, &count) in results.raw_face_occurrences(roll).iter().enumerate() {
            totals[face] += count as u64;
        }
    }
    totals
}

/// Count of n-of-a-kind tuples across all rolls, indexed by tuple size
/// `0..=dice_count`. Slots 0 and 1 are never used: a face must repeat to
/// form a tuple.
pub fn tuple_totals(results: &RollResults) -> Vec<u64> {
    let mut totals = vec![0u64; results.dice_count() + 1];
    for roll in 0..results.rolls_count() {
        for &count in results.raw_face_occurrences(roll) {
            if count > 1 {
                totals[count as usize] += 1;
            }
        }
    }
    totals
}
