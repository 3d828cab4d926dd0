//! Read cursors over a [`RollResults`] store.

use serde::Serialize;

use crate::store::RollResults;

/// A transient cursor presenting one roll's derived values to classifiers
/// and predicates. It owns nothing: every accessor reads straight out of
/// the store (and its face-occurrence cache), so a view is cheap to advance
/// and must not be captured beyond the current iteration step — take a
/// [`snapshot`](Self::snapshot) to retain a roll.
pub struct RollView<'a> {
    results: &'a RollResults,
    roll: usize,
}

impl<'a> RollView<'a> {
    pub(crate) fn at(results: &'a RollResults, roll: usize) -> Self {
        Self { results, roll }
    }

    pub(crate) fn move_to(&mut self, roll: usize) {
        debug_assert!(roll < self.results.rolls_count());
        self.roll = roll;
    }

    pub fn roll(&self) -> usize {
        self.roll
    }

    pub fn values(&self) -> &'a [u8] {
        self.results.raw_values(self.roll)
    }

    pub fn sum(&self) -> u32 {
        self.results.raw_sum(self.roll)
    }

    /// Twisted sum at the default threshold of `dice_count - 1` (clamped
    /// to 1 for single-die batches, where no cancellation is possible
    /// anyway).
    pub fn twisted_sum(&self) -> u32 {
        self.twisted_sum_with(self.default_threshold())
    }

    /// Twisted sum at an explicit threshold (clamped to 1).
    pub fn twisted_sum_with(&self, threshold: u32) -> u32 {
        self.results.raw_twisted_sum(self.roll, threshold.max(1))
    }

    pub fn face_occurrences(&self) -> &'a [u32] {
        self.results.raw_face_occurrences(self.roll)
    }

    /// Owned, immutable capture of this roll; safe to retain after the
    /// cursor advances.
    pub fn snapshot(&self) -> RollSnapshot {
        RollSnapshot {
            roll: self.roll,
            values: self.values().to_vec(),
            sum: self.sum(),
            twisted_sum: self.twisted_sum(),
            face_occurrences: self.face_occurrences().to_vec(),
        }
    }

    fn default_threshold(&self) -> u32 {
        (self.results.dice_count().saturating_sub(1)).max(1) as u32
    }
}

/// One roll's derived values, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollSnapshot {
    pub roll: usize,
    pub values: Vec<u8>,
    pub sum: u32,
    pub twisted_sum: u32,
    pub face_occurrences: Vec<u32>,
}
