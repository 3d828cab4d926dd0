//! Flat storage for batched roll outcomes and the traversals over them.

use std::sync::OnceLock;

use tracing::debug;

use crate::classify::{ClassifiedRolls, RollClassifier};
use crate::config::RollConfig;
use crate::error::{DiceError, DiceResult};
use crate::stats::{self, RollStats};
use crate::view::{RollSnapshot, RollView};

/// Rolls handled per rayon task in `par_classify`.
const PAR_CHUNK: usize = 4096;

/// Every die outcome of a simulation batch in one flat byte buffer:
/// `rolls * dice_count` entries, each in `[1, faces]` (0 marks a die that
/// was never written).
///
/// The per-roll face-occurrence counts (`rolls * faces` entries) are derived
/// lazily and cached. Any write drops the cache; the next read recomputes it
/// over the whole store, so repeated reads between writes stay O(1).
pub struct RollResults {
    config: RollConfig,
    results: Vec<u8>,
    face_occurrences: OnceLock<Box<[u32]>>,
}

impl RollResults {
    pub fn new(config: RollConfig) -> Self {
        Self {
            config,
            results: vec![0u8; config.rolls() * config.dice_count()],
            face_occurrences: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn rolls_count(&self) -> usize {
        self.config.rolls()
    }

    pub fn dice_count(&self) -> usize {
        self.config.dice_count()
    }

    pub fn face_count(&self) -> usize {
        self.config.face_count()
    }

    // ── Per-die access ──────────────────────────────────────────────

    pub fn get(&self, roll: usize, dice: usize) -> DiceResult<u8> {
        Ok(self.results[self.offset(roll, dice)?])
    }

    pub fn set(&mut self, roll: usize, dice: usize, value: u8) -> DiceResult<()> {
        let offset = self.offset(roll, dice)?;
        self.check_value(value)?;
        self.results[offset] = value;
        self.invalidate();
        Ok(())
    }

    /// Bulk overwrite of one roll. `values` must hold exactly `dice_count`
    /// entries, each in `[1, faces]`.
    pub fn set_roll_values(&mut self, roll: usize, values: &[u8]) -> DiceResult<()> {
        if values.len() != self.dice_count() {
            return Err(DiceError::LengthMismatch {
                expected: self.dice_count(),
                actual: values.len(),
            });
        }
        for &value in values {
            self.check_value(value)?;
        }
        let start = self.offset(roll, 0)?;
        self.results[start..start + values.len()].copy_from_slice(values);
        self.invalidate();
        Ok(())
    }

    /// All die values of one roll, borrowed straight from the store.
    pub fn values(&self, roll: usize) -> DiceResult<&[u8]> {
        self.check_roll(roll)?;
        Ok(self.raw_values(roll))
    }

    /// Copy of one roll's die values into a caller-supplied buffer of exact
    /// length `dice_count`.
    pub fn values_into(&self, roll: usize, out: &mut [u8]) -> DiceResult<()> {
        if out.len() != self.dice_count() {
            return Err(DiceError::LengthMismatch {
                expected: self.dice_count(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(self.values(roll)?);
        Ok(())
    }

    // ── Derived face occurrences ────────────────────────────────────

    /// Count of dice showing each face `1..=faces` in the given roll,
    /// indexed by `face - 1`.
    pub fn face_occurrences(&self, roll: usize) -> DiceResult<&[u32]> {
        self.check_roll(roll)?;
        Ok(self.raw_face_occurrences(roll))
    }

    /// Same as [`face_occurrences`](Self::face_occurrences), written into a
    /// caller-supplied buffer of exact length `faces`.
    pub fn face_occurrences_into(&self, roll: usize, out: &mut [u32]) -> DiceResult<()> {
        if out.len() != self.face_count() {
            return Err(DiceError::LengthMismatch {
                expected: self.face_count(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(self.face_occurrences(roll)?);
        Ok(())
    }

    fn occurrences(&self) -> &[u32] {
        self.face_occurrences
            .get_or_init(|| self.count_face_occurrences())
    }

    fn count_face_occurrences(&self) -> Box<[u32]> {
        debug!(rolls = self.rolls_count(), "recomputing face occurrence cache");
        let faces = self.face_count();
        let mut counts = vec![0u32; self.rolls_count() * faces];
        for roll in 0..self.rolls_count() {
            let base = roll * faces;
            for &value in self.raw_values(roll) {
                // 0 = never written, carries no face
                if value != 0 {
                    counts[base + value as usize - 1] += 1;
                }
            }
        }
        counts.into_boxed_slice()
    }

    fn invalidate(&mut self) {
        self.face_occurrences = OnceLock::new();
    }

    // ── Sums ────────────────────────────────────────────────────────

    pub fn sum(&self, roll: usize) -> DiceResult<u32> {
        self.check_roll(roll)?;
        Ok(self.raw_sum(roll))
    }

    /// The push-your-luck sum: values repeated in exact multiples of
    /// `threshold` cancel out, only the remainder count `count % threshold`
    /// of each face is kept.
    ///
    /// With threshold 2, `[3, 2, 2]` keeps only the lone 3; `[3, 3, 3]`
    /// keeps one 3 after a canceling pair is removed; `[3, 3]` collapses
    /// to 0.
    pub fn twisted_sum(&self, roll: usize, threshold: u32) -> DiceResult<u32> {
        self.check_roll(roll)?;
        if threshold == 0 {
            return Err(DiceError::Validation(
                "twisted sum threshold must be >= 1".into(),
            ));
        }
        Ok(self.raw_twisted_sum(roll, threshold))
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Min/max/average over all rolls: of the roll sum, or of a single
    /// die's value when `dice` is given.
    pub fn stats(&self, dice: Option<usize>) -> DiceResult<RollStats> {
        stats::roll_stats(self, dice)
    }

    /// Per-face occurrence totals across every roll, indexed by `face - 1`.
    pub fn face_totals(&self) -> Vec<u64> {
        stats::face_totals(self)
    }

    /// How many n-of-a-kind tuples occurred across all rolls, indexed by
    /// tuple size `0..=dice_count` (slots 0 and 1 stay unused).
    pub fn tuple_totals(&self) -> Vec<u64> {
        stats::tuple_totals(self)
    }

    // ── Traversals ──────────────────────────────────────────────────

    /// A read cursor bound to the given roll.
    pub fn view(&self, roll: usize) -> DiceResult<RollView<'_>> {
        self.check_roll(roll)?;
        Ok(RollView::at(self, roll))
    }

    /// Visit every roll in index order with a single reusable view; the
    /// first `Some` returned by the visitor stops the scan.
    pub fn visit<T>(&self, mut visitor: impl FnMut(&RollView<'_>) -> Option<T>) -> Option<T> {
        let mut view = RollView::at(self, 0);
        for roll in 0..self.rolls_count() {
            view.move_to(roll);
            if let Some(found) = visitor(&view) {
                return Some(found);
            }
        }
        None
    }

    /// First `limit` rolls matching the predicate, in ascending roll order,
    /// captured as owned snapshots that stay valid after the scan.
    pub fn pick(
        &self,
        mut predicate: impl FnMut(&RollView<'_>) -> bool,
        limit: usize,
    ) -> Vec<RollSnapshot> {
        let mut picked = Vec::new();
        if limit == 0 {
            return picked;
        }
        self.visit(|view| {
            if predicate(view) {
                picked.push(view.snapshot());
                if picked.len() >= limit {
                    return Some(());
                }
            }
            None
        });
        picked
    }

    /// Apply a classifier to every roll and tally occurrences per group.
    /// Groups declared by the classifier are pre-seeded at zero, so they
    /// keep a stable position in the result even when no roll matched.
    pub fn classify<C: RollClassifier>(&self, classifier: &C) -> ClassifiedRolls<C::Group> {
        let mut classified = ClassifiedRolls::new(self.config);
        if let Some(groups) = classifier.declared_groups() {
            for group in groups {
                classified.set_count(group, 0);
            }
        }
        let mut view = RollView::at(self, 0);
        let mut groups = Vec::new();
        for roll in 0..self.rolls_count() {
            view.move_to(roll);
            classifier.classify(&view, &mut groups);
            for group in groups.drain(..) {
                classified.increment(group);
            }
        }
        classified
    }

    /// Parallel variant of [`classify`](Self::classify), partitioning the
    /// roll range across rayon workers. Per-partition tallies are merged in
    /// partition order, so group ordering is only first-seen-per-partition;
    /// with declared groups the output order is identical to `classify`.
    pub fn par_classify<C>(&self, classifier: &C) -> ClassifiedRolls<C::Group>
    where
        C: RollClassifier + Sync,
        C::Group: Send,
    {
        use rayon::prelude::*;

        // The cache is write-once per mutation epoch: materialize it before
        // fanning out so worker threads only ever read.
        self.occurrences();

        let rolls = self.rolls_count();
        let chunks = rolls.div_ceil(PAR_CHUNK);
        let parts: Vec<ClassifiedRolls<C::Group>> = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * PAR_CHUNK;
                let end = (start + PAR_CHUNK).min(rolls);
                let mut part = ClassifiedRolls::new(self.config);
                let mut view = RollView::at(self, start);
                let mut groups = Vec::new();
                for roll in start..end {
                    view.move_to(roll);
                    classifier.classify(&view, &mut groups);
                    for group in groups.drain(..) {
                        part.increment(group);
                    }
                }
                part
            })
            .collect();

        let mut classified = ClassifiedRolls::new(self.config);
        if let Some(groups) = classifier.declared_groups() {
            for group in groups {
                classified.set_count(group, 0);
            }
        }
        for part in parts {
            classified.merge(part);
        }
        classified
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Bulk fill for generators; values must already be in `[1, faces]`.
    pub(crate) fn fill_with(&mut self, mut value: impl FnMut() -> u8) {
        for slot in &mut self.results {
            *slot = value();
        }
        self.invalidate();
    }

    pub(crate) fn raw_values(&self, roll: usize) -> &[u8] {
        let start = roll * self.dice_count();
        &self.results[start..start + self.dice_count()]
    }

    pub(crate) fn raw_sum(&self, roll: usize) -> u32 {
        self.raw_values(roll).iter().map(|&v| v as u32).sum()
    }

    pub(crate) fn raw_face_occurrences(&self, roll: usize) -> &[u32] {
        let faces = self.face_count();
        &self.occurrences()[roll * faces..(roll + 1) * faces]
    }

    pub(crate) fn raw_twisted_sum(&self, roll: usize, threshold: u32) -> u32 {
        let mut total = 0u32;
        for (i, &count) in self.raw_face_occurrences(roll).iter().enumerate() {
            let face = i as u32 + 1;
            total += face * (count % threshold);
        }
        total
    }

    fn check_roll(&self, roll: usize) -> DiceResult<()> {
        if roll >= self.rolls_count() {
            return Err(DiceError::IndexOutOfRange {
                kind: "roll",
                index: roll,
                len: self.rolls_count(),
            });
        }
        Ok(())
    }

    fn check_value(&self, value: u8) -> DiceResult<()> {
        if value == 0 || value > self.config.faces() {
            return Err(DiceError::Validation(format!(
                "die value {value} outside 1..={}",
                self.config.faces()
            )));
        }
        Ok(())
    }

    fn offset(&self, roll: usize, dice: usize) -> DiceResult<usize> {
        self.check_roll(roll)?;
        if dice >= self.dice_count() {
            return Err(DiceError::IndexOutOfRange {
                kind: "dice",
                index: dice,
                len: self.dice_count(),
            });
        }
        Ok(roll * self.dice_count() + dice)
    }
}
