//! Grouping strategies over rolls and the per-group tallies they produce.

use crate::config::RollConfig;
use crate::view::RollView;

/// Strategy grouping rolls into named buckets; the group key is used for
/// display and probability lookups. One roll may land in zero, one, or
/// many groups.
pub trait RollClassifier {
    type Group: Clone + PartialEq;

    /// The full expected group space, when known upfront. Declared groups
    /// are pre-seeded at zero occurrences by `classify`, so they keep a
    /// stable position in the output even when no roll matches them.
    fn declared_groups(&self) -> Option<Vec<Self::Group>> {
        None
    }

    /// Push every group this roll belongs to into `out` (cleared by the
    /// caller between rolls).
    fn classify(&self, view: &RollView<'_>, out: &mut Vec<Self::Group>);
}

/// Ordered inclusive integer ranges with their `"min-max"` labels.
#[derive(Debug, Clone)]
pub struct RangeSet {
    ranges: Vec<(u32, u32)>,
    labels: Vec<String>,
}

impl RangeSet {
    pub fn new(ranges: Vec<(u32, u32)>) -> Self {
        let labels = ranges.iter().map(|(lo, hi)| format!("{lo}-{hi}")).collect();
        Self { ranges, labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of every range containing `value`, in declaration order.
    /// Ranges may overlap or leave gaps; a value in a gap matches nothing.
    pub fn matches(&self, value: u32, out: &mut Vec<String>) {
        for (&(lo, hi), label) in self.ranges.iter().zip(&self.labels) {
            if value >= lo && value <= hi {
                out.push(label.clone());
            }
        }
    }
}

/// Buckets rolls by sum into declared ranges.
pub struct SumClassifier {
    ranges: RangeSet,
}

impl SumClassifier {
    pub fn new(ranges: Vec<(u32, u32)>) -> Self {
        Self {
            ranges: RangeSet::new(ranges),
        }
    }
}

impl RollClassifier for SumClassifier {
    type Group = String;

    fn declared_groups(&self) -> Option<Vec<String>> {
        Some(self.ranges.labels().to_vec())
    }

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<String>) {
        self.ranges.matches(view.sum(), out);
    }
}

/// Open-ended variant of [`SumClassifier`]: every distinct sum is its own
/// group, appearing in first-seen order.
pub struct RawSumClassifier;

impl RollClassifier for RawSumClassifier {
    type Group = u32;

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<u32>) {
        out.push(view.sum());
    }
}

/// Buckets rolls by twisted sum (at the view's default threshold of
/// `dice_count - 1`) into declared ranges.
pub struct TwistedSumClassifier {
    ranges: RangeSet,
}

impl TwistedSumClassifier {
    pub fn new(ranges: Vec<(u32, u32)>) -> Self {
        Self {
            ranges: RangeSet::new(ranges),
        }
    }
}

impl RollClassifier for TwistedSumClassifier {
    type Group = String;

    fn declared_groups(&self) -> Option<Vec<String>> {
        Some(self.ranges.labels().to_vec())
    }

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<String>) {
        self.ranges.matches(view.twisted_sum(), out);
    }
}

/// Open-ended twisted-sum variant: the raw twisted sum is the group.
pub struct RawTwistedSumClassifier;

impl RollClassifier for RawTwistedSumClassifier {
    type Group = u32;

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<u32>) {
        out.push(view.twisted_sum());
    }
}

/// Every die value of the roll is a group membership: a 3-dice roll
/// contributes three (possibly overlapping) counts. Probabilities over this
/// classifier are usually normalized against total dice, not total rolls.
pub struct FaceClassifier;

impl RollClassifier for FaceClassifier {
    type Group = u8;

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<u8>) {
        out.extend_from_slice(view.values());
    }
}

/// Groups rolls by n-of-a-kind size (pair, triple, ...). Declares the full
/// `2..=dice_count` space upfront so sizes that never occur still report
/// zero occurrences.
pub struct TupleClassifier {
    dice_count: usize,
}

impl TupleClassifier {
    pub fn new(config: &RollConfig) -> Self {
        Self {
            dice_count: config.dice_count(),
        }
    }
}

impl RollClassifier for TupleClassifier {
    type Group = usize;

    fn declared_groups(&self) -> Option<Vec<usize>> {
        Some((2..=self.dice_count).collect())
    }

    fn classify(&self, view: &RollView<'_>, out: &mut Vec<usize>) {
        for &count in view.face_occurrences() {
            if count > 1 {
                out.push(count as usize);
            }
        }
    }
}

/// Result of classifying a batch: per group, how many rolls landed in it.
/// Groups keep insertion order. The sum of all occurrences may exceed the
/// roll count (a roll can belong to several groups) or fall short of it
/// (ranges may leave gaps).
#[derive(Debug, Clone)]
pub struct ClassifiedRolls<G> {
    config: RollConfig,
    groups: Vec<(G, u64)>,
}

impl<G: Clone + PartialEq> ClassifiedRolls<G> {
    pub fn new(config: RollConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
        }
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// Add one occurrence, creating the group at the tail if unseen.
    pub fn increment(&mut self, group: G) {
        if let Some(entry) = self.groups.iter_mut().find(|entry| entry.0 == group) {
            entry.1 += 1;
        } else {
            self.groups.push((group, 1));
        }
    }

    /// Force a group's count, creating it if unseen (used to pre-seed
    /// declared groups at zero).
    pub fn set_count(&mut self, group: G, occurrences: u64) {
        if let Some(entry) = self.groups.iter_mut().find(|entry| entry.0 == group) {
            entry.1 = occurrences;
        } else {
            self.groups.push((group, occurrences));
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = &G> {
        self.groups.iter().map(|entry| &entry.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&G, u64)> {
        self.groups.iter().map(|entry| (&entry.0, entry.1))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn occurrences(&self, group: &G) -> u64 {
        self.groups
            .iter()
            .find(|entry| &entry.0 == group)
            .map_or(0, |entry| entry.1)
    }

    /// Probability of the group over the batch's roll count.
    pub fn probability(&self, group: &G) -> f64 {
        self.probability_of(group, self.config.rolls() as u64)
    }

    /// Probability against a caller-chosen denominator, e.g. total dice
    /// observed instead of total rolls for [`FaceClassifier`] tallies.
    /// An empty denominator yields 0 rather than NaN.
    pub fn probability_of(&self, group: &G, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.occurrences(group) as f64 / total as f64
    }

    pub(crate) fn merge(&mut self, other: ClassifiedRolls<G>) {
        for (group, occurrences) in other.groups {
            if let Some(entry) = self.groups.iter_mut().find(|entry| entry.0 == group) {
                entry.1 += occurrences;
            } else {
                self.groups.push((group, occurrences));
            }
        }
    }
}
