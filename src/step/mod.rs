//! Step recording and replay
//!
//! A [`Step`] is a data record describing one animation frame: the positional
//! edits it makes to the [`ValueBuffer`], the annotations it sets, and the
//! counter deltas it contributes. Drivers produce steps through a
//! [`StepRecorder`], which runs the algorithm against a private working copy
//! and records every edit as it happens. The finished [`StepSequence`] is
//! immutable; replaying it in order from the same initial permutation always
//! reproduces the working copy's final state.
//!
//! Steps are neither idempotent nor commutative. Applying one twice double
//! counts, and skipping or reordering one leaves the buffer in a different
//! permutation.

use crate::buffer::{Annotation, Counters, ValueBuffer};
use std::fmt;
use std::ops::Range;

/// What a step shows, for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Compare,
    Scan,
    Insert,
    Merge,
    Partition,
    SiftDown,
    Extract,
    Settle,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Scan => "scan",
            StepKind::Insert => "insert",
            StepKind::Merge => "merge",
            StepKind::Partition => "partition",
            StepKind::SiftDown => "sift down",
            StepKind::Extract => "extract max",
            StepKind::Settle => "settle",
        }
    }
}

/// A positional edit against the live buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Swap(usize, usize),
    Write { index: usize, value: u32 },
}

/// One atomic unit of replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub edits: Vec<Edit>,
    /// Applied in order after the edits; later marks win
    pub marks: Vec<(usize, Annotation)>,
    /// Region marked `Settled` last
    pub settled: Range<usize>,
    pub comparisons: u64,
    pub mutations: u64,
}

impl Step {
    fn new(kind: StepKind) -> Self {
        Step {
            kind,
            edits: Vec::new(),
            marks: Vec::new(),
            settled: 0..0,
            comparisons: 0,
            mutations: 0,
        }
    }

    /// Apply this step to the buffer and add its deltas to the counters.
    ///
    /// Every frame starts from cleared annotations; a step carries the full
    /// set of marks it shows, settled region included.
    ///
    /// Panics if the step names an index outside the buffer.
    pub fn apply(&self, buffer: &mut ValueBuffer, counters: &mut Counters) {
        buffer.clear_annotations();
        for edit in &self.edits {
            match *edit {
                Edit::Swap(a, b) => buffer.swap(a, b),
                Edit::Write { index, value } => buffer.write(index, value),
            }
        }
        for &(index, annotation) in &self.marks {
            buffer.mark(index, annotation);
        }
        buffer.mark_range(self.settled.clone(), Annotation::Settled);
        counters.add(Counters::new(self.comparisons, self.mutations));
    }

    /// Every index this step reads or writes
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let edits = self.edits.iter().flat_map(|edit| match *edit {
            Edit::Swap(a, b) => [Some(a), Some(b)],
            Edit::Write { index, .. } => [Some(index), None],
        });
        edits
            .flatten()
            .chain(self.marks.iter().map(|(index, _)| *index))
            .chain(self.settled.clone().last())
    }
}

/// A step that references an index outside the buffer it was generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStep {
    pub step: usize,
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for InvalidStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} references index {} in a buffer of {} elements",
            self.step, self.index, self.len
        )
    }
}

impl std::error::Error for InvalidStep {}

/// The full ordered trace for one (algorithm, permutation) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<Step>,
    element_count: usize,
}

impl StepSequence {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of elements the sequence was generated against
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Sum of every step's counter deltas
    pub fn totals(&self) -> Counters {
        let mut totals = Counters::default();
        for step in &self.steps {
            totals.add(Counters::new(step.comparisons, step.mutations));
        }
        totals
    }

    /// Check every step only names in-range indices
    pub fn validate(&self) -> Result<(), InvalidStep> {
        for (position, step) in self.steps.iter().enumerate() {
            if let Some(index) = step.indices().find(|&i| i >= self.element_count) {
                return Err(InvalidStep {
                    step: position,
                    index,
                    len: self.element_count,
                });
            }
        }
        Ok(())
    }

    /// Apply every step in order to a copy of `initial`
    pub fn replay(&self, initial: &ValueBuffer) -> (ValueBuffer, Counters) {
        self.replay_filtered(initial, |_| true)
    }

    /// Like [`StepSequence::replay`], but leaves out the step at `skip`
    pub fn replay_skipping(&self, initial: &ValueBuffer, skip: usize) -> (ValueBuffer, Counters) {
        self.replay_filtered(initial, |position| position != skip)
    }

    fn replay_filtered(
        &self,
        initial: &ValueBuffer,
        keep: impl Fn(usize) -> bool,
    ) -> (ValueBuffer, Counters) {
        let mut buffer = initial.clone();
        let mut counters = Counters::default();
        for (position, step) in self.steps.iter().enumerate() {
            if keep(position) {
                step.apply(&mut buffer, &mut counters);
            }
        }
        (buffer, counters)
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Runs a driver against a private working copy and records its steps
#[derive(Debug)]
pub struct StepRecorder {
    working: Vec<u32>,
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new(initial: &[u32]) -> Self {
        StepRecorder {
            working: initial.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Start recording a new step. Nothing is recorded until [`StepBuilder::commit`].
    pub fn begin(&mut self, kind: StepKind) -> StepBuilder<'_> {
        StepBuilder {
            step: Step::new(kind),
            recorder: self,
        }
    }

    /// Append the closing `Settle` step and seal the sequence
    pub fn finish(mut self) -> StepSequence {
        debug_assert!(
            self.working.windows(2).all(|w| w[0] <= w[1]),
            "driver finished with an unsorted working copy: {:?}",
            self.working
        );
        let element_count = self.working.len();
        let mut settle = Step::new(StepKind::Settle);
        settle.settled = 0..element_count;
        self.steps.push(settle);
        StepSequence {
            steps: self.steps,
            element_count,
        }
    }
}

/// Records edits, marks and counts for one step while applying the edits to
/// the recorder's working copy
#[derive(Debug)]
pub struct StepBuilder<'a> {
    recorder: &'a mut StepRecorder,
    step: Step,
}

impl StepBuilder<'_> {
    pub fn value(&self, index: usize) -> u32 {
        self.recorder.working[index]
    }

    pub fn values(&self) -> &[u32] {
        &self.recorder.working
    }

    /// Count one comparison made outside the helpers below
    pub fn tally_comparison(&mut self) {
        self.step.comparisons += 1;
    }

    /// Count one mutation made outside [`StepBuilder::swap`]
    pub fn tally_mutation(&mut self) {
        self.step.mutations += 1;
    }

    /// `values[a] > values[b]`, counted as one comparison
    pub fn greater(&mut self, a: usize, b: usize) -> bool {
        self.tally_comparison();
        self.value(a) > self.value(b)
    }

    /// `values[a] < values[b]`, counted as one comparison
    pub fn less(&mut self, a: usize, b: usize) -> bool {
        self.tally_comparison();
        self.value(a) < self.value(b)
    }

    /// `values[index] > key`, counted as one comparison
    pub fn greater_than(&mut self, index: usize, key: u32) -> bool {
        self.tally_comparison();
        self.value(index) > key
    }

    /// `values[index] <= key`, counted as one comparison
    pub fn at_most(&mut self, index: usize, key: u32) -> bool {
        self.tally_comparison();
        self.value(index) <= key
    }

    /// Swap two positions and count one mutation. Swapping a slot with itself
    /// records nothing.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.recorder.working.swap(a, b);
        self.step.edits.push(Edit::Swap(a, b));
        self.step.mutations += 1;
    }

    /// Overwrite one position. Not counted; see [`StepBuilder::tally_mutation`].
    pub fn write(&mut self, index: usize, value: u32) {
        if self.recorder.working[index] == value {
            return;
        }
        self.recorder.working[index] = value;
        self.step.edits.push(Edit::Write { index, value });
    }

    pub fn mark(&mut self, index: usize, annotation: Annotation) -> &mut Self {
        self.step.marks.push((index, annotation));
        self
    }

    pub fn mark_range(&mut self, range: Range<usize>, annotation: Annotation) -> &mut Self {
        self.step.marks.extend(range.map(|index| (index, annotation)));
        self
    }

    /// Region already in its final place
    pub fn settle(&mut self, range: Range<usize>) -> &mut Self {
        self.step.settled = range;
        self
    }

    pub fn commit(self) {
        self.recorder.steps.push(self.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_sequence() -> StepSequence {
        let mut recorder = StepRecorder::new(&[2, 1, 3]);
        let mut step = recorder.begin(StepKind::Compare);
        if step.greater(0, 1) {
            step.swap(0, 1);
        }
        step.mark(0, Annotation::Mutating).settle(2..3);
        step.commit();
        recorder.finish()
    }

    #[test]
    fn test_apply_edits_marks_and_counts() {
        let sequence = swap_sequence();
        let mut buffer = ValueBuffer::from_values(vec![2, 1, 3]);
        let mut counters = Counters::default();

        sequence.get(0).unwrap().apply(&mut buffer, &mut counters);

        assert_eq!(buffer.values(), &[1, 2, 3]);
        assert_eq!(
            buffer.annotations(),
            &[Annotation::Mutating, Annotation::Idle, Annotation::Settled]
        );
        assert_eq!(counters, Counters::new(1, 1));
    }

    #[test]
    fn test_finish_appends_settle_step() {
        let sequence = swap_sequence();
        assert_eq!(sequence.len(), 2);

        let last = sequence.get(1).unwrap();
        assert_eq!(last.kind, StepKind::Settle);
        assert_eq!(last.settled, 0..3);

        let (buffer, counters) = sequence.replay(&ValueBuffer::from_values(vec![2, 1, 3]));
        assert!(buffer.annotations().iter().all(|a| *a == Annotation::Settled));
        assert_eq!(counters, sequence.totals());
    }

    #[test]
    fn test_apply_starts_from_cleared_annotations() {
        let sequence = swap_sequence();
        let mut buffer = ValueBuffer::from_values(vec![2, 1, 3]);
        buffer.mark(1, Annotation::Comparing);
        buffer.mark(2, Annotation::Mutating);
        let mut counters = Counters::default();

        sequence.get(0).unwrap().apply(&mut buffer, &mut counters);

        // Stale marks from the previous frame are gone; only this step's remain
        assert_eq!(
            buffer.annotations(),
            &[Annotation::Mutating, Annotation::Idle, Annotation::Settled]
        );
    }

    #[test]
    fn test_apply_twice_double_counts() {
        let sequence = swap_sequence();
        let step = sequence.get(0).unwrap();
        let mut buffer = ValueBuffer::from_values(vec![2, 1, 3]);
        let mut counters = Counters::default();

        step.apply(&mut buffer, &mut counters);
        step.apply(&mut buffer, &mut counters);

        assert_eq!(buffer.values(), &[2, 1, 3]);
        assert_eq!(counters, Counters::new(2, 2));
    }

    #[test]
    fn test_self_swap_and_noop_write_are_not_recorded() {
        let mut recorder = StepRecorder::new(&[1, 2]);
        let mut step = recorder.begin(StepKind::Scan);
        step.swap(1, 1);
        step.write(0, 1);
        step.commit();
        let sequence = recorder.finish();

        let first = sequence.get(0).unwrap();
        assert!(first.edits.is_empty());
        assert_eq!(first.mutations, 0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut sequence = swap_sequence();
        assert!(sequence.validate().is_ok());

        sequence.steps[0].marks.push((5, Annotation::Comparing));
        let err = sequence.validate().unwrap_err();
        assert_eq!(
            err,
            InvalidStep {
                step: 0,
                index: 5,
                len: 3
            }
        );
    }
}
