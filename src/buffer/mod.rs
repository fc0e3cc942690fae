//! Value buffer model
//!
//! This module holds the data the visualizer animates:
//! - [`ValueBuffer`]: the permutation being sorted plus one [`Annotation`] per element
//! - [`Annotation`]: the display category of a single bar
//! - [`Counters`]: running comparison and mutation totals
//!
//! # Invariants
//!
//! `values` is always a permutation of `1..=len` and `annotations` always has the
//! same length. Annotations are presentation metadata only; nothing about sort
//! correctness depends on them.

use crate::config::MAX_ELEMENTS;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;

/// Display category for a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Annotation {
    #[default]
    Idle,
    Comparing,
    Mutating,
    Settled,
}

/// Running totals accumulated while steps are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub comparisons: u64,
    pub mutations: u64,
}

impl Counters {
    pub fn new(comparisons: u64, mutations: u64) -> Self {
        Counters {
            comparisons,
            mutations,
        }
    }

    /// Add another set of counts onto this one
    pub fn add(&mut self, other: Counters) {
        self.comparisons += other.comparisons;
        self.mutations += other.mutations;
    }
}

/// The array being sorted, aligned index-for-index with its annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueBuffer {
    values: Vec<u32>,
    annotations: Vec<Annotation>,
}

impl ValueBuffer {
    /// Create a uniformly shuffled permutation of `1..=size`.
    ///
    /// `size` is clamped to `1..=MAX_ELEMENTS`; the buffer is never empty.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut buffer = ValueBuffer {
            values: Vec::new(),
            annotations: Vec::new(),
        };
        buffer.reset(size, rng);
        buffer
    }

    /// Wrap a fixed permutation of `1..=len`. Annotations start out `Idle`.
    ///
    /// Panics if `values` is empty, longer than [`MAX_ELEMENTS`], or not a
    /// permutation of `1..=len`.
    pub fn from_values(values: Vec<u32>) -> Self {
        assert!(
            (1..=MAX_ELEMENTS).contains(&values.len()),
            "buffer of {} elements outside 1..={}",
            values.len(),
            MAX_ELEMENTS
        );
        assert!(
            is_permutation(&values),
            "not a permutation of 1..={}: {:?}",
            values.len(),
            values
        );
        let annotations = vec![Annotation::Idle; values.len()];
        ValueBuffer {
            values,
            annotations,
        }
    }

    /// Replace the contents with a fresh random permutation of `1..=size`
    pub fn reset<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        let size = size.clamp(1, MAX_ELEMENTS);
        self.values = (1..=size as u32).collect();
        self.values.shuffle(rng);
        self.annotations = vec![Annotation::Idle; size];
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Check whether the values are in strictly ascending order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] < w[1])
    }

    /// Swap two values. Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.values.swap(a, b);
    }

    /// Overwrite a single value. Panics if the index is out of range.
    pub fn write(&mut self, index: usize, value: u32) {
        self.check_index(index);
        self.values[index] = value;
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.fill(Annotation::Idle);
    }

    pub fn mark(&mut self, index: usize, annotation: Annotation) {
        self.check_index(index);
        self.annotations[index] = annotation;
    }

    /// Mark a half-open range. Empty ranges are a no-op.
    pub fn mark_range(&mut self, range: Range<usize>, annotation: Annotation) {
        if range.is_empty() {
            return;
        }
        self.check_index(range.end - 1);
        self.annotations[range].fill(annotation);
    }

    pub fn settle_all(&mut self) {
        self.annotations.fill(Annotation::Settled);
    }

    // An out-of-range index can only come from a driver bug
    fn check_index(&self, index: usize) {
        assert!(
            index < self.values.len(),
            "step references index {} in a buffer of {} elements",
            index,
            self.values.len()
        );
    }
}

/// Whether `values` holds each of `1..=len` exactly once
pub fn is_permutation(values: &[u32]) -> bool {
    let mut seen = vec![false; values.len()];
    values.iter().all(|&value| {
        let slot = (value as usize).wrapping_sub(1);
        match seen.get_mut(slot) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let buffer = ValueBuffer::shuffled(100, &mut rng);

        let mut values = buffer.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, (1..=100).collect::<Vec<u32>>());
        assert!(buffer.annotations().iter().all(|a| *a == Annotation::Idle));
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let buffer = ValueBuffer::shuffled(0, &mut rng);
        assert_eq!(buffer.values(), &[1]);
    }

    #[test]
    fn test_oversized_reset_is_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let buffer = ValueBuffer::shuffled(MAX_ELEMENTS + 500, &mut rng);
        assert_eq!(buffer.len(), MAX_ELEMENTS);
        assert!(is_permutation(buffer.values()));
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[3, 1, 2]));
        assert!(!is_permutation(&[1, 1, 2]));
        assert!(!is_permutation(&[0, 1, 2]));
        assert!(!is_permutation(&[1, 2, 4]));
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn test_from_values_rejects_duplicates() {
        ValueBuffer::from_values(vec![2, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "outside 1..=")]
    fn test_from_values_rejects_empty() {
        ValueBuffer::from_values(Vec::new());
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let a = ValueBuffer::shuffled(50, &mut ChaCha8Rng::seed_from_u64(42));
        let b = ValueBuffer::shuffled(50, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mark_range() {
        let mut buffer = ValueBuffer::from_values(vec![3, 1, 2, 4]);
        buffer.mark_range(2..4, Annotation::Settled);
        buffer.mark_range(1..1, Annotation::Comparing);
        assert_eq!(
            buffer.annotations(),
            &[
                Annotation::Idle,
                Annotation::Idle,
                Annotation::Settled,
                Annotation::Settled
            ]
        );
    }

    #[test]
    #[should_panic(expected = "step references index")]
    fn test_out_of_range_swap_panics() {
        let mut buffer = ValueBuffer::from_values(vec![1, 2]);
        buffer.swap(0, 2);
    }
}
