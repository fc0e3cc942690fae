//! Quicksort: Lomuto partition over an explicit work stack, one step per partition
//!
//! Ranges are popped last-in first-out; after partitioning `lo..=hi` around a
//! pivot landing at `p`, the left range is pushed before the right, so the
//! right side is always partitioned first.

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    if n < 2 {
        return;
    }

    // Positions already holding their final value, re-marked on every step
    let mut placed = vec![false; n];
    let mut work = vec![(0, n - 1)];

    while let Some((lo, hi)) = work.pop() {
        let pivot_at = partition(recorder, lo, hi, &mut placed);
        if pivot_at > lo + 1 {
            work.push((lo, pivot_at - 1));
        } else if pivot_at > lo {
            placed[lo] = true;
        }
        if pivot_at + 1 < hi {
            work.push((pivot_at + 1, hi));
        } else if pivot_at < hi {
            placed[hi] = true;
        }
    }
}

fn partition(recorder: &mut StepRecorder, lo: usize, hi: usize, placed: &mut [bool]) -> usize {
    let mut step = recorder.begin(StepKind::Partition);
    let pivot = step.value(hi);
    step.mark(hi, Annotation::Mutating);

    // `boundary` is one past the last element known to be <= pivot
    let mut boundary = lo;
    for j in lo..hi {
        step.mark(j, Annotation::Comparing);
        if step.at_most(j, pivot) {
            step.swap(boundary, j);
            step.mark(boundary, Annotation::Mutating);
            boundary += 1;
        }
    }
    step.swap(boundary, hi);
    placed[boundary] = true;

    for (index, _) in placed.iter().enumerate().filter(|(_, done)| **done) {
        step.mark(index, Annotation::Settled);
    }
    step.commit();
    boundary
}
