//! Heap sort: build a max-heap, then repeatedly move the root behind the heap
//!
//! Each sift-down level that makes at least one comparison is its own step,
//! and each root extraction is a separate step before the sift-down that
//! repairs the heap.

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    for root in (0..n / 2).rev() {
        sift_down(recorder, root, n);
    }
    for end in (1..n).rev() {
        let mut step = recorder.begin(StepKind::Extract);
        step.swap(0, end);
        step.mark(0, Annotation::Mutating).settle(end..n);
        step.commit();

        sift_down(recorder, 0, end);
    }
}

/// Restore the heap property below `root` within the heap prefix `0..len`
fn sift_down(recorder: &mut StepRecorder, mut root: usize, len: usize) {
    let n = recorder.len();
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;

        let mut step = recorder.begin(StepKind::SiftDown);
        let mut largest = root;
        if step.greater(left, largest) {
            largest = left;
        }
        if right < len && step.greater(right, largest) {
            largest = right;
        }

        step.mark(root, Annotation::Mutating);
        step.mark(left, Annotation::Comparing);
        if right < len {
            step.mark(right, Annotation::Comparing);
        }
        step.settle(len..n);

        if largest == root {
            step.commit();
            return;
        }
        step.swap(root, largest);
        step.mark(largest, Annotation::Mutating);
        step.commit();
        root = largest;
    }
}
