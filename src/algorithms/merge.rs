//! Bottom-up merge sort: one step per merge window

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width - 1).min(n - 1);
            let hi = (lo + 2 * width - 1).min(n - 1);
            if mid < hi {
                merge_window(recorder, lo, mid, hi);
            }
            lo += 2 * width;
        }
        width *= 2;
    }
}

/// Merge the sorted halves `lo..=mid` and `mid+1..=hi`
fn merge_window(recorder: &mut StepRecorder, lo: usize, mid: usize, hi: usize) {
    let mut step = recorder.begin(StepKind::Merge);
    let scratch = step.values()[lo..=hi].to_vec();
    let (left, right) = scratch.split_at(mid - lo + 1);

    let (mut a, mut b, mut k) = (0, 0, lo);
    while a < left.len() && b < right.len() {
        step.tally_comparison();
        if left[a] <= right[b] {
            step.write(k, left[a]);
            a += 1;
        } else {
            // Taking from the right while the left still has elements moves it out of order
            step.write(k, right[b]);
            step.tally_mutation();
            b += 1;
        }
        k += 1;
    }
    for &value in left[a..].iter().chain(&right[b..]) {
        step.write(k, value);
        k += 1;
    }

    step.mark_range(lo..hi + 1, Annotation::Mutating);
    step.commit();
}
