//! Bubble sort: one step per adjacent comparison

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            let mut step = recorder.begin(StepKind::Compare);
            step.mark(j, Annotation::Comparing)
                .mark(j + 1, Annotation::Comparing);
            if step.greater(j, j + 1) {
                step.swap(j, j + 1);
                step.mark(j, Annotation::Mutating)
                    .mark(j + 1, Annotation::Mutating);
            }
            // The largest `i` values have already bubbled into place
            step.settle(n - i..n);
            step.commit();
        }
    }
}
