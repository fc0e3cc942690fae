//! Insertion sort: one step per key, covering the whole shift loop

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    for i in 1..n {
        let mut step = recorder.begin(StepKind::Insert);
        let key = step.value(i);
        step.mark(i, Annotation::Mutating);

        // `hole` is where the key will land; everything greater shifts right
        let mut hole = i;
        while hole > 0 && step.greater_than(hole - 1, key) {
            let shifted = step.value(hole - 1);
            step.write(hole, shifted);
            step.tally_mutation();
            step.mark(hole, Annotation::Comparing);
            hole -= 1;
        }
        step.write(hole, key);
        step.mark(hole, Annotation::Mutating);
        step.commit();
    }
}
