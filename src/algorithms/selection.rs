//! Selection sort: one step per outer index, scanning for the minimum

use crate::buffer::Annotation;
use crate::step::{StepKind, StepRecorder};

pub fn record(recorder: &mut StepRecorder) {
    let n = recorder.len();
    for i in 0..n.saturating_sub(1) {
        let mut step = recorder.begin(StepKind::Scan);
        let mut min = i;
        step.mark(i, Annotation::Mutating);
        for j in i + 1..n {
            step.mark(j, Annotation::Comparing);
            if step.less(j, min) {
                if min != i {
                    step.mark(min, Annotation::Idle);
                }
                min = j;
                step.mark(min, Annotation::Mutating);
            }
        }
        step.swap(i, min);
        step.settle(0..i + 1);
        step.commit();
    }
}
