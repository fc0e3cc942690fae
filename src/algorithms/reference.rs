//! Plain, non-animated implementations of the six sorts
//!
//! These sort a slice in place and return the comparison and mutation counts
//! under the same counting rules the recording drivers use. They share no code
//! with the drivers and serve as the oracle for counter checks.

use super::Algorithm;
use crate::buffer::Counters;

/// Sort `values` with `algorithm` and report what it cost
pub fn sort(algorithm: Algorithm, values: &mut [u32]) -> Counters {
    let mut counters = Counters::default();
    match algorithm {
        Algorithm::Bubble => bubble(values, &mut counters),
        Algorithm::Selection => selection(values, &mut counters),
        Algorithm::Insertion => insertion(values, &mut counters),
        Algorithm::Merge => merge(values, &mut counters),
        Algorithm::Quick => quick(values, &mut counters),
        Algorithm::Heap => heap(values, &mut counters),
    }
    counters
}

fn bubble(v: &mut [u32], c: &mut Counters) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            c.comparisons += 1;
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                c.mutations += 1;
            }
        }
    }
}

fn selection(v: &mut [u32], c: &mut Counters) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            c.comparisons += 1;
            if v[j] < v[min] {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
            c.mutations += 1;
        }
    }
}

fn insertion(v: &mut [u32], c: &mut Counters) {
    for i in 1..v.len() {
        let key = v[i];
        let mut j = i;
        while j > 0 {
            c.comparisons += 1;
            if v[j - 1] <= key {
                break;
            }
            v[j] = v[j - 1];
            c.mutations += 1;
            j -= 1;
        }
        v[j] = key;
    }
}

// Top-down recursion visits different windows than the bottom-up driver, so
// this mirrors the bottom-up passes to keep the comparison counts identical.
fn merge(v: &mut [u32], c: &mut Counters) {
    let n = v.len();
    let mut width = 1;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            if mid >= hi {
                continue;
            }
            let left = v[lo..mid].to_vec();
            let right = v[mid..hi].to_vec();
            let mut out = Vec::with_capacity(hi - lo);
            let (mut a, mut b) = (0, 0);
            while a < left.len() && b < right.len() {
                c.comparisons += 1;
                if left[a] <= right[b] {
                    out.push(left[a]);
                    a += 1;
                } else {
                    out.push(right[b]);
                    c.mutations += 1;
                    b += 1;
                }
            }
            out.extend_from_slice(&left[a..]);
            out.extend_from_slice(&right[b..]);
            v[lo..hi].copy_from_slice(&out);
        }
        width *= 2;
    }
}

fn quick(v: &mut [u32], c: &mut Counters) {
    if v.len() < 2 {
        return;
    }
    let mut stack = vec![(0, v.len() - 1)];
    while let Some((lo, hi)) = stack.pop() {
        let pivot = v[hi];
        let mut i = lo;
        for j in lo..hi {
            c.comparisons += 1;
            if v[j] <= pivot {
                if i != j {
                    v.swap(i, j);
                    c.mutations += 1;
                }
                i += 1;
            }
        }
        if i != hi {
            v.swap(i, hi);
            c.mutations += 1;
        }
        if i > lo + 1 {
            stack.push((lo, i - 1));
        }
        if i + 1 < hi {
            stack.push((i + 1, hi));
        }
    }
}

fn heap(v: &mut [u32], c: &mut Counters) {
    let n = v.len();
    for root in (0..n / 2).rev() {
        heapify(v, c, root, n);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        c.mutations += 1;
        heapify(v, c, 0, end);
    }
}

fn heapify(v: &mut [u32], c: &mut Counters, root: usize, len: usize) {
    let mut largest = root;
    let (left, right) = (2 * root + 1, 2 * root + 2);
    if left < len {
        c.comparisons += 1;
        if v[left] > v[largest] {
            largest = left;
        }
    }
    if right < len {
        c.comparisons += 1;
        if v[right] > v[largest] {
            largest = right;
        }
    }
    if largest != root {
        v.swap(root, largest);
        c.mutations += 1;
        heapify(v, c, largest, len);
    }
}
