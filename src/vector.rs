#![cfg(feature = "simd")]

//! Data-parallel kernels over pre-partitioned lanes.
//!
//! Every kernel runs the same skeleton: each active lane loads the head of
//! its left and right window, applies the operation body, advances its
//! cursors and drops out once either window is exhausted. Lanes never share
//! cursors or output positions, so one iteration of the inner loop performs
//! up to [`LANES`](crate::lanes::LANES) independent steps and is free to
//! execute as a single wide vector operation. Window tails left over when a
//! lane drops out are handled by the compaction step, not the kernel.
//!
//! Inputs shorter than the lane count skip partitioning entirely and run the
//! linear code in [`crate::scalar`] instead.

use crate::lanes::{self, LaneWindows, ScanWindows, LANES};
use crate::scalar;

pub fn intersect<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    if left.len() < LANES {
        return scalar::intersect(left, right);
    }
    let mut w = lanes::split_intersect(left, right);
    let mut scratch = vec![T::default(); left.len()];
    intersect_lanes(left, right, &mut scratch, &mut w);
    lanes::gather_regions(&scratch, &w.out_save, &w.out_idx)
}

fn intersect_lanes<T: Copy + Ord>(left: &[T], right: &[T], out: &mut [T], w: &mut LaneWindows) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left[left_idx[j]];
            let r = right[right_idx[j]];
            if l == r {
                out[out_idx[j]] = l;
                out_idx[j] += 1;
            }
            if l <= r {
                left_idx[j] += 1;
            }
            if l >= r {
                right_idx[j] += 1;
            }
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

pub fn union<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    if left.len() < LANES {
        return scalar::union(left, right);
    }
    let mut w = lanes::split_union(left, right);
    let mut scratch = vec![T::default(); left.len() + right.len()];
    union_lanes(left, right, &mut scratch, &mut w);
    lanes::gather_with_tails(&scratch, left, right, &w)
}

fn union_lanes<T: Copy + Ord>(left: &[T], right: &[T], out: &mut [T], w: &mut LaneWindows) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left[left_idx[j]];
            let r = right[right_idx[j]];
            if l <= r {
                out[out_idx[j]] = l;
                left_idx[j] += 1;
            } else {
                out[out_idx[j]] = r;
                right_idx[j] += 1;
            }
            out_idx[j] += 1;
            if l == r {
                right_idx[j] += 1;
            }
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

pub fn difference<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return Vec::new();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    if left.len() < LANES {
        return scalar::difference(left, right);
    }
    let mut w = lanes::split_difference(left, right);
    let mut scratch = vec![T::default(); left.len()];
    difference_lanes(left, right, &mut scratch, &mut w);
    lanes::gather_with_left_tail(&scratch, left, &w)
}

fn difference_lanes<T: Copy + Ord>(left: &[T], right: &[T], out: &mut [T], w: &mut LaneWindows) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left[left_idx[j]];
            let r = right[right_idx[j]];
            if l == r {
                left_idx[j] += 1;
                right_idx[j] += 1;
            } else if l < r {
                out[out_idx[j]] = l;
                out_idx[j] += 1;
                left_idx[j] += 1;
            } else {
                right_idx[j] += 1;
            }
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

pub fn merge<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    if left.len() < LANES {
        return scalar::merge(left, right);
    }
    let mut w = lanes::split_merge(left, right);
    let mut out = vec![T::default(); left.len() + right.len()];
    merge_lanes(left, right, &mut out, &mut w);
    lanes::flush_tails(&mut out, left, right, &w);
    out
}

fn merge_lanes<T: Copy + Ord>(left: &[T], right: &[T], out: &mut [T], w: &mut LaneWindows) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left[left_idx[j]];
            let r = right[right_idx[j]];
            // ties take the left element first
            if l <= r {
                out[out_idx[j]] = l;
                left_idx[j] += 1;
            } else {
                out[out_idx[j]] = r;
                right_idx[j] += 1;
            }
            out_idx[j] += 1;
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

pub fn merge_desc<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    if left.len() < LANES {
        return scalar::merge_desc(left, right);
    }
    let mut w = lanes::split_merge_desc(left, right);
    let mut out = vec![T::default(); left.len() + right.len()];
    merge_desc_lanes(left, right, &mut out, &mut w);
    lanes::flush_tails(&mut out, left, right, &w);
    out
}

fn merge_desc_lanes<T: Copy + Ord>(left: &[T], right: &[T], out: &mut [T], w: &mut LaneWindows) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left[left_idx[j]];
            let r = right[right_idx[j]];
            if l >= r {
                out[out_idx[j]] = l;
                left_idx[j] += 1;
            } else {
                out[out_idx[j]] = r;
                right_idx[j] += 1;
            }
            out_idx[j] += 1;
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

/// Key/value lengths must already match on both sides.
pub fn merge_pair<T: Copy + Ord + Default, V: Copy + Default>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> (Vec<T>, Vec<V>) {
    if left_keys.is_empty() {
        return (right_keys.to_vec(), right_vals.to_vec());
    }
    if right_keys.is_empty() {
        return (left_keys.to_vec(), left_vals.to_vec());
    }
    if left_keys.len() < LANES {
        return scalar::merge_pair(left_keys, left_vals, right_keys, right_vals);
    }
    let mut w = lanes::split_merge(left_keys, right_keys);
    let total = left_keys.len() + right_keys.len();
    let mut out_keys = vec![T::default(); total];
    let mut out_vals = vec![V::default(); total];
    merge_pair_lanes(
        left_keys,
        left_vals,
        right_keys,
        right_vals,
        &mut out_keys,
        &mut out_vals,
        &mut w,
        false,
    );
    lanes::flush_pair_tails(
        &mut out_keys,
        &mut out_vals,
        left_keys,
        left_vals,
        right_keys,
        right_vals,
        &w,
    );
    (out_keys, out_vals)
}

/// Key/value lengths must already match on both sides.
pub fn merge_pair_desc<T: Copy + Ord + Default, V: Copy + Default>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> (Vec<T>, Vec<V>) {
    if left_keys.is_empty() {
        return (right_keys.to_vec(), right_vals.to_vec());
    }
    if right_keys.is_empty() {
        return (left_keys.to_vec(), left_vals.to_vec());
    }
    if left_keys.len() < LANES {
        return scalar::merge_pair_desc(left_keys, left_vals, right_keys, right_vals);
    }
    let mut w = lanes::split_merge_desc(left_keys, right_keys);
    let total = left_keys.len() + right_keys.len();
    let mut out_keys = vec![T::default(); total];
    let mut out_vals = vec![V::default(); total];
    merge_pair_lanes(
        left_keys,
        left_vals,
        right_keys,
        right_vals,
        &mut out_keys,
        &mut out_vals,
        &mut w,
        true,
    );
    lanes::flush_pair_tails(
        &mut out_keys,
        &mut out_vals,
        left_keys,
        left_vals,
        right_keys,
        right_vals,
        &w,
    );
    (out_keys, out_vals)
}

#[allow(clippy::too_many_arguments)]
fn merge_pair_lanes<T: Copy + Ord, V: Copy>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
    out_keys: &mut [T],
    out_vals: &mut [V],
    w: &mut LaneWindows,
    descending: bool,
) {
    let LaneWindows { left_idx, left_stop, right_idx, right_stop, out_idx, valid, .. } = w;
    loop {
        let mut any_valid = false;
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let l = left_keys[left_idx[j]];
            let r = right_keys[right_idx[j]];
            let take_left = if descending { l >= r } else { l <= r };
            if take_left {
                out_keys[out_idx[j]] = l;
                out_vals[out_idx[j]] = left_vals[left_idx[j]];
                left_idx[j] += 1;
            } else {
                out_keys[out_idx[j]] = r;
                out_vals[out_idx[j]] = right_vals[right_idx[j]];
                right_idx[j] += 1;
            }
            out_idx[j] += 1;
            if left_idx[j] == left_stop[j] || right_idx[j] == right_stop[j] {
                valid[j] = false;
            } else {
                any_valid = true;
            }
        }
        if !any_valid {
            break;
        }
    }
}

pub fn unique<T: Copy + Ord + Default>(keys: &[T]) -> Vec<T> {
    if keys.is_empty() {
        return Vec::new();
    }
    if keys.len() < LANES {
        return scalar::unique(keys);
    }
    let (mut s, mut current) = lanes::split_scan(keys);
    let mut scratch = vec![T::default(); keys.len()];
    scratch[0] = keys[0];
    unique_lanes(keys, &mut scratch, &mut s, &mut current);
    lanes::gather_regions(&scratch, &s.out_save, &s.out_idx)
}

fn unique_lanes<T: Copy + Ord>(
    keys: &[T],
    out: &mut [T],
    s: &mut ScanWindows,
    current: &mut [T],
) {
    let ScanWindows { key_idx, key_stop, out_idx, valid, .. } = s;
    let rounds = longest_window(key_idx, key_stop);
    for _ in 0..rounds {
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let key = keys[key_idx[j]];
            if key != current[j] {
                out[out_idx[j]] = key;
                out_idx[j] += 1;
                current[j] = key;
            }
            key_idx[j] += 1;
            if key_idx[j] == key_stop[j] {
                valid[j] = false;
            }
        }
    }
}

pub fn separate<T: Copy + Ord>(keys: &[T]) -> Vec<usize> {
    if keys.is_empty() {
        return vec![0];
    }
    if keys.len() < LANES {
        return scalar::separate(keys);
    }
    let (mut s, mut current) = lanes::split_scan(keys);
    let mut scratch = vec![0usize; keys.len()];
    scratch[0] = 0;
    separate_lanes(keys, &mut scratch, &mut s, &mut current);
    let mut out = lanes::gather_regions(&scratch, &s.out_save, &s.out_idx);
    out.push(keys.len());
    out
}

fn separate_lanes<T: Copy + Ord>(
    keys: &[T],
    out: &mut [usize],
    s: &mut ScanWindows,
    current: &mut [T],
) {
    let ScanWindows { key_idx, key_stop, out_idx, valid, .. } = s;
    let rounds = longest_window(key_idx, key_stop);
    for _ in 0..rounds {
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let key = keys[key_idx[j]];
            if key != current[j] {
                out[out_idx[j]] = key_idx[j];
                out_idx[j] += 1;
                current[j] = key;
            }
            key_idx[j] += 1;
            if key_idx[j] == key_stop[j] {
                valid[j] = false;
            }
        }
    }
}

pub fn is_unique<T: Copy + Ord>(keys: &[T]) -> bool {
    if keys.len() < 2 {
        return true;
    }
    if keys.len() < LANES {
        return scalar::is_unique(keys);
    }
    let (mut s, mut current) = lanes::split_scan(keys);
    is_unique_lanes(keys, &mut s, &mut current)
}

fn is_unique_lanes<T: Copy + Ord>(keys: &[T], s: &mut ScanWindows, current: &mut [T]) -> bool {
    let ScanWindows { key_idx, key_stop, valid, .. } = s;
    let mut distinct = vec![true; LANES];
    let rounds = longest_window(key_idx, key_stop);
    for _ in 0..rounds {
        for j in 0..LANES {
            if !valid[j] {
                continue;
            }
            let key = keys[key_idx[j]];
            if key != current[j] {
                current[j] = key;
            } else {
                distinct[j] = false;
            }
            key_idx[j] += 1;
            if key_idx[j] == key_stop[j] {
                valid[j] = false;
            }
        }
        // one sweep is enough to answer once any lane saw a repeat
        if distinct.iter().any(|&d| !d) {
            return false;
        }
    }
    true
}

fn longest_window(idx: &[usize], stop: &[usize]) -> usize {
    idx.iter().zip(stop).map(|(&i, &s)| s - i).max().unwrap_or(0)
}
