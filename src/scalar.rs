//! Linear reference implementations of the sorted-sequence algorithms.
//!
//! Ordinary two-finger scans with the same observable semantics as the lane
//! kernels in [`crate::vector`]. Builds without the `simd` feature use these
//! directly; `simd` builds fall back to them for inputs too short to fill the
//! lane set, and the test suite uses them as the oracle.

use std::cmp::Ordering::*;

pub fn intersect<T: Copy + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::new();

    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        let l = unsafe { left.get_unchecked(i) };
        let r = unsafe { right.get_unchecked(j) };
        match l.cmp(r) {
            Less => i += 1,
            Greater => j += 1,
            Equal => {
                out.push(*l);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

pub fn union<T: Copy + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        let l = unsafe { left.get_unchecked(i) };
        let r = unsafe { right.get_unchecked(j) };
        match l.cmp(r) {
            Less => {
                out.push(*l);
                i += 1;
            }
            Greater => {
                out.push(*r);
                j += 1;
            }
            Equal => {
                out.push(*l);
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

pub fn difference<T: Copy + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::new();

    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        let l = unsafe { left.get_unchecked(i) };
        let r = unsafe { right.get_unchecked(j) };
        match l.cmp(r) {
            Less => {
                out.push(*l);
                i += 1;
            }
            Greater => j += 1,
            Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&left[i..]);
    out
}

pub fn merge<T: Copy + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        // ties take the left element first
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

pub fn merge_desc<T: Copy + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i] >= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Key/value lengths must already match on both sides.
pub fn merge_pair<T: Copy + Ord, V: Copy>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> (Vec<T>, Vec<V>) {
    let total = left_keys.len() + right_keys.len();
    let mut keys = Vec::with_capacity(total);
    let mut vals = Vec::with_capacity(total);

    let mut i = 0;
    let mut j = 0;
    while i < left_keys.len() && j < right_keys.len() {
        if left_keys[i] <= right_keys[j] {
            keys.push(left_keys[i]);
            vals.push(left_vals[i]);
            i += 1;
        } else {
            keys.push(right_keys[j]);
            vals.push(right_vals[j]);
            j += 1;
        }
    }

    keys.extend_from_slice(&left_keys[i..]);
    vals.extend_from_slice(&left_vals[i..]);
    keys.extend_from_slice(&right_keys[j..]);
    vals.extend_from_slice(&right_vals[j..]);
    (keys, vals)
}

/// Key/value lengths must already match on both sides.
pub fn merge_pair_desc<T: Copy + Ord, V: Copy>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> (Vec<T>, Vec<V>) {
    let total = left_keys.len() + right_keys.len();
    let mut keys = Vec::with_capacity(total);
    let mut vals = Vec::with_capacity(total);

    let mut i = 0;
    let mut j = 0;
    while i < left_keys.len() && j < right_keys.len() {
        if left_keys[i] >= right_keys[j] {
            keys.push(left_keys[i]);
            vals.push(left_vals[i]);
            i += 1;
        } else {
            keys.push(right_keys[j]);
            vals.push(right_vals[j]);
            j += 1;
        }
    }

    keys.extend_from_slice(&left_keys[i..]);
    vals.extend_from_slice(&left_vals[i..]);
    keys.extend_from_slice(&right_keys[j..]);
    vals.extend_from_slice(&right_vals[j..]);
    (keys, vals)
}

pub fn unique<T: Copy + Ord>(keys: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    let mut run = keys.iter();
    if let Some(&first) = run.next() {
        out.push(first);
        let mut current = first;
        for &key in run {
            if key != current {
                out.push(key);
                current = key;
            }
        }
    }
    out
}

pub fn separate<T: Copy + Ord>(keys: &[T]) -> Vec<usize> {
    let mut out = vec![0];
    if keys.is_empty() {
        return out;
    }
    let mut current = keys[0];
    for (i, &key) in keys.iter().enumerate().skip(1) {
        if key != current {
            out.push(i);
            current = key;
        }
    }
    out.push(keys.len());
    out
}

pub fn is_unique<T: Copy + Ord>(keys: &[T]) -> bool {
    keys.windows(2).all(|pair| pair[0] != pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_keeps_min_counts() {
        assert_eq!(intersect(&[1, 2, 2, 3, 5], &[2, 2, 4, 5, 5]), vec![2, 2, 5]);
    }

    #[test]
    fn union_keeps_max_counts() {
        assert_eq!(union(&[1, 2, 2, 3], &[2, 3, 3, 4]), vec![1, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn difference_clamps_counts_at_zero() {
        assert_eq!(difference(&[1, 2, 2, 3, 3], &[2, 3]), vec![1, 2, 3]);
        assert_eq!(difference(&[1, 1], &[1, 1, 1]), Vec::<i32>::new());
    }

    #[test]
    fn merge_takes_ties_from_the_left() {
        assert_eq!(merge(&[1, 3, 5], &[2, 3, 4]), vec![1, 2, 3, 3, 4, 5]);
        let (keys, vals) = merge_pair(&[1, 3], &['a', 'b'], &[3, 4], &['c', 'd']);
        assert_eq!(keys, vec![1, 3, 3, 4]);
        assert_eq!(vals, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn merge_desc_mirrors_merge() {
        assert_eq!(merge_desc(&[5, 3, 1], &[4, 3, 2]), vec![5, 4, 3, 3, 2, 1]);
    }

    #[test]
    fn unique_family_agrees_on_runs() {
        let keys = [7, 7, 7, 8, 9, 9];
        assert_eq!(unique(&keys), vec![7, 8, 9]);
        assert_eq!(separate(&keys), vec![0, 3, 4, 6]);
        assert!(!is_unique(&keys));
        assert!(is_unique(&[7, 8, 9]));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(unique::<u8>(&[]), Vec::<u8>::new());
        assert_eq!(separate::<u8>(&[]), vec![0]);
        assert!(is_unique::<u8>(&[]));
        assert_eq!(merge::<u8>(&[], &[]), Vec::<u8>::new());
    }
}
