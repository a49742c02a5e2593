//! Multi-way merges over lists of sorted runs.
//!
//! The key-only variants merge by iterative doubling: pass 1 merges
//! neighbours, pass 2 merges pairs of pairs, and so on, leaving the result in
//! slot 0 after `ceil(log2(P))` passes. The key/value variants recurse on
//! halves of the run list instead, so each level of the tree carries its
//! companion value buffers alongside the keys. Both shapes do
//! `O(N log P)` work and consume their input runs.

use std::mem;

use crate::{merge, merge_desc, merge_pair, merge_pair_desc, LengthMismatch, Side};

/// Merges a list of ascending sorted runs into one ascending sequence.
///
/// The input runs are consumed. An empty list yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// let runs = vec![vec![1, 4], vec![2, 5], vec![3, 6]];
/// assert_eq!(laneset::multimerge(runs), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn multimerge<T: Copy + Ord + Default>(mut runs: Vec<Vec<T>>) -> Vec<T> {
    if runs.is_empty() {
        return Vec::new();
    }
    let way = runs.len();
    let mut step = 1;
    while step < way {
        let mut i = 0;
        while i + step < way {
            let a = mem::take(&mut runs[i]);
            let b = mem::take(&mut runs[i + step]);
            runs[i] = merge(&a, &b);
            i += step * 2;
        }
        step *= 2;
    }
    mem::take(&mut runs[0])
}

/// Merges a list of descending sorted runs into one descending sequence.
///
/// The input runs are consumed.
pub fn multimerge_desc<T: Copy + Ord + Default>(mut runs: Vec<Vec<T>>) -> Vec<T> {
    if runs.is_empty() {
        return Vec::new();
    }
    let way = runs.len();
    let mut step = 1;
    while step < way {
        let mut i = 0;
        while i + step < way {
            let a = mem::take(&mut runs[i]);
            let b = mem::take(&mut runs[i + step]);
            runs[i] = merge_desc(&a, &b);
            i += step * 2;
        }
        step *= 2;
    }
    mem::take(&mut runs[0])
}

/// Merges a list of ascending sorted key runs, each with a parallel value
/// run, into one key sequence and one value sequence.
///
/// The input runs are consumed. Keys order the merge; values travel with
/// their keys, and ties between runs keep the earlier run's elements first.
///
/// # Errors
///
/// Fails with [`LengthMismatch`] if any run's key and value lengths differ.
pub fn multimerge_pair<T, V>(runs: Vec<(Vec<T>, Vec<V>)>) -> Result<(Vec<T>, Vec<V>), LengthMismatch>
where
    T: Copy + Ord + Default,
    V: Copy + Default,
{
    multimerge_pair_with(runs, merge_pair)
}

/// Descending counterpart of [`multimerge_pair`]. The input runs are
/// consumed.
///
/// # Errors
///
/// Fails with [`LengthMismatch`] if any run's key and value lengths differ.
pub fn multimerge_pair_desc<T, V>(
    runs: Vec<(Vec<T>, Vec<V>)>,
) -> Result<(Vec<T>, Vec<V>), LengthMismatch>
where
    T: Copy + Ord + Default,
    V: Copy + Default,
{
    multimerge_pair_with(runs, merge_pair_desc)
}

type PairMerge<T, V> = fn(&[T], &[V], &[T], &[V]) -> Result<(Vec<T>, Vec<V>), LengthMismatch>;

fn multimerge_pair_with<T, V>(
    mut runs: Vec<(Vec<T>, Vec<V>)>,
    merge_two: PairMerge<T, V>,
) -> Result<(Vec<T>, Vec<V>), LengthMismatch>
where
    T: Copy + Ord + Default,
    V: Copy + Default,
{
    match runs.len() {
        0 => Ok((Vec::new(), Vec::new())),
        1 => {
            let (keys, vals) = runs.swap_remove(0);
            if keys.len() != vals.len() {
                return Err(LengthMismatch {
                    side: Side::Left,
                    keys: keys.len(),
                    values: vals.len(),
                });
            }
            Ok((keys, vals))
        }
        2 => {
            let (right_keys, right_vals) = runs.swap_remove(1);
            let (left_keys, left_vals) = runs.swap_remove(0);
            merge_two(&left_keys, &left_vals, &right_keys, &right_vals)
        }
        len => {
            let upper = runs.split_off((len + 1) / 2);
            let (left_keys, left_vals) = multimerge_pair_with(runs, merge_two)?;
            let (right_keys, right_vals) = multimerge_pair_with(upper, merge_two)?;
            merge_two(&left_keys, &left_vals, &right_keys, &right_vals)
        }
    }
}
