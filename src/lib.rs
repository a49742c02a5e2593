//! Multiset algorithms over sorted sequences, structured for wide SIMD.
//!
//! The crate computes intersections, unions, differences and stable merges
//! (plus key/value and multi-way merge variants, and run utilities) of slices
//! that are already sorted. Instead of one two-finger scan whose every step
//! depends on the previous one, the default build cuts the left input into
//! 768 independent lanes, aligns a window of the right input to each lane
//! with batched binary searches, and advances all lanes in lock step: the
//! inner loop carries no cross-lane dependency, so it vectorizes on wide
//! SIMD targets. Building without the `simd` feature selects plain linear
//! scans with identical results; the choice is made at compile time and
//! never at run time.
//!
//! Inputs are multisets: duplicates are allowed and counted, so
//! `intersect` keeps the minimum count of a value, `union` the maximum,
//! and `difference` subtracts counts. Callers guarantee sortedness; it is
//! not checked.
//!
//! # Examples
//!
//! ```rust
//! let a = [1, 2, 2, 3, 5];
//! let b = [2, 2, 4, 5, 5];
//!
//! assert_eq!(laneset::intersect(&a, &b), vec![2, 2, 5]);
//! assert_eq!(laneset::difference(&a, &b), vec![1, 3]);
//! assert_eq!(laneset::merge(&a, &b), vec![1, 2, 2, 2, 2, 3, 4, 5, 5, 5]);
//! ```

pub mod bounds;
mod lanes;
mod multimerge;
mod scalar;
mod vector;

#[cfg(test)]
mod proptests;

pub use crate::multimerge::{multimerge, multimerge_desc, multimerge_pair, multimerge_pair_desc};

use std::fmt::{Display, Formatter};

/// Which input of a pair operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Returned by the pair operations when a key sequence and its parallel
/// value sequence have different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// The input the mismatch was found on.
    pub side: Side,
    /// Number of keys on that side.
    pub keys: usize,
    /// Number of values on that side.
    pub values: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} input has {} keys but {} values", self.side, self.keys, self.values)
    }
}

impl std::error::Error for LengthMismatch {}

/// Multiset intersection of two ascending sorted sequences: every value
/// appears `min(count_left, count_right)` times.
///
/// Both inputs must be sorted ascending; the result is unspecified
/// otherwise.
///
/// # Examples
///
/// ```rust
/// assert_eq!(laneset::intersect(&[1, 2, 2, 3, 5], &[2, 2, 4, 5, 5]), vec![2, 2, 5]);
/// ```
pub fn intersect<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::intersect(left, right)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::intersect(left, right)
    }
}

/// Multiset union of two ascending sorted sequences: every value appears
/// `max(count_left, count_right)` times.
///
/// Both inputs must be sorted ascending; the result is unspecified
/// otherwise.
///
/// # Examples
///
/// ```rust
/// assert_eq!(laneset::union(&[1, 2, 2, 3], &[2, 3, 3, 4]), vec![1, 2, 2, 3, 3, 4]);
/// ```
pub fn union<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::union(left, right)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::union(left, right)
    }
}

/// Multiset difference of two ascending sorted sequences: every value
/// appears `max(0, count_left - count_right)` times.
///
/// Both inputs must be sorted ascending; the result is unspecified
/// otherwise.
///
/// # Examples
///
/// ```rust
/// assert_eq!(laneset::difference(&[1, 2, 2, 3, 3], &[2, 3]), vec![1, 2, 3]);
/// ```
pub fn difference<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::difference(left, right)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::difference(left, right)
    }
}

/// Merges two ascending sorted sequences into one of length
/// `left.len() + right.len()`. The merge is stable: when keys compare
/// equal, the left input's elements come first.
///
/// # Examples
///
/// ```rust
/// // the first 3 comes from the left input
/// assert_eq!(laneset::merge(&[1, 3, 5], &[2, 3, 4]), vec![1, 2, 3, 3, 4, 5]);
/// ```
pub fn merge<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::merge(left, right)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::merge(left, right)
    }
}

/// Merges two descending sorted sequences into one descending sequence.
/// Stable: equal keys keep the left input's elements first.
pub fn merge_desc<T: Copy + Ord + Default>(left: &[T], right: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::merge_desc(left, right)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::merge_desc(left, right)
    }
}

/// Merges two ascending sorted key sequences, each carrying a parallel
/// value sequence. Keys order the merge; values travel with their keys.
/// Stable on keys: equal keys keep the left input's elements first.
///
/// # Errors
///
/// Fails with [`LengthMismatch`] if either side's key and value lengths
/// differ.
///
/// # Examples
///
/// ```rust
/// let (keys, vals) =
///     laneset::merge_pair(&[1, 3], &['a', 'b'], &[2, 3], &['c', 'd']).unwrap();
/// assert_eq!(keys, vec![1, 2, 3, 3]);
/// assert_eq!(vals, vec!['a', 'c', 'b', 'd']);
/// ```
pub fn merge_pair<T: Copy + Ord + Default, V: Copy + Default>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> Result<(Vec<T>, Vec<V>), LengthMismatch> {
    check_pair_lengths(left_keys, left_vals, right_keys, right_vals)?;
    #[cfg(feature = "simd")]
    {
        Ok(vector::merge_pair(left_keys, left_vals, right_keys, right_vals))
    }
    #[cfg(not(feature = "simd"))]
    {
        Ok(scalar::merge_pair(left_keys, left_vals, right_keys, right_vals))
    }
}

/// Descending counterpart of [`merge_pair`].
///
/// # Errors
///
/// Fails with [`LengthMismatch`] if either side's key and value lengths
/// differ.
pub fn merge_pair_desc<T: Copy + Ord + Default, V: Copy + Default>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> Result<(Vec<T>, Vec<V>), LengthMismatch> {
    check_pair_lengths(left_keys, left_vals, right_keys, right_vals)?;
    #[cfg(feature = "simd")]
    {
        Ok(vector::merge_pair_desc(left_keys, left_vals, right_keys, right_vals))
    }
    #[cfg(not(feature = "simd"))]
    {
        Ok(scalar::merge_pair_desc(left_keys, left_vals, right_keys, right_vals))
    }
}

fn check_pair_lengths<T, V>(
    left_keys: &[T],
    left_vals: &[V],
    right_keys: &[T],
    right_vals: &[V],
) -> Result<(), LengthMismatch> {
    if left_keys.len() != left_vals.len() {
        return Err(LengthMismatch {
            side: Side::Left,
            keys: left_keys.len(),
            values: left_vals.len(),
        });
    }
    if right_keys.len() != right_vals.len() {
        return Err(LengthMismatch {
            side: Side::Right,
            keys: right_keys.len(),
            values: right_vals.len(),
        });
    }
    Ok(())
}

/// Distinct values of an ascending sorted sequence, in input order (the
/// first element of every run of equal keys).
///
/// # Examples
///
/// ```rust
/// assert_eq!(laneset::unique(&[7, 7, 7, 8, 9, 9]), vec![7, 8, 9]);
/// ```
pub fn unique<T: Copy + Ord + Default>(keys: &[T]) -> Vec<T> {
    #[cfg(feature = "simd")]
    {
        vector::unique(keys)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::unique(keys)
    }
}

/// Start index of every run of equal keys in an ascending sorted sequence,
/// terminated by `keys.len()`: consecutive entries delimit one run each.
/// An empty input yields `[0]`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(laneset::separate(&[7, 7, 7, 8, 9, 9]), vec![0, 3, 4, 6]);
/// ```
pub fn separate<T: Copy + Ord>(keys: &[T]) -> Vec<usize> {
    #[cfg(feature = "simd")]
    {
        vector::separate(keys)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::separate(keys)
    }
}

/// Whether an ascending sorted sequence contains no repeated value.
///
/// # Examples
///
/// ```rust
/// assert!(laneset::is_unique(&[7, 8, 9]));
/// assert!(!laneset::is_unique(&[7, 7, 8]));
/// ```
pub fn is_unique<T: Copy + Ord>(keys: &[T]) -> bool {
    #[cfg(feature = "simd")]
    {
        vector::is_unique(keys)
    }
    #[cfg(not(feature = "simd"))]
    {
        scalar::is_unique(keys)
    }
}
