//! Batched boundary probes over a sorted haystack.
//!
//! The lane partitioner issues one probe per lane, so every helper here takes
//! the whole needle batch at once and writes one index per needle into `out`.
//! Needle batches produced by the partitioner are themselves sorted, which
//! keeps the probe results monotone, but the helpers do not require it.

/// For each needle, the smallest index `i` with `hay[i] >= needle`, or
/// `hay.len()` if every element is smaller. `hay` must be sorted ascending.
///
/// # Examples
///
/// ```rust
/// let mut out = [0; 3];
/// laneset::bounds::lower_bound(&[10, 20, 20, 30], &[20, 25, 99], &mut out);
/// assert_eq!(out, [1, 3, 4]);
/// ```
///
/// # Panics
///
/// If `needles` and `out` have different lengths.
pub fn lower_bound<T: Ord>(hay: &[T], needles: &[T], out: &mut [usize]) {
    assert_eq!(needles.len(), out.len(), "one output slot per needle");
    for (slot, needle) in out.iter_mut().zip(needles) {
        *slot = hay.partition_point(|probe| probe < needle);
    }
}

/// For each needle, the smallest index `i` with `hay[i] > needle`, or
/// `hay.len()` if every element is smaller or equal. `hay` must be sorted
/// ascending.
///
/// # Panics
///
/// If `needles` and `out` have different lengths.
pub fn upper_bound<T: Ord>(hay: &[T], needles: &[T], out: &mut [usize]) {
    assert_eq!(needles.len(), out.len(), "one output slot per needle");
    for (slot, needle) in out.iter_mut().zip(needles) {
        *slot = hay.partition_point(|probe| probe <= needle);
    }
}

/// Descending-order counterpart of [`lower_bound`]: for each needle, the
/// smallest index `i` with `hay[i] <= needle`, or `hay.len()` if every
/// element is greater. `hay` must be sorted descending.
///
/// # Panics
///
/// If `needles` and `out` have different lengths.
pub fn lower_bound_desc<T: Ord>(hay: &[T], needles: &[T], out: &mut [usize]) {
    assert_eq!(needles.len(), out.len(), "one output slot per needle");
    for (slot, needle) in out.iter_mut().zip(needles) {
        *slot = hay.partition_point(|probe| probe > needle);
    }
}
