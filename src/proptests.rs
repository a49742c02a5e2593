#[cfg(test)]
#[allow(clippy::eq_op)] // Allow equal expressions as operands
mod test {
    use crate::scalar;
    use crate::*;
    use proptest::collection::vec as pvec;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    // Narrow key range so runs of equal keys are common, lengths past the
    // lane count so the partitioned kernels are exercised and not only the
    // short-input path.
    fn sorted_keys() -> impl Strategy<Value = Vec<u32>> {
        pvec(0u32..400, 0..1200).prop_map(|mut keys| {
            keys.sort_unstable();
            keys
        })
    }

    fn sorted_keys_desc() -> impl Strategy<Value = Vec<u32>> {
        sorted_keys().prop_map(|mut keys| {
            keys.reverse();
            keys
        })
    }

    fn counts(keys: &[u32]) -> BTreeMap<u32, usize> {
        let mut map = BTreeMap::new();
        for &key in keys {
            *map.entry(key).or_insert(0) += 1;
        }
        map
    }

    fn is_sorted(keys: &[u32]) -> bool {
        keys.windows(2).all(|pair| pair[0] <= pair[1])
    }

    //
    // Multiset algebra
    // ================

    proptest! {
        #[test]
        fn intersection_is_commutative(a in sorted_keys(), b in sorted_keys()) {
            prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
        }

        #[test]
        fn union_is_commutative(a in sorted_keys(), b in sorted_keys()) {
            prop_assert_eq!(union(&a, &b), union(&b, &a));
        }

        #[test]
        fn intersection_and_union_with_self_are_identity(a in sorted_keys()) {
            prop_assert_eq!(intersect(&a, &a), a.clone());
            prop_assert_eq!(union(&a, &a), a);
        }

        #[test]
        fn empty_sequence_behaves_as_identity(a in sorted_keys()) {
            prop_assert_eq!(intersect(&a, &[]), Vec::new());
            prop_assert_eq!(union(&a, &[]), a.clone());
            prop_assert_eq!(difference(&a, &[]), a.clone());
            prop_assert_eq!(difference(&[], &a), Vec::new());
            prop_assert_eq!(merge(&a, &[]), a.clone());
            prop_assert_eq!(merge(&[], &a), a);
        }

        #[test]
        fn per_value_counts_follow_min_max_and_saturating_sub(
            a in sorted_keys(),
            b in sorted_keys()
        ) {
            let count_a = counts(&a);
            let count_b = counts(&b);
            let both = counts(&intersect(&a, &b));
            let either = counts(&union(&a, &b));
            let only_a = counts(&difference(&a, &b));

            for key in count_a.keys().chain(count_b.keys()) {
                let in_a = count_a.get(key).copied().unwrap_or(0);
                let in_b = count_b.get(key).copied().unwrap_or(0);
                prop_assert_eq!(both.get(key).copied().unwrap_or(0), in_a.min(in_b));
                prop_assert_eq!(either.get(key).copied().unwrap_or(0), in_a.max(in_b));
                prop_assert_eq!(only_a.get(key).copied().unwrap_or(0), in_a.saturating_sub(in_b));
            }
        }

        #[test]
        fn every_ascending_output_is_sorted(a in sorted_keys(), b in sorted_keys()) {
            prop_assert!(is_sorted(&intersect(&a, &b)));
            prop_assert!(is_sorted(&union(&a, &b)));
            prop_assert!(is_sorted(&difference(&a, &b)));
            prop_assert!(is_sorted(&merge(&a, &b)));
            prop_assert!(is_sorted(&unique(&a)));
        }
    }

    //
    // Merge length and stability
    // ==========================

    proptest! {
        #[test]
        fn merge_preserves_every_element(a in sorted_keys(), b in sorted_keys()) {
            let merged = merge(&a, &b);
            prop_assert_eq!(merged.len(), a.len() + b.len());

            let mut expected = [a.clone(), b.clone()].concat();
            expected.sort_unstable();
            prop_assert_eq!(merged, expected);
        }

        #[test]
        fn merge_pair_emits_left_elements_first_on_ties(
            a in sorted_keys(),
            b in sorted_keys()
        ) {
            let left_tags = vec![0u8; a.len()];
            let right_tags = vec![1u8; b.len()];
            let (keys, tags) = merge_pair(&a, &left_tags, &b, &right_tags).unwrap();
            for i in 1..keys.len() {
                if keys[i - 1] == keys[i] {
                    prop_assert!(tags[i - 1] <= tags[i]);
                }
            }
        }

        #[test]
        fn descending_merge_is_a_mirror_of_ascending(
            a in sorted_keys_desc(),
            b in sorted_keys_desc()
        ) {
            let merged = merge_desc(&a, &b);
            prop_assert!(merged.windows(2).all(|pair| pair[0] >= pair[1]));
            prop_assert_eq!(merged.len(), a.len() + b.len());
        }
    }

    //
    // Equivalence with the linear reference implementations
    // =====================================================

    proptest! {
        #[test]
        fn set_operations_match_the_linear_scan(a in sorted_keys(), b in sorted_keys()) {
            prop_assert_eq!(intersect(&a, &b), scalar::intersect(&a, &b));
            prop_assert_eq!(union(&a, &b), scalar::union(&a, &b));
            prop_assert_eq!(difference(&a, &b), scalar::difference(&a, &b));
            prop_assert_eq!(merge(&a, &b), scalar::merge(&a, &b));
        }

        #[test]
        fn pair_merges_match_the_linear_scan(a in sorted_keys(), b in sorted_keys()) {
            let a_vals: Vec<u32> = (0..a.len() as u32).collect();
            let b_vals: Vec<u32> = (0..b.len() as u32).map(|v| v + 1_000_000).collect();
            prop_assert_eq!(
                merge_pair(&a, &a_vals, &b, &b_vals).unwrap(),
                scalar::merge_pair(&a, &a_vals, &b, &b_vals)
            );
        }

        #[test]
        fn run_utilities_match_the_linear_scan(keys in sorted_keys()) {
            prop_assert_eq!(unique(&keys), scalar::unique(&keys));
            prop_assert_eq!(separate(&keys), scalar::separate(&keys));
            prop_assert_eq!(is_unique(&keys), scalar::is_unique(&keys));
        }
    }

    //
    // Run utilities
    // =============

    proptest! {
        #[test]
        fn unique_has_no_adjacent_duplicates(keys in sorted_keys()) {
            let distinct = unique(&keys);
            prop_assert!(distinct.windows(2).all(|pair| pair[0] != pair[1]));
        }

        #[test]
        fn separate_delimits_runs_of_equal_keys(keys in sorted_keys()) {
            let starts = separate(&keys);
            prop_assert_eq!(starts[0], 0);
            prop_assert_eq!(*starts.last().unwrap(), keys.len());
            prop_assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
            for window in starts.windows(2) {
                let run = &keys[window[0]..window[1]];
                prop_assert!(run.iter().all(|key| *key == run[0]));
                if window[0] > 0 {
                    prop_assert_ne!(keys[window[0] - 1], keys[window[0]]);
                }
            }
        }

        #[test]
        fn is_unique_agrees_with_unique_length(keys in sorted_keys()) {
            prop_assert_eq!(is_unique(&keys), unique(&keys).len() == keys.len());
        }
    }

    //
    // Multi-way merges
    // ================

    proptest! {
        #[test]
        fn multimerge_equals_a_sort_of_the_concatenation(runs in pvec(sorted_keys(), 0..6)) {
            let mut expected: Vec<u32> = runs.iter().flatten().copied().collect();
            expected.sort_unstable();
            prop_assert_eq!(multimerge(runs), expected);
        }

        #[test]
        fn multimerge_desc_equals_a_reverse_sort(runs in pvec(sorted_keys_desc(), 0..6)) {
            let mut expected: Vec<u32> = runs.iter().flatten().copied().collect();
            expected.sort_unstable_by(|x, y| y.cmp(x));
            prop_assert_eq!(multimerge_desc(runs), expected);
        }

        #[test]
        fn multimerge_pair_preserves_key_value_pairs(runs in pvec(sorted_keys(), 0..5)) {
            let tagged: Vec<(Vec<u32>, Vec<u32>)> = runs
                .iter()
                .enumerate()
                .map(|(run, keys)| {
                    let vals = (0..keys.len() as u32).map(|at| run as u32 * 1_000_000 + at).collect();
                    (keys.clone(), vals)
                })
                .collect();
            let mut expected: Vec<(u32, u32)> = tagged
                .iter()
                .flat_map(|(keys, vals)| keys.iter().copied().zip(vals.iter().copied()))
                .collect();
            expected.sort_unstable();

            let (keys, vals) = multimerge_pair(tagged).unwrap();
            prop_assert!(is_sorted(&keys));
            let mut merged: Vec<(u32, u32)> = keys.into_iter().zip(vals).collect();
            merged.sort_unstable();
            prop_assert_eq!(merged, expected);
        }
    }
}
