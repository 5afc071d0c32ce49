//! Property-based tests for bucket assignment and the positional slices
//!
//! These exercise the invariants that hold for every table and bucket
//! count: counts conserve the item total, the reported counts are sorted,
//! and head/middle/tail partition the original order.

use freqcut_core::{assign_buckets, FreqTable, QuantileBucketer, QueryFreq};
use proptest::prelude::*;

fn arb_items() -> impl Strategy<Value = Vec<QueryFreq>> {
    prop::collection::vec(0u64..1_000, 1..200)
        .prop_filter("needs nonzero total weight", |weights| {
            weights.iter().any(|&w| w > 0)
        })
        .prop_map(|weights| {
            weights
                .into_iter()
                .enumerate()
                .map(|(i, w)| QueryFreq::new(format!("q{i}"), w))
                .collect()
        })
}

proptest! {
    // Property: every item lands in exactly one bucket
    #[test]
    fn prop_count_conservation(items in arb_items(), n in 1usize..12) {
        let assignment = assign_buckets(&items, n).unwrap();
        let total: usize = assignment.counts_by_index().iter().sum();
        prop_assert_eq!(total, items.len());
        prop_assert_eq!(assignment.labels().len(), items.len());
    }

    // Property: labels stay in range and follow the original order
    #[test]
    fn prop_labels_monotone_in_range(items in arb_items(), n in 1usize..12) {
        let assignment = assign_buckets(&items, n).unwrap();
        prop_assert!(assignment.labels().iter().all(|&label| label < n));
        // Cumulative fractions are non-decreasing, so labels must be too.
        prop_assert!(assignment.labels().windows(2).all(|w| w[0] <= w[1]));
    }

    // Property: quantiles(n) has length n and is sorted non-decreasing
    #[test]
    fn prop_counts_ascending(items in arb_items(), n in 1usize..12) {
        let bucketer = QuantileBucketer::new(FreqTable::new(items));
        let counts = bucketer.quantiles(n).unwrap();
        prop_assert_eq!(counts.len(), n);
        prop_assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    // Property: head, middle, and tail are contiguous slices covering the
    // whole table when a middle exists
    #[test]
    fn prop_slices_partition(items in arb_items(), n in 3usize..12) {
        let len = items.len();
        let bucketer = QuantileBucketer::new(FreqTable::new(items));

        let head = bucketer.head(n).unwrap().len();
        let middle = bucketer.middle(n).unwrap().len();
        let tail = bucketer.tail(n).unwrap().len();
        prop_assert_eq!(head + middle + tail, len);
    }

    // Property: the final cumulative fraction is exactly the whole mass
    #[test]
    fn prop_fractions_end_at_one(items in arb_items()) {
        let fractions = freqcut_core::cumulative_fractions(&items).unwrap();
        prop_assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(*fractions.last().unwrap(), 1.0);
    }
}
