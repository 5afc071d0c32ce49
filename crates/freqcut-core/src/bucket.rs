//! Equal-width binning of cumulative weight fractions
//!
//! The assignment is a pure function of the item sequence and the bucket
//! count: nothing is cached between calls, so repeated calls with different
//! bucket counts cannot interfere with each other.

use crate::error::{Error, Result};
use crate::types::QueryFreq;

/// The outcome of one bucket-assignment pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketAssignment {
    labels: Vec<usize>,
    counts: Vec<usize>,
}

impl BucketAssignment {
    /// Per-item bucket labels, in original item order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Per-bucket item counts, indexed by bucket
    ///
    /// The vector always has one entry per bucket; buckets that received no
    /// items report zero.
    pub fn counts_by_index(&self) -> &[usize] {
        &self.counts
    }

    /// Per-bucket item counts sorted ascending by value
    ///
    /// Bucket identity is discarded: the position of a count in the returned
    /// vector says nothing about which bucket it came from.
    pub fn counts_ascending(&self) -> Vec<usize> {
        let mut sorted = self.counts.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Get the number of buckets
    pub fn num_buckets(&self) -> usize {
        self.counts.len()
    }
}

/// Evenly spaced cut points over `[0, 1]`
///
/// Returns `n + 1` boundaries delimiting `n` equal-width intervals.
pub(crate) fn cut_points(n: usize) -> Vec<f64> {
    (0..=n).map(|i| i as f64 / n as f64).collect()
}

/// Cumulative share of total instance weight through each item
///
/// The sequence is non-decreasing and its last value is 1.0. Fails with
/// [`Error::DegenerateWeights`] when the table is empty or every instance
/// count is zero, since the fractions are undefined in both cases.
pub fn cumulative_fractions(items: &[QueryFreq]) -> Result<Vec<f64>> {
    let total: u64 = items.iter().map(|item| item.instances).sum();
    if total == 0 {
        return Err(Error::DegenerateWeights);
    }

    let mut running = 0u64;
    let fractions = items
        .iter()
        .map(|item| {
            running += item.instances;
            running as f64 / total as f64
        })
        .collect();
    Ok(fractions)
}

/// Assign every item to one of `n` equal-mass quantile buckets
///
/// Each item's cumulative weight fraction is binned into the `n` equal-width
/// sub-intervals of `[0, 1]`. Interior boundaries are right-closed: a
/// fraction landing exactly on a cut goes to the lower bucket. The first
/// interval additionally includes its lower bound, so a fraction of exactly
/// 0.0 (a leading zero-weight item) lands in bucket 0.
pub fn assign_buckets(items: &[QueryFreq], n: usize) -> Result<BucketAssignment> {
    Error::check_bucket_count(n)?;
    let fractions = cumulative_fractions(items)?;
    let cuts = cut_points(n);

    let mut labels = Vec::with_capacity(items.len());
    let mut counts = vec![0usize; n];
    for &fraction in &fractions {
        let bucket = bucket_of(fraction, &cuts);
        counts[bucket] += 1;
        labels.push(bucket);
    }

    tracing::debug!(
        buckets = n,
        items = items.len(),
        "assigned cumulative-fraction buckets"
    );
    Ok(BucketAssignment { labels, counts })
}

/// Find the interval containing `fraction`
///
/// Scans the cuts in ascending order, so a fraction equal to an interior cut
/// resolves to the lower of the two adjacent intervals.
fn bucket_of(fraction: f64, cuts: &[f64]) -> usize {
    let n = cuts.len() - 1;
    for i in 0..n {
        if fraction <= cuts[i + 1] {
            return i;
        }
    }
    // Unreachable for fractions in [0, 1]; float drift past 1.0 lands here.
    n - 1
}
