//! Quantile bucketing over a frequency table

use crate::bucket::assign_buckets;
use crate::error::{Error, Result};
use crate::types::{FreqTable, QueryFreq};

/// Partitions a ranked frequency table into equal-mass quantile buckets
///
/// The bucketer owns its table and every method is a pure function of the
/// table and the requested bucket count; assignments are recomputed from
/// scratch on each call.
///
/// The slicing methods ([`head`](Self::head), [`tail`](Self::tail),
/// [`middle`](Self::middle)) are POSITIONAL: they cut the original item
/// order at offsets derived from the ascending-sorted bucket counts, they do
/// not look up which bucket an item was assigned to. `head(n)` is the first
/// `counts[0]` items, not the members of bucket 0. This matches the
/// long-standing behavior of the tool downstream consumers scripted against;
/// callers wanting true membership should go through
/// [`assign_buckets`](crate::bucket::assign_buckets) instead.
#[derive(Debug, Clone)]
pub struct QuantileBucketer {
    table: FreqTable,
}

impl QuantileBucketer {
    /// Create a bucketer over a frequency table
    pub fn new(table: FreqTable) -> Self {
        Self { table }
    }

    /// Get the underlying table
    pub fn table(&self) -> &FreqTable {
        &self.table
    }

    /// Consume the bucketer and recover the table
    pub fn into_table(self) -> FreqTable {
        self.table
    }

    /// Per-bucket item counts, sorted ascending by count value
    ///
    /// Always returns `n` counts; empty buckets contribute zeros. The sort
    /// discards which bucket produced which count.
    pub fn quantiles(&self, n: usize) -> Result<Vec<usize>> {
        let assignment = assign_buckets(self.table.items(), n)?;
        Ok(assignment.counts_ascending())
    }

    /// The leading items, cut at the smallest bucket's size
    pub fn head(&self, n: usize) -> Result<&[QueryFreq]> {
        let counts = self.quantiles(n)?;
        Ok(&self.table.items()[..counts[0]])
    }

    /// The trailing items, starting where the largest bucket's share begins
    pub fn tail(&self, n: usize) -> Result<&[QueryFreq]> {
        let counts = self.quantiles(n)?;
        let start: usize = counts[..n - 1].iter().sum();
        Ok(&self.table.items()[start..])
    }

    /// The items between the head and tail cut points
    ///
    /// Fails with [`Error::NoMiddle`] when `n < 3`: with fewer than three
    /// buckets there is nothing between the top and bottom.
    pub fn middle(&self, n: usize) -> Result<&[QueryFreq]> {
        Error::check_middle(n)?;
        let counts = self.quantiles(n)?;
        let lo = counts[0];
        let hi: usize = counts[..n - 1].iter().sum();
        Ok(&self.table.items()[lo..hi])
    }
}

impl From<FreqTable> for QuantileBucketer {
    fn from(table: FreqTable) -> Self {
        Self::new(table)
    }
}
