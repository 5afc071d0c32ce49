//! Error types for quantile bucketing

use thiserror::Error;

/// Errors that can occur while bucketing a frequency table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero buckets requested
    #[error("bucket count must be at least 1")]
    NoBuckets,

    /// Too few buckets to have a middle slice
    #[error("middle requires at least 3 buckets, got {n}")]
    NoMiddle { n: usize },

    /// Empty table, or every instance count is zero
    #[error("total instance weight is zero; cumulative fractions are undefined")]
    DegenerateWeights,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that at least one bucket was requested
    pub fn check_bucket_count(n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::NoBuckets);
        }
        Ok(())
    }

    /// Check that the bucket count leaves room for a middle slice
    pub fn check_middle(n: usize) -> Result<()> {
        if n < 3 {
            return Err(Error::NoMiddle { n });
        }
        Ok(())
    }
}
