//! Equal-mass quantile bucketing for ranked frequency tables
//!
//! Given an ordered sequence of `(query, instances)` observations, this
//! crate assigns each observation to one of N quantile buckets by its
//! cumulative share of the total instance weight, with bucket boundaries at
//! the cumulative-weight fractions 0, 1/N, 2/N, ..., 1. On top of the
//! assignment it exposes the ascending-sorted per-bucket counts and the
//! head/middle/tail positional slices derived from them.
//!
//! # Examples
//!
//! ```rust
//! use freqcut_core::{FreqTable, QuantileBucketer, QueryFreq};
//!
//! let table = FreqTable::new(vec![
//!     QueryFreq::new("apple", 10),
//!     QueryFreq::new("banana", 10),
//!     QueryFreq::new("cherry", 10),
//!     QueryFreq::new("durian", 70),
//! ]);
//!
//! let bucketer = QuantileBucketer::new(table);
//!
//! // Two buckets: the three light queries share the first half of the
//! // cumulative mass, the heavy one covers the second.
//! assert_eq!(bucketer.quantiles(2).unwrap(), vec![1, 3]);
//!
//! let head: Vec<&str> = bucketer
//!     .head(2)
//!     .unwrap()
//!     .iter()
//!     .map(|item| item.query.as_str())
//!     .collect();
//! assert_eq!(head, ["apple"]);
//! ```
//!
//! The lower-level [`assign_buckets`] function exposes the per-item labels
//! and index-ordered counts for callers that need true bucket membership
//! rather than the positional slices.

pub mod bucket;
pub mod error;
pub mod quantile;
pub mod types;

// Re-export main types
pub use bucket::{assign_buckets, cumulative_fractions, BucketAssignment};
pub use error::{Error, Result};
pub use quantile::QuantileBucketer;
pub use types::{FreqTable, QueryFreq};
