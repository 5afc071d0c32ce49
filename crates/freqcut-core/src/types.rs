//! Core types for weighted frequency tables

use std::fmt;

/// One observation: a query string and its instance count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFreq {
    /// The query string
    pub query: String,
    /// How many times the query was observed
    pub instances: u64,
}

impl QueryFreq {
    /// Create a new observation
    pub fn new(query: impl Into<String>, instances: u64) -> Self {
        Self {
            query: query.into(),
            instances,
        }
    }
}

impl fmt::Display for QueryFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.query, self.instances)
    }
}

/// An ordered sequence of weighted queries
///
/// Order is significant and preserved exactly as loaded: quantiles are
/// computed over the existing order, the table is never re-sorted by weight
/// or alphabetically. The table is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FreqTable {
    items: Vec<QueryFreq>,
}

impl FreqTable {
    /// Create a table from observations, keeping their order
    pub fn new(items: Vec<QueryFreq>) -> Self {
        Self { items }
    }

    /// Get the observations in original order
    pub fn items(&self) -> &[QueryFreq] {
        &self.items
    }

    /// Get the number of observations
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the sum of all instance counts
    pub fn total_instances(&self) -> u64 {
        self.items.iter().map(|item| item.instances).sum()
    }

    /// Iterate over the query strings in original order
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.query.as_str())
    }
}

impl FromIterator<QueryFreq> for FreqTable {
    fn from_iter<I: IntoIterator<Item = QueryFreq>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for FreqTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FreqTable({} queries, {} instances)",
            self.len(),
            self.total_instances()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_freq() {
        let item = QueryFreq::new("apple", 10);
        assert_eq!(item.query, "apple");
        assert_eq!(item.instances, 10);
        assert_eq!(item.to_string(), "apple: 10");
    }

    #[test]
    fn test_freq_table() {
        let table = FreqTable::new(vec![
            QueryFreq::new("apple", 10),
            QueryFreq::new("banana", 20),
            QueryFreq::new("cherry", 0),
        ]);

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.total_instances(), 30);
        assert_eq!(
            table.queries().collect::<Vec<_>>(),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_order_preserved() {
        // Deliberately not sorted by weight; the table must keep this order.
        let table: FreqTable = [("low", 1), ("high", 100), ("mid", 10)]
            .into_iter()
            .map(|(q, w)| QueryFreq::new(q, w))
            .collect();

        assert_eq!(
            table.queries().collect::<Vec<_>>(),
            vec!["low", "high", "mid"]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = FreqTable::default();
        assert!(table.is_empty());
        assert_eq!(table.total_instances(), 0);
    }
}
