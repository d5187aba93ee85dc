use std::collections::HashSet;

use crate::matching::kmers::KmerSet;
use crate::matching::MatchError;

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Similarity between a query k-mer set and one reference sequence
#[derive(Debug, Clone)]
pub struct SimilarityScore<'q> {
    /// Shared k-mers as a percentage of the query's distinct k-mers (0.0 - 100.0)
    pub percentage: f64,

    /// Distinct k-mers present in both query and reference, borrowed from the query
    pub shared_kmers: HashSet<&'q [u8]>,

    /// Number of distinct k-mers in the query
    pub query_kmer_count: usize,
}

impl<'q> SimilarityScore<'q> {
    /// Score a reference sequence against a query k-mer set.
    ///
    /// The reference is decomposed with the query's k. A query with no k-mers
    /// (shorter than k) shares nothing and scores 0.0.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` if the query set carries a zero k,
    /// which `KmerSet::build` already prevents.
    pub fn calculate(query: &KmerSet<'q>, reference: &str) -> Result<Self, MatchError> {
        let query_kmer_count = query.len();
        if query_kmer_count == 0 {
            return Ok(Self::empty());
        }

        let reference_kmers = KmerSet::build(reference, query.k())?;
        let shared_kmers = query.intersection(&reference_kmers);
        let percentage = overlap_percentage(shared_kmers.len(), query_kmer_count);

        Ok(Self {
            percentage,
            shared_kmers,
            query_kmer_count,
        })
    }

    /// Score for a query that has no k-mers
    #[must_use]
    pub fn empty() -> Self {
        Self {
            percentage: 0.0,
            shared_kmers: HashSet::new(),
            query_kmer_count: 0,
        }
    }

    /// Number of shared k-mers
    #[must_use]
    pub fn shared_count(&self) -> usize {
        self.shared_kmers.len()
    }
}

/// Shared count as a percentage of the query count.
///
/// Returns 0.0 when the query has no k-mers instead of dividing by zero.
#[must_use]
pub fn overlap_percentage(shared: usize, query_total: usize) -> f64 {
    if query_total == 0 {
        0.0
    } else {
        count_to_f64(shared) / count_to_f64(query_total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_score_100() {
        let query = KmerSet::build("ACGTACGTAC", 4).unwrap();
        let score = SimilarityScore::calculate(&query, "ACGTACGTAC").unwrap();
        assert!((score.percentage - 100.0).abs() < 1e-9);
        assert_eq!(score.shared_count(), query.len());
    }

    #[test]
    fn test_disjoint_sequences_score_0() {
        let query = KmerSet::build("ACGTACGTAC", 4).unwrap();
        let score = SimilarityScore::calculate(&query, "TTTTTTTTTT").unwrap();
        assert!(score.percentage.abs() < 1e-9);
        assert!(score.shared_kmers.is_empty());
        assert_eq!(score.query_kmer_count, 4);
    }

    #[test]
    fn test_partial_overlap() {
        // Query k-mers: ACG CGT GTT TTT -> 4 distinct; reference shares ACG, CGT
        let query = KmerSet::build("ACGTTT", 3).unwrap();
        let score = SimilarityScore::calculate(&query, "GGACGTGG").unwrap();
        assert_eq!(score.shared_count(), 2);
        assert!((score.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_set_scores_zero() {
        let query = KmerSet::build("ACG", 25).unwrap();
        let score = SimilarityScore::calculate(&query, "ACGTACGTACGTACGTACGTACGTACGT").unwrap();
        assert!(score.percentage.abs() < 1e-9);
        assert!(score.shared_kmers.is_empty());
        assert_eq!(score.query_kmer_count, 0);
    }

    #[test]
    fn test_reference_shorter_than_k() {
        let query = KmerSet::build("ACGTACGT", 5).unwrap();
        let score = SimilarityScore::calculate(&query, "ACGT").unwrap();
        assert!(score.percentage.abs() < 1e-9);
    }

    #[test]
    fn test_overlap_percentage_bounds_and_monotonicity() {
        assert!(overlap_percentage(0, 0).abs() < 1e-9);
        let mut previous = -1.0;
        for shared in 0..=7 {
            let pct = overlap_percentage(shared, 7);
            assert!((0.0..=100.0).contains(&pct));
            assert!(pct >= previous);
            previous = pct;
        }
        assert!((overlap_percentage(7, 7) - 100.0).abs() < 1e-9);
    }
}
