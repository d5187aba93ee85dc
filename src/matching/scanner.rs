use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::core::collection::ReferenceCollection;
use crate::core::sequence::ReferenceSequence;
use crate::matching::kmers::KmerSet;
use crate::matching::scoring::SimilarityScore;
use crate::matching::MatchError;

/// How references are visited during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// One reference after another on the calling thread
    #[default]
    Sequential,
    /// References scored on the rayon thread pool
    Parallel,
}

/// Score of one reference, tagged with its position in the collection
#[derive(Debug, Clone)]
pub struct ScoredReference<'q> {
    /// Index of the reference in the collection (insertion order)
    pub index: usize,

    pub score: SimilarityScore<'q>,
}

/// Score every reference in the collection against the query k-mers.
///
/// Output has exactly one entry per reference, in collection order, including
/// references that share nothing with the query. Both modes produce the same
/// output.
///
/// # Errors
///
/// Propagates `MatchError` from scoring.
pub fn scan<'q>(
    query: &KmerSet<'q>,
    references: &ReferenceCollection,
    mode: ScanMode,
) -> Result<Vec<ScoredReference<'q>>, MatchError> {
    debug!(
        references = references.len(),
        k = query.k(),
        query_kmers = query.len(),
        ?mode,
        "Scanning references"
    );

    let score_one = |(index, reference): (usize, &ReferenceSequence)| {
        SimilarityScore::calculate(query, &reference.sequence)
            .map(|score| ScoredReference { index, score })
    };

    match mode {
        ScanMode::Sequential => references.iter().enumerate().map(score_one).collect(),
        // Indexed collect keeps collection order regardless of completion order
        ScanMode::Parallel => references
            .references()
            .par_iter()
            .enumerate()
            .map(score_one)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_collection() -> ReferenceCollection {
        ReferenceCollection::from_sequences(vec![
            ReferenceSequence::new("R1", "", "ACGTACGTAC"),
            ReferenceSequence::new("R2", "", "TTTTTTTTTT"),
            ReferenceSequence::new("R3", "", "GGACGTAGG"),
            ReferenceSequence::new("R4", "", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_scan_visits_every_reference_in_order() {
        let collection = make_collection();
        let query = KmerSet::build("ACGTACGTAC", 4).unwrap();

        let scored = scan(&query, &collection, ScanMode::Sequential).unwrap();
        assert_eq!(scored.len(), 4);
        let indices: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        assert!((scored[0].score.percentage - 100.0).abs() < 1e-9);
        assert!(scored[1].score.percentage.abs() < 1e-9);
        assert!(scored[3].score.percentage.abs() < 1e-9);
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let collection = make_collection();
        let query = KmerSet::build("ACGTACGTAC", 3).unwrap();

        let sequential = scan(&query, &collection, ScanMode::Sequential).unwrap();
        let parallel = scan(&query, &collection, ScanMode::Parallel).unwrap();

        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(s.index, p.index);
            assert_eq!(s.score.shared_kmers, p.score.shared_kmers);
            assert!((s.score.percentage - p.score.percentage).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scan_empty_collection() {
        let collection = ReferenceCollection::new();
        let query = KmerSet::build("ACGT", 2).unwrap();
        assert!(scan(&query, &collection, ScanMode::Parallel)
            .unwrap()
            .is_empty());
    }
}
