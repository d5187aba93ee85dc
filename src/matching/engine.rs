use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::collection::ReferenceCollection;
use crate::core::types::SequenceId;
use crate::matching::fragments::{
    select_fragments, Fragment, FragmentOrder, DEFAULT_MAX_FRAGMENTS,
};
use crate::matching::kmers::{KmerSet, DEFAULT_KMER_SIZE};
use crate::matching::scanner::{scan, ScanMode, ScoredReference};
use crate::matching::MatchError;
use crate::utils::validation::find_invalid_base;

/// Default maximum number of results returned
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Result of comparing the query against one reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 1-based position in the ranked output
    pub rank: usize,

    /// Identifier of the matched reference
    pub id: SequenceId,

    /// Description of the matched reference
    pub description: String,

    /// Shared k-mers as a percentage of the query's distinct k-mers
    pub percentage: f64,

    /// Number of distinct k-mers shared with the query
    pub shared_kmers: usize,

    /// Number of distinct k-mers in the query
    pub query_kmers: usize,

    /// Representative shared k-mers, in selection order
    pub fragments: Vec<Fragment>,
}

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingConfig {
    /// K-mer window length
    pub kmer_size: usize,
    /// Maximum number of results returned
    pub max_results: usize,
    /// Maximum number of fragments reported per result
    pub max_fragments: usize,
    /// Rule for choosing fragments
    pub fragment_order: FragmentOrder,
    /// Sequential or parallel reference scan
    pub scan_mode: ScanMode,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            kmer_size: DEFAULT_KMER_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            fragment_order: FragmentOrder::default(),
            scan_mode: ScanMode::default(),
        }
    }
}

impl MatchingConfig {
    #[must_use]
    pub fn with_kmer_size(mut self, kmer_size: usize) -> Self {
        self.kmer_size = kmer_size;
        self
    }

    /// Check that every setting is usable
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` for a zero k-mer size or result limit.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.kmer_size == 0 {
            return Err(MatchError::InvalidParameter(
                "k-mer size must be a positive integer, got 0".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(MatchError::InvalidParameter(
                "maximum number of results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    references: &'a ReferenceCollection,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(references: &'a ReferenceCollection) -> Self {
        Self {
            references,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(references: &'a ReferenceCollection, config: MatchingConfig) -> Self {
        Self { references, config }
    }

    /// Find the best matching references for a query.
    ///
    /// The query must already be uppercase. An empty query, or one shorter
    /// than k, has no k-mers and matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` for an unusable configuration,
    /// `MatchError::InvalidSequence` if the query contains anything other than
    /// A, C, G, T, and `MatchError::InternalConsistency` if fragment lookup fails.
    pub fn find_matches(&self, query: &str) -> Result<Vec<MatchResult>, MatchError> {
        self.config.validate()?;

        if let Some((position, character)) = find_invalid_base(query) {
            return Err(MatchError::InvalidSequence {
                position,
                character,
            });
        }

        // Step 1: Decompose the query once; it is shared read-only by every reference
        let query_kmers = KmerSet::build(query, self.config.kmer_size)?;

        // Step 2: Score every reference
        let scored = scan(&query_kmers, self.references, self.config.scan_mode)?;

        // Step 3: Rank, truncate and annotate with fragments
        rank(scored, self.references, &self.config)
    }
}

/// Order scored references into the final result list.
///
/// Sorts by percentage descending with a stable sort, so references with equal
/// scores stay in collection order. References that share nothing are dropped,
/// then the list is cut to `max_results`.
///
/// # Errors
///
/// Returns `MatchError::InternalConsistency` if a scored entry does not point at
/// a reference in `references`, or a fragment cannot be located in its reference.
pub fn rank(
    mut scored: Vec<ScoredReference<'_>>,
    references: &ReferenceCollection,
    config: &MatchingConfig,
) -> Result<Vec<MatchResult>, MatchError> {
    // Sort by percentage descending (Vec::sort_by is stable)
    scored.sort_by(|a, b| {
        b.score
            .percentage
            .partial_cmp(&a.score.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let k = config.kmer_size;
    let results = scored
        .into_iter()
        .filter(|s| s.score.percentage > 0.0)
        .take(config.max_results)
        .enumerate()
        .map(|(i, entry)| -> Result<MatchResult, MatchError> {
            let reference = references.get_index(entry.index).ok_or_else(|| {
                MatchError::InternalConsistency {
                    id: SequenceId::new(format!("#{}", entry.index)),
                    fragment: String::new(),
                }
            })?;

            let fragments = select_fragments(
                &entry.score.shared_kmers,
                reference,
                k,
                config.max_fragments,
                config.fragment_order,
            )?;

            Ok(MatchResult {
                rank: i + 1,
                id: reference.id.clone(),
                description: reference.description.clone(),
                percentage: entry.score.percentage,
                shared_kmers: entry.score.shared_count(),
                query_kmers: entry.score.query_kmer_count,
                fragments,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(results = results.len(), "Ranked matches");

    Ok(results)
}

/// Compare a query against a reference collection with default settings.
///
/// Returns at most [`DEFAULT_MAX_RESULTS`] references with a nonzero score,
/// best first, each with up to [`DEFAULT_MAX_FRAGMENTS`] fragments.
///
/// # Errors
///
/// See [`MatchingEngine::find_matches`].
pub fn compare(
    query: &str,
    references: &ReferenceCollection,
    k: usize,
) -> Result<Vec<MatchResult>, MatchError> {
    let config = MatchingConfig::default().with_kmer_size(k);
    MatchingEngine::with_config(references, config).find_matches(query)
}
