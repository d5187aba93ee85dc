use std::collections::{HashMap, HashSet};

use crate::matching::MatchError;

/// Default k-mer size
pub const DEFAULT_KMER_SIZE: usize = 25;

/// The distinct k-mers of one sequence.
///
/// K-mers are borrowed byte windows of the source sequence; repeated
/// occurrences collapse to a single element.
#[derive(Debug, Clone)]
pub struct KmerSet<'a> {
    k: usize,
    kmers: HashSet<&'a [u8]>,
}

impl<'a> KmerSet<'a> {
    /// Build the set of all length-`k` substrings of `sequence`.
    ///
    /// A sequence shorter than `k` has no k-mers and yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` if `k` is zero.
    pub fn build(sequence: &'a str, k: usize) -> Result<Self, MatchError> {
        if k == 0 {
            return Err(MatchError::InvalidParameter(
                "k-mer size must be a positive integer, got 0".to_string(),
            ));
        }

        // windows() yields nothing when k > len
        let kmers = sequence.as_bytes().windows(k).collect();

        Ok(Self { k, kmers })
    }

    /// The k-mer size this set was built with
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-mers
    #[must_use]
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, kmer: &[u8]) -> bool {
        self.kmers.contains(kmer)
    }

    /// Get this set's own copy of `kmer`, borrowed from its source sequence
    pub(crate) fn get(&self, kmer: &[u8]) -> Option<&'a [u8]> {
        self.kmers.get(kmer).copied()
    }

    /// Iterate over the k-mers in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.kmers.iter().copied()
    }

    /// K-mers present in both sets, borrowed from `self`.
    ///
    /// Iterates over the smaller of the two sets.
    #[must_use]
    pub fn intersection(&self, other: &KmerSet<'_>) -> HashSet<&'a [u8]> {
        if self.len() <= other.len() {
            self.iter().filter(|kmer| other.contains(kmer)).collect()
        } else {
            other.iter().filter_map(|kmer| self.get(kmer)).collect()
        }
    }
}

/// Count occurrences of every distinct k-mer in first-occurrence order.
///
/// Unlike [`KmerSet`], this keeps multiplicity and order; it backs the
/// k-mer listing view and is not used for scoring.
///
/// # Errors
///
/// Returns `MatchError::InvalidParameter` if `k` is zero.
pub fn kmer_occurrences(sequence: &str, k: usize) -> Result<Vec<(&str, usize)>, MatchError> {
    if k == 0 {
        return Err(MatchError::InvalidParameter(
            "k-mer size must be a positive integer, got 0".to_string(),
        ));
    }

    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for start in 0..sequence.len().saturating_sub(k - 1) {
        let Some(kmer) = sequence.get(start..start + k) else {
            continue;
        };
        match position.get(kmer) {
            Some(&idx) => order[idx].1 += 1,
            None => {
                position.insert(kmer, order.len());
                order.push((kmer, 1));
            }
        }
    }

    Ok(order)
}
