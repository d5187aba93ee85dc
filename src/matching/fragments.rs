//! Selection of representative shared k-mers for display.
//!
//! Shared k-mers are held in a hash set with no meaningful iteration order,
//! so picking "the first two" directly would change between runs. Fragments
//! are instead chosen by an explicit [`FragmentOrder`], and each is reported
//! with the offset of its first occurrence in the reference.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::sequence::ReferenceSequence;
use crate::matching::MatchError;

/// Default number of fragments reported per result
pub const DEFAULT_MAX_FRAGMENTS: usize = 2;

/// Rule used to pick representative fragments from the shared k-mers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FragmentOrder {
    /// K-mers that occur earliest in the reference sequence
    #[default]
    Leftmost,
    /// Smallest k-mers in byte (alphabetical) order
    Lexicographic,
}

/// A shared k-mer and where it first occurs in the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The k-mer sequence
    pub kmer: String,

    /// 0-based offset of the first occurrence in the reference sequence
    pub position: usize,
}

/// Pick up to `limit` fragments from `shared` and locate them in `reference`.
///
/// # Errors
///
/// Returns `MatchError::InternalConsistency` if a selected k-mer cannot be found
/// in the reference it was extracted from.
pub fn select_fragments(
    shared: &HashSet<&[u8]>,
    reference: &ReferenceSequence,
    k: usize,
    limit: usize,
    order: FragmentOrder,
) -> Result<Vec<Fragment>, MatchError> {
    if shared.is_empty() || limit == 0 || k == 0 {
        return Ok(Vec::new());
    }

    let fragments = match order {
        FragmentOrder::Leftmost => leftmost_fragments(shared, reference, k, limit),
        FragmentOrder::Lexicographic => lexicographic_fragments(shared, reference, k, limit)?,
    };

    let expected = limit.min(shared.len());
    if fragments.len() < expected {
        // Every shared k-mer came from this reference, so the scan must find enough
        let missing = shared
            .iter()
            .find(|kmer| !fragments.iter().any(|f| f.kmer.as_bytes() == **kmer))
            .map(|kmer| String::from_utf8_lossy(kmer).into_owned())
            .unwrap_or_default();
        return Err(MatchError::InternalConsistency {
            id: reference.id.clone(),
            fragment: missing,
        });
    }

    Ok(fragments)
}

/// Walk the reference left to right, keeping the first `limit` distinct shared k-mers.
fn leftmost_fragments(
    shared: &HashSet<&[u8]>,
    reference: &ReferenceSequence,
    k: usize,
    limit: usize,
) -> Vec<Fragment> {
    let mut seen: HashSet<&[u8]> = HashSet::new();
    let mut fragments = Vec::with_capacity(limit);

    for (position, window) in reference.sequence.as_bytes().windows(k).enumerate() {
        if shared.contains(window) && seen.insert(window) {
            fragments.push(Fragment {
                kmer: String::from_utf8_lossy(window).into_owned(),
                position,
            });
            if fragments.len() == limit {
                break;
            }
        }
    }

    fragments
}

fn lexicographic_fragments(
    shared: &HashSet<&[u8]>,
    reference: &ReferenceSequence,
    k: usize,
    limit: usize,
) -> Result<Vec<Fragment>, MatchError> {
    let mut sorted: Vec<&[u8]> = shared.iter().copied().collect();
    sorted.sort_unstable();

    sorted
        .into_iter()
        .take(limit)
        .map(|kmer| -> Result<Fragment, MatchError> {
            let kmer_str = String::from_utf8_lossy(kmer).into_owned();
            let position = first_occurrence(reference.sequence.as_bytes(), kmer, k).ok_or_else(
                || MatchError::InternalConsistency {
                    id: reference.id.clone(),
                    fragment: kmer_str.clone(),
                },
            )?;
            Ok(Fragment {
                kmer: kmer_str,
                position,
            })
        })
        .collect()
}

/// 0-based offset of the first occurrence of `kmer` in `sequence`
#[must_use]
pub fn first_occurrence(sequence: &[u8], kmer: &[u8], k: usize) -> Option<usize> {
    if k == 0 || kmer.len() != k {
        return None;
    }
    sequence.windows(k).position(|window| window == kmer)
}
