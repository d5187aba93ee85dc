//! Centralized validation and helper functions.

use crate::matching::MatchError;

/// Maximum number of reference sequences loaded from a single file (DOS protection)
pub const MAX_REFERENCES: usize = 1_000_000;

/// Validate that a string is composed only of the canonical nucleotides A, C, G, T.
///
/// Case folding is the caller's job; lowercase bases are rejected. An empty
/// string is vacuously valid.
///
/// # Examples
///
/// ```
/// use kmer_match::utils::validation::is_dna_sequence;
///
/// assert!(is_dna_sequence("ACGTTGCA"));
/// assert!(is_dna_sequence(""));
/// assert!(!is_dna_sequence("acgt"));
/// assert!(!is_dna_sequence("ACGN"));
/// ```
#[must_use]
pub fn is_dna_sequence(sequence: &str) -> bool {
    sequence.bytes().all(is_nucleotide)
}

#[inline]
fn is_nucleotide(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// Locate the first character that is not A, C, G or T.
///
/// Returns the 0-based character position and the character itself.
#[must_use]
pub fn find_invalid_base(sequence: &str) -> Option<(usize, char)> {
    sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || !is_nucleotide(*c as u8))
}

/// Validate a user-supplied k-mer size.
///
/// The size arrives signed so that `0` and negative values are reported as an
/// invalid parameter instead of wrapping or being rejected by the argument parser.
///
/// # Errors
///
/// Returns `MatchError::InvalidParameter` if `k <= 0` or does not fit in `usize`.
pub fn validate_kmer_size(k: i64) -> Result<usize, MatchError> {
    if k <= 0 {
        return Err(MatchError::InvalidParameter(format!(
            "k-mer size must be a positive integer, got {k}"
        )));
    }
    usize::try_from(k).map_err(|_| {
        MatchError::InvalidParameter(format!("k-mer size {k} is too large for this platform"))
    })
}

/// Check if adding another reference would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new reference.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_reference_limit(count: usize) -> Option<String> {
    if count >= MAX_REFERENCES {
        Some(format!(
            "Too many references: adding another would exceed maximum of {MAX_REFERENCES}"
        ))
    } else {
        None
    }
}
