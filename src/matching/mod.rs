//! K-mer similarity search and ranking.
//!
//! This module provides the core matching functionality:
//!
//! - [`KmerSet`](kmers::KmerSet): Distinct k-mers of a sequence
//! - [`SimilarityScore`](scoring::SimilarityScore): Overlap between a query and one reference
//! - [`scan`](scanner::scan): Score every reference in a collection
//! - [`MatchingEngine`](engine::MatchingEngine): Main entry point for ranked matches
//!
//! ## Matching Algorithm
//!
//! 1. **Decompose** the query into its set of distinct k-mers (once per call)
//! 2. **Scan** every reference, in collection order, intersecting its k-mers
//!    with the query's
//! 3. **Score** each reference as `|shared| / |query k-mers| × 100`
//! 4. **Rank** by score, keeping collection order for ties, drop zero scores
//!    and keep the top results
//! 5. **Annotate** each result with representative shared k-mers and their
//!    first offsets in the reference
//!
//! A query shorter than k has no k-mers and scores 0% against everything.
//!
//! ## Example
//!
//! ```rust
//! use kmer_match::core::collection::ReferenceCollection;
//! use kmer_match::core::sequence::ReferenceSequence;
//! use kmer_match::matching::engine::compare;
//!
//! let references = ReferenceCollection::from_sequences(vec![
//!     ReferenceSequence::new("R1", "first", "ACGTACGTAC"),
//!     ReferenceSequence::new("R2", "second", "TTTTTTTTTT"),
//! ])
//! .unwrap();
//!
//! let matches = compare("ACGTACGTAC", &references, 4).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].id.as_str(), "R1");
//! assert!((matches[0].percentage - 100.0).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::core::types::SequenceId;

pub mod engine;
pub mod fragments;
pub mod kmers;
pub mod scanner;
pub mod scoring;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid DNA sequence: '{character}' at position {position} (only A, C, G, T allowed)")]
    InvalidSequence { position: usize, character: char },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No query sequence provided")]
    EmptyQuery,

    /// A selected fragment could not be found in its own reference. This is a
    /// logic defect, not a user input problem.
    #[error("Internal consistency error: fragment '{fragment}' not found in reference '{id}'")]
    InternalConsistency { id: SequenceId, fragment: String },
}
