//! # kmer-match
//!
//! A library for ranking reference DNA sequences by the k-mers they share with a query.
//!
//! Given a query sequence and a collection of references, each reference is
//! scored by the fraction of the query's distinct k-mers (substrings of length
//! k) that it also contains. The best-scoring references are returned together
//! with a few representative shared k-mers and where they first occur.
//!
//! This is exact-substring similarity, not alignment: there is no notion of
//! gaps, mismatches or edit distance.
//!
//! ## Features
//!
//! - **K-mer overlap scoring**: percentage of query k-mers found in each reference
//! - **Deterministic ranking**: score descending, ties in collection order
//! - **Representative fragments**: chosen by an explicit rule, with offsets
//! - **Parallel scanning**: optional, with output identical to sequential runs
//! - **FASTA input**: plain or gzip/bgzip compressed reference files
//!
//! ## Example
//!
//! ```rust
//! use kmer_match::{compare, ReferenceCollection, ReferenceSequence};
//!
//! let references = ReferenceCollection::from_sequences(vec![
//!     ReferenceSequence::new("R1", "first", "ACGTACGTAC"),
//!     ReferenceSequence::new("R2", "second", "TTTTTTTTTT"),
//! ])
//! .unwrap();
//!
//! let matches = compare("ACGTACGTAC", &references, 4).unwrap();
//! for m in &matches {
//!     println!("{}: {:.2}%", m.id, m.percentage);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequences, identifiers and the reference collection
//! - [`matching`]: K-mer sets, scoring, scanning and ranking
//! - [`parsing`]: FASTA loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::collection::ReferenceCollection;
pub use crate::core::sequence::ReferenceSequence;
pub use crate::core::types::SequenceId;
pub use crate::matching::engine::{compare, MatchResult, MatchingConfig, MatchingEngine};
pub use crate::matching::fragments::{Fragment, FragmentOrder};
pub use crate::matching::kmers::{KmerSet, DEFAULT_KMER_SIZE};
pub use crate::matching::MatchError;
