//! Core data types for k-mer similarity search.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ReferenceSequence`](sequence::ReferenceSequence): A named sequence with a description
//! - [`ReferenceCollection`](collection::ReferenceCollection): Insertion-ordered set of references
//! - [`SequenceId`](types::SequenceId): Identifier of a sequence within a collection
//!
//! ## Ordering
//!
//! A collection keeps references in the order they were loaded (FASTA file
//! order). Ranking relies on this order to break ties between references with
//! the same score, so results are reproducible from run to run.

pub mod collection;
pub mod sequence;
pub mod types;
