//! Loaders for reference and query sequences.
//!
//! This module provides:
//!
//! - **FASTA files**: plain, gzip or bgzip compressed, loaded into a
//!   [`ReferenceCollection`](crate::core::collection::ReferenceCollection)
//!   in file order
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmer_match::parsing::fasta::load_references;
//! use std::path::Path;
//!
//! let references = load_references(Path::new("references.fa")).unwrap();
//! println!("{} references", references.len());
//! ```

use thiserror::Error;

use crate::core::collection::CollectionError;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Fasta(String),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}
