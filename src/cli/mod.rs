//! Command-line interface for kmer-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Rank references in a FASTA file by shared k-mers with a query
//! - **show**: Print the full record of one reference
//! - **kmers**: List the distinct k-mers of a sequence
//!
//! ## Usage
//!
//! ```text
//! # Rank references against a query using the default k of 25
//! kmer-match search references.fa ACGTTGCA...
//!
//! # Smaller k, more results, query taken from a FASTA file
//! kmer-match search references.fa --query-file query.fa -k 12 -n 20
//!
//! # JSON output for scripting, scanning references on 8 threads
//! kmer-match --format json search references.fa ACGT... --threads 8
//!
//! # Inspect a hit
//! kmer-match show references.fa seq_42
//! ```

use clap::{Parser, Subcommand};

pub mod kmers;
pub mod search;
pub mod show;

#[derive(Parser)]
#[command(name = "kmer-match")]
#[command(version)]
#[command(about = "Rank reference DNA sequences by shared k-mers with a query")]
#[command(
    long_about = "kmer-match compares a query DNA sequence against a FASTA file of reference sequences.\n\nEach reference is scored by the percentage of the query's distinct k-mers it contains, and the best references are reported with representative shared k-mers and their positions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank references by shared k-mers with a query sequence
    Search(search::SearchArgs),

    /// Show the full sequence of a reference
    Show(show::ShowArgs),

    /// List the distinct k-mers of a sequence
    Kmers(kmers::KmersArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
