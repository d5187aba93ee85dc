//! Search command - rank references by shared k-mers with a query.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::normalize_query;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
use crate::matching::fragments::FragmentOrder;
use crate::matching::scanner::ScanMode;
use crate::parsing::fasta::{load_first_sequence, load_references};
use crate::utils::validation::validate_kmer_size;

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// FASTA file of reference sequences (optionally gzip/bgzip compressed)
    #[arg(required = true)]
    pub references: PathBuf,

    /// Query DNA sequence (A, C, G, T; case-insensitive)
    #[arg(required_unless_present = "query_file", conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Read the query from the first record of a FASTA file instead
    #[arg(long)]
    pub query_file: Option<PathBuf>,

    /// K-mer length
    #[arg(short = 'k', long, default_value = "25", allow_negative_numbers = true)]
    pub kmer_size: i64,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "10")]
    pub max_matches: usize,

    /// Number of representative k-mers shown per match
    #[arg(long, default_value = "2")]
    pub fragments: usize,

    /// How representative k-mers are chosen
    #[arg(long, value_enum, default_value = "leftmost")]
    pub fragment_order: FragmentOrder,

    /// Score references in parallel on this many threads (0 = all cores)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

/// Execute the search command
///
/// # Errors
///
/// Returns an error if the query or k-mer size is invalid, if inputs cannot be
/// read, or if matching fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let kmer_size = validate_kmer_size(args.kmer_size)?;

    let raw_query = match (&args.query, &args.query_file) {
        (Some(query), _) => query.clone(),
        (None, Some(path)) => load_first_sequence(path)?.sequence,
        (None, None) => String::new(),
    };
    let query = normalize_query(&raw_query)?;

    let references = load_references(&args.references)?;

    if verbose {
        eprintln!(
            "Loaded {} references from {}",
            references.len(),
            args.references.display()
        );
        eprintln!("Query: {} bases, k = {kmer_size}", query.len());
    }

    let scan_mode = match args.threads {
        Some(threads) => {
            // A second call fails once the global pool exists; the existing pool is reused
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
            {
                tracing::debug!("Using existing thread pool: {e}");
            }
            ScanMode::Parallel
        }
        None => ScanMode::Sequential,
    };

    let config = MatchingConfig {
        kmer_size,
        max_results: args.max_matches,
        max_fragments: args.fragments,
        fragment_order: args.fragment_order,
        scan_mode,
    };
    let engine = MatchingEngine::with_config(&references, config);
    let matches = engine.find_matches(&query)?;

    if matches.is_empty() {
        eprintln!("No matching references found.");
    }

    match format {
        OutputFormat::Text => print_text_results(&matches, &query, kmer_size),
        OutputFormat::Json => print_json_results(&matches, &query, kmer_size)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(matches: &[MatchResult], query: &str, kmer_size: usize) {
    if matches.is_empty() {
        return;
    }

    println!("Comparison Results");
    println!("{}", "=".repeat(60));
    println!(
        "Query: {} bp, {} distinct {kmer_size}-mers",
        query.len(),
        matches[0].query_kmers
    );

    for result in matches {
        println!();
        println!(
            "{:>3}. {}  {:.2}%  ({}/{} k-mers)",
            result.rank, result.id, result.percentage, result.shared_kmers, result.query_kmers
        );
        if !result.description.is_empty() {
            println!("     {}", result.description);
        }
        for fragment in &result.fragments {
            println!("     {:>10}  {}", fragment.position, fragment.kmer);
        }
    }
}

fn print_json_results(
    matches: &[MatchResult],
    query: &str,
    kmer_size: usize,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query": {
            "length": query.len(),
            "kmer_size": kmer_size,
        },
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("rank\tid\tdescription\tmatch_pct\tshared_kmers\tquery_kmers\tkmer\tposition");
    for m in matches {
        if m.fragments.is_empty() {
            println!(
                "{}\t{}\t{}\t{:.2}\t{}\t{}\t\t",
                m.rank, m.id, m.description, m.percentage, m.shared_kmers, m.query_kmers
            );
        }
        for fragment in &m.fragments {
            println!(
                "{}\t{}\t{}\t{:.2}\t{}\t{}\t{}\t{}",
                m.rank,
                m.id,
                m.description,
                m.percentage,
                m.shared_kmers,
                m.query_kmers,
                fragment.kmer,
                fragment.position
            );
        }
    }
}
