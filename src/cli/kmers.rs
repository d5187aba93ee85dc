//! Kmers command - list the distinct k-mers of a sequence.

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::normalize_query;
use crate::matching::kmers::kmer_occurrences;
use crate::utils::validation::validate_kmer_size;

#[derive(Args)]
pub struct KmersArgs {
    /// DNA sequence (A, C, G, T; case-insensitive)
    #[arg(required = true)]
    pub sequence: String,

    /// K-mer length
    #[arg(short = 'k', long, default_value = "25", allow_negative_numbers = true)]
    pub kmer_size: i64,
}

/// Execute the kmers command
///
/// # Errors
///
/// Returns an error if the sequence or k-mer size is invalid.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: KmersArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let k = validate_kmer_size(args.kmer_size)?;
    let sequence = normalize_query(&args.sequence)?;
    let counts = kmer_occurrences(&sequence, k)?;

    if verbose {
        eprintln!(
            "{} bases, {} windows, {} distinct {k}-mers",
            sequence.len(),
            (sequence.len() + 1).saturating_sub(k),
            counts.len()
        );
    }

    match format {
        OutputFormat::Text => {
            if counts.is_empty() {
                eprintln!("Sequence is shorter than k = {k}; no k-mers.");
            }
            for (kmer, count) in &counts {
                println!("{kmer}\t{count}");
            }
        }
        OutputFormat::Json => {
            let kmers: Vec<serde_json::Value> = counts
                .iter()
                .map(|(kmer, count)| serde_json::json!({ "kmer": kmer, "count": count }))
                .collect();
            let output = serde_json::json!({
                "kmer_size": k,
                "distinct": counts.len(),
                "kmers": kmers,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kmer\tcount");
            for (kmer, count) in &counts {
                println!("{kmer}\t{count}");
            }
        }
    }

    Ok(())
}
