//! Show command - print the full record of one reference.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::ReferenceSequence;
use crate::core::types::SequenceId;
use crate::parsing::fasta::load_references;

/// Sequence characters per line in text output
const LINE_WIDTH: usize = 60;

#[derive(Args)]
pub struct ShowArgs {
    /// FASTA file of reference sequences
    #[arg(required = true)]
    pub references: PathBuf,

    /// Identifier of the reference to show
    #[arg(required = true)]
    pub id: String,
}

/// Execute the show command
///
/// # Errors
///
/// Returns an error if the references cannot be loaded or the ID is unknown.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ShowArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let references = load_references(&args.references)?;

    if verbose {
        eprintln!("Loaded {} references", references.len());
    }

    let reference = references
        .get(&SequenceId::new(&args.id))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Sequence '{}' not found in {}",
                args.id,
                args.references.display()
            )
        })?;

    match format {
        OutputFormat::Text => print_text(reference),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reference)?),
        OutputFormat::Tsv => {
            println!("id\tdescription\tlength\tsequence");
            println!(
                "{}\t{}\t{}\t{}",
                reference.id,
                reference.description,
                reference.len(),
                reference.sequence
            );
        }
    }

    Ok(())
}

fn print_text(reference: &ReferenceSequence) {
    println!("Name: {}", reference.description);
    println!("ID: {}", reference.id);
    println!("Length: {} bp", reference.len());
    println!("Sequence:");
    for line in reference.sequence.as_bytes().chunks(LINE_WIDTH) {
        println!("{}", String::from_utf8_lossy(line));
    }
}
