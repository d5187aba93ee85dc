use clap::Parser;
use tracing_subscriber::EnvFilter;

use kmer_match::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("kmer_match=debug,info")
    } else {
        EnvFilter::new("kmer_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Show(args) => {
            cli::show::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Kmers(args) => {
            cli::kmers::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
