use clap::Parser;
use colored::Colorize;
use dupfind_core::{DuplicateFinder, Error, FinderConfig, RunSummary};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT_PATH: &str = "output/duplicates.txt";
const DEFAULT_REMOVAL_WORDS_PATH: &str = "removal_words.txt";

/// dupfind - find potential duplicate company names in a text file
///
/// Names are lowercased, stripped of URL parts, punctuation and removal
/// words, then grouped on the result. Every pair within a group is written
/// to output/duplicates.txt.
#[derive(Parser)]
#[command(name = "dupfind", version, about, long_about = None)]
struct Cli {
    /// Path to input file containing company names, one per line
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(summary) => {
            println!(
                "Wrote {} duplicate groups ({} pairs) to {}.",
                summary.groups,
                summary.pairs,
                summary.output_path.display()
            );
            0
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<RunSummary, Error> {
    if !cli.input.exists() {
        return Err(Error::InputNotFound {
            path: cli.input.clone(),
        });
    }

    let finder = DuplicateFinder::new(FinderConfig {
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        removal_words_path: PathBuf::from(DEFAULT_REMOVAL_WORDS_PATH),
    })?;
    tracing::debug!(
        removal_words = finder.removal_words().len(),
        "finder ready"
    );
    finder.find_duplicates(&cli.input)
}
