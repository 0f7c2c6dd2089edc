//! Wordle Nodal Analyzer - CLI
//!
//! Interactive assistant that narrows the official solution list from color
//! feedback and recommends guesses by letter-frequency nodal analysis.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use wordle_nodal::{
    commands::{analyze_history, run_assist},
    core::Word,
    output::print_history_analysis,
    solver::{SessionConfig, DEFAULT_PROBE_WORD, DEFAULT_SEED_GUESS, DEFAULT_TOP_N},
    wordlists::{loader::load_from_file, DEFAULT_CACHE_FILE},
};

#[derive(Parser)]
#[command(
    name = "wordle_nodal",
    about = "Interactive Wordle assistant using letter-frequency nodal analysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the cached solution list
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_CACHE_FILE)]
    wordlist: String,

    /// How many ranked recommendations to show per round
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Override the opening guess
    #[arg(long, global = true, default_value = DEFAULT_SEED_GUESS)]
    first: String,

    /// Override the exploratory probe word
    #[arg(long, global = true, default_value = DEFAULT_PROBE_WORD)]
    probe: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist,

    /// Replay guess:feedback records and print the resulting report
    Analyze {
        /// Records like sauce:BYGBB, oldest first
        records: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_from_file(&cli.wordlist)
        .with_context(|| format!("cannot read solution list '{}'", cli.wordlist))?;
    if corpus.is_empty() {
        bail!("no usable solution words in '{}'", cli.wordlist);
    }

    let config = build_config(&cli)?;

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist(&corpus, config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { records } => {
            let analysis =
                analyze_history(&corpus, &records, config.top_n()).map_err(|e| anyhow::anyhow!(e))?;
            print_history_analysis(&analysis);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> Result<SessionConfig> {
    let seed = Word::new(&cli.first)
        .map_err(|e| anyhow::anyhow!("invalid --first word '{}': {e}", cli.first))?;
    let probe = Word::new(&cli.probe)
        .map_err(|e| anyhow::anyhow!("invalid --probe word '{}': {e}", cli.probe))?;

    Ok(SessionConfig::new(seed, probe, cli.top))
}
