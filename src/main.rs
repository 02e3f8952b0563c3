use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use wordsketch::config::RunConfig;
use wordsketch::corpus;
use wordsketch::counters::{
    run_counter, CounterReport, DecayCounter, ExactCounter, SpaceSavingCounter,
};
use wordsketch::output::terminal;

/// Wordsketch: compare word-frequency estimation strategies over a corpus.
///
/// Runs an exact counter, a decaying-probability sketch, and a bounded
/// space-saving tracker over the same cleaned token stream, then shows each
/// one's top-N ranking and how long its pass took.
#[derive(Parser)]
#[command(name = "wordsketch", version, about)]
struct Cli {
    /// Path to the corpus text file (Project Gutenberg boilerplate is
    /// stripped automatically if present)
    corpus: PathBuf,

    /// How many top words to report; also the space-saving tracker capacity
    #[arg(long, default_value = "10")]
    top: usize,

    /// Seed for the decaying-probability counter (omit for fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Stopword language (english, french, german, spanish, ...)
    #[arg(long, default_value = "english")]
    lang: String,

    /// File of extra stopwords, one per line
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Which counter to run
    #[arg(long, value_enum, default_value_t = CounterChoice::All)]
    counter: CounterChoice,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum CounterChoice {
    All,
    Exact,
    Decay,
    SpaceSaving,
}

impl CounterChoice {
    fn includes(self, other: CounterChoice) -> bool {
        self == CounterChoice::All || self == other
    }
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordsketch=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        corpus_path: cli.corpus,
        top_n: cli.top,
        seed: cli.seed,
        language: cli.lang,
        extra_stopwords: cli.stopwords,
    };
    config.require_valid_cutoff()?;

    let stopwords = corpus::stopword_set(&config.language, config.extra_stopwords.as_deref())?;
    let raw = corpus::load_corpus(&config.corpus_path)?;
    let tokens = corpus::tokenize(&corpus::strip_gutenberg(&raw), &stopwords);

    info!(
        corpus = %config.corpus_path.display(),
        tokens = tokens.len(),
        top_n = config.top_n,
        "Corpus ready"
    );

    // The three counters run independently and in sequence; a failure in one
    // is reported but never stops the others.
    let mut reports: Vec<CounterReport> = Vec::new();

    if cli.counter.includes(CounterChoice::Exact) {
        let mut counter = ExactCounter::new();
        reports.push(run_counter(&mut counter, &tokens, config.top_n));
    }

    if cli.counter.includes(CounterChoice::Decay) {
        let mut counter = DecayCounter::new(config.seed);
        reports.push(run_counter(&mut counter, &tokens, config.top_n));
    }

    if cli.counter.includes(CounterChoice::SpaceSaving) {
        match SpaceSavingCounter::new(config.top_n) {
            Ok(mut counter) => reports.push(run_counter(&mut counter, &tokens, config.top_n)),
            Err(err) => warn!("space-saving tracker skipped: {err}"),
        }
    }

    for report in &reports {
        terminal::display_report(report);
    }
    terminal::display_summary(tokens.len(), &reports);

    Ok(())
}
