//! Word Scramble - terminal front-end.
//!
//! Prints the root word, reads one candidate per line, and reports each
//! verdict. `:new` draws a new root word; `:quit` or end of input exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    bounded, FileWordSource, GameConfig, GameSession, SharedOracle, Verdict, WordListDictionary,
    DEFAULT_LANGUAGE,
};

/// Build words from the letters of a random root word
#[derive(Parser, Debug)]
#[command(name = "word-scramble")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root-word list, one word per line
    #[arg(short, long, default_value = "start.txt")]
    words: PathBuf,

    /// Dictionary of accepted words, one per line
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Language tag for dictionary lookups
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for root-word draws (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Dictionary lookup deadline in milliseconds (0 disables it)
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default().with_language(self.language.clone());
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.timeout_ms > 0 {
            config = config.with_oracle_timeout(Duration::from_millis(self.timeout_ms));
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let dictionary = WordListDictionary::from_path(config.language.clone(), &cli.dictionary)
        .context("failed to load dictionary")?;
    let oracle: SharedOracle = bounded(dictionary, config.oracle_timeout);

    let source = FileWordSource::new(&cli.words);
    let mut session = GameSession::load(&source, oracle, &config).context("could not start game")?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_round(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        match line.trim() {
            ":quit" => break,
            ":new" => {
                session.start_new_game()?;
                print_round(&mut out, &session)?;
            }
            _ => match session.submit(&line)? {
                Verdict::Accepted => print_round(&mut out, &session)?,
                Verdict::Rejected(reason) => {
                    writeln!(out, "{}: {}", reason.title(), reason.message())?;
                    write!(out, "> ")?;
                    out.flush()?;
                }
            },
        }
    }

    writeln!(out)?;
    writeln!(out, "Final score: {}", session.score())?;
    Ok(())
}

fn print_round(out: &mut impl Write, session: &GameSession<SharedOracle>) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.root().unwrap_or_default())?;
    writeln!(out, "Score: {}", session.score())?;
    for word in session.used_words() {
        writeln!(out, "  {} {}", word.chars().count(), word)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
