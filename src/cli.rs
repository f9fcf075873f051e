// Command line front end - argument parsing, logging setup and output

use crate::acronym::AcronymGenerator;
use crate::lexicon::{Language, Subject};
use crate::settings::Settings;
use anyhow::Context;
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bullshit Acronym Generator
#[derive(Debug, Parser)]
#[command(name = "bag", version, about = "Expand words into plausible-sounding acronyms")]
pub struct Cli {
    /// Words to expand, one acronym each
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Language of the expansion (en, fr)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Subject of the expansion (ALL, BULLSHIT, ASI, PLD)
    #[arg(short, long)]
    pub subject: Option<Subject>,

    /// JSON lexicon file to use instead of the bundled word list
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print each acronym as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How many words resolved and how many failed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub resolved: usize,
    pub failed: usize,
}

/// Settings file (or defaults) with command line flags applied on top
pub fn effective_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };

    if let Some(language) = cli.lang {
        settings.language = language;
    }
    if let Some(subject) = cli.subject {
        settings.subject = subject;
    }
    if let Some(path) = &cli.lexicon {
        settings.lexicon_path = Some(path.clone());
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

/// Resolve every word on the command line, writing acronyms to `out` and
/// failures to `err`. Setup failures (settings, lexicon) are returned.
pub fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<Outcome> {
    let settings = effective_settings(cli)?;
    let generator =
        AcronymGenerator::from_settings(&settings).context("Failed to prepare lexicon")?;

    let mut outcome = Outcome::default();
    for word in &cli.words {
        match generator.generate_acronym(word, settings.language, settings.subject) {
            Ok(acronym) => {
                if cli.json {
                    writeln!(out, "{}", serde_json::to_string(&acronym)?)?;
                } else {
                    writeln!(out, "{}: {}", acronym.letters, acronym)?;
                }
                outcome.resolved += 1;
            }
            Err(e) => {
                writeln!(err, "{}: {}", word, e)?;
                outcome.failed += 1;
            }
        }
    }
    Ok(outcome)
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Also routes `log` records from the library
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Binary entry point. Exit code 0 when every word resolved, 1 when some
/// failed, 2 when settings or lexicon could not be loaded.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli, &mut io::stdout(), &mut io::stderr()) {
        Ok(outcome) if outcome.failed == 0 => ExitCode::SUCCESS,
        Ok(outcome) => {
            crate::debug!("{} of {} words failed", outcome.failed, cli.words.len());
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
