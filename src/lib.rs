// Bullshit Acronym Generator - expands a word into a plausible-sounding phrase,
// one lexicon entry per letter

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod acronym;
pub mod cli;
pub mod lexicon;
pub mod settings;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use acronym::{Acronym, AcronymGenerator, ResolveError};
pub use cli::run;
pub use lexicon::{Entry, Language, LexiconIndex, Position, Subject};
pub use settings::Settings;
