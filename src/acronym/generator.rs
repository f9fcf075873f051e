// Acronym generator - owns the lexicon and the random source and runs one
// resolution at a time

use super::resolver::{resolve, Acronym, ResolveError};
use crate::lexicon::{
    builtin_index, load_index, BucketKey, Entry, Language, LexiconError, LexiconIndex, Subject,
};
use crate::settings::Settings;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct GeneratorState<R> {
    index: LexiconIndex,
    rng: R,
}

/// Caller-facing acronym generator.
///
/// Resolutions borrow entries out of the shared index, so the lock is held
/// for the whole of each call.
pub struct AcronymGenerator<R = StdRng> {
    state: Mutex<GeneratorState<R>>,
}

impl AcronymGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new(index: LexiconIndex) -> Self {
        Self::with_rng(index, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed, for reproducible output
    pub fn with_seed(index: LexiconIndex, seed: u64) -> Self {
        Self::with_rng(index, StdRng::seed_from_u64(seed))
    }

    /// Create a generator from settings: configured lexicon file or the
    /// bundled word list, configured seed or entropy.
    pub fn from_settings(settings: &Settings) -> Result<Self, LexiconError> {
        let index = match &settings.lexicon_path {
            Some(path) => load_index(path)?,
            None => builtin_index()?,
        };

        Ok(match settings.seed {
            Some(seed) => Self::with_seed(index, seed),
            None => Self::new(index),
        })
    }
}

impl<R: Rng> AcronymGenerator<R> {
    pub fn with_rng(index: LexiconIndex, rng: R) -> Self {
        Self {
            state: Mutex::new(GeneratorState { index, rng }),
        }
    }

    /// Generate an acronym expansion for `letters`.
    ///
    /// On failure the lexicon is already back to its previous content when
    /// the error is returned.
    pub fn generate_acronym(
        &self,
        letters: &str,
        language: Language,
        subject: Subject,
    ) -> Result<Acronym, ResolveError> {
        let mut state = self.state.lock();
        let GeneratorState { index, rng } = &mut *state;
        resolve(index, rng, letters, language, subject)
    }

    pub fn insert(&self, entry: Entry) -> usize {
        self.state.lock().index.insert(entry)
    }

    pub fn remove(&self, entry: &Entry) -> bool {
        self.state.lock().index.remove(entry)
    }

    pub fn len(&self) -> usize {
        self.state.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> Vec<(BucketKey, String)> {
        self.state.lock().index.snapshot()
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
