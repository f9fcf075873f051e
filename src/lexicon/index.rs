// Lexicon index - entries bucketed by (language, subject, first letter, position)

use super::entry::{uppercase_letter, Entry, Language, Position, Subject};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Composite key of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BucketKey {
    pub language: Language,
    pub subject: Subject,
    pub letter: char,
    pub position: Position,
}

impl BucketKey {
    pub fn new(language: Language, subject: Subject, letter: char, position: Position) -> Self {
        Self {
            language,
            subject,
            letter: uppercase_letter(letter),
            position,
        }
    }
}

/// Why a lookup found nothing. Callers pick their fallback from this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("There is no word for the language '{0}' available.")]
    NoEntriesForLanguage(Language),
    #[error("There is no word for the subject '{0}' available.")]
    NoEntriesForSubject(Subject),
    #[error("There is no word starting with '{letter}' available for position {position}.")]
    NoEntriesForLetterOrPosition { letter: char, position: Position },
}

/// In-memory lexicon.
///
/// Every entry sits in one bucket per subject it declares. Languages and
/// (language, subject) pairs stay known once indexed, even after their
/// buckets are drained, so a miss on a drained bucket reports the letter.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    buckets: HashMap<BucketKey, Vec<Entry>>,
    languages: HashSet<Language>,
    subjects: HashSet<(Language, Subject)>,
}

impl LexiconIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys_for(entry: &Entry) -> impl Iterator<Item = BucketKey> + '_ {
        entry.subjects().map(move |subject| {
            BucketKey::new(
                entry.language(),
                subject,
                entry.first_letter(),
                entry.preferred_position(),
            )
        })
    }

    /// Add the entry to each of its buckets, skipping buckets that already
    /// hold an equal entry. Returns how many buckets gained it.
    pub fn insert(&mut self, entry: Entry) -> usize {
        self.languages.insert(entry.language());

        let mut added = 0;
        for key in Self::keys_for(&entry) {
            self.subjects.insert((key.language, key.subject));
            let bucket = self.buckets.entry(key).or_default();
            if !bucket.contains(&entry) {
                bucket.push(entry.clone());
                added += 1;
            }
        }
        added
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = Entry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    /// Remove the entry (by equality) from every bucket it declares.
    /// Returns false when it was in none of them.
    pub fn remove(&mut self, entry: &Entry) -> bool {
        let mut removed = false;
        for key in Self::keys_for(entry) {
            if let Some(bucket) = self.buckets.get_mut(&key) {
                let before = bucket.len();
                bucket.retain(|e| e != entry);
                removed |= bucket.len() < before;
            }
        }
        removed
    }

    /// Take every placement of entries equal to `entry` out of the index,
    /// whatever subject or position they were stored under. The returned
    /// placements are what [`LexiconIndex::restore`] needs to undo this.
    pub fn withdraw(&mut self, entry: &Entry) -> Vec<(BucketKey, Entry)> {
        let mut taken = Vec::new();
        for (key, bucket) in self.buckets.iter_mut() {
            if key.language != entry.language() || key.letter != entry.first_letter() {
                continue;
            }
            bucket.retain(|e| {
                if e == entry {
                    taken.push((*key, e.clone()));
                    false
                } else {
                    true
                }
            });
        }
        taken
    }

    /// Put a placement back into its bucket, unless an equal entry is
    /// already there
    pub fn restore(&mut self, key: BucketKey, entry: Entry) {
        self.languages.insert(key.language);
        self.subjects.insert((key.language, key.subject));
        let bucket = self.buckets.entry(key).or_default();
        if !bucket.contains(&entry) {
            bucket.push(entry);
        }
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        Self::keys_for(entry).any(|key| {
            self.buckets
                .get(&key)
                .is_some_and(|bucket| bucket.contains(entry))
        })
    }

    /// Pick a random entry from the bucket matching the arguments.
    ///
    /// The entry stays in the index; remove it before treating it as consumed.
    pub fn lookup<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        letter: char,
        language: Language,
        subject: Subject,
        position: Position,
    ) -> Result<&Entry, LookupError> {
        if !self.languages.contains(&language) {
            return Err(LookupError::NoEntriesForLanguage(language));
        }
        if !self.subjects.contains(&(language, subject)) {
            return Err(LookupError::NoEntriesForSubject(subject));
        }

        let key = BucketKey::new(language, subject, letter, position);
        self.buckets
            .get(&key)
            .and_then(|bucket| bucket.choose(rng))
            .ok_or(LookupError::NoEntriesForLetterOrPosition {
                letter: key.letter,
                position,
            })
    }

    pub fn bucket(&self, key: &BucketKey) -> &[Entry] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (bucket, entry) placement
    pub fn entries(&self) -> impl Iterator<Item = (&BucketKey, &Entry)> {
        self.buckets
            .iter()
            .flat_map(|(key, bucket)| bucket.iter().map(move |entry| (key, entry)))
    }

    /// Number of placements across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted list of placements, for comparing index content
    pub fn snapshot(&self) -> Vec<(BucketKey, String)> {
        let mut placements: Vec<(BucketKey, String)> = self
            .entries()
            .map(|(key, entry)| (*key, entry.text().to_string()))
            .collect();
        placements.sort();
        placements
    }
}

impl FromIterator<Entry> for LexiconIndex {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
