// Acronym resolver - draws one entry per letter with positional and subject
// fallbacks, then hands every drawn entry back to the index

use crate::lexicon::{
    uppercase_letter, BucketKey, Entry, Language, LexiconIndex, LookupError, Position, Subject,
};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// The generator's own name, answered without touching the lexicon
pub const SELF_ACRONYM: &str = "BAG";
pub const SELF_ACRONYM_PHRASE: &str = "Bullshit Acronym Generator";

const START_ORDER: [Position; 4] = [
    Position::Start,
    Position::Anywhere,
    Position::Middle,
    Position::End,
];
const END_ORDER: [Position; 4] = [
    Position::End,
    Position::Anywhere,
    Position::Middle,
    Position::Start,
];
const MIDDLE_ORDER: [Position; 4] = [
    Position::Middle,
    Position::Anywhere,
    Position::Start,
    Position::End,
];

/// Positions tried, in order, for the letter at `index` of a `len`-letter input.
/// A single letter counts as a start.
pub fn position_order(index: usize, len: usize) -> [Position; 4] {
    if index == 0 {
        START_ORDER
    } else if index + 1 == len {
        END_ORDER
    } else {
        MIDDLE_ORDER
    }
}

/// Subjects tried, in order, for a requested subject
pub fn subject_order(subject: Subject) -> Vec<Subject> {
    match subject {
        Subject::All | Subject::Bullshit => vec![subject],
        _ => vec![subject, Subject::Bullshit],
    }
}

/// Text contributed by an entry at `index`: French links every word after
/// the first with its prefix, other languages use the bare text.
pub fn render(entry: &Entry, language: Language, index: usize) -> String {
    match language {
        Language::Fr if index > 0 => format!("{}{}", entry.linking_prefix(), entry.text()),
        _ => entry.text().to_string(),
    }
}

/// Error types for a resolution. A failure is always whole-acronym.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("Nothing to resolve: the input is empty")]
    EmptyInput,
    #[error("Character '{character}' at index {index} is not a letter")]
    InvalidCharacter { character: char, index: usize },
    /// Every position and subject fallback missed; `cause` is the last miss
    #[error(
        "No word for '{letter}' at index {index} (language {language}, subject {subject}): {cause}"
    )]
    NoCandidate {
        letter: char,
        index: usize,
        language: Language,
        subject: Subject,
        cause: LookupError,
    },
}

/// One letter of a resolved acronym
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcronymPart {
    pub letter: char,
    pub rendered: String,
    pub entry: Entry,
}

/// A successful resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acronym {
    /// Input letters, uppercased
    pub letters: String,
    pub phrase: String,
    /// Empty for the self-acronym
    pub parts: Vec<AcronymPart>,
}

impl fmt::Display for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

/// Entries borrowed from the index for the length of one resolution.
/// Dropping the guard puts every withdrawn placement back.
struct DrawGuard<'a> {
    index: &'a mut LexiconIndex,
    withdrawn: Vec<(BucketKey, Entry)>,
}

impl<'a> DrawGuard<'a> {
    fn new(index: &'a mut LexiconIndex) -> Self {
        Self {
            index,
            withdrawn: Vec::new(),
        }
    }

    /// Walk the position order for one subject. The hit, and every equal
    /// entry stored under another subject or position, leaves the index
    /// until the guard drops.
    fn draw<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        letter: char,
        language: Language,
        subject: Subject,
        order: &[Position; 4],
    ) -> Result<Entry, LookupError> {
        let mut outcome = Err(LookupError::NoEntriesForLetterOrPosition {
            letter,
            position: order[0],
        });

        for &position in order {
            crate::trace!(
                "Lookup '{}' lang={} subject={} position={}",
                letter,
                language,
                subject,
                position
            );
            outcome = self
                .index
                .lookup(rng, letter, language, subject, position)
                .cloned();
            match &outcome {
                Ok(_) => break,
                Err(e) => crate::trace!("Miss: {}", e),
            }
        }

        let entry = outcome?;
        self.withdrawn.extend(self.index.withdraw(&entry));
        Ok(entry)
    }
}

impl Drop for DrawGuard<'_> {
    fn drop(&mut self) {
        crate::trace!("Restoring {} withdrawn placements", self.withdrawn.len());
        while let Some((key, entry)) = self.withdrawn.pop() {
            self.index.restore(key, entry);
        }
    }
}

fn validate(letters: &str) -> Result<Vec<char>, ResolveError> {
    let letters: Vec<char> = letters.trim().chars().collect();
    if letters.is_empty() {
        return Err(ResolveError::EmptyInput);
    }
    let invalid = letters.iter().enumerate().find(|(_, c)| !c.is_alphabetic());
    if let Some((index, &character)) = invalid {
        return Err(ResolveError::InvalidCharacter { character, index });
    }
    Ok(letters.into_iter().map(uppercase_letter).collect())
}

/// Resolve `letters` against the index.
///
/// Entries drawn for earlier letters are unavailable to later ones. The
/// index content is the same after the call as before it, whether the
/// resolution succeeded or not.
pub fn resolve<R: Rng + ?Sized>(
    index: &mut LexiconIndex,
    rng: &mut R,
    letters: &str,
    language: Language,
    subject: Subject,
) -> Result<Acronym, ResolveError> {
    let letters = validate(letters)?;
    let word: String = letters.iter().collect();

    if word == SELF_ACRONYM {
        return Ok(Acronym {
            letters: word,
            phrase: SELF_ACRONYM_PHRASE.to_string(),
            parts: Vec::new(),
        });
    }

    crate::debug!("Resolving '{}' (language {}, subject {})", word, language, subject);

    let subjects = subject_order(subject);
    let mut guard = DrawGuard::new(index);
    let mut parts = Vec::with_capacity(letters.len());

    for (i, &letter) in letters.iter().enumerate() {
        let order = position_order(i, letters.len());

        let mut outcome = Err(LookupError::NoEntriesForSubject(subject));
        for (attempt, &pool) in subjects.iter().enumerate() {
            if attempt > 0 {
                crate::debug!("Nothing for '{}' in {}, falling back to {}", letter, subject, pool);
            }
            outcome = guard.draw(rng, letter, language, pool, &order);
            if outcome.is_ok() {
                break;
            }
        }

        let entry = outcome.map_err(|cause| {
            crate::warn!("Resolution of '{}' failed at '{}': {}", word, letter, cause);
            ResolveError::NoCandidate {
                letter,
                index: i,
                language,
                subject,
                cause,
            }
        })?;

        crate::debug!("Drew '{}' for '{}'", entry, letter);
        parts.push(AcronymPart {
            letter,
            rendered: render(&entry, language, i),
            entry,
        });
    }

    drop(guard);

    let phrase = parts
        .iter()
        .map(|part| part.rendered.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Acronym {
        letters: word,
        phrase,
        parts,
    })
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
