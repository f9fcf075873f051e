// Lexicon entry model - the words an acronym is built from, plus the record
// shape they are loaded from

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Language an entry belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English - entries are rendered bare
    #[default]
    En,
    /// French - entries after the first are rendered with their linking prefix
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Thematic tag restricting which entries are eligible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Subject {
    /// Universal tag, attached to every entry automatically
    #[default]
    All,
    /// Generic filler pool searched when a subject has nothing for a letter
    Bullshit,
    /// Information systems architecture
    Asi,
    /// Management and planning
    Pld,
}

impl Subject {
    pub fn name(&self) -> &'static str {
        match self {
            Subject::All => "ALL",
            Subject::Bullshit => "BULLSHIT",
            Subject::Asi => "ASI",
            Subject::Pld => "PLD",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Subject::All),
            "BULLSHIT" => Ok(Subject::Bullshit),
            "ASI" => Ok(Subject::Asi),
            "PLD" => Ok(Subject::Pld),
            _ => Err(format!("Unknown subject: {}", s)),
        }
    }
}

/// Preferred placement of an entry within the generated phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Start,
    #[serde(alias = "MID")]
    Middle,
    End,
    #[default]
    #[serde(alias = "ANY")]
    Anywhere,
}

impl Position {
    /// Position used when a record does not state one.
    /// Adjectives lean towards the side their language puts them on.
    pub fn default_for(part_of_speech: PartOfSpeech, language: Language) -> Self {
        match (part_of_speech, language) {
            (PartOfSpeech::Adjective, Language::Fr) => Position::End,
            (PartOfSpeech::Adjective, Language::En) => Position::Start,
            (PartOfSpeech::Noun, _) => Position::Anywhere,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Start => "START",
            Position::Middle => "MIDDLE",
            Position::End => "END",
            Position::Anywhere => "ANYWHERE",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "START" => Ok(Position::Start),
            "MIDDLE" | "MID" => Ok(Position::Middle),
            "END" => Ok(Position::End),
            "ANYWHERE" | "ANY" => Ok(Position::Anywhere),
            _ => Err(format!("Unknown position: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Adjective,
}

/// Error types for entry construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    /// Entry text is empty or whitespace
    #[error("Entry text cannot be empty")]
    EmptyText,
    /// Entry text does not start with a letter
    #[error("Entry '{0}' must start with a letter")]
    NoLeadingLetter(String),
}

/// External data shape of one lexicon item, as found in `words.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconRecord {
    /// The word itself
    pub value: String,
    /// Language code ("en", "fr")
    pub lang: Language,
    /// Subject names; ALL is added on conversion
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Linking prefix used in French ("de ", "d'", ...)
    #[serde(default)]
    pub preposition: String,
    #[serde(default, rename = "type")]
    pub part_of_speech: PartOfSpeech,
    /// Missing means "derive from part of speech and language"
    #[serde(default)]
    pub position: Option<Position>,
}

/// A lexicon item. Immutable once built; only its membership in an index changes.
///
/// Two entries are equal when they share text, language and part of speech,
/// whatever their subjects, prefix or position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    text: String,
    language: Language,
    subjects: BTreeSet<Subject>,
    linking_prefix: String,
    part_of_speech: PartOfSpeech,
    preferred_position: Position,
    #[serde(skip)]
    first_letter: char,
}

impl Entry {
    /// Create a noun with no linking prefix and no positional preference.
    /// `Subject::All` is always added to the given subjects.
    pub fn new(
        text: impl Into<String>,
        language: Language,
        subjects: impl IntoIterator<Item = Subject>,
    ) -> Result<Self, EntryError> {
        let text = text.into();
        let first = text.trim_start().chars().next().ok_or(EntryError::EmptyText)?;
        if !first.is_alphabetic() {
            return Err(EntryError::NoLeadingLetter(text));
        }

        let mut subjects: BTreeSet<Subject> = subjects.into_iter().collect();
        subjects.insert(Subject::All);

        Ok(Self {
            first_letter: uppercase_letter(first),
            text,
            language,
            subjects,
            linking_prefix: String::new(),
            part_of_speech: PartOfSpeech::Noun,
            preferred_position: Position::Anywhere,
        })
    }

    /// Build an entry from an external record
    pub fn from_record(record: LexiconRecord) -> Result<Self, EntryError> {
        let position = record
            .position
            .unwrap_or_else(|| Position::default_for(record.part_of_speech, record.lang));

        Ok(Self::new(record.value, record.lang, record.subjects)?
            .with_linking_prefix(record.preposition)
            .with_part_of_speech(record.part_of_speech)
            .with_position(position))
    }

    pub fn with_linking_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.linking_prefix = prefix.into();
        self
    }

    pub fn with_part_of_speech(mut self, part_of_speech: PartOfSpeech) -> Self {
        self.part_of_speech = part_of_speech;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.preferred_position = position;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn subjects(&self) -> impl Iterator<Item = Subject> + '_ {
        self.subjects.iter().copied()
    }

    pub fn has_subject(&self, subject: Subject) -> bool {
        self.subjects.contains(&subject)
    }

    pub fn linking_prefix(&self) -> &str {
        &self.linking_prefix
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn preferred_position(&self) -> Position {
        self.preferred_position
    }

    /// Uppercased first letter, the key the entry is indexed under
    pub fn first_letter(&self) -> char {
        self.first_letter
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.language == other.language
            && self.part_of_speech == other.part_of_speech
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.language.hash(state);
        self.part_of_speech.hash(state);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Uppercase a single letter, keeping the first char when the uppercase
/// form expands (e.g. 'ß' -> "SS")
pub fn uppercase_letter(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
