// Lexicon loader - reads lexicon records from JSON and indexes them

use super::entry::{Entry, EntryError, LexiconRecord};
use super::index::LexiconIndex;
use std::fs;
use std::path::Path;

/// Word list bundled with the binary
pub const BUILTIN_WORDS: &str = include_str!("../../data/words.json");

/// Error types for lexicon loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    /// File could not be read or parsed
    #[error("Failed to load lexicon: {0}")]
    LoadError(String),
    /// A record could not be turned into an entry
    #[error("Invalid lexicon record '{value}': {source}")]
    InvalidRecord { value: String, source: EntryError },
}

/// Parse a JSON array of lexicon records
pub fn parse_records(json: &str) -> Result<Vec<LexiconRecord>, LexiconError> {
    serde_json::from_str(json).map_err(|e| LexiconError::LoadError(e.to_string()))
}

/// Read lexicon records from a file
pub fn read_records(path: &Path) -> Result<Vec<LexiconRecord>, LexiconError> {
    crate::debug!("Reading lexicon from {:?}", path);

    let content = fs::read_to_string(path)
        .map_err(|e| LexiconError::LoadError(format!("{}: {}", path.display(), e)))?;
    parse_records(&content)
}

/// Convert records to entries and index them.
/// Stops at the first invalid record.
pub fn build_index(
    records: impl IntoIterator<Item = LexiconRecord>,
) -> Result<LexiconIndex, LexiconError> {
    let entries = records
        .into_iter()
        .map(|record| {
            let value = record.value.clone();
            Entry::from_record(record)
                .map_err(|source| LexiconError::InvalidRecord { value, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count = entries.len();
    let index: LexiconIndex = entries.into_iter().collect();
    crate::info!("Indexed {} lexicon entries ({} placements)", count, index.len());
    Ok(index)
}

/// Load and index a lexicon file
pub fn load_index(path: &Path) -> Result<LexiconIndex, LexiconError> {
    build_index(read_records(path)?)
}

/// Index the bundled word list
pub fn builtin_index() -> Result<LexiconIndex, LexiconError> {
    build_index(parse_records(BUILTIN_WORDS)?)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
