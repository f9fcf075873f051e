// Lexicon module - entry model, bucketed index and JSON loading

mod entry;
mod index;
mod loader;

pub use entry::{
    uppercase_letter, Entry, EntryError, Language, LexiconRecord, PartOfSpeech, Position, Subject,
};
pub use index::{BucketKey, LexiconIndex, LookupError};
pub use loader::{
    build_index, builtin_index, load_index, parse_records, read_records, LexiconError,
    BUILTIN_WORDS,
};
