// Tests for the entry model
// Test cases:
// - Universal subject is always attached
// - Equality ignores subjects, prefix and position
// - Records fill in defaults, adjectives get a language-dependent position
// - Empty text and non-letter text are rejected
// - Enum parsing is case-insensitive and accepts short position aliases

use super::*;
use std::collections::HashSet;

#[test]
fn test_universal_subject_always_present() {
    let entry = Entry::new("Architecture", Language::Fr, [Subject::Asi]).unwrap();

    assert!(entry.has_subject(Subject::All));
    assert!(entry.has_subject(Subject::Asi));
    assert_eq!(entry.subjects().count(), 2);
}

#[test]
fn test_universal_subject_not_duplicated() {
    let entry = Entry::new("Plan", Language::En, [Subject::All, Subject::Pld]).unwrap();

    assert_eq!(entry.subjects().collect::<Vec<_>>(), vec![Subject::All, Subject::Pld]);
}

#[test]
fn test_equality_uses_text_language_and_part_of_speech() {
    let a = Entry::new("Interface", Language::Fr, [Subject::Asi])
        .unwrap()
        .with_linking_prefix("d'")
        .with_position(Position::Start);
    let b = Entry::new("Interface", Language::Fr, [Subject::Pld])
        .unwrap()
        .with_position(Position::End);
    let english = Entry::new("Interface", Language::En, [Subject::Asi]).unwrap();
    let adjective = Entry::new("Interface", Language::Fr, [Subject::Asi])
        .unwrap()
        .with_part_of_speech(PartOfSpeech::Adjective);

    assert_eq!(a, b);
    assert_ne!(a, english);
    assert_ne!(a, adjective);

    let set: HashSet<Entry> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_first_letter_is_uppercased() {
    let entry = Entry::new("économie", Language::Fr, [Subject::Asi]).unwrap();
    assert_eq!(entry.first_letter(), 'É');
}

#[test]
fn test_empty_text_rejected() {
    assert_eq!(Entry::new("", Language::En, [Subject::Asi]).unwrap_err(), EntryError::EmptyText);
    assert_eq!(Entry::new("   ", Language::En, [Subject::Asi]).unwrap_err(), EntryError::EmptyText);
}

#[test]
fn test_non_letter_text_rejected() {
    let result = Entry::new("4chan", Language::En, [Subject::Asi]);
    assert!(matches!(result, Err(EntryError::NoLeadingLetter(_))));
}

#[test]
fn test_record_defaults() {
    let json = r#"{"value":"Business","lang":"en","subjects":["ASI","PLD"]}"#;
    let record: LexiconRecord = serde_json::from_str(json).unwrap();
    let entry = Entry::from_record(record).unwrap();

    assert_eq!(entry.text(), "Business");
    assert_eq!(entry.language(), Language::En);
    assert_eq!(entry.linking_prefix(), "");
    assert_eq!(entry.part_of_speech(), PartOfSpeech::Noun);
    assert_eq!(entry.preferred_position(), Position::Anywhere);
    assert!(entry.has_subject(Subject::All));
    assert!(entry.has_subject(Subject::Pld));
}

#[test]
fn test_record_full_shape() {
    let json = r#"{
        "value": "Relation",
        "lang": "fr",
        "subjects": ["ASI"],
        "preposition": "de la ",
        "type": "noun",
        "position": "MID"
    }"#;
    let record: LexiconRecord = serde_json::from_str(json).unwrap();
    let entry = Entry::from_record(record).unwrap();

    assert_eq!(entry.linking_prefix(), "de la ");
    assert_eq!(entry.preferred_position(), Position::Middle);
}

#[test]
fn test_adjective_default_position_depends_on_language() {
    let french = LexiconRecord {
        value: "Logique".to_string(),
        lang: Language::Fr,
        subjects: vec![Subject::Asi],
        preposition: String::new(),
        part_of_speech: PartOfSpeech::Adjective,
        position: None,
    };
    let english = LexiconRecord {
        value: "Logic".to_string(),
        lang: Language::En,
        ..french.clone()
    };

    assert_eq!(Entry::from_record(french).unwrap().preferred_position(), Position::End);
    assert_eq!(Entry::from_record(english).unwrap().preferred_position(), Position::Start);
}

#[test]
fn test_explicit_position_beats_adjective_default() {
    let record = LexiconRecord {
        value: "Native".to_string(),
        lang: Language::En,
        subjects: vec![Subject::Bullshit],
        preposition: String::new(),
        part_of_speech: PartOfSpeech::Adjective,
        position: Some(Position::Anywhere),
    };

    assert_eq!(Entry::from_record(record).unwrap().preferred_position(), Position::Anywhere);
}

#[test]
fn test_unknown_subject_in_record_fails_to_parse() {
    let json = r#"{"value":"Business","lang":"en","subjects":["SALES"]}"#;
    assert!(serde_json::from_str::<LexiconRecord>(json).is_err());
}

#[test]
fn test_enum_parsing_is_case_insensitive() {
    assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
    assert_eq!("asi".parse::<Subject>().unwrap(), Subject::Asi);
    assert_eq!("Bullshit".parse::<Subject>().unwrap(), Subject::Bullshit);
    assert_eq!("mid".parse::<Position>().unwrap(), Position::Middle);
    assert_eq!("any".parse::<Position>().unwrap(), Position::Anywhere);
    assert!("de".parse::<Language>().is_err());
}

#[test]
fn test_display_matches_wire_names() {
    assert_eq!(Language::Fr.to_string(), "fr");
    assert_eq!(Subject::Pld.to_string(), "PLD");
    assert_eq!(Position::Anywhere.to_string(), "ANYWHERE");
}
