// Acronym module - letter-by-letter resolution against the lexicon

mod generator;
mod resolver;

pub use generator::AcronymGenerator;
pub use resolver::{
    position_order, render, resolve, subject_order, Acronym, AcronymPart, ResolveError,
    SELF_ACRONYM, SELF_ACRONYM_PHRASE,
};
