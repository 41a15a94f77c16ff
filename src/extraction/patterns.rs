use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Two or more capitalized ASCII words separated by single spaces.
    pub static ref NOUN_PHRASE: Regex =
        Regex::new(r"[A-Z][a-z]+(?: [A-Z][a-z]+)+").expect("noun phrase pattern compiles");

    pub static ref WORD: Regex = Regex::new(r"\w+").expect("word pattern compiles");
}

/// Sentence-initial words that are capitalized without naming anything.
/// Only the first word of a match is checked against this list: other
/// capitalized lead-ins ("Which", "In") stay part of the phrase.
pub const LEADING_DETERMINERS: &[&str] = &["The", "This", "That", "These", "Those"];


/// Maximal capitalized runs, with one leading determiner stripped. A run that
/// drops below two words after stripping is skipped.
pub fn noun_phrases(text: &str) -> Vec<&str> {
    let mut phrases = Vec::new();

    for m in NOUN_PHRASE.find_iter(text) {
        let phrase = strip_leading_determiner(m.as_str());
        if phrase.split(' ').count() >= 2 {
            phrases.push(phrase);
        }
    }

    phrases
}

fn strip_leading_determiner(phrase: &str) -> &str {
    match phrase.split_once(' ') {
        Some((first, rest)) if LEADING_DETERMINERS.contains(&first) => rest,
        _ => phrase,
    }
}


pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}
