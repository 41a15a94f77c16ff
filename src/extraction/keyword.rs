

use std::sync::Arc;

use tracing::debug;

use super::base::{ConceptExtractor, ExtractionError};
use super::patterns::{noun_phrases, words};
use crate::concepts::{ConceptList, ConceptTable, Subject};
use crate::{FALLBACK_CONCEPT, capitalize, safe_truncate_ellipsis};

/// Fallback words must be longer than this many chars.
const MIN_FALLBACK_WORD_CHARS: usize = 6;
const MAX_FALLBACK_CONCEPTS: usize = 2;


/// Deterministic extractor: capitalized noun phrases, then keyword hits from the
/// subject's table, then the longest words of the question as a last resort.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    table: Arc<ConceptTable>,
}

impl KeywordExtractor {
    #[must_use]
    pub fn new(table: Arc<ConceptTable>) -> Self {
        Self { table }
    }


    pub fn concepts_for(&self, question: &str, subject: Subject) -> ConceptList {
        let mut concepts = ConceptList::new();

        for phrase in noun_phrases(question) {
            concepts.push(phrase);
        }

        let question_lower = question.to_lowercase();
        for entry in self.table.entries(subject) {
            if question_lower.contains(entry.keyword.as_str()) {
                concepts.push(entry.label.as_str());
            }
        }

        if concepts.is_empty() {
            concepts = Self::longest_words(&question_lower);
        }

        debug!(
            "Keyword extraction for '{}' ({}): {}",
            safe_truncate_ellipsis(question, 40),
            subject,
            concepts.joined()
        );
        concepts
    }

    fn longest_words(question_lower: &str) -> ConceptList {
        let mut candidates: Vec<&str> = Vec::new();
        for word in words(question_lower) {
            if word.chars().count() > MIN_FALLBACK_WORD_CHARS && !candidates.contains(&word) {
                candidates.push(word);
            }
        }

        // stable: equal lengths keep first-occurrence order
        candidates.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let concepts: ConceptList = candidates
            .into_iter()
            .take(MAX_FALLBACK_CONCEPTS)
            .map(capitalize)
            .collect();

        if concepts.is_empty() {
            std::iter::once(FALLBACK_CONCEPT).collect()
        } else {
            concepts
        }
    }
}

impl ConceptExtractor for KeywordExtractor {
    fn extract(&self, question: &str, subject: Subject) -> Result<ConceptList, ExtractionError> {
        Ok(self.concepts_for(question, subject))
    }

    fn extractor_name(&self) -> &str {
        "keyword"
    }
}
