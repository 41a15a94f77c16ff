

use thiserror::Error;

use crate::concepts::{ConceptList, Subject};


#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Extractor not implemented: {0}")]
    Unimplemented(String),

    #[error("Invalid extractor response: {0}")]
    InvalidResponse(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl ExtractionError {
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented(_))
    }
}


/// Derives concept labels for one question.
///
/// Implementations return a non-empty list, ordered, with no two labels equal
/// ignoring case, so that callers can swap one extractor for another.
pub trait ConceptExtractor {
    fn extract(&self, question: &str, subject: Subject) -> Result<ConceptList, ExtractionError>;

    fn extractor_name(&self) -> &str;

    /// Questions this extractor handed to a fallback so far.
    fn fallbacks_used(&self) -> usize {
        0
    }
}


impl<E: ConceptExtractor + ?Sized> ConceptExtractor for Box<E> {
    fn extract(&self, question: &str, subject: Subject) -> Result<ConceptList, ExtractionError> {
        (**self).extract(question, subject)
    }

    fn extractor_name(&self) -> &str {
        (**self).extractor_name()
    }

    fn fallbacks_used(&self) -> usize {
        (**self).fallbacks_used()
    }
}
