

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{info, warn};

use super::base::{ConceptExtractor, ExtractionError};
use super::keyword::KeywordExtractor;
use crate::concepts::{ConceptList, Subject};


/// Tries the primary extractor and drops to keyword extraction when the primary
/// reports [`ExtractionError::Unimplemented`]. Any other error is returned.
pub struct ExtractorWithFallback {
    primary: Box<dyn ConceptExtractor>,
    fallback: KeywordExtractor,
    fallback_count: AtomicUsize,
}

impl ExtractorWithFallback {
    pub fn new(primary: Box<dyn ConceptExtractor>, fallback: KeywordExtractor) -> Self {
        info!(
            "ExtractorWithFallback initialized: primary={}, fallback={}",
            primary.extractor_name(),
            fallback.extractor_name()
        );
        Self {
            primary,
            fallback,
            fallback_count: AtomicUsize::new(0),
        }
    }


    pub fn fallback_count(&self) -> usize {
        self.fallback_count.load(Ordering::SeqCst)
    }
}

impl ConceptExtractor for ExtractorWithFallback {
    fn extract(&self, question: &str, subject: Subject) -> Result<ConceptList, ExtractionError> {
        match self.primary.extract(question, subject) {
            Ok(concepts) => Ok(concepts),
            Err(e) if e.is_unimplemented() => {
                self.fallback_count.fetch_add(1, Ordering::SeqCst);
                info!("LLM call not implemented, falling back to keyword extraction.");
                self.fallback.extract(question, subject)
            }
            Err(e) => {
                warn!("Primary extractor {} failed: {}", self.primary.extractor_name(), e);
                Err(e)
            }
        }
    }

    fn extractor_name(&self) -> &str {
        self.primary.extractor_name()
    }

    fn fallbacks_used(&self) -> usize {
        self.fallback_count()
    }
}
