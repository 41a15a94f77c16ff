

pub mod batch;
pub mod concepts;
pub mod core;
pub mod extraction;
pub mod utils;

pub use utils::{capitalize, safe_truncate_ellipsis};


pub use batch::{BatchProcessor, BatchSummary, QuestionRecord};
pub use concepts::{ConceptEntry, ConceptList, ConceptTable, Subject};
pub use crate::core::config::MapperConfig;
pub use crate::core::error::{ConceptMapError, Result};
pub use extraction::{
    ConceptExtractor, ExternalConceptExtractor, ExtractionError, ExtractorFactory,
    ExtractorWithFallback, KeywordExtractor,
};


pub const DEFAULT_DATA_DIR: &str = "data";


pub const DEFAULT_OUTPUT_DIR: &str = ".";


pub const DEFAULT_LLM_PROVIDER: &str = "anthropic";


pub const DEFAULT_LLM_MODEL: &str = "claude-3-5-sonnet";


pub const FALLBACK_CONCEPT: &str = "General";


pub const CONCEPT_SEPARATOR: &str = "; ";
