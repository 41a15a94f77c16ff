

pub mod base;
pub mod external;
pub mod factory;
pub mod fallback;
pub mod keyword;
pub mod patterns;

pub use base::{ConceptExtractor, ExtractionError};
pub use external::ExternalConceptExtractor;
pub use factory::ExtractorFactory;
pub use fallback::ExtractorWithFallback;
pub use keyword::KeywordExtractor;
