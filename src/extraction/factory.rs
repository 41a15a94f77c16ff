

use std::sync::Arc;

use super::base::ConceptExtractor;
use super::external::ExternalConceptExtractor;
use super::fallback::ExtractorWithFallback;
use super::keyword::KeywordExtractor;
use crate::concepts::ConceptTable;
use crate::core::config::MapperConfig;


pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Keyword extraction, or the external extractor backed by keyword
    /// extraction when `use_external` is set.
    #[must_use]
    pub fn create(
        use_external: bool,
        config: &MapperConfig,
        table: Arc<ConceptTable>,
    ) -> Box<dyn ConceptExtractor> {
        let keyword = KeywordExtractor::new(table);
        if use_external {
            Box::new(ExtractorWithFallback::new(
                Box::new(ExternalConceptExtractor::from_config(config)),
                keyword,
            ))
        } else {
            Box::new(keyword)
        }
    }
}
