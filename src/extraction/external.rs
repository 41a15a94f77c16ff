

use serde::Deserialize;
use tracing::{debug, info};

use super::base::{ConceptExtractor, ExtractionError};
use crate::concepts::{ConceptList, Subject};
use crate::core::config::MapperConfig;


#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConceptResponse {
    Labels(Vec<String>),
    Wrapped { concepts: Vec<String> },
}


/// Extension point for a language-model backend.
///
/// No backend is wired in yet, so [`ConceptExtractor::extract`] always fails with
/// [`ExtractionError::Unimplemented`]. The prompt builder and
/// [`concepts_from_response`] are what a backend plugs into.
#[derive(Debug, Clone)]
pub struct ExternalConceptExtractor {
    provider: String,
    model: String,
}

impl ExternalConceptExtractor {
    #[must_use]
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        let provider = provider.into();
        let model = model.into();
        info!("External extractor configured (provider={}, model={})", provider, model);
        Self { provider, model }
    }

    #[must_use]
    pub fn from_config(config: &MapperConfig) -> Self {
        Self::new(config.llm_provider.clone(), config.llm_model.clone())
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }


    pub fn build_system_prompt(&self, subject: Subject) -> String {
        format!(
            r#"You label {subject} exam questions with the concepts they test.

Output a JSON array of short concept labels, most specific first:
["Concept One", "Concept Two"]

Use title case. Return at least one label and no duplicates."#
        )
    }

    pub fn build_user_prompt(&self, question: &str) -> String {
        format!("Question:\n\n{}", question.trim())
    }
}

impl ConceptExtractor for ExternalConceptExtractor {
    fn extract(&self, question: &str, subject: Subject) -> Result<ConceptList, ExtractionError> {
        debug!(
            "External extraction requested for {} ({} chars of prompt)",
            subject,
            self.build_system_prompt(subject).len() + self.build_user_prompt(question).len()
        );
        Err(ExtractionError::Unimplemented(format!(
            "{} integration is not available; use keyword extraction",
            self.provider
        )))
    }

    fn extractor_name(&self) -> &str {
        &self.provider
    }
}


/// Normalizes a backend reply into a [`ConceptList`].
///
/// Accepts a bare JSON array of strings or an object with a `concepts` array.
/// Labels are trimmed, blanks dropped, duplicates removed ignoring case.
pub fn concepts_from_response(response: &str) -> Result<ConceptList, ExtractionError> {
    let parsed: ConceptResponse = serde_json::from_str(response.trim())?;
    let labels = match parsed {
        ConceptResponse::Labels(labels) => labels,
        ConceptResponse::Wrapped { concepts } => concepts,
    };

    let concepts: ConceptList = labels
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if concepts.is_empty() {
        return Err(ExtractionError::InvalidResponse(
            "response contained no concept labels".to_string(),
        ));
    }
    Ok(concepts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_is_unimplemented() {
        let extractor = ExternalConceptExtractor::new("anthropic", "claude-3-5-sonnet");
        let err = extractor
            .extract("What is the derivative of x^2?", Subject::Math)
            .unwrap_err();
        assert!(err.is_unimplemented());
        assert_eq!(extractor.extractor_name(), "anthropic");
        assert_eq!(extractor.model_name(), "claude-3-5-sonnet");
    }

    #[test]
    fn test_from_config() {
        let mut config = MapperConfig::default();
        config.llm_provider = "openai".to_string();
        config.llm_model = "gpt-4o".to_string();
        let extractor = ExternalConceptExtractor::from_config(&config);
        assert_eq!(extractor.extractor_name(), "openai");
        assert_eq!(extractor.model_name(), "gpt-4o");
    }

    #[test]
    fn test_prompts_mention_subject_and_question() {
        let extractor = ExternalConceptExtractor::new("anthropic", "m");
        assert!(extractor.build_system_prompt(Subject::AncientHistory).contains("ancient_history"));
        assert_eq!(extractor.build_user_prompt("  Define entropy. \n"), "Question:\n\nDefine entropy.");
    }

    #[test]
    fn test_response_array() {
        let concepts = concepts_from_response(r#"["Kinematics", " kinematics ", "", "Optics"]"#).unwrap();
        assert_eq!(concepts.into_vec(), vec!["Kinematics", "Optics"]);
    }

    #[test]
    fn test_response_wrapped_object() {
        let concepts = concepts_from_response(r#"{"concepts": ["Fiscal Policy"]}"#).unwrap();
        assert_eq!(concepts.into_vec(), vec!["Fiscal Policy"]);
    }

    #[test]
    fn test_response_rejects_empty_and_garbage() {
        assert!(matches!(
            concepts_from_response("[]"),
            Err(ExtractionError::InvalidResponse(_))
        ));
        assert!(matches!(
            concepts_from_response(r#"["  "]"#),
            Err(ExtractionError::InvalidResponse(_))
        ));
        assert!(matches!(
            concepts_from_response("not json"),
            Err(ExtractionError::Json(_))
        ));
    }
}
