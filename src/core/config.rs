

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::concepts::Subject;
use crate::core::error::{ConceptMapError, Result};
use crate::{DEFAULT_DATA_DIR, DEFAULT_LLM_MODEL, DEFAULT_LLM_PROVIDER, DEFAULT_OUTPUT_DIR};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Directory holding `<subject>.csv` question files.
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,

    pub llm_provider: String,
    pub llm_model: String,
}

impl MapperConfig {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            llm_provider: DEFAULT_LLM_PROVIDER.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
        }
    }

    
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `CONCEPT_MAPPER_*` values supplied by `lookup`.
    /// A variable that is set but blank is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> Result<Option<String>> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(ConceptMapError::Config(format!("{key} is set but empty")))
                }
                other => Ok(other),
            }
        };

        let mut config = Self::default();

        if let Some(dir) = get("CONCEPT_MAPPER_DATA_DIR")? {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("CONCEPT_MAPPER_OUTPUT_DIR")? {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(provider) = get("CONCEPT_MAPPER_LLM_PROVIDER")? {
            config.llm_provider = provider;
        }
        if let Some(model) = get("CONCEPT_MAPPER_LLM_MODEL")? {
            config.llm_model = model;
        }

        Ok(config)
    }

    pub fn input_path(&self, subject: Subject) -> PathBuf {
        self.data_dir.join(format!("{subject}.csv"))
    }

    pub fn output_path(&self, subject: Subject) -> PathBuf {
        self.output_dir.join(format!("output_concepts_{subject}.csv"))
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = MapperConfig::default();
        assert_eq!(config.input_path(Subject::Math), PathBuf::from("data/math.csv"));
        assert_eq!(
            config.output_path(Subject::AncientHistory),
            PathBuf::from("./output_concepts_ancient_history.csv")
        );
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = MapperConfig::from_lookup(|key| match key {
            "CONCEPT_MAPPER_DATA_DIR" => Some("/srv/questions".to_string()),
            "CONCEPT_MAPPER_LLM_MODEL" => Some("gpt-4o".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.input_path(Subject::Math), PathBuf::from("/srv/questions/math.csv"));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.llm_provider, DEFAULT_LLM_PROVIDER);
        assert_eq!(config.llm_model, "gpt-4o");
    }

    #[test]
    fn test_from_lookup_rejects_blank_dir() {
        let err = MapperConfig::from_lookup(|key| {
            (key == "CONCEPT_MAPPER_OUTPUT_DIR").then(|| "  ".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConceptMapError::Config(ref msg) if msg.contains("CONCEPT_MAPPER_OUTPUT_DIR")));
    }

    #[test]
    fn test_custom_dirs() {
        let config = MapperConfig::new("/tmp/in", "/tmp/out");
        assert_eq!(config.input_path(Subject::Physics), PathBuf::from("/tmp/in/physics.csv"));
        assert_eq!(
            config.output_path(Subject::Economics),
            PathBuf::from("/tmp/out/output_concepts_economics.csv")
        );
        assert_eq!(config.llm_provider, DEFAULT_LLM_PROVIDER);
    }
}
