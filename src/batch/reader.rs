

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::concepts::Subject;
use crate::core::config::MapperConfig;
use crate::core::error::{ConceptMapError, Result};

const NUMBER_COLUMNS: &[&str] = &["Question Number", "question_number"];
const TEXT_COLUMNS: &[&str] = &["Question", "question"];


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub number: String,
    /// Raw question text; trimmed only when written out.
    pub text: String,
}

impl QuestionRecord {
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }
}


pub fn read_subject_csv(config: &MapperConfig, subject: Subject) -> Result<Vec<QuestionRecord>> {
    let path = config.input_path(subject);
    if !path.is_file() {
        return Err(ConceptMapError::InputNotFound(path));
    }
    read_questions_from_path(&path)
}

fn read_questions_from_path(path: &Path) -> Result<Vec<QuestionRecord>> {
    debug!("Reading questions from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_questions(file)
}


/// Reads question rows from CSV with a header row.
///
/// Either spelling of each column is accepted and the first non-empty value
/// wins. A row without question text is an error.
pub fn read_questions<R: Read>(input: R) -> Result<Vec<QuestionRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();

    let number_idx = column_indices(&headers, NUMBER_COLUMNS);
    let text_idx = column_indices(&headers, TEXT_COLUMNS);
    if text_idx.is_empty() {
        warn!("No question column in header: {:?}", headers);
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        let row_number = idx + 1;

        let get_field = |indices: &[usize], raw: bool| -> Option<String> {
            indices
                .iter()
                .filter_map(|&i| row.get(i))
                .find(|s| !s.trim().is_empty())
                .map(|s| if raw { s.to_string() } else { s.trim().to_string() })
        };

        let text = get_field(&text_idx, true)
            .ok_or_else(|| ConceptMapError::malformed_row(row_number, "missing question text"))?;
        let number = get_field(&number_idx, false).unwrap_or_else(|| {
            warn!("Row {} has no question number", row_number);
            String::new()
        });

        records.push(QuestionRecord { number, text });
    }

    Ok(records)
}

fn column_indices(headers: &csv::StringRecord, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| headers.iter().position(|h| h.trim() == *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_title_case_headers() {
        let data = "Question Number,Question\n1,What is GDP?\n2,\"Define elasticity, with examples\"\n";
        let records = read_questions(data.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                QuestionRecord::new("1", "What is GDP?"),
                QuestionRecord::new("2", "Define elasticity, with examples"),
            ]
        );
    }

    #[test]
    fn test_read_snake_case_headers() {
        let data = "question_number,question\nQ7,  Define entropy  \n";
        let records = read_questions(data.as_bytes()).unwrap();
        assert_eq!(records[0].number, "Q7");
        assert_eq!(records[0].text, "  Define entropy  ");
    }

    #[test]
    fn test_first_non_empty_spelling_wins() {
        let data = "Question Number,question_number,Question,question\n,12,,Explain optics\n";
        let records = read_questions(data.as_bytes()).unwrap();
        assert_eq!(records[0], QuestionRecord::new("12", "Explain optics"));
    }

    #[test]
    fn test_missing_text_is_malformed() {
        let data = "Question Number,Question\n1,\n";
        let err = read_questions(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ConceptMapError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_missing_number_is_empty() {
        let data = "Question\nWhat is a vector?\n";
        let records = read_questions(data.as_bytes()).unwrap();
        assert_eq!(records[0].number, "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = MapperConfig::new(dir.path(), dir.path());
        let err = read_subject_csv(&config, Subject::Math).unwrap_err();
        assert!(matches!(err, ConceptMapError::InputNotFound(_)));
    }
}
