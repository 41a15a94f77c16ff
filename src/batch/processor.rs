

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::reader::{QuestionRecord, read_subject_csv};
use crate::concepts::{ConceptTable, Subject};
use crate::core::config::MapperConfig;
use crate::core::error::Result;
use crate::extraction::{ConceptExtractor, ExtractorFactory};

pub const OUTPUT_HEADER: [&str; 3] = ["Question Number", "Question", "Concepts"];


#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub subject: Subject,
    pub questions: usize,
    pub fallbacks: usize,
    pub output_path: PathBuf,
}


pub struct BatchProcessor<E: ConceptExtractor = Box<dyn ConceptExtractor>> {
    config: MapperConfig,
    extractor: E,
}

impl BatchProcessor {
    /// Processor using the extractor selected by `use_external`.
    pub fn from_flag(config: MapperConfig, table: Arc<ConceptTable>, use_external: bool) -> Self {
        let extractor = ExtractorFactory::create(use_external, &config, table);
        Self::new(config, extractor)
    }
}

impl<E: ConceptExtractor> BatchProcessor<E> {
    pub fn new(config: MapperConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }


    pub fn process(&self, subject: Subject) -> Result<BatchSummary> {
        let records = read_subject_csv(&self.config, subject)?;
        println!("Loaded {} questions for subject: {}", records.len(), subject);

        let output_path = self.config.output_path(subject);
        let file = std::fs::File::create(&output_path)?;
        let questions = map_records(&records, subject, &self.extractor, file)?;

        println!(
            "Concept mapping complete. Results written to {}",
            output_path.display()
        );
        info!(
            "Batch finished: subject={}, questions={}, extractor={}",
            subject,
            questions,
            self.extractor.extractor_name()
        );

        Ok(BatchSummary {
            subject,
            questions,
            fallbacks: self.extractor.fallbacks_used(),
            output_path,
        })
    }
}


/// Writes the header and one row per record, in input order, and returns the
/// number of rows written. The writer is flushed before returning.
pub fn map_records<E, W>(
    records: &[QuestionRecord],
    subject: Subject,
    extractor: &E,
    output: W,
) -> Result<usize>
where
    E: ConceptExtractor + ?Sized,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);
    writer.write_record(OUTPUT_HEADER)?;

    for record in records {
        let concepts = extractor.extract(&record.text, subject)?;
        let joined = concepts.joined();
        println!("Question {}: {}", record.number, joined);
        debug!("{} concepts for question {}", concepts.len(), record.number);

        writer.write_record([record.number.as_str(), record.text.trim(), joined.as_str()])?;
    }

    writer.flush()?;
    Ok(records.len())
}


/// Loads, maps and writes one subject's questions with the built-in table.
pub fn process_questions(
    config: MapperConfig,
    subject: Subject,
    use_external: bool,
) -> Result<BatchSummary> {
    let table = Arc::new(ConceptTable::builtin());
    BatchProcessor::from_flag(config, table, use_external).process(subject)
}
