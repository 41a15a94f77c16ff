

pub mod processor;
pub mod reader;

pub use processor::{BatchProcessor, BatchSummary, OUTPUT_HEADER, map_records, process_questions};
pub use reader::{QuestionRecord, read_questions, read_subject_csv};
