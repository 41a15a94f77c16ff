

use clap::Parser;
use concept_mapper::batch::process_questions;
use concept_mapper::{MapperConfig, Subject};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "concept-mapper")]
#[command(about = "Question-to-Concept Mapping (LLM-ready)")]
struct Cli {
    /// Subject whose questions are mapped
    #[arg(long, value_enum)]
    subject: Subject,

    /// Toggle to use LLM for extraction
    #[arg(long)]
    use_llm: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,concept_mapper=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = MapperConfig::from_env()?;
    process_questions(config, cli.subject, cli.use_llm)?;
    Ok(())
}
