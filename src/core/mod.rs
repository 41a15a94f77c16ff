

pub mod config;
pub mod error;

pub use config::MapperConfig;
pub use error::{ConceptMapError, Result};
