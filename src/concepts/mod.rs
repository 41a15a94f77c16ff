

pub mod list;
pub mod subject;
pub mod table;

pub use list::ConceptList;
pub use subject::Subject;
pub use table::{ConceptEntry, ConceptTable};
