

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::CONCEPT_SEPARATOR;


/// Ordered concept labels, unique under case-insensitive comparison.
/// The first spelling of a label wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptList {
    labels: Vec<String>,
    seen: HashSet<String>,
}

impl ConceptList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an equal label (ignoring case) is already present.
    pub fn push(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.seen.insert(label.to_lowercase()) {
            self.labels.push(label);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(&label.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }

    pub fn joined(&self) -> String {
        self.labels.join(CONCEPT_SEPARATOR)
    }
}

impl<S: Into<String>> FromIterator<S> for ConceptList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for label in iter {
            list.push(label);
        }
        list
    }
}

impl Serialize for ConceptList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels.serialize(serializer)
    }
}
