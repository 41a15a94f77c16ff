

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::subject::Subject;


/// Lowercase trigger substring and the label it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub keyword: String,
    pub label: String,
}


/// Per-subject keyword tables. Iteration follows insertion order, which decides
/// which label wins when several keywords hit the same question.
#[derive(Debug, Clone, Default)]
pub struct ConceptTable {
    partitions: HashMap<Subject, Vec<ConceptEntry>>,
}

const ANCIENT_HISTORY: &[(&str, &str)] = &[
    ("indus", "Indus Valley Civilization"),
    ("harappan", "Harappan Civilization"),
    ("chalcolithic", "Chalcolithic Cultures"),
    ("mauryan", "Mauryan Empire"),
    ("arthashastra", "Kautilya's Arthashastra"),
    ("ashokan", "Ashokan Edicts"),
    ("burzahom", "Rock-cut Shrines"),
    ("chandraketugarh", "Terracotta Art"),
    ("ganeshwar", "Copper Artefacts"),
    ("gupta", "Gupta Period Literature"),
    ("buddhism", "Buddhist Institutions"),
    ("jainism", "Jain Institutions"),
    ("revenue", "Revenue and Land Systems"),
    ("tank", "Village Tank Systems"),
    ("brahmins", "Brahmadeya Institutions"),
    ("ghatikas", "Temple-based Education"),
    ("surgical", "History of Indian Science"),
    ("transplant", "History of Indian Science"),
    ("sine", "History of Indian Mathematics"),
    ("cyclic quadrilateral", "History of Indian Mathematics"),
];

const MATH: &[(&str, &str)] = &[
    ("derivative", "Calculus"),
    ("integral", "Calculus"),
    ("matrix", "Linear Algebra"),
    ("vector", "Linear Algebra"),
    ("permutation", "Combinatorics"),
    ("combination", "Combinatorics"),
    ("probability", "Probability Theory"),
    ("logarithm", "Logarithms"),
    ("quadratic", "Quadratic Equations"),
    ("series", "Sequences and Series"),
    ("differential", "Differential Equations"),
    ("complex", "Complex Numbers"),
    ("trigonometry", "Trigonometry"),
    ("sine", "Trigonometry"),
    ("cosine", "Trigonometry"),
    ("equation", "Equation Solving"),
];

const PHYSICS: &[(&str, &str)] = &[
    ("force", "Classical Mechanics"),
    ("motion", "Kinematics"),
    ("velocity", "Kinematics"),
    ("acceleration", "Kinematics"),
    ("momentum", "Dynamics"),
    ("energy", "Work and Energy"),
    ("thermodynamics", "Thermodynamics"),
    ("entropy", "Thermodynamics"),
    ("optics", "Optics"),
    ("wave", "Wave Phenomena"),
    ("electric", "Electromagnetism"),
    ("magnetic", "Magnetism"),
    ("quantum", "Quantum Mechanics"),
    ("photoelectric", "Modern Physics"),
];

const ECONOMICS: &[(&str, &str)] = &[
    ("gdp", "Macroeconomic Indicators"),
    ("cpi", "Inflation Measures"),
    ("inflation", "Inflation Measures"),
    ("demand", "Aggregate Demand"),
    ("supply", "Aggregate Supply"),
    ("fiscal", "Fiscal Policy"),
    ("monetary", "Monetary Policy"),
    ("elasticity", "Price Elasticity"),
    ("opportunity cost", "Opportunity Cost"),
    ("market structure", "Market Structures"),
    ("perfect competition", "Market Structures"),
    ("oligopoly", "Market Structures"),
];

impl ConceptTable {
    pub fn new() -> Self {
        Self::default()
    }


    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (subject, entries) in [
            (Subject::AncientHistory, ANCIENT_HISTORY),
            (Subject::Math, MATH),
            (Subject::Physics, PHYSICS),
            (Subject::Economics, ECONOMICS),
        ] {
            for (keyword, label) in entries {
                table.insert(subject, *keyword, *label);
            }
        }
        debug!("Built-in concept table loaded: {} entries", table.len());
        table
    }

    /// Appends an entry; the keyword is stored lowercased.
    pub fn insert(&mut self, subject: Subject, keyword: impl AsRef<str>, label: impl Into<String>) {
        self.partitions.entry(subject).or_default().push(ConceptEntry {
            keyword: keyword.as_ref().to_lowercase(),
            label: label.into(),
        });
    }

    pub fn lookup(&self, subject: Subject, keyword: &str) -> Option<&str> {
        let keyword = keyword.to_lowercase();
        self.entries(subject)
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.label.as_str())
    }

    pub fn entries(&self, subject: Subject) -> &[ConceptEntry] {
        self.partitions.get(&subject).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn subjects(&self) -> impl Iterator<Item = Subject> + '_ {
        self.partitions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
