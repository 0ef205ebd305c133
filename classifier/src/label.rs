//! The closed set of suggested patterns

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassifierError;

/// Algorithmic pattern suggested for a problem description
///
/// Serialized and displayed as the exact label text, e.g. `"Sliding Window"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    /// Tree/graph problem mentioning connectivity or cycles
    #[serde(rename = "Union-Find or DFS/BFS")]
    UnionFindOrTraversal,
    /// Any other tree/graph problem
    #[serde(rename = "DFS/BFS")]
    Traversal,
    #[serde(rename = "Heap / Priority Queue")]
    Heap,
    /// Linked-list problems
    #[serde(rename = "Two Pointers (fast/slow)")]
    FastSlowPointers,
    #[serde(rename = "Two Pointers")]
    TwoPointers,
    #[serde(rename = "Sliding Window")]
    SlidingWindow,
    #[serde(rename = "HashMap / HashSet")]
    HashLookup,
    #[serde(rename = "Greedy")]
    Greedy,
    #[serde(rename = "Dynamic Programming")]
    DynamicProgramming,
    #[serde(rename = "Backtracking (DFS)")]
    Backtracking,
    /// Nothing in the rule chain matched
    #[serde(rename = "Brute Force / Further Analysis Needed")]
    BruteForce,
}

impl PatternLabel {
    /// Every label, in the order the standard rule chain can first produce them
    pub const ALL: [PatternLabel; 11] = [
        Self::UnionFindOrTraversal,
        Self::Traversal,
        Self::Heap,
        Self::FastSlowPointers,
        Self::TwoPointers,
        Self::SlidingWindow,
        Self::HashLookup,
        Self::Greedy,
        Self::DynamicProgramming,
        Self::Backtracking,
        Self::BruteForce,
    ];

    /// Label text, verbatim
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnionFindOrTraversal => "Union-Find or DFS/BFS",
            Self::Traversal => "DFS/BFS",
            Self::Heap => "Heap / Priority Queue",
            Self::FastSlowPointers => "Two Pointers (fast/slow)",
            Self::TwoPointers => "Two Pointers",
            Self::SlidingWindow => "Sliding Window",
            Self::HashLookup => "HashMap / HashSet",
            Self::Greedy => "Greedy",
            Self::DynamicProgramming => "Dynamic Programming",
            Self::Backtracking => "Backtracking (DFS)",
            Self::BruteForce => "Brute Force / Further Analysis Needed",
        }
    }

    /// Whether this is the fallback label
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::BruteForce)
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternLabel {
    type Err = ClassifierError;

    /// Parses the label text, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClassifierError::UnknownLabel(s.to_string()))
    }
}
