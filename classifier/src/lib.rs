//! Algorithmic pattern hints for problem descriptions
//!
//! Maps free text such as "Merge k sorted linked lists" to one suggested
//! solution pattern ("Heap / Priority Queue") by running an ordered chain of
//! keyword rules. The first rule that answers wins; when nothing answers the
//! result is [`PatternLabel::BruteForce`].
//!
//! ```rust
//! use algohint_classifier::{PatternLabel, classify};
//!
//! assert_eq!(classify("Detect cycle in a graph"), PatternLabel::UnionFindOrTraversal);
//! assert_eq!(classify("Calculate account balance."), PatternLabel::BruteForce);
//! ```
//!
//! Classification is total and pure: every string, including the empty one,
//! yields exactly one label and nothing is logged or stored.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod errors;
pub mod label;
pub mod matcher;
pub mod rules;

pub use errors::{ClassifierError, Result};
pub use label::PatternLabel;
pub use matcher::{Keyword, KeywordSet, MatchMode, contains_substring, contains_word};
pub use rules::{Classification, Outcome, Rule, RuleChain};

/// Classifier version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Suggest a pattern for one description using the standard rule chain
pub fn classify(description: &str) -> PatternLabel {
    RuleChain::standard().classify(description)
}

/// Like [`classify`], but also reports which rule decided and why
pub fn explain(description: &str) -> Classification {
    RuleChain::standard().explain(description)
}

/// Classify each description, preserving order
pub fn classify_batch<I, S>(descriptions: I) -> Vec<PatternLabel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let chain = RuleChain::standard();
    descriptions
        .into_iter()
        .map(|d| chain.classify(d.as_ref()))
        .collect()
}
