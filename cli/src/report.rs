//! Rendering of classification results

use algohint_classifier::{Classification, PatternLabel};
use serde::Serialize;

/// One classified description, as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub problem: String,
    pub pattern: PatternLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<Vec<String>>,
}

impl Entry {
    pub fn new(problem: impl Into<String>, classification: Classification, explain: bool) -> Self {
        let (rule, signals) = if explain {
            (
                Some(classification.rule),
                Some(classification.matched_signals),
            )
        } else {
            (None, None)
        };
        Self {
            problem: problem.into(),
            pattern: classification.label,
            rule,
            signals,
        }
    }
}

/// `Problem:` / `Suggested Pattern:` blocks separated by blank lines
pub fn render_text(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "Problem: {}\nSuggested Pattern: {}\n",
            entry.problem, entry.pattern
        ));
        if let Some(rule) = entry.rule {
            let signals = entry.signals.as_deref().unwrap_or_default().join(", ");
            out.push_str(&format!("Matched Rule: {rule} [{signals}]\n"));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
