//! Classification commands
//!
//! - `algohint demo` - classify the built-in example problems
//! - `algohint classify` - classify descriptions from arguments, a file, or stdin
//! - `algohint labels` - list every pattern label

use std::io::BufRead;
use std::path::{Path, PathBuf};

use algohint_classifier::{PatternLabel, explain};
use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::{AlgohintConfig, OutputFormat};
use crate::report::{Entry, render_json, render_text};

/// Problems classified by `algohint demo`
pub const DEMO_PROBLEMS: [&str; 6] = [
    "Find the longest substring without repeating characters in a string.",
    "Given a graph, detect if there is a cycle.",
    "Merge k sorted linked lists and return it as one sorted list.",
    "Count the number of ways to climb n stairs.",
    "Generate all permutations of an array of integers.",
    "Given a linked list, remove the nth node from the end.",
];

#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Problem descriptions to classify
    #[arg(value_name = "DESCRIPTION")]
    pub descriptions: Vec<String>,

    /// Read one description per line from a file (`-` for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the deciding rule and the keywords that matched
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Parser)]
pub struct LabelsArgs {
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Classify the demo problems and render them as text
pub fn run_demo() -> String {
    let entries = classify_all(DEMO_PROBLEMS.map(String::from), false);
    render_text(&entries)
}

pub fn run_classify(args: ClassifyArgs, config: &AlgohintConfig) -> Result<String> {
    let mut descriptions = args.descriptions;
    if let Some(path) = &args.file {
        descriptions.extend(read_descriptions(path)?);
    }
    if descriptions.is_empty() {
        bail!("no descriptions given; pass them as arguments or use --file");
    }

    let show_rules = args.explain || config.output.explain;
    let entries = classify_all(descriptions, show_rules);

    render(&entries, args.format.unwrap_or(config.output.format))
}

pub fn run_labels(args: LabelsArgs, config: &AlgohintConfig) -> Result<String> {
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => Ok(PatternLabel::ALL
            .iter()
            .map(|label| format!("{label}\n"))
            .collect()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&PatternLabel::ALL).context("failed to encode labels")
        }
    }
}

fn classify_all(descriptions: impl IntoIterator<Item = String>, show_rules: bool) -> Vec<Entry> {
    descriptions
        .into_iter()
        .map(|problem| {
            let classification = explain(&problem);
            tracing::debug!(
                rule = classification.rule,
                label = %classification.label,
                "classified description"
            );
            Entry::new(problem, classification, show_rules)
        })
        .collect()
}

fn render(entries: &[Entry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries)),
        OutputFormat::Json => render_json(entries).context("failed to encode results"),
    }
}

fn read_descriptions(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        let stdin = std::io::stdin();
        return stdin
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("failed to read descriptions from stdin");
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptions from {}", path.display()))?;
    tracing::info!(path = %path.display(), "read descriptions");
    Ok(contents.lines().map(str::to_string).collect())
}
