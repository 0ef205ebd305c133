//! Command-line front end for `algohint-classifier`

pub mod classify_cmd;
pub mod config;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use classify_cmd::{ClassifyArgs, LabelsArgs, run_classify, run_demo, run_labels};
use config::AlgohintConfig;

/// Suggest an algorithmic pattern for problem descriptions
#[derive(Debug, Parser)]
#[command(name = "algohint", version)]
pub struct Cli {
    /// Config file (defaults to $ALGOHINT_CONFIG, then ~/.config/algohint/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Runs the demo when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify the built-in example problems
    Demo,
    /// Classify descriptions given as arguments or read from a file
    Classify(ClassifyArgs),
    /// List every pattern label in rule order
    Labels(LabelsArgs),
}

impl Cli {
    /// Run the selected command and return what should be printed
    pub fn run(self, config: &AlgohintConfig) -> Result<String> {
        match self.command.unwrap_or(Command::Demo) {
            Command::Demo => Ok(run_demo()),
            Command::Classify(args) => run_classify(args, config),
            Command::Labels(args) => run_labels(args, config),
        }
    }
}
