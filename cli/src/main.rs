use std::process::ExitCode;

use algohint_cli::Cli;
use algohint_cli::config::AlgohintConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = AlgohintConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging.filter);

    tracing::info!(
        version = algohint_classifier::VERSION,
        format = ?config.output.format,
        "algohint starting"
    );

    cli.run(&config)
}

/// `RUST_LOG` wins over the configured filter; stderr keeps stdout clean.
fn init_logging(configured: &str) {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(configured))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
