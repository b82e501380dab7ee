use anyhow::Result;
use clap::Parser;

use dig_import::cli::{self, Cli};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();
    cli::execute()?;
    Ok(())
}
