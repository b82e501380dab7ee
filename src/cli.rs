//! Command-line interface definition and the import handler.

use clap::Parser;
use tracing::debug;

use crate::error::Result;
use crate::marker;
use crate::paths;

/// Drop a wallet-import marker for the dig CLI.
///
/// The command takes no arguments: running it performs the entire procedure
/// against the invoking user's dig home.
#[derive(Parser, Debug)]
#[command(name = "dig-import")]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Execute the import against the real dig home.
///
/// Prints one line when the import starts and one line naming the marker
/// location once the mnemonic is on disk. Any environment or filesystem
/// failure propagates to the caller untouched.
pub fn execute() -> Result<()> {
    println!("Importing wallet with provided mnemonic...");

    let wallet_dir = paths::wallet_dir(marker::WALLET_NAME)?;
    debug!(path = %wallet_dir.display(), "resolved wallet directory");
    marker::write_marker(&wallet_dir)?;

    println!(
        "Created wallet marker at {}, mnemonic saved for testing purposes",
        wallet_dir.display()
    );
    Ok(())
}
