//! Path layout for the dig home directory.
//!
//! Everything dig persists lives under `~/.dig/`:
//! - `~/.dig/wallets/` - one subdirectory per wallet
//! - `~/.dig/wallets/<name>/mnemonic.txt` - marker holding the wallet mnemonic
//!
//! These helpers only compute paths; nothing here touches the filesystem.

use std::path::PathBuf;

use crate::error::{EnvironmentError, Result};

/// Returns the dig home directory (`~/.dig/`).
///
/// Fails if the user's home directory cannot be resolved from the
/// environment.
pub fn dig_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(EnvironmentError::HomeDirectoryNotFound)?;
    Ok(home.join(".dig"))
}

/// Returns the directory holding all wallets (`~/.dig/wallets/`).
pub fn wallets_dir() -> Result<PathBuf> {
    Ok(dig_dir()?.join("wallets"))
}

/// Returns the directory for a single named wallet (`~/.dig/wallets/<name>/`).
pub fn wallet_dir(name: &str) -> Result<PathBuf> {
    Ok(wallets_dir()?.join(name))
}
