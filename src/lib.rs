//! dig-import - wallet-import marker writer for the dig CLI.
//!
//! Importing a wallet for real means driving wallet software, which is not
//! always available (CI, sandboxes, fresh machines). This crate simulates
//! the import step instead: it drops the mnemonic into a well-known marker
//! file under the user's dig home and leaves the actual import to whatever
//! tool watches that location.
//!
//! The whole procedure is a single straight line: resolve the home
//! directory, create `~/.dig/wallets/test-wallet/` if it is missing, write
//! `mnemonic.txt` inside it, print two status lines.
//!
//! # Modules
//!
//! - [`cli`] - Command-line definition and the import handler
//! - [`error`] - Error types for the crate
//! - [`marker`] - Marker constants and the filesystem procedure
//! - [`paths`] - Layout of the dig home directory

pub mod cli;
pub mod error;
pub mod marker;
pub mod paths;
