//! Marker constants and the filesystem procedure.
//!
//! The marker is a plain text file whose presence and contents signal to an
//! external tool which mnemonic to import. Writing it is the entire job of
//! this crate; nothing ever reads it back.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FilesystemError, Result};

/// Wallet the marker is written for.
pub const WALLET_NAME: &str = "test-wallet";

/// File name of the marker inside the wallet directory.
pub const MNEMONIC_FILE: &str = "mnemonic.txt";

/// The mnemonic recorded in the marker, fixed at build time. Treated as an
/// opaque string: never parsed, validated, or derived from.
pub const MNEMONIC: &str = "provide verb sheriff tragic arrow bless still empty gesture senior pause tobacco creek giggle pair crisp glow divide boost endless elite fiction cup arena";

/// Write the mnemonic marker below the given wallet directory.
///
/// Creates the directory and any missing ancestors first; directories that
/// already exist are fine. The write truncates, so the file never holds
/// anything but the current mnemonic. The write is not atomic: a crash
/// mid-write can leave a partial file behind.
pub fn write_marker(wallet_dir: &Path) -> Result<()> {
    fs::create_dir_all(wallet_dir).map_err(|source| FilesystemError::CreateDir {
        path: wallet_dir.to_path_buf(),
        source,
    })?;
    debug!(path = %wallet_dir.display(), "wallet directory ready");

    let marker = wallet_dir.join(MNEMONIC_FILE);
    fs::write(&marker, MNEMONIC).map_err(|source| FilesystemError::WriteFile {
        path: marker.clone(),
        source,
    })?;
    debug!(path = %marker.display(), "mnemonic marker written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn wallet_dir_under(base: &TempDir) -> std::path::PathBuf {
        base.path().join(".dig").join("wallets").join(WALLET_NAME)
    }

    #[test]
    fn creates_directory_and_marker() {
        let base = TempDir::new().expect("create temp dir");
        let dir = wallet_dir_under(&base);

        write_marker(&dir).expect("write marker");

        assert!(dir.is_dir());
        let contents = fs::read_to_string(dir.join(MNEMONIC_FILE)).expect("read marker");
        assert_eq!(contents, MNEMONIC);
    }

    #[test]
    fn writing_twice_leaves_the_same_state() {
        let base = TempDir::new().expect("create temp dir");
        let dir = wallet_dir_under(&base);

        write_marker(&dir).expect("first write");
        write_marker(&dir).expect("second write");

        let entries: Vec<_> = fs::read_dir(&dir)
            .expect("read wallet dir")
            .collect::<std::io::Result<_>>()
            .expect("list wallet dir");
        assert_eq!(entries.len(), 1);
        let contents = fs::read_to_string(dir.join(MNEMONIC_FILE)).expect("read marker");
        assert_eq!(contents, MNEMONIC);
    }

    #[test]
    fn overwrites_previous_contents_entirely() {
        let base = TempDir::new().expect("create temp dir");
        let dir = wallet_dir_under(&base);
        fs::create_dir_all(&dir).expect("pre-create wallet dir");
        fs::write(dir.join(MNEMONIC_FILE), "stale and much longer than the replacement text could ever be padded out to; stale stale stale stale stale stale stale stale stale stale stale stale stale")
            .expect("seed stale marker");

        write_marker(&dir).expect("write marker");

        let contents = fs::read_to_string(dir.join(MNEMONIC_FILE)).expect("read marker");
        assert_eq!(contents, MNEMONIC);
    }

    #[test]
    fn marker_has_no_trailing_newline() {
        let base = TempDir::new().expect("create temp dir");
        let dir = wallet_dir_under(&base);

        write_marker(&dir).expect("write marker");

        let bytes = fs::read(dir.join(MNEMONIC_FILE)).expect("read marker");
        assert_eq!(bytes, MNEMONIC.as_bytes());
    }

    #[test]
    fn fails_when_ancestor_is_a_file() {
        let base = TempDir::new().expect("create temp dir");
        let blocker = base.path().join(".dig");
        fs::write(&blocker, "not a directory").expect("create blocking file");

        let dir = wallet_dir_under(&base);
        let err = write_marker(&dir).expect_err("directory creation must fail");

        assert!(matches!(
            err,
            Error::Filesystem(FilesystemError::CreateDir { .. })
        ));
        assert!(!dir.join(MNEMONIC_FILE).exists());
    }
}
