use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors resolving values from the process environment.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("could not determine the user's home directory")]
    HomeDirectoryNotFound,
}

/// Errors mutating the filesystem under the dig home.
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("failed to create wallet directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write mnemonic marker {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

pub type Result<T> = std::result::Result<T, Error>;
