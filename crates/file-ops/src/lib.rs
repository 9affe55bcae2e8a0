//! File operations for installing the mod loader into a game directory.
//!
//! Holds the fixed file manifest, the installer contract the resolved
//! directory is handed to, and a filesystem installer that copies and
//! deletes the listed files.

mod delete;
mod install;
mod manifest;

use std::path::PathBuf;

pub use delete::{delete_listed_files, validate_file_name};
pub use install::{FsInstaller, InstallReport, InstallRequest, Installer, set_executable};
pub use manifest::FileManifest;

/// Errors produced while installing into a game directory.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("game install directory could not be resolved")]
    InstallDirUnresolved,

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid manifest file name: {0:?}")]
    InvalidFileName(String),

    #[error("file to install not found: {0}")]
    MissingSource(PathBuf),

    /// Failure after the game directory was already modified.
    #[error(
        "install interrupted after deleting {} and installing {} file(s): {source}",
        .deleted.len(),
        .installed.len()
    )]
    Interrupted {
        deleted: Vec<String>,
        installed: Vec<String>,
        #[source]
        source: Box<FileOpsError>,
    },
}

impl FileOpsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileOpsError::Io {
            path: path.into(),
            source,
        }
    }
}
