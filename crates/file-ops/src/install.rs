//! Installer hand-off and the filesystem installer.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::FileOpsError;
use crate::delete::{delete_listed_files, validate_file_name};
use crate::manifest::FileManifest;

/// Everything the installer receives from the bootstrap step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest<'a> {
    /// Files to add or overwrite.
    pub to_install: &'a [&'a str],
    /// Files to remove if present.
    pub to_delete: &'a [&'a str],
    /// Resolved game directory; `None` means resolution found nothing.
    pub install_dir: Option<PathBuf>,
    /// Forwarded unchanged. Its meaning belongs to the installer.
    pub flag: bool,
}

impl<'a> InstallRequest<'a> {
    /// Request for both of `manifest`'s lists.
    pub fn new(manifest: &FileManifest, install_dir: Option<PathBuf>, flag: bool) -> Self {
        Self {
            to_install: manifest.to_install,
            to_delete: manifest.to_delete,
            install_dir,
            flag,
        }
    }
}

/// Summary of a completed installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallReport {
    pub install_dir: PathBuf,
    pub installed: Vec<String>,
    pub deleted: Vec<String>,
    pub flag: bool,
}

/// Performs the actual file placement for an [`InstallRequest`].
///
/// Implementations decide what an unresolved `install_dir` means.
pub trait Installer {
    /// Deletes and installs the requested files, or reports why it could not.
    fn try_install(&self, request: &InstallRequest<'_>) -> Result<InstallReport, FileOpsError>;
}

/// Copies files from a local source directory into the game directory.
///
/// Every source is checked before the game directory is touched. Deletion
/// then runs before copying. A copy failing after that point is reported as
/// [`FileOpsError::Interrupted`] with the files already deleted and
/// installed; those changes are not rolled back.
#[derive(Debug, Clone)]
pub struct FsInstaller {
    source_dir: PathBuf,
}

impl FsInstaller {
    /// `source_dir` holds the files named in the manifest's install list.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    fn check_sources(&self, names: &[&str]) -> Result<(), FileOpsError> {
        for name in names {
            validate_file_name(name)?;
            let src = self.source_dir.join(name);
            if !src.is_file() {
                return Err(FileOpsError::MissingSource(src));
            }
        }
        Ok(())
    }

    fn copy_into(&self, dir: &Path, name: &str) -> Result<(), FileOpsError> {
        let src = self.source_dir.join(name);
        let dst = dir.join(name);
        std::fs::copy(&src, &dst).map_err(|e| FileOpsError::io(&dst, e))?;

        if Path::new(name).extension().is_none() {
            set_executable(&dst)?;
        }

        tracing::info!(file = %name, "installed");
        Ok(())
    }
}

impl Installer for FsInstaller {
    fn try_install(&self, request: &InstallRequest<'_>) -> Result<InstallReport, FileOpsError> {
        let dir = request
            .install_dir
            .as_deref()
            .ok_or(FileOpsError::InstallDirUnresolved)?;

        if !dir.is_dir() {
            return Err(FileOpsError::NotADirectory(dir.to_path_buf()));
        }

        // Nothing is touched until every source is known to exist.
        self.check_sources(request.to_install)?;

        tracing::info!(
            install_dir = %dir.display(),
            source_dir = %self.source_dir.display(),
            flag = request.flag,
            "installing"
        );

        let deleted = delete_listed_files(dir, request.to_delete)?;

        let mut installed = Vec::with_capacity(request.to_install.len());
        for name in request.to_install {
            if let Err(e) = self.copy_into(dir, name) {
                tracing::error!(file = %name, error = %e, "install interrupted");
                return Err(FileOpsError::Interrupted {
                    deleted,
                    installed,
                    source: Box::new(e),
                });
            }
            installed.push((*name).to_string());
        }

        Ok(InstallReport {
            install_dir: dir.to_path_buf(),
            installed,
            deleted,
            flag: request.flag,
        })
    }
}

/// Sets a file as executable (Unix only, 755).
///
/// A missing file is reported as [`FileOpsError::Io`].
pub fn set_executable(path: &Path) -> Result<(), FileOpsError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| FileOpsError::io(path, e))?;
    }

    #[cfg(not(unix))]
    std::fs::metadata(path).map_err(|e| FileOpsError::io(path, e))?;

    Ok(())
}
