//! Wires the directory resolver, the file manifest and the installer.

use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tmlsetup_file_ops::{FileManifest, InstallReport, InstallRequest, Installer};
use tmlsetup_steam::{DirProbe, DirectoryResolver, EnvLookup};

use crate::cli::Cli;
use crate::config::Config;

/// Flag handed to the installer on Linux.
pub const LINUX_INSTALL_FLAG: bool = false;

/// Where the install directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DirSource {
    CommandLine,
    Config,
    Detected,
    Unresolved,
}

/// Everything decided before any file is touched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub candidates: Vec<PathBuf>,
    pub install_dir: Option<PathBuf>,
    pub dir_source: DirSource,
    pub source_dir: PathBuf,
    pub manifest: FileManifest,
    pub flag: bool,
}

impl Plan {
    /// Picks the install directory: command line, then config, then detection.
    ///
    /// Detection only runs when neither override is given. `env` expands `~`
    /// in configured paths.
    pub fn build<E: EnvLookup, P: DirProbe>(
        cli: &Cli,
        config: &Config,
        env: &impl EnvLookup,
        resolver: &DirectoryResolver<'_, E, P>,
        current_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let (install_dir, dir_source) = if let Some(dir) = &cli.install_dir {
            (Some(dir.clone()), DirSource::CommandLine)
        } else if let Some(dir) = config.install_dir(env)? {
            (Some(dir), DirSource::Config)
        } else {
            match resolver.resolve().into_path() {
                Some(dir) => (Some(dir), DirSource::Detected),
                None => (None, DirSource::Unresolved),
            }
        };

        let source_dir = match &cli.source_dir {
            Some(dir) => dir.clone(),
            None => config.source_dir(env)?.unwrap_or(current_dir),
        };

        Ok(Plan {
            candidates: resolver.candidate_paths(),
            install_dir,
            dir_source,
            source_dir,
            manifest: FileManifest::LINUX,
            flag: LINUX_INSTALL_FLAG,
        })
    }

    pub fn request(&self) -> InstallRequest<'static> {
        InstallRequest::new(&self.manifest, self.install_dir.clone(), self.flag)
    }
}

/// Executes the plan through `installer`.
pub fn install(plan: &Plan, installer: &impl Installer) -> anyhow::Result<InstallReport> {
    match (&plan.install_dir, plan.dir_source) {
        (Some(dir), source) => {
            tracing::info!(install_dir = %dir.display(), ?source, "using game directory")
        }
        (None, _) => tracing::warn!(
            candidates = ?plan.candidates,
            "Terraria was not found in any Steam library"
        ),
    }

    installer
        .try_install(&plan.request())
        .context("installation failed (use --install-dir to point at the Terraria directory)")
}

/// Runs the bootstrap: resolve, then print the plan or install.
pub fn run<E: EnvLookup, P: DirProbe>(
    cli: &Cli,
    config: &Config,
    env: &impl EnvLookup,
    resolver: &DirectoryResolver<'_, E, P>,
) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir().context("cannot read current directory")?;
    let plan = Plan::build(cli, config, env, resolver, current_dir)?;

    if cli.plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let installer = tmlsetup_file_ops::FsInstaller::new(&plan.source_dir);
    let report = install(&plan, &installer)?;
    tracing::info!(
        install_dir = %report.install_dir.display(),
        installed = report.installed.len(),
        deleted = report.deleted.len(),
        "tModLoader installed"
    );
    Ok(())
}
