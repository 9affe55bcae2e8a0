//! Ordered directory resolution.

use std::path::{Path, PathBuf};

use crate::TERRARIA_DIR_NAME;
use crate::candidates::{CandidatePath, LINUX_CANDIDATES};
use crate::env::EnvLookup;
use crate::probe::DirProbe;

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// First candidate that exists as a directory.
    Found(PathBuf),
    /// No candidate matched.
    NotFound,
}

impl Resolution {
    /// Returns the resolved path, if any.
    pub fn found(&self) -> Option<&Path> {
        match self {
            Resolution::Found(path) => Some(path),
            Resolution::NotFound => None,
        }
    }

    /// Whether a candidate matched.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Coerces into "a path, or no path" for the installer hand-off.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Resolution::Found(path) => Some(path),
            Resolution::NotFound => None,
        }
    }
}

impl From<Option<PathBuf>> for Resolution {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Resolution::NotFound, Resolution::Found)
    }
}

/// Probes `candidates` in order and returns the first existing directory.
///
/// Unset variables and missing or non-directory paths move on to the next
/// candidate. This never fails.
pub fn resolve_install_dir(
    candidates: &[CandidatePath],
    game: &str,
    env: &impl EnvLookup,
    probe: &impl DirProbe,
) -> Resolution {
    for candidate in candidates {
        let Some(path) = candidate.path(env, game) else {
            tracing::trace!(var = candidate.var, "variable unset, skipping candidate");
            continue;
        };

        if probe.is_dir(&path) {
            tracing::debug!(path = %path.display(), "game directory found");
            return Resolution::Found(path);
        }
        tracing::trace!(path = %path.display(), "candidate is not a directory");
    }

    tracing::debug!(game, "no candidate directory matched");
    Resolution::NotFound
}

/// Locates a game's install directory with injected environment and prober.
#[derive(Debug, Clone)]
pub struct DirectoryResolver<'a, E, P> {
    game: &'a str,
    candidates: &'a [CandidatePath],
    env: E,
    probe: P,
}

impl<E: EnvLookup, P: DirProbe> DirectoryResolver<'static, E, P> {
    /// Resolver for Terraria under Steam on Linux.
    pub fn linux(env: E, probe: P) -> Self {
        DirectoryResolver::new(TERRARIA_DIR_NAME, LINUX_CANDIDATES, env, probe)
    }
}

impl<'a, E: EnvLookup, P: DirProbe> DirectoryResolver<'a, E, P> {
    /// Resolver that looks for `game` under each of `candidates`, in order.
    pub fn new(game: &'a str, candidates: &'a [CandidatePath], env: E, probe: P) -> Self {
        Self {
            game,
            candidates,
            env,
            probe,
        }
    }

    /// Game folder name looked up under each candidate.
    pub fn game(&self) -> &str {
        self.game
    }

    /// Concrete paths that would be probed, in priority order.
    ///
    /// Candidates whose variable is unset are omitted.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        self.candidates
            .iter()
            .filter_map(|c| c.path(&self.env, self.game))
            .collect()
    }

    /// Probes the candidates and returns the first match.
    pub fn resolve(&self) -> Resolution {
        resolve_install_dir(self.candidates, self.game, &self.env, &self.probe)
    }
}
