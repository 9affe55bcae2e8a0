use std::path::PathBuf;

use crate::env::EnvLookup;
use crate::{ENV_HOME, ENV_XDG_DATA_HOME};

/// One location where a Steam library might hold the game.
///
/// The probed path is `<$var>/<suffix>/<game>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePath {
    /// Environment variable supplying the base directory.
    pub var: &'static str,
    /// Path below the variable's value, up to and including `steamapps/common`.
    pub suffix: &'static str,
}

impl CandidatePath {
    /// Candidate rooted at the value of `var`.
    pub const fn new(var: &'static str, suffix: &'static str) -> Self {
        Self { var, suffix }
    }

    /// Builds the concrete path for `game`, or `None` when the variable is unset.
    pub fn path(&self, env: &impl EnvLookup, game: &str) -> Option<PathBuf> {
        let base = PathBuf::from(env.var(self.var)?);
        Some(base.join(self.suffix).join(game))
    }
}

/// Steam-on-Linux locations, highest priority first.
pub const LINUX_CANDIDATES: &[CandidatePath] = &[
    // $XDG_DATA_HOME/Steam
    CandidatePath::new(ENV_XDG_DATA_HOME, "Steam/steamapps/common"),
    // ~/.local/share/Steam
    CandidatePath::new(ENV_HOME, ".local/share/Steam/steamapps/common"),
    // ~/.steam/steam symlink
    CandidatePath::new(ENV_HOME, ".steam/steam/steamapps/common"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn candidate_path_joins_suffix_and_game() {
        let env = MapEnv::new().with("HOME", "/home/u");
        let c = CandidatePath::new("HOME", ".steam/steam/steamapps/common");
        assert_eq!(
            c.path(&env, "Terraria"),
            Some(PathBuf::from("/home/u/.steam/steam/steamapps/common/Terraria"))
        );
    }

    #[test]
    fn candidate_path_unset_variable() {
        let c = CandidatePath::new("XDG_DATA_HOME", "Steam/steamapps/common");
        assert_eq!(c.path(&MapEnv::new(), "Terraria"), None);
    }

    #[test]
    fn linux_candidate_order() {
        let env = MapEnv::new()
            .with("XDG_DATA_HOME", "/data")
            .with("HOME", "/home/u");
        let paths: Vec<_> = LINUX_CANDIDATES
            .iter()
            .filter_map(|c| c.path(&env, "Terraria"))
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/data/Steam/steamapps/common/Terraria"),
                PathBuf::from("/home/u/.local/share/Steam/steamapps/common/Terraria"),
                PathBuf::from("/home/u/.steam/steam/steamapps/common/Terraria"),
            ]
        );
    }
}
