//! Locates a Steam game installation from a fixed list of candidate paths.
//!
//! Resolution is total: every environment maps to either
//! [`Resolution::Found`] or [`Resolution::NotFound`], never an error.

pub mod candidates;
pub mod env;
pub mod probe;
pub mod resolve;

// Re-export primary types.
pub use candidates::{CandidatePath, LINUX_CANDIDATES};
pub use env::{EnvLookup, MapEnv, ProcessEnv};
pub use probe::{DirProbe, FsProbe};
pub use resolve::{DirectoryResolver, Resolution, resolve_install_dir};

/// Steam `common` folder name for Terraria.
pub const TERRARIA_DIR_NAME: &str = "Terraria";

/// XDG data-home variable consulted first on Linux.
pub const ENV_XDG_DATA_HOME: &str = "XDG_DATA_HOME";

/// User home variable.
pub const ENV_HOME: &str = "HOME";
