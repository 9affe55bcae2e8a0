use std::path::PathBuf;

use clap::Parser;

/// Installs tModLoader into a Steam copy of Terraria.
#[derive(Debug, Parser)]
#[command(name = "tmlsetup")]
#[command(about = "Locate Terraria and install tModLoader files into it")]
#[command(version)]
pub struct Cli {
    /// Game directory to install into; skips auto-detection
    #[arg(long = "install-dir")]
    pub install_dir: Option<PathBuf>,

    /// Directory holding the files to install (default: current directory)
    #[arg(long = "source-dir")]
    pub source_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/tmlsetup/setup.toml)
    #[arg(long, env = "TMLSETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the resolved plan as JSON and exit without touching any file
    #[arg(long)]
    pub plan: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "tmlsetup",
            "--install-dir",
            "/games/Terraria",
            "--source-dir",
            "/tmp/tml",
            "--plan",
        ])
        .unwrap();
        assert_eq!(cli.install_dir, Some(PathBuf::from("/games/Terraria")));
        assert_eq!(cli.source_dir, Some(PathBuf::from("/tmp/tml")));
        assert!(cli.plan);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::try_parse_from(["tmlsetup"]).unwrap();
        assert!(cli.install_dir.is_none());
        assert!(cli.source_dir.is_none());
        assert!(!cli.plan);
    }
}
