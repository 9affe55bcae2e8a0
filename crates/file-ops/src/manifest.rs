use serde::Serialize;

/// Files to add/overwrite and files to remove in the game directory.
///
/// Fixed at compile time; independent of where the game was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileManifest {
    pub to_install: &'static [&'static str],
    pub to_delete: &'static [&'static str],
}

impl FileManifest {
    /// Linux build of the mod loader.
    pub const LINUX: FileManifest = FileManifest {
        to_install: &[
            "tModLoader.exe",
            "tModLoaderServer.exe",
            "tModLoaderServer",
            "Terraria",
            "tModLoader",
            "tModLoader-kick",
            "tModLoader-mono",
            "I18N.dll",
            "I18N.West.dll",
        ],
        to_delete: &[
            "Terraria.exe.config",
            "MP3Sharp.dll",
            "Ionic.Zip.Reduced.dll",
            "Mono.Cecil.dll",
        ],
    };
}
