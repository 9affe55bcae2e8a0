//! Removal of obsolete files from the game directory.

use std::path::{Component, Path};

use crate::FileOpsError;

/// Checks that a manifest entry names a single file directly inside the
/// game directory.
///
/// Rejects empty names, `.`/`..`, absolute paths and anything with a
/// path separator.
pub fn validate_file_name(name: &str) -> Result<(), FileOpsError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(FileOpsError::InvalidFileName(name.to_string())),
    }
}

/// Deletes each listed file from `dir` if present.
///
/// Missing files are skipped. Directories with a listed name are left
/// alone. Returns the names actually deleted, in manifest order.
pub fn delete_listed_files(dir: &Path, names: &[&str]) -> Result<Vec<String>, FileOpsError> {
    for name in names {
        validate_file_name(name)?;
    }

    let mut deleted = Vec::new();
    for name in names {
        let path = dir.join(name);
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(FileOpsError::io(path, e)),
        };
        if meta.is_dir() {
            tracing::warn!(path = %path.display(), "listed file is a directory, skipping");
            continue;
        }

        std::fs::remove_file(&path).map_err(|e| FileOpsError::io(&path, e))?;
        tracing::info!(file = %name, "deleted obsolete file");
        deleted.push((*name).to_string());
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_valid() {
        assert!(validate_file_name("tModLoader.exe").is_ok());
        assert!(validate_file_name("tModLoader-kick").is_ok());
        assert!(validate_file_name(".hidden").is_ok());
    }

    #[test]
    fn path_like_names_are_rejected() {
        for bad in ["", ".", "..", "../Terraria", "sub/file.dll", "/etc/passwd", "a/"] {
            let err = validate_file_name(bad).unwrap_err();
            assert!(
                matches!(err, FileOpsError::InvalidFileName(_)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn deletes_present_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::write(dir.join("MP3Sharp.dll"), "old").unwrap();
        std::fs::write(dir.join("Mono.Cecil.dll"), "old").unwrap();
        std::fs::write(dir.join("Terraria.exe"), "keep").unwrap();

        let deleted = delete_listed_files(
            dir,
            &["Terraria.exe.config", "MP3Sharp.dll", "Mono.Cecil.dll"],
        )
        .unwrap();

        assert_eq!(deleted, vec!["MP3Sharp.dll", "Mono.Cecil.dll"]);
        assert!(!dir.join("MP3Sharp.dll").exists());
        assert!(!dir.join("Mono.Cecil.dll").exists());
        assert!(dir.join("Terraria.exe").exists());
    }

    #[test]
    fn directory_with_listed_name_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("MP3Sharp.dll")).unwrap();

        let deleted = delete_listed_files(tmp.path(), &["MP3Sharp.dll"]).unwrap();

        assert!(deleted.is_empty());
        assert!(tmp.path().join("MP3Sharp.dll").is_dir());
    }

    #[test]
    fn invalid_name_deletes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("MP3Sharp.dll"), "old").unwrap();

        let result = delete_listed_files(tmp.path(), &["MP3Sharp.dll", "../escape"]);

        assert!(matches!(result, Err(FileOpsError::InvalidFileName(_))));
        assert!(tmp.path().join("MP3Sharp.dll").exists());
    }

    #[test]
    fn empty_list() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(delete_listed_files(tmp.path(), &[]).unwrap().is_empty());
    }
}
