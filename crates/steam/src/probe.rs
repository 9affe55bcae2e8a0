use std::path::Path;

/// Answers whether a path is an existing directory.
pub trait DirProbe {
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: DirProbe + ?Sized> DirProbe for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

/// Probes the real filesystem.
///
/// Symlinks are followed; a dangling link, a regular file or an
/// unreadable path all report `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_probe_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FsProbe.is_dir(tmp.path()));
    }

    #[test]
    fn fs_probe_regular_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(!FsProbe.is_dir(tmp.path()));
    }

    #[test]
    fn fs_probe_missing() {
        assert!(!FsProbe.is_dir(Path::new("/definitely/not/real")));
    }

    #[cfg(unix)]
    #[test]
    fn fs_probe_dangling_symlink() {
        let tmp = tempfile::tempdir().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();
        assert!(!FsProbe.is_dir(&link));
    }

    #[cfg(unix)]
    #[test]
    fn fs_probe_symlink_to_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("real");
        std::fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(FsProbe.is_dir(&link));
    }
}
