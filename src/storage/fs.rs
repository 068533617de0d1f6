//! Directory creation and artifact writes.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::trace;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

use crate::config::{DIR_MODE, FILE_MODE};

/// Creates `dir` and any missing parents with `DIR_MODE` permissions.
///
/// Succeeds if the directory already exists, including when another caller
/// creates it concurrently.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    #[cfg(not(unix))]
    let _ = DIR_MODE;

    builder.create(dir)
}

/// Writes `content` to `path`, creating it with `FILE_MODE` or truncating it.
pub fn write_artifact(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    #[cfg(not(unix))]
    let _ = FILE_MODE;

    let mut file = options.open(path)?;
    file.write_all(content)?;
    trace!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("a").join("b").join("c");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("host");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file_collision() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("taken");
        std::fs::write(&file, b"x").unwrap();
        assert!(ensure_dir(&file.join("sub")).is_err());
    }

    #[test]
    fn test_write_artifact_truncates() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("f");
        write_artifact(&path, b"a much longer first write").unwrap();
        write_artifact(&path, b"short").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions_do_not_exceed_modes() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let dir = root.path().join("host");
        ensure_dir(&dir).unwrap();
        let path = dir.join("f");
        write_artifact(&path, b"x").unwrap();

        let dir_mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        let file_mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only remove bits
        assert_eq!(dir_mode & !DIR_MODE, 0, "dir mode {dir_mode:o}");
        assert_eq!(file_mode & !FILE_MODE, 0, "file mode {file_mode:o}");
        assert_eq!(dir_mode & 0o700, 0o700);
        assert_eq!(file_mode & 0o600, 0o600);
    }
}
