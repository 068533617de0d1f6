//! Artifact file naming.

use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

/// How a saved exchange's file name is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Naming {
    /// Hex SHA-1 of the rendered bytes; identical content lands on the same file.
    #[default]
    ContentHash,
    /// The hostname with `.` replaced by `_`; every save for a host overwrites the last.
    Static,
}

impl Naming {
    /// Maps a `--static-output` style flag to a mode.
    pub fn from_static_output(static_output: bool) -> Self {
        if static_output {
            Naming::Static
        } else {
            Naming::ContentHash
        }
    }

    /// File name for `content` saved under `hostname`.
    pub fn file_name(self, hostname: &str, content: &[u8]) -> String {
        match self {
            Naming::ContentHash => content_hash_file_name(content),
            Naming::Static => static_file_name(hostname),
        }
    }
}

/// Lowercase hex SHA-1 digest of `content` (40 characters).
pub fn content_hash_file_name(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Hostname with every `.` replaced by `_`.
pub fn static_file_name(hostname: &str) -> String {
    hostname.replace('.', "_")
}

/// `<root>/<hostname>/<file_name>`.
///
/// The hostname is used as a single path segment without further sanitizing.
pub fn artifact_path(root: &Path, hostname: &str, file_name: &str) -> PathBuf {
    root.join(hostname).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_known_vectors() {
        assert_eq!(
            content_hash_file_name(b""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            content_hash_file_name(b"hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn test_content_hash_is_lowercase_hex() {
        let name = content_hash_file_name(b"anything at all");
        assert_eq!(name.len(), 40);
        assert!(name
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_static_file_name_replaces_dots() {
        assert_eq!(static_file_name("www.example.co.uk"), "www_example_co_uk");
        assert_eq!(static_file_name("localhost"), "localhost");
    }

    #[test]
    fn test_naming_file_name() {
        assert_eq!(Naming::Static.file_name("a.b", b"ignored"), "a_b");
        assert_eq!(
            Naming::ContentHash.file_name("a.b", b"hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn test_naming_from_static_output() {
        assert_eq!(Naming::from_static_output(true), Naming::Static);
        assert_eq!(Naming::from_static_output(false), Naming::ContentHash);
        assert_eq!(Naming::default(), Naming::ContentHash);
    }

    #[test]
    fn test_artifact_path_layout() {
        let p = artifact_path(Path::new("out"), "example.com", "example_com");
        assert_eq!(p, PathBuf::from("out/example.com/example_com"));
    }
}
