use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pagemap error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read content directory {path}: {source}")]
    FilesystemAccess { path: PathBuf, source: io::Error },

    #[error("Cannot write {path}: {source}")]
    FilesystemWrite { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for Pagemap operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a filesystem access error for a directory that cannot be listed
    pub fn filesystem_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FilesystemAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a filesystem write error for the output location
    pub fn filesystem_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FilesystemWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Convert a directory walk failure, falling back to `root` when walkdir
    /// does not report the offending path.
    pub fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let source = match err.loop_ancestor() {
            Some(ancestor) => io::Error::other(format!(
                "symbolic link loop back to {}",
                ancestor.display()
            )),
            None => err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed")),
        };
        Error::FilesystemAccess { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_filesystem_access_display() {
        let err = Error::filesystem_access(
            "/missing/pages",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/missing/pages"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_filesystem_write_display() {
        let err = Error::filesystem_write(
            "/readonly/sitemap.xml",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "Cannot write /readonly/sitemap.xml: permission denied"
        );
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("base_url must not be empty");
        assert_eq!(
            err.to_string(),
            "Config validation error: base_url must not be empty"
        );
    }

    #[test]
    fn test_from_walk_missing_root() {
        let root = Path::new("/definitely/not/here");
        let walk_err = walkdir::WalkDir::new(root)
            .into_iter()
            .find_map(|e| e.err())
            .unwrap();
        match Error::from_walk(root, walk_err) {
            Error::FilesystemAccess { path, source } => {
                assert_eq!(path, root);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected FilesystemAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
