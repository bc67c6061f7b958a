use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Reasons a path is refused.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlink '{path}' refused: symlinks are disabled")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("Cannot resolve path '{path}': {error}")]
    Unresolvable { path: PathBuf, error: io::Error },
}

/// Resolve `input_path` to a canonical path the file tools may read.
///
/// Without a configured root any existing path is accepted. With a root:
/// relative paths are taken relative to it, the canonical result must lie
/// under it, and symlinks are refused or checked according to
/// `security.allow_symlinks`.
pub fn validate_path(input_path: &str, config: &Config) -> Result<PathBuf, PathSecurityError> {
    let Some(root) = config.security.root_path.as_deref() else {
        return canonicalize(Path::new(input_path));
    };

    let root = canonicalize(root)?;
    let path = if Path::new(input_path).is_relative() {
        root.join(input_path)
    } else {
        PathBuf::from(input_path)
    };

    if path.is_symlink() {
        check_symlink(&path, &root, config.security.allow_symlinks)?;
    }

    let resolved = canonicalize(&path)?;
    if !resolved.starts_with(&root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: resolved,
            root,
        });
    }
    Ok(resolved)
}

fn check_symlink(link: &Path, root: &Path, allowed: bool) -> Result<(), PathSecurityError> {
    if !allowed {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: link.to_path_buf(),
        });
    }
    // The target is resolved through the link itself so relative targets work.
    let target = canonicalize(link).map_err(|_| PathSecurityError::SymlinkOutsideRoot {
        path: link.to_path_buf(),
    })?;
    if target.starts_with(root) {
        Ok(())
    } else {
        Err(PathSecurityError::SymlinkOutsideRoot {
            path: link.to_path_buf(),
        })
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, PathSecurityError> {
    path.canonicalize().map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => PathSecurityError::Unresolvable {
            path: path.to_path_buf(),
            error,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SecurityConfig;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(root: Option<&Path>, allow_symlinks: bool) -> Config {
        let mut config = Config::default();
        config.security = SecurityConfig {
            root_path: root.map(Path::to_path_buf),
            allow_symlinks,
        };
        config
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "data").unwrap();
        path
    }

    #[test]
    fn test_unrestricted_accepts_existing_path() {
        let dir = TempDir::new().unwrap();
        let file = touch(dir.path(), "a.txt");
        let resolved = validate_path(file.to_str().unwrap(), &config_with(None, true)).unwrap();
        assert_eq!(resolved, file.canonicalize().unwrap());
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        for config in [config_with(None, true), config_with(Some(dir.path()), true)] {
            assert!(matches!(
                validate_path(missing.to_str().unwrap(), &config),
                Err(PathSecurityError::PathNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_relative_path_resolves_under_root() {
        let dir = TempDir::new().unwrap();
        let file = touch(dir.path(), "notes.txt");
        let resolved = validate_path("notes.txt", &config_with(Some(dir.path()), true)).unwrap();
        assert_eq!(resolved, file.canonicalize().unwrap());
    }

    #[test]
    fn test_outside_root_rejected() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let file = touch(other.path(), "secret.txt");
        assert!(matches!(
            validate_path(file.to_str().unwrap(), &config_with(Some(root.path()), true)),
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(dir.path(), "top.txt");
        assert!(matches!(
            validate_path("../top.txt", &config_with(Some(&sub), true)),
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let inside = touch(root.path(), "inside.txt");
        let outside = touch(other.path(), "outside.txt");
        let good_link = root.path().join("good");
        let bad_link = root.path().join("bad");
        symlink(&inside, &good_link).unwrap();
        symlink(&outside, &bad_link).unwrap();

        let allowing = config_with(Some(root.path()), true);
        assert!(validate_path(good_link.to_str().unwrap(), &allowing).is_ok());
        assert!(matches!(
            validate_path(bad_link.to_str().unwrap(), &allowing),
            Err(PathSecurityError::SymlinkOutsideRoot { .. })
        ));

        let refusing = config_with(Some(root.path()), false);
        assert!(matches!(
            validate_path(good_link.to_str().unwrap(), &refusing),
            Err(PathSecurityError::SymlinkNotAllowed { .. })
        ));
    }
}
