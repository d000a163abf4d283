//! Application paths.
//!
//! Resolves the per-user configuration directory that holds the store file.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the record store inside the configuration directory.
pub const STORE_FILE_NAME: &str = "config.json";

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Configuration directory (~/.config/halp)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from the current user's XDG directories.
    ///
    /// Directories are not created here; the store creates them on load.
    pub fn resolve() -> ConfigResult<Self> {
        let project = ProjectDirs::from("", "", "halp").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self::with_config_dir(project.config_dir()))
    }

    /// Build paths rooted at an explicit configuration directory.
    pub fn with_config_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            config_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the store file.
    pub fn store_file(&self) -> PathBuf {
        self.config_dir.join(STORE_FILE_NAME)
    }

    /// Pick the store file, honouring an explicit override.
    pub fn store_file_or(override_path: Option<&Path>) -> ConfigResult<PathBuf> {
        match override_path {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Self::resolve()?.store_file()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_file_name() {
        let paths = Paths::with_config_dir("/home/user/.config/halp");
        assert_eq!(
            paths.store_file(),
            PathBuf::from("/home/user/.config/halp/config.json")
        );
    }

    #[test]
    fn test_override_wins() {
        let path = Path::new("/tmp/elsewhere.json");
        assert_eq!(Paths::store_file_or(Some(path)).unwrap(), path);
    }
}
