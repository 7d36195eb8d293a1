//! Container identity
//!
//! A `Container` is a name plus the optional template parameters used when
//! creating it. It carries no state: the current lifecycle state is always
//! re-probed from the runtime.

use std::fmt;
use std::path::PathBuf;

/// Identifies one container within the runtime's namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Unique name within the runtime.
    pub name: String,
    /// Template distribution, e.g. "debian". Only meaningful to create.
    pub distribution: Option<String>,
    /// Template release, e.g. "bookworm". Only meaningful to create.
    pub release: Option<String>,
    /// Template architecture, e.g. "amd64". Only meaningful to create.
    pub architecture: Option<String>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distribution: None,
            release: None,
            architecture: None,
        }
    }

    pub fn with_template(
        name: impl Into<String>,
        distribution: impl Into<String>,
        release: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            distribution: Some(distribution.into()),
            release: Some(release.into()),
            architecture: Some(architecture.into()),
        }
    }

    /// Folder holding the container's rootfs and config, as laid out by an
    /// unprivileged runtime under the user's data directory.
    pub fn container_folder(&self) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".local/share/lxc").join(&self.name))
    }

    /// Path to the container's config file.
    pub fn config_file(&self) -> Option<PathBuf> {
        self.container_folder().map(|folder| folder.join("config"))
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_template() {
        let c = Container::new("web");
        assert_eq!(c.name, "web");
        assert!(c.distribution.is_none());
        assert!(c.release.is_none());
        assert!(c.architecture.is_none());
    }

    #[test]
    fn test_with_template() {
        let c = Container::with_template("web", "debian", "bookworm", "amd64");
        assert_eq!(c.distribution.as_deref(), Some("debian"));
        assert_eq!(c.release.as_deref(), Some("bookworm"));
        assert_eq!(c.architecture.as_deref(), Some("amd64"));
    }

    #[test]
    fn test_config_file_under_container_folder() {
        let c = Container::new("web");
        let config = c.config_file().unwrap();
        assert!(config.ends_with("lxc/web/config"));
    }
}
