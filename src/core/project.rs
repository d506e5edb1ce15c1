//! Project discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Represents a VQT project: a directory containing `.vqt/`.
///
/// The project owns the session state - the configuration file and the
/// in-progress order - so concurrent sessions in different directories
/// never share mutable state.
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .vqt/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current = std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            let vqt_dir = current.join(".vqt");
            if vqt_dir.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let vqt_dir = root.join(".vqt");
        if vqt_dir.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        Self::write_structure(&root)?;
        Ok(Self { root })
    }

    /// Force initialization even if .vqt/ exists
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::write_structure(&root)?;
        Ok(Self { root })
    }

    fn write_structure(root: &Path) -> Result<(), ProjectError> {
        let vqt_dir = root.join(".vqt");
        std::fs::create_dir_all(&vqt_dir).map_err(|e| ProjectError::IoError(e.to_string()))?;

        let config_path = vqt_dir.join("config.yaml");
        std::fs::write(&config_path, Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# VQT Project Configuration

# Price list used as the sell column (lista, contratista, fabrica, publico)
# price_list: lista

# Catalog CSV file, relative to the project root
# catalog: productos.csv

# Recipient address for `vqt order export --mailto`
# recipient: ventas@csventilacion.mx

# Project details rendered into the order email
# project_name: ""
# city: ""
# phone: ""
"#
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .vqt configuration directory
    pub fn vqt_dir(&self) -> PathBuf {
        self.root.join(".vqt")
    }

    /// Path of the project-level config file
    pub fn config_path(&self) -> PathBuf {
        self.vqt_dir().join("config.yaml")
    }

    /// Path of the persisted in-progress order
    pub fn order_path(&self) -> PathBuf {
        self.vqt_dir().join("order.yaml")
    }
}

/// Errors that can occur during project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not a VQT project (searched from {searched_from:?}). Run 'vqt init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("VQT project already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        assert!(project.vqt_dir().exists());
        assert!(project.config_path().exists());
        assert!(!project.order_path().exists());
    }

    #[test]
    fn test_project_init_fails_if_exists() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let err = Project::init(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));
    }

    #[test]
    fn test_project_discover_finds_vqt_dir() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let subdir = tmp.path().join("some/nested/dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let project = Project::discover_from(&subdir).unwrap();
        assert_eq!(
            project.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_project_discover_fails_without_vqt_dir() {
        let tmp = tempdir().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }
}
