//! Repository root resolution

use std::path::Path;

use tide_fs::NormalizedPath;

use super::settings::SyncConfig;
use crate::target::{EnumTarget, TargetKind};
use crate::{Error, Result};

/// How many parent directories root discovery climbs before giving up
pub const MAX_DISCOVERY_DEPTH: usize = 10;

/// Resolved locations of one content repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    root: NormalizedPath,
    config: SyncConfig,
}

impl RepoLayout {
    /// Use `root` as the repository root and load its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if `root` is not a directory, or the
    /// config error if `tide.toml` is malformed.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
        let canonical = dunce::canonicalize(root)?;
        let root = NormalizedPath::new(canonical);
        let config = SyncConfig::load(&root)?;

        tracing::debug!(root = %root, "Opened repository layout");
        Ok(Self { root, config })
    }

    /// Walk up from `start` to the first directory holding both the default
    /// schemas and objects directories.
    pub fn discover(start: &Path) -> Result<Self> {
        let defaults = SyncConfig::default();
        let start = dunce::canonicalize(start)?;

        let mut current = Some(start.as_path());
        for _ in 0..=MAX_DISCOVERY_DEPTH {
            let Some(dir) = current else {
                break;
            };
            if dir.join(&defaults.schemas_dir).is_dir() && dir.join(&defaults.objects_dir).is_dir() {
                return Self::open(dir);
            }
            current = dir.parent();
        }

        Err(Error::RootNotFound {
            start,
            schemas_dir: defaults.schemas_dir,
            objects_dir: defaults.objects_dir,
        })
    }

    /// Explicit root when given, discovery from `cwd` otherwise.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(root) => Self::open(root),
            None => Self::discover(cwd),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn objects_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.objects_dir)
    }

    pub fn schemas_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.schemas_dir)
    }

    /// Directory scanned for `kind`.
    pub fn content_dir(&self, kind: TargetKind) -> NormalizedPath {
        self.objects_dir().join(kind.content_dir_name())
    }

    /// Schema file patched for `kind`.
    pub fn schema_path(&self, kind: TargetKind) -> NormalizedPath {
        let file = match kind {
            TargetKind::Threats => &self.config.schemas.threats,
            TargetKind::DetectionModel => &self.config.schemas.detection_model,
        };
        self.schemas_dir().join(file)
    }

    pub fn target(&self, kind: TargetKind) -> Result<EnumTarget> {
        EnumTarget::new(kind, self.content_dir(kind), self.schema_path(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Schemas")).unwrap();
        fs::create_dir_all(dir.path().join("Objects").join("Threat Vectors")).unwrap();
        dir
    }

    #[test]
    fn discovers_root_from_nested_directory() {
        let repo = make_repo();
        let nested = repo.path().join("Objects").join("Threat Vectors");

        let layout = RepoLayout::discover(&nested).unwrap();

        let expected = NormalizedPath::new(dunce::canonicalize(repo.path()).unwrap());
        assert_eq!(layout.root(), &expected);
    }

    #[test]
    fn discovery_fails_without_markers() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Schemas")).unwrap();

        let err = RepoLayout::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }

    #[test]
    fn explicit_root_must_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let err = RepoLayout::resolve(Some(&file), dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { .. }));
    }

    #[test]
    fn target_paths_follow_config() {
        let repo = make_repo();
        fs::write(
            repo.path().join("tide.toml"),
            "[schemas]\nthreats = \"DOM.schema.json\"\n",
        )
        .unwrap();

        let layout = RepoLayout::open(repo.path()).unwrap();
        let target = layout.target(TargetKind::Threats).unwrap();

        assert!(target.schema_path.as_str().ends_with("Schemas/DOM.schema.json"));
        assert!(target.content_dir.as_str().ends_with("Objects/Threat Vectors"));
        assert!(
            layout
                .schema_path(TargetKind::DetectionModel)
                .as_str()
                .ends_with("Schemas/MDR Schema.json")
        );
    }
}
