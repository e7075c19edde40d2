//! [`TestRepo`] builder for content repository scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

pub const THREATS_SCHEMA_FILE: &str = "Detection Objective.schema.json";
pub const MDR_SCHEMA_FILE: &str = "MDR Schema.json";
pub const THREAT_VECTORS_DIR: &str = "Objects/Threat Vectors";
pub const DETECTION_OBJECTIVES_DIR: &str = "Objects/Detection Objectives";

/// A temporary content repository with `Schemas/` and `Objects/` laid out
/// the way the sync engine expects.
///
/// # Example
///
/// ```rust,no_run
/// use tide_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_threat_vector("phishing.yaml", "11111111-1111-4111-8111-111111111111", "Phishing");
/// repo.assert_file_exists("Objects/Threat Vectors/phishing.yaml");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Repository with both schemas and both (empty) content directories.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.write_raw(&format!("Schemas/{THREATS_SCHEMA_FILE}"), fixtures::THREATS_SCHEMA);
        repo.write_raw(&format!("Schemas/{MDR_SCHEMA_FILE}"), fixtures::MDR_SCHEMA);
        fs::create_dir_all(repo.root().join(THREAT_VECTORS_DIR)).unwrap();
        fs::create_dir_all(repo.root().join(DETECTION_OBJECTIVES_DIR)).unwrap();
        repo
    }

    /// Bare temporary directory.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn threats_schema_path(&self) -> PathBuf {
        self.root().join("Schemas").join(THREATS_SCHEMA_FILE)
    }

    pub fn mdr_schema_path(&self) -> PathBuf {
        self.root().join("Schemas").join(MDR_SCHEMA_FILE)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_raw(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_threat_vector(&self, file: &str, uuid: &str, name: &str) {
        self.write_raw(
            &format!("{THREAT_VECTORS_DIR}/{file}"),
            &fixtures::threat_vector_yaml(uuid, name),
        );
    }

    pub fn write_detection_objective(&self, file: &str, name: &str, signals: &[(&str, &str)]) {
        self.write_raw(
            &format!("{DETECTION_OBJECTIVES_DIR}/{file}"),
            &fixtures::detection_objective_yaml(name, signals),
        );
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.root().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    pub fn read_threats_schema(&self) -> String {
        fs::read_to_string(self.threats_schema_path()).unwrap()
    }

    pub fn read_mdr_schema(&self) -> String {
        fs::read_to_string(self.mdr_schema_path()).unwrap()
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }

    /// Names of the files directly inside `dir` (relative to root), sorted.
    pub fn list_dir(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join(dir))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
