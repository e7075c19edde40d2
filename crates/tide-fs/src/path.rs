//! Forward-slash paths
//!
//! Content files are ordered and reported by their path text, so one corpus
//! has to produce the same strings on every platform. [`NormalizedPath`]
//! stores `/`-separated text and only turns back into a [`PathBuf`] at I/O
//! boundaries.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform path for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append one or more `/`-separated components.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let base = self.inner.trim_end_matches('/');
        let inner = if base.is_empty() && self.inner.starts_with('/') {
            format!("/{segment}")
        } else {
            format!("{base}/{segment}")
        };
        Self { inner }
    }

    /// Containing directory; `None` for a bare name.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        let inner = if idx == 0 { "/" } else { &trimmed[..idx] };
        Some(Self {
            inner: inner.to_string(),
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.as_path().file_name().and_then(OsStr::to_str)
    }

    /// File name without its last extension. Dotfiles keep their full name.
    pub fn file_stem(&self) -> Option<&str> {
        self.as_path().file_stem().and_then(OsStr::to_str)
    }

    pub fn extension(&self) -> Option<&str> {
        self.as_path().extension().and_then(OsStr::to_str)
    }

    pub fn exists(&self) -> bool {
        self.as_path().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.as_path().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.as_path().is_file()
    }

    fn as_path(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Serialized as the plain path text.
impl serde::Serialize for NormalizedPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
