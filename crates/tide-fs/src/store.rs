//! Format-agnostic structured document loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Loads structured documents, picking the parser from the file extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Read and deserialize the document at `path`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        self.parse(path, &content)
    }

    /// Deserialize already-read `content` as if it came from `path`.
    pub fn parse<T: DeserializeOwned>(&self, path: &NormalizedPath, content: &str) -> Result<T> {
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_native(),
                extension: extension.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn parses_by_extension() {
        let store = DocumentStore::new();

        let yaml: Sample = store
            .parse(&NormalizedPath::new("a/tvm.yaml"), "name: Alpha\n")
            .unwrap();
        let json: Sample = store
            .parse(&NormalizedPath::new("a/schema.json"), r#"{"name": "Alpha"}"#)
            .unwrap();
        let toml: Sample = store
            .parse(&NormalizedPath::new("tide.toml"), "name = \"Alpha\"\n")
            .unwrap();

        assert_eq!(yaml, json);
        assert_eq!(json, toml);
    }

    #[test]
    fn uppercase_extension_is_accepted() {
        let store = DocumentStore::new();
        let value: serde_yaml::Value = store
            .parse(&NormalizedPath::new("TVM.YML"), "name: x\n")
            .unwrap();
        assert_eq!(value["name"].as_str(), Some("x"));
    }

    #[test]
    fn parse_error_names_format_and_path() {
        let store = DocumentStore::new();
        let err = store
            .parse::<serde_yaml::Value>(&NormalizedPath::new("dir/bad.yaml"), "name: [unclosed")
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("YAML"), "got: {message}");
        assert!(message.contains("dir/bad.yaml"), "got: {message}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let store = DocumentStore::new();
        let err = store
            .parse::<serde_json::Value>(&NormalizedPath::new("notes.txt"), "hello")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }
}
