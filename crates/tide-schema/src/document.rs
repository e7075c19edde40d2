//! In-memory schema document
//!
//! A [`SchemaDocument`] is loaded once, mutated at a single node and then
//! either rendered and persisted in full or dropped. Keys keep their
//! insertion order (`serde_json` with `preserve_order`), so rendering only
//! changes what was explicitly replaced.

use serde::Serialize;
use serde_json::{Map, Value};
use serde_json::ser::{PrettyFormatter, Serializer};

use tide_fs::{NormalizedPath, checksum, io};

use crate::patch::EnumPatch;
use crate::path::{self, NodePath, PathSegment};
use crate::{Error, Result};

/// Schema combinators searched when a node is not found from the root.
const COMBINATORS: [&str; 3] = ["allOf", "oneOf", "anyOf"];

/// Indentation used when writing schemas back.
const INDENT: &[u8] = b"    ";

/// A loaded JSON Schema document.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    path: NormalizedPath,
    root: Value,
    checksum: String,
}

impl SchemaDocument {
    /// Read and parse the schema at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] if the file is missing, unreadable or not
    /// well-formed JSON.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path).map_err(|source| Error::Load {
            path: path.to_native(),
            source,
        })?;
        Self::parse(path.clone(), &content)
    }

    /// Parse schema text that was read from `path`.
    pub fn parse(path: NormalizedPath, content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).map_err(|e| Error::Load {
            path: path.to_native(),
            source: tide_fs::Error::Parse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            },
        })?;

        Ok(Self {
            checksum: checksum::compute_checksum(content.as_bytes()),
            path,
            root,
        })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Checksum of the text the document was parsed from.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Replace the enum and description arrays of the node named in `patch`.
    ///
    /// Both arrays are replaced outright, never merged. Keys that already
    /// exist keep their position among their siblings; missing keys are
    /// appended.
    pub fn replace_enum(&mut self, patch: &EnumPatch) -> Result<()> {
        let target = self.node_object_mut(patch.node())?;

        let values: Vec<Value> = patch.values().map(|v| Value::String(v.to_string())).collect();
        let descriptions: Vec<Value> = patch
            .descriptions()
            .map(|d| Value::String(d.to_string()))
            .collect();

        target.insert(patch.enum_key().to_string(), Value::Array(values));
        target.insert(patch.description_key().to_string(), Value::Array(descriptions));

        tracing::debug!(
            schema = %self.path,
            node = %patch.node(),
            entries = patch.len(),
            "Replaced enum node"
        );
        Ok(())
    }

    /// Serialize the document: four-space indentation, non-ASCII characters
    /// written as-is, one trailing newline.
    pub fn render(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.root
            .serialize(&mut serializer)
            .map_err(|source| Error::Serialize {
                path: self.path.to_native(),
                source,
            })?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Atomically replace the file on disk with `rendered`.
    pub fn save(&self, rendered: &[u8]) -> Result<()> {
        io::write_atomic(&self.path, rendered).map_err(|source| Error::Write {
            path: self.path.to_native(),
            source,
        })
    }

    fn node_object_mut(&mut self, node: &NodePath) -> Result<&mut Map<String, Value>> {
        let address = self.address_of(node)?;
        let schema_path = self.path.to_native();

        match path::resolve_mut(&mut self.root, &address) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(Error::NotAnObject {
                path: schema_path,
                node: node.to_string(),
            }),
            Err(idx) => Err(Error::NodeNotFound {
                path: schema_path,
                node: node.to_string(),
                segment: address[idx].to_string(),
            }),
        }
    }

    /// Absolute address of `node`.
    ///
    /// The node is first looked up from the document root. Schemas that wrap
    /// their properties in `allOf`/`oneOf`/`anyOf` branches (optionally under
    /// a `then`) are searched next, in document order.
    fn address_of(&self, node: &NodePath) -> Result<Vec<PathSegment>> {
        let mut root_failure = None;

        for prefix in self.candidate_roots() {
            let Ok(base) = path::resolve(&self.root, &prefix) else {
                continue;
            };
            match path::resolve(base, node.segments()) {
                Ok(_) => {
                    let mut address = prefix;
                    address.extend(node.segments().iter().cloned());
                    return Ok(address);
                }
                Err(idx) => {
                    root_failure.get_or_insert(idx);
                }
            }
        }

        let idx = root_failure.unwrap_or(0);
        Err(Error::NodeNotFound {
            path: self.path.to_native(),
            node: node.to_string(),
            segment: node
                .segments()
                .get(idx)
                .map(ToString::to_string)
                .unwrap_or_default(),
        })
    }

    fn candidate_roots(&self) -> Vec<Vec<PathSegment>> {
        let mut roots = vec![Vec::new()];
        for key in COMBINATORS {
            let Some(branches) = self.root.get(key).and_then(Value::as_array) else {
                continue;
            };
            for idx in 0..branches.len() {
                let branch = vec![PathSegment::Key(key.to_string()), PathSegment::Index(idx)];
                let mut then = branch.clone();
                then.push(PathSegment::Key("then".to_string()));
                roots.push(branch);
                roots.push(then);
            }
        }
        roots
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SchemaDocument {
        SchemaDocument::parse(NormalizedPath::new("Schemas/test.json"), &value.to_string()).unwrap()
    }

    fn threats_patch() -> EnumPatch {
        EnumPatch::new(
            NodePath::parse("properties.objective.properties.threats.items").unwrap(),
            "enum",
            "markdownEnumDescriptions",
        )
        .with_entries([("11111111-1111-4111-8111-111111111111", "Alpha")])
    }

    #[test]
    fn replaces_node_found_from_root() {
        let mut d = doc(json!({"properties": {"detection_model": {"type": "string"}}}));
        let patch = EnumPatch::new(
            NodePath::parse("properties.detection_model").unwrap(),
            "enum",
            "markdownEnumDescriptions",
        );

        d.replace_enum(&patch).unwrap();

        assert_eq!(
            d.root()["properties"]["detection_model"],
            json!({"type": "string", "enum": [], "markdownEnumDescriptions": []})
        );
    }

    #[test]
    fn replaces_node_inside_all_of_then_branch() {
        let mut d = doc(json!({
            "allOf": [
                {"if": {}, "then": {"properties": {"objective": {"properties": {"threats": {"items": {"type": "string"}}}}}}}
            ]
        }));

        d.replace_enum(&threats_patch()).unwrap();

        let items = &d.root()["allOf"][0]["then"]["properties"]["objective"]["properties"]["threats"]["items"];
        assert_eq!(items["enum"], json!(["11111111-1111-4111-8111-111111111111"]));
        assert_eq!(items["markdownEnumDescriptions"], json!(["Alpha"]));
    }

    #[test]
    fn missing_node_names_the_segment_from_root() {
        let mut d = doc(json!({"properties": {"objective": {}}}));

        match d.replace_enum(&threats_patch()).unwrap_err() {
            Error::NodeNotFound { segment, node, .. } => {
                assert_eq!(segment, "properties");
                assert_eq!(node, "properties.objective.properties.threats.items");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_uses_four_spaces_and_keeps_unicode() {
        let d = doc(json!({"title": "Détection 🔑", "enum": []}));
        let rendered = String::from_utf8(d.render().unwrap()).unwrap();
        assert_eq!(rendered, "{\n    \"title\": \"Détection 🔑\",\n    \"enum\": []\n}\n");
    }
}
