//! Endpoint descriptors loaded from JSON or YAML documents.
//!
//! A descriptor document is a single object whose keys are the descriptor's
//! fields. `path` is required, `method` is optional and defaults to `GET`.
//! Both stay ordinary fields; the known keys keep them out of the derived
//! values, exactly as for a hand-written descriptor type.
//!
//! ```yaml
//! path: /user/{id}/posts
//! method: GET
//! id: 42
//! filter:
//!   status: open
//! ```
//!
//! # Examples
//!
//! ```
//! use paramkit_core::{DescriptorDocument, Endpoint};
//!
//! let doc = DescriptorDocument::parse(r#"{"path": "/user/{id}", "id": 7, "q": "x"}"#)?;
//! assert_eq!(doc.parsed_path(), "/user/7");
//! assert_eq!(doc.parameters().keys().collect::<Vec<_>>(), vec!["q"]);
//! # Ok::<(), paramkit_core::Error>(())
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::endpoint::{Endpoint, Method};
use crate::reflect::{Field, Reflect};
use crate::Error;

// External imports (alphabetized)
use serde_json::{Map as JsonMap, Value as JsonValue};
use tokio::fs;

/// An endpoint descriptor backed by a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorDocument {
    path: String,
    method: Method,
    fields: JsonMap<String, JsonValue>,
}

impl DescriptorDocument {
    /// Load a descriptor from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse(&content).map_err(|e| {
            Error::descriptor(format!("Failed to load {}: {}", path.display(), e))
        })
    }

    /// Parse a descriptor from JSON or YAML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        // Try JSON first
        if let Ok(json) = serde_json::from_str::<JsonValue>(content) {
            return Self::from_value(json);
        }

        // If JSON parsing fails, try YAML
        let json: JsonValue = serde_yaml::from_str(content)?;
        Self::from_value(json)
    }

    /// Build a descriptor from an already parsed document
    pub fn from_value(value: JsonValue) -> crate::Result<Self> {
        let JsonValue::Object(fields) = value else {
            return Err(Error::descriptor("descriptor must be an object"));
        };

        let path = fields
            .get("path")
            .and_then(JsonValue::as_str)
            .map(String::from)
            .ok_or_else(|| Error::descriptor("missing string field 'path'"))?;

        let method = match fields.get("method") {
            None | Some(JsonValue::Null) => Method::default(),
            Some(JsonValue::String(verb)) => verb.parse()?,
            Some(other) => {
                return Err(Error::descriptor(format!(
                    "'method' must be a string, got {other}"
                )))
            }
        };

        log::debug!("Loaded descriptor {} {} with {} fields", method, path, fields.len());
        Ok(Self {
            path,
            method,
            fields,
        })
    }
}

impl Reflect for DescriptorDocument {
    fn fields(&self) -> Vec<Field<'_>> {
        self.fields.fields()
    }
}

impl Endpoint for DescriptorDocument {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> Method {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_parse_json() -> crate::Result<()> {
        let doc = DescriptorDocument::parse(
            r#"{"path": "/user/{id}", "method": "delete", "id": 3, "force": true}"#,
        )?;
        assert_eq!(doc.method(), Method::Delete);
        assert_eq!(doc.parsed_path(), "/user/3");
        assert_eq!(doc.parameters().into_value(), json!({"force": true}));
        Ok(())
    }

    #[test]
    fn test_parse_yaml() -> crate::Result<()> {
        let yaml = "path: /search\nquery: rust\nfilter:\n  status: open\n  labels: [bug, ui]\n";
        let doc = DescriptorDocument::parse(yaml)?;
        assert_eq!(doc.method(), Method::Get);
        assert_eq!(doc.parsed_path(), "/search");
        assert_eq!(
            doc.parameters().into_value(),
            json!({"query": "rust", "filter": {"status": "open", "labels": ["bug", "ui"]}})
        );
        Ok(())
    }

    #[test]
    fn test_null_field_is_opaque() -> crate::Result<()> {
        let doc = DescriptorDocument::from_value(json!({"path": "/c/{cursor}", "cursor": null, "n": 1}))?;
        assert_eq!(doc.parsed_path(), "/c/null");
        assert_eq!(doc.parameters().into_value(), json!({"n": 1}));
        Ok(())
    }

    #[test]
    fn test_non_letter_identifiers() -> crate::Result<()> {
        let doc = DescriptorDocument::from_value(json!({
            "path": "/x/{}/{id1}",
            "": 5,
            "id1": 2,
            "k": {"path": "p"}
        }))?;
        assert_eq!(doc.path_keys().into_vec(), vec![String::new()]);
        assert_eq!(doc.parsed_path(), "/x/5/2");
        // `{id1}` is substituted but not a path key, so it stays a parameter
        assert_eq!(
            doc.parameters().into_value(),
            json!({"id1": 2, "k": {"path": "p"}})
        );
        Ok(())
    }

    #[test]
    fn test_rejects_missing_path() {
        let err = DescriptorDocument::from_value(json!({"method": "GET"}));
        assert!(matches!(err, Err(Error::Descriptor(_))));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(DescriptorDocument::from_value(json!(["path"])).is_err());
        assert!(DescriptorDocument::parse("just a string").is_err());
    }

    #[test]
    fn test_rejects_bad_method() {
        assert!(DescriptorDocument::from_value(json!({"path": "/", "method": "FETCH"})).is_err());
        assert!(DescriptorDocument::from_value(json!({"path": "/", "method": 1})).is_err());
    }

    #[tokio::test]
    async fn test_from_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("get_user.yaml");
        tokio::fs::write(&file_path, "path: /user/{id}\nid: 42\nverbose: true\n").await?;

        let doc = DescriptorDocument::from_file(&file_path).await?;
        assert_eq!(doc.path(), "/user/{id}");
        assert_eq!(doc.parsed_path(), "/user/42");
        assert_eq!(doc.parameters().into_value(), json!({"verbose": true}));
        Ok(())
    }
}
