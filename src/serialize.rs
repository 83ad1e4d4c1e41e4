//! Deterministic config file serialization.
//!
//! Format is chosen by file extension: `.json` gets 4-space indentation,
//! `.yaml`/`.yml` goes through serde_yaml. In both cases object keys are
//! recursively sorted with plain lexicographic comparison so repeated runs
//! produce byte-identical files. Anything else is refused before touching
//! the disk.

use serde::Serialize;
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("unsupported config format: .{0}")]
    UnsupportedFormat(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize `value` and write it to `path`, whole-buffer, single shot.
pub fn write_config<T: Serialize>(value: &T, path: &Path) -> Result<(), SerializeError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let content = match ext {
        "json" => to_sorted_json(value)?,
        "yaml" | "yml" => to_sorted_yaml(value)?,
        other => return Err(SerializeError::UnsupportedFormat(other.to_string())),
    };
    fs::write(path, content).map_err(|source| SerializeError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })
}

/// Stable-key-order JSON with 4-space indentation.
pub fn to_sorted_json<T: Serialize>(value: &T) -> Result<String, SerializeError> {
    let sorted = sort_keys(serde_json::to_value(value)?);
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    sorted.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).unwrap())
}

/// YAML with sorted keys.
pub fn to_sorted_yaml<T: Serialize>(value: &T) -> Result<String, SerializeError> {
    let sorted = sort_keys(serde_json::to_value(value)?);
    Ok(serde_yaml::to_string(&sorted)?)
}

/// Recursively sort object keys; serde_json's preserve_order map keeps the
/// sorted insertion order through both serializers.
fn sort_keys(value: Json) -> Json {
    match value {
        Json::Object(map) => {
            let mut entries: Vec<(String, Json)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = Map::new();
            for (k, v) in entries {
                out.insert(k, sort_keys(v));
            }
            Json::Object(out)
        }
        Json::Array(items) => Json::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_json_keys_sorted_and_indented() {
        let v = json!({ "zed": 1, "alpha": { "b": 2, "a": [ { "y": 0, "x": 0 } ] } });
        let s = to_sorted_json(&v).unwrap();
        assert_eq!(
            s,
            "{\n    \"alpha\": {\n        \"a\": [\n            {\n                \"x\": 0,\n                \"y\": 0\n            }\n        ],\n        \"b\": 2\n    },\n    \"zed\": 1\n}"
        );
    }

    #[test]
    fn test_yaml_keys_sorted() {
        let v = json!({ "b": 1, "a": 2 });
        let s = to_sorted_yaml(&v).unwrap();
        assert_eq!(s, "a: 2\nb: 1\n");
    }

    #[test]
    fn test_write_selects_format_by_extension() {
        let dir = tempdir().unwrap();
        let v = json!({ "b": 1, "a": 2 });

        let json_path = dir.path().join(".eslintrc.json");
        write_config(&v, &json_path).unwrap();
        assert!(fs::read_to_string(&json_path)
            .unwrap()
            .starts_with("{\n    \"a\": 2"));

        let yaml_path = dir.path().join(".eslintrc.yaml");
        write_config(&v, &yaml_path).unwrap();
        assert_eq!(fs::read_to_string(&yaml_path).unwrap(), "a: 2\nb: 1\n");
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".eslintrc.toml");
        let err = write_config(&json!({}), &path).unwrap_err();
        assert!(matches!(err, SerializeError::UnsupportedFormat(ref e) if e == "toml"));
        assert!(!path.exists());
    }
}
