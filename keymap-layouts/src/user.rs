//! User-defined layout maps loaded from TOML.
//!
//! ```toml
//! [[map]]
//! from = "qwerty"
//! to = "workman"
//! inverse = true
//!
//! [map.keys]
//! E = "R"
//! R = "W"
//! ```

use crate::error::LayoutError;
use crate::map::{normalize_layout_name, LayoutMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Contents of a layouts TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    #[serde(default, rename = "map")]
    pub maps: Vec<UserMap>,
}

/// One `[[map]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserMap {
    /// Source layout name
    pub from: String,
    /// Destination layout name
    pub to: String,
    /// Also register `to -> from`
    #[serde(default)]
    pub inverse: bool,
    pub keys: BTreeMap<String, String>,
}

impl LayoutFile {
    /// Load a layouts file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// Parse a layouts file; `origin` names the source in error messages
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, LayoutError> {
        toml::from_str(content).map_err(|source| LayoutError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}

impl UserMap {
    /// Display name, e.g. `qwerty->workman`
    pub fn name(&self) -> String {
        format!("{}->{}", self.from.trim(), self.to.trim())
    }

    /// Build the validated `LayoutMap` for this entry
    pub fn to_layout_map(&self) -> Result<LayoutMap, LayoutError> {
        if normalize_layout_name(&self.from).is_empty() || normalize_layout_name(&self.to).is_empty()
        {
            return Err(LayoutError::InvalidMapFormat(self.name()));
        }

        let map = LayoutMap::from_pairs(self.keys.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        self.with_context(map.validate())?;
        Ok(map)
    }

    /// Attach this entry's name to an error
    pub fn with_context<T>(&self, result: Result<T, LayoutError>) -> Result<T, LayoutError> {
        result.map_err(|e| LayoutError::Entry {
            map: self.name(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LayoutRegistry;
    use crate::MapKey;
    use std::io::Write;

    const WORKMAN: &str = r#"
[[map]]
from = "qwerty"
to = "workman"
inverse = true

[map.keys]
E = "R"
R = "W"
W = "D"
D = "H"
"#;

    #[test]
    fn test_parse_layout_file() {
        let file = LayoutFile::from_toml(WORKMAN, "test").unwrap();
        assert_eq!(file.maps.len(), 1);

        let entry = &file.maps[0];
        assert_eq!(entry.name(), "qwerty->workman");
        assert!(entry.inverse);
        assert_eq!(entry.keys.get("E").map(String::as_str), Some("R"));
    }

    #[test]
    fn test_empty_file_has_no_maps() {
        let file = LayoutFile::from_toml("", "empty").unwrap();
        assert!(file.maps.is_empty());
    }

    #[test]
    fn test_load_registers_inverse() {
        let mut registry = LayoutRegistry::with_builtins();
        let added = registry.load_from_toml(WORKMAN, "test").unwrap();
        assert_eq!(added, 2);
        assert_eq!(registry.len(), 10);

        let forward = registry.find(&MapKey::new("qwerty", "workman")).unwrap();
        assert_eq!(forward.map.get("E"), Some("R"));
        let back = registry.find(&MapKey::new("workman", "qwerty")).unwrap();
        assert_eq!(back.map.get("H"), Some("D"));
    }

    #[test]
    fn test_invalid_key_rejected_without_partial_load() {
        let toml = r#"
[[map]]
from = "qwerty"
to = "good"
keys = { A = "B" }

[[map]]
from = "qwerty"
to = "bad"
keys = { A = "b" }
"#;
        let mut registry = LayoutRegistry::new();
        let err = registry.load_from_toml(toml, "test").unwrap_err();
        match err {
            LayoutError::Entry { map, source } => {
                assert_eq!(map, "qwerty->bad");
                assert!(matches!(*source, LayoutError::InvalidKeyCode(ref t) if t == "b"));
            }
            other => panic!("expected Entry error, got {other:?}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_non_invertible_inverse_rejected() {
        let toml = r#"
[[map]]
from = "qwerty"
to = "lossy"
inverse = true
keys = { A = "X", B = "X" }
"#;
        let mut registry = LayoutRegistry::new();
        let err = registry.load_from_toml(toml, "test").unwrap_err();
        assert!(err.to_string().starts_with("Map qwerty->lossy: Map is not invertible"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[[map]]
from = "qwerty"
to = "x"
keys = {}
reverse = true
"#;
        assert!(matches!(
            LayoutFile::from_toml(toml, "test"),
            Err(LayoutError::Parse { .. })
        ));
    }

    #[test]
    fn test_blank_layout_name_rejected() {
        let toml = r#"
[[map]]
from = "qwerty"
to = " "
keys = { A = "B" }
"#;
        let mut registry = LayoutRegistry::new();
        assert!(matches!(
            registry.load_from_toml(toml, "test"),
            Err(LayoutError::InvalidMapFormat(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WORKMAN.as_bytes()).unwrap();

        let mut registry = LayoutRegistry::new();
        assert_eq!(registry.load_from_file(file.path()).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        match LayoutFile::from_file(&path) {
            Err(LayoutError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
