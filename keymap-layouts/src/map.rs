//! `LayoutMap` and `MapKey` - the key-code table and its `(source, destination)` index key.

use crate::error::LayoutError;
use std::collections::HashMap;
use std::fmt;

/// Check whether `s` has the shape of a ZMK key-code token.
///
/// A token starts with an uppercase ASCII letter followed by uppercase letters,
/// digits or underscores (`Q`, `N1`, `SEMICOLON`, `C_VOL_UP`).
pub fn is_key_code(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
        _ => false,
    }
}

/// Normalize a layout name for lookup.
///
/// Case, surrounding whitespace and the separators `_`, `-` and ` ` are ignored,
/// so `colemak_dh`, `colemakdh` and `Colemak-DH` name the same layout.
pub fn normalize_layout_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// ---------------------------------------------------------------------------
// LayoutMap
// ---------------------------------------------------------------------------

/// Directional key-code table: source token -> destination token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutMap {
    keys: HashMap<String, String>,
}

impl LayoutMap {
    /// Create an empty map (converts nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(source, destination)` pairs.
    ///
    /// A repeated source keeps the last destination.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            keys: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Destination for `source`, if mapped
    pub fn get(&self, source: &str) -> Option<&str> {
        self.keys.get(source).map(String::as_str)
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.keys.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All pairs, sorted by source token
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .keys
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Build the reverse map (`inverse[v] == k` for every `(k, v)`).
    pub fn inverse(&self) -> Result<LayoutMap, LayoutError> {
        let mut reversed: HashMap<String, String> = HashMap::with_capacity(self.keys.len());
        for (source, destination) in self.pairs() {
            if let Some(first) = reversed.get(destination) {
                return Err(LayoutError::NotInvertible {
                    destination: destination.to_string(),
                    first: first.clone(),
                    second: source.to_string(),
                });
            }
            reversed.insert(destination.to_string(), source.to_string());
        }
        Ok(LayoutMap { keys: reversed })
    }

    /// Reject sources or destinations that are not key-code tokens.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (source, destination) in self.pairs() {
            for token in [source, destination] {
                if !is_key_code(token) {
                    return Err(LayoutError::InvalidKeyCode(token.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LayoutMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// ---------------------------------------------------------------------------
// MapKey
// ---------------------------------------------------------------------------

/// Registry key for one conversion direction, with normalized layout names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapKey {
    source: String,
    destination: String,
}

impl MapKey {
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: normalize_layout_name(source),
            destination: normalize_layout_name(destination),
        }
    }

    /// Parse a map string such as `qwerty->colemak_dh` or `qwerty:colemak_dh`.
    ///
    /// `->` takes precedence over `:`; the string is split on the first occurrence.
    pub fn parse(spec: &str) -> Result<Self, LayoutError> {
        let (source, destination) = ["->", ":"]
            .iter()
            .find_map(|sep| spec.split_once(sep))
            .ok_or_else(|| LayoutError::InvalidMapFormat(spec.to_string()))?;

        let key = Self::new(source, destination);
        if key.source.is_empty() || key.destination.is_empty() {
            return Err(LayoutError::InvalidMapFormat(spec.to_string()));
        }
        Ok(key)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Key for the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}
