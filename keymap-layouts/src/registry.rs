// Layout registry
// Central registry for looking up layout maps by (source, destination)

use crate::builtin::{BUILTIN_LAYOUTS, QWERTY};
use crate::error::LayoutError;
use crate::map::{normalize_layout_name, LayoutMap, MapKey};
use crate::user::LayoutFile;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// A map together with the layout names it was registered under
#[derive(Debug, Clone)]
pub struct RegisteredMap {
    pub key: MapKey,
    /// Source layout name as registered (e.g. "qwerty")
    pub source: String,
    /// Destination layout name as registered (e.g. "colemak_dh")
    pub destination: String,
    pub map: Arc<LayoutMap>,
}

/// Registry for layout maps
/// Keeps registration order for listing; lookups go through the `MapKey` index
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    entries: Vec<RegisteredMap>,
    by_key: HashMap<MapKey, usize>,
}

impl LayoutRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with builtin maps pre-loaded
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.load_builtins();
        registry
    }

    /// Load all builtin maps, each forward map followed by its inverse
    pub fn load_builtins(&mut self) {
        for (name, table) in BUILTIN_LAYOUTS {
            let map = LayoutMap::from_pairs(table.iter().copied());
            if let Err(e) = self.register_with_inverse(QWERTY, name, map) {
                warn!("Skipping builtin map {QWERTY}->{name}: {e}");
            }
        }
    }

    /// Register a map for `source -> destination`.
    /// Registering an existing pair replaces its map but keeps its listing position.
    pub fn register(&mut self, source: &str, destination: &str, map: LayoutMap) {
        let key = MapKey::new(source, destination);
        let entry = RegisteredMap {
            key: key.clone(),
            source: source.trim().to_string(),
            destination: destination.trim().to_string(),
            map: Arc::new(map),
        };

        match self.by_key.get(&key) {
            Some(&index) => {
                debug!("Replacing map {key}");
                self.entries[index] = entry;
            }
            None => {
                self.by_key.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Register `source -> destination` and its inverse `destination -> source`
    pub fn register_with_inverse(
        &mut self,
        source: &str,
        destination: &str,
        map: LayoutMap,
    ) -> Result<(), LayoutError> {
        let inverse = map.inverse()?;
        self.register(source, destination, map);
        self.register(destination, source, inverse);
        Ok(())
    }

    /// Find a map by key
    pub fn find(&self, key: &MapKey) -> Option<&RegisteredMap> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// Parse a map string (`src->dst` or `src:dst`) and look it up
    pub fn resolve(&self, spec: &str) -> Result<&RegisteredMap, LayoutError> {
        let key = MapKey::parse(spec)?;
        self.find(&key)
            .ok_or_else(|| LayoutError::UnknownMap(spec.to_string()))
    }

    /// All maps converting from `source`, sorted by destination name
    pub fn maps_from(&self, source: &str) -> Vec<&RegisteredMap> {
        let source = normalize_layout_name(source);
        let mut maps: Vec<&RegisteredMap> = self
            .entries
            .iter()
            .filter(|e| e.key.source() == source)
            .collect();
        maps.sort_by(|a, b| a.destination.cmp(&b.destination));
        maps
    }

    /// Destinations grouped by source.
    /// Sources appear in registration order; destinations are sorted.
    pub fn grouped(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, &str, Vec<&str>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(key, _, _)| *key == entry.key.source()) {
                Some((_, _, destinations)) => destinations.push(entry.destination.as_str()),
                None => groups.push((
                    entry.key.source(),
                    entry.source.as_str(),
                    vec![entry.destination.as_str()],
                )),
            }
        }

        groups
            .into_iter()
            .map(|(_, source, mut destinations)| {
                destinations.sort_unstable();
                (source, destinations)
            })
            .collect()
    }

    /// All registered maps in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredMap> {
        self.entries.iter()
    }

    /// Get the number of registered maps
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load user maps from a TOML file, returning how many maps were registered
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LayoutError> {
        let file = LayoutFile::from_file(path)?;
        self.load_layout_file(&file)
    }

    /// Load user maps from a TOML string
    pub fn load_from_toml(&mut self, content: &str, origin: &str) -> Result<usize, LayoutError> {
        let file = LayoutFile::from_toml(content, origin)?;
        self.load_layout_file(&file)
    }

    /// Register every entry of a layout file.
    /// All entries are validated first, so a bad entry leaves the registry untouched.
    pub fn load_layout_file(&mut self, file: &LayoutFile) -> Result<usize, LayoutError> {
        let mut prepared = Vec::with_capacity(file.maps.len());
        for entry in &file.maps {
            let map = entry.to_layout_map()?;
            let inverse = if entry.inverse {
                Some(entry.with_context(map.inverse())?)
            } else {
                None
            };
            prepared.push((entry, map, inverse));
        }

        let mut count = 0;
        for (entry, map, inverse) in prepared {
            debug!("Registering user map {}->{} ({} keys)", entry.from, entry.to, map.len());
            self.register(&entry.from, &entry.to, map);
            count += 1;
            if let Some(inverse) = inverse {
                self.register(&entry.to, &entry.from, inverse);
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Global layout registry singleton
/// Use `layout_registry()` to access
static REGISTRY: std::sync::OnceLock<LayoutRegistry> = std::sync::OnceLock::new();

/// Get the global layout registry
/// Initializes with builtin maps on first access
pub fn layout_registry() -> &'static LayoutRegistry {
    REGISTRY.get_or_init(LayoutRegistry::with_builtins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_builtins() {
        let registry = LayoutRegistry::with_builtins();

        // Four layouts, both directions
        assert_eq!(registry.len(), 8);

        let colemak = registry.find(&MapKey::new("qwerty", "colemak_dh")).unwrap();
        assert_eq!(colemak.destination, "colemak_dh");
        assert_eq!(colemak.map.get("E"), Some("F"));

        let back = registry.find(&MapKey::new("colemakdh", "qwerty")).unwrap();
        assert_eq!(back.source, "colemak_dh");
        assert_eq!(back.map.get("F"), Some("E"));
        assert_eq!(back.map.get("APOS"), Some("P"));
    }

    #[test]
    fn test_resolve() {
        let registry = LayoutRegistry::with_builtins();

        let entry = registry.resolve("qwerty:graphite").unwrap();
        assert_eq!(entry.map.get("Y"), Some("SQT"));

        assert!(matches!(
            registry.resolve("qwerty->dvorak"),
            Err(LayoutError::UnknownMap(s)) if s == "qwerty->dvorak"
        ));
        assert!(matches!(
            registry.resolve("graphite->canary"),
            Err(LayoutError::UnknownMap(_))
        ));
        assert!(matches!(
            registry.resolve("qwerty"),
            Err(LayoutError::InvalidMapFormat(_))
        ));
    }

    #[test]
    fn test_maps_from_sorted_by_destination() {
        let registry = LayoutRegistry::with_builtins();

        let destinations: Vec<&str> = registry
            .maps_from("QWERTY")
            .iter()
            .map(|e| e.destination.as_str())
            .collect();
        assert_eq!(destinations, ["canary", "colemak_dh", "focal", "graphite"]);

        assert!(registry.maps_from("dvorak").is_empty());
    }

    #[test]
    fn test_grouped() {
        let registry = LayoutRegistry::with_builtins();

        let groups = registry.grouped();
        assert_eq!(groups.len(), 5);
        assert_eq!(
            groups[0],
            ("qwerty", vec!["canary", "colemak_dh", "focal", "graphite"])
        );
        assert_eq!(groups[1], ("colemak_dh", vec!["qwerty"]));
        assert_eq!(groups[4], ("focal", vec!["qwerty"]));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = LayoutRegistry::with_builtins();
        registry.register("qwerty", "Colemak-DH", LayoutMap::from_pairs([("Q", "W")]));

        assert_eq!(registry.len(), 8);
        let entry = registry.resolve("qwerty->colemak_dh").unwrap();
        assert_eq!(entry.map.len(), 1);
        assert_eq!(entry.destination, "Colemak-DH");
        assert_eq!(registry.iter().next().unwrap().destination, "Colemak-DH");
    }

    #[test]
    fn test_register_with_inverse_rejects_non_bijection() {
        let mut registry = LayoutRegistry::new();
        let result =
            registry.register_with_inverse("a", "b", LayoutMap::from_pairs([("A", "X"), ("B", "X")]));
        assert!(matches!(result, Err(LayoutError::NotInvertible { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_global_registry() {
        let registry = layout_registry();
        assert!(!registry.is_empty());

        // Should return the same instance
        let registry2 = layout_registry();
        assert!(std::ptr::eq(registry, registry2));
    }
}
