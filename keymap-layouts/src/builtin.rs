// Builtin layout tables
// Hardcoded QWERTY -> <layout> maps for the alpha block (no external TOML needed).
// Each table is a bijection, so the reverse direction is derived with `LayoutMap::inverse`.

/// Source layout of every builtin table
pub const QWERTY: &str = "qwerty";

/// QWERTY -> Colemak DH
pub const QWERTY_TO_COLEMAK_DH: &[(&str, &str)] = &[
    ("Q", "Q"), ("W", "W"), ("E", "F"), ("R", "P"), ("T", "B"),
    ("Y", "J"), ("U", "L"), ("I", "U"), ("O", "Y"), ("P", "APOS"),
    ("A", "A"), ("S", "R"), ("D", "S"), ("F", "T"), ("G", "G"),
    ("H", "M"), ("J", "N"), ("K", "E"), ("L", "I"), ("SEMICOLON", "O"),
    ("Z", "Z"), ("X", "X"), ("C", "C"), ("V", "D"), ("B", "V"),
    ("N", "K"), ("M", "H"),
];

/// QWERTY -> Graphite
pub const QWERTY_TO_GRAPHITE: &[(&str, &str)] = &[
    ("Q", "B"), ("W", "L"), ("E", "D"), ("R", "W"), ("T", "Z"),
    ("Y", "SQT"), ("U", "F"), ("I", "O"), ("O", "U"), ("P", "J"),
    ("A", "N"), ("S", "R"), ("D", "T"), ("F", "S"), ("G", "G"),
    ("H", "Y"), ("J", "H"), ("K", "A"), ("L", "E"), ("SEMICOLON", "I"),
    ("Z", "Q"), ("X", "X"), ("C", "M"), ("V", "C"), ("B", "V"),
    ("N", "K"), ("M", "P"),
];

/// QWERTY -> Canary
pub const QWERTY_TO_CANARY: &[(&str, &str)] = &[
    ("Q", "W"), ("W", "L"), ("E", "Y"), ("R", "P"), ("T", "B"),
    ("Y", "Z"), ("U", "F"), ("I", "O"), ("O", "U"), ("P", "APOS"),
    ("A", "C"), ("S", "R"), ("D", "S"), ("F", "T"), ("G", "G"),
    ("H", "M"), ("J", "N"), ("K", "E"), ("L", "I"), ("SEMICOLON", "A"),
    ("Z", "Q"), ("X", "J"), ("C", "V"), ("V", "D"), ("B", "K"),
    ("N", "X"), ("M", "H"),
];

/// QWERTY -> Focal
pub const QWERTY_TO_FOCAL: &[(&str, &str)] = &[
    ("Q", "V"), ("W", "L"), ("E", "H"), ("R", "G"), ("T", "K"),
    ("Y", "Q"), ("U", "F"), ("I", "O"), ("O", "U"), ("P", "J"),
    ("A", "S"), ("S", "R"), ("D", "N"), ("F", "T"), ("G", "B"),
    ("H", "Y"), ("J", "C"), ("K", "A"), ("L", "E"), ("SEMICOLON", "I"),
    ("Z", "Z"), ("X", "X"), ("C", "M"), ("V", "D"), ("B", "P"),
    ("N", "APOS"), ("M", "W"),
];

/// Builtin destination layouts, in registration order.
/// Each is registered as `qwerty -> <name>` followed by `<name> -> qwerty`.
pub const BUILTIN_LAYOUTS: &[(&str, &[(&str, &str)])] = &[
    ("colemak_dh", QWERTY_TO_COLEMAK_DH),
    ("graphite", QWERTY_TO_GRAPHITE),
    ("canary", QWERTY_TO_CANARY),
    ("focal", QWERTY_TO_FOCAL),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutMap;

    #[test]
    fn test_tables_cover_alpha_block() {
        for (name, table) in BUILTIN_LAYOUTS {
            let map = LayoutMap::from_pairs(table.iter().copied());
            assert_eq!(map.len(), 27, "{name}: duplicate source key");
            for letter in 'A'..='Z' {
                assert!(
                    map.contains_source(&letter.to_string()),
                    "{name}: missing {letter}"
                );
            }
            assert!(map.contains_source("SEMICOLON"), "{name}: missing SEMICOLON");
        }
    }

    #[test]
    fn test_tables_are_valid_and_invertible() {
        for (name, table) in BUILTIN_LAYOUTS {
            let map = LayoutMap::from_pairs(table.iter().copied());
            assert!(map.validate().is_ok(), "{name}: invalid key code");
            let inverse = map
                .inverse()
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(inverse.len(), map.len());
        }
    }

    #[test]
    fn test_colemak_dh_home_row() {
        let map = LayoutMap::from_pairs(QWERTY_TO_COLEMAK_DH.iter().copied());
        let home: Vec<&str> = ["A", "S", "D", "F", "G", "H", "J", "K", "L", "SEMICOLON"]
            .iter()
            .filter_map(|k| map.get(k))
            .collect();
        assert_eq!(home, ["A", "R", "S", "T", "G", "M", "N", "E", "I", "O"]);
    }
}
