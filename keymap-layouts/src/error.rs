//! Layout table error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from building, resolving or loading layout maps
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Map string is not `src->dst` or `src:dst`
    #[error("Invalid map format '{0}'. Expected 'src->dst' or 'src:dst'.")]
    InvalidMapFormat(String),

    /// No map registered for the requested layout pair
    #[error("Map '{0}' not found.")]
    UnknownMap(String),

    /// Two source keys share a destination, so the map has no inverse
    #[error("Map is not invertible: {first} and {second} both map to {destination}")]
    NotInvertible {
        destination: String,
        first: String,
        second: String,
    },

    /// Key that can never match a key-code token
    #[error("Invalid key code '{0}' (expected uppercase letters, digits and '_', starting with a letter)")]
    InvalidKeyCode(String),

    /// Error inside one entry of a layout file
    #[error("Map {map}: {source}")]
    Entry {
        map: String,
        #[source]
        source: Box<LayoutError>,
    },

    /// Layout file could not be read
    #[error("Failed to read layout file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Layout file is not valid TOML for the expected schema
    #[error("Failed to parse layouts from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
