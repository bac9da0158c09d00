//! Conversion error types

use keymap_layouts::LayoutError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the conversion command.
/// All of them are raised before or while handling files; the block rewrite itself cannot fail.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Map selection or user layout file error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Input keymap does not exist or is not a file
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// `--all` found nothing to convert
    #[error("No qwerty->* maps available.")]
    NoQwertyMaps,

    /// Layer name produced an unusable block pattern
    #[error("Invalid layer name '{layer}': {source}")]
    Layer {
        layer: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True for a malformed or unknown `--map` value, where the caller should
    /// show the available maps
    pub fn is_map_selection(&self) -> bool {
        matches!(
            self,
            ConvertError::Layout(LayoutError::InvalidMapFormat(_) | LayoutError::UnknownMap(_))
        )
    }
}
