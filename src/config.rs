//! Layout configuration: builtin maps plus optional user layout files.

use crate::error::ConvertError;
use keymap_layouts::{layout_registry, LayoutRegistry};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the default user layouts file path
pub fn default_layouts_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keymap-converter")
        .join("layouts.toml")
}

/// Build the registry used for a run.
///
/// With `explicit` set, that file must exist and is merged over the builtins.
/// Otherwise the default user file is merged when present. Without any user
/// file the shared builtin registry is returned as is.
pub fn load_registry(explicit: Option<&Path>) -> Result<Cow<'static, LayoutRegistry>, ConvertError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_layouts_path();
            if !path.is_file() {
                debug!("No user layouts at {}", path.display());
                return Ok(Cow::Borrowed(layout_registry()));
            }
            path
        }
    };

    let mut registry = layout_registry().clone();
    let added = registry.load_from_file(&path)?;
    info!("Loaded {added} layout maps from {}", path.display());
    Ok(Cow::Owned(registry))
}
