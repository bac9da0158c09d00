// ZMK keymap layout converter - Shared Library
// Block locating, key-code rewriting, layout configuration and command handlers

pub mod commands;
pub mod config;
pub mod convert;
pub mod error;

pub use convert::{convert_keymap, rewrite_tokens, BlockPattern, BlockSpan, Conversion, DEFAULT_LAYER};
pub use error::ConvertError;
pub use keymap_layouts::{layout_registry, LayoutError, LayoutMap, LayoutRegistry, MapKey};
