//! Keyboard layout mapping tables for ZMK keymap conversion.
//!
//! A [`LayoutMap`] is a directional key-code table (e.g. QWERTY -> Colemak DH).
//! The [`LayoutRegistry`] indexes maps by `(source, destination)` layout name,
//! ships the builtin tables, and can merge user-defined maps from TOML files.

pub mod builtin;
pub mod error;
pub mod map;
pub mod registry;
pub mod user;

pub use error::LayoutError;
pub use map::{is_key_code, normalize_layout_name, LayoutMap, MapKey};
pub use registry::{layout_registry, LayoutRegistry, RegisteredMap};
pub use user::{LayoutFile, UserMap};
