//! Command handlers for the CLI application.
//!
//! - `convert`: rewrite a keymap with one map (`--map`) or every `qwerty->*` map (`--all`)
//! - `list`: print the available maps (`--list-maps`)

pub mod convert;
pub mod list;

pub use convert::{ConvertOptions, Selection};
