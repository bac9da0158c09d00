//! Map listing (`--list-maps`).

use keymap_layouts::LayoutRegistry;
use std::fmt::Write;

/// Format the available maps, one source layout per line.
///
/// ```text
/// Available maps:
///   qwerty     -> canary, colemak_dh, focal, graphite
///   colemak_dh -> qwerty
/// ```
pub fn format_available_maps(registry: &LayoutRegistry) -> String {
    let groups = registry.grouped();
    let width = groups.iter().map(|(src, _)| src.len()).max().unwrap_or(0);

    let mut out = String::from("Available maps:\n");
    for (src, destinations) in &groups {
        let _ = writeln!(out, "  {src:<width$} -> {}", destinations.join(", "));
    }
    out
}

/// Print the available maps to stdout
pub fn print_available_maps(registry: &LayoutRegistry) {
    print!("{}", format_available_maps(registry));
}
