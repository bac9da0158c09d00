// CLI definitions using clap

use clap::{ArgGroup, Parser};
use keymap_converter::commands::{ConvertOptions, Selection};
use keymap_converter::DEFAULT_LAYER;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keymap-converter")]
#[command(
    author,
    version,
    about = "Convert ZMK keymap files between layouts (e.g. QWERTY->Colemak DH)"
)]
#[command(group(ArgGroup::new("selection").args(["map", "all"])))]
pub struct Cli {
    /// Conversion map to apply (e.g. qwerty->colemak_dh, qwerty:colemak_dh, colemak_dh->qwerty)
    #[arg(short, long, value_name = "MAP")]
    pub map: Option<String>,

    /// Convert using every available qwerty->* map
    #[arg(long)]
    pub all: bool,

    /// Path to the input .keymap file
    #[arg(
        short = 'i',
        long = "in",
        value_name = "FILE",
        required_unless_present = "list_maps"
    )]
    pub input: Option<PathBuf>,

    /// Path to write the converted .keymap file (default: alongside input)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List available maps and exit
    #[arg(long)]
    pub list_maps: bool,

    /// Layer node whose bindings are converted
    #[arg(long, value_name = "NAME", default_value = DEFAULT_LAYER)]
    pub layer: String,

    /// Extra layout maps (TOML); default: ~/.config/keymap-converter/layouts.toml if present
    #[arg(long, value_name = "FILE")]
    pub layouts: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Conversion options, or None when neither --map nor --all was given
    pub fn convert_options(&self) -> Option<ConvertOptions> {
        let selection = match (&self.map, self.all) {
            (Some(map), _) => Selection::Map(map.clone()),
            (None, true) => Selection::AllFromQwerty,
            (None, false) => return None,
        };
        Some(ConvertOptions {
            selection,
            input: self.input.clone()?,
            output: self.output.clone(),
            layer: self.layer.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_single_map() {
        let cli = Cli::try_parse_from(["keymap-converter", "-m", "qwerty->graphite", "-i", "a.keymap"])
            .unwrap();
        let options = cli.convert_options().unwrap();
        assert_eq!(options.selection, Selection::Map("qwerty->graphite".into()));
        assert_eq!(options.input, PathBuf::from("a.keymap"));
        assert_eq!(options.output, None);
        assert_eq!(options.layer, "BASE");
    }

    #[test]
    fn test_parse_all_with_layer() {
        let cli = Cli::try_parse_from([
            "keymap-converter",
            "--all",
            "--in",
            "a.keymap",
            "--layer",
            "DEF",
        ])
        .unwrap();
        let options = cli.convert_options().unwrap();
        assert_eq!(options.selection, Selection::AllFromQwerty);
        assert_eq!(options.layer, "DEF");
    }

    #[test]
    fn test_map_and_all_conflict() {
        let err = Cli::try_parse_from([
            "keymap-converter",
            "-m",
            "qwerty:focal",
            "--all",
            "-i",
            "a.keymap",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_input_required_unless_listing() {
        let err = Cli::try_parse_from(["keymap-converter", "--all"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["keymap-converter", "--list-maps"]).unwrap();
        assert!(cli.list_maps);
        assert!(cli.convert_options().is_none());
    }

    #[test]
    fn test_no_selection() {
        let cli = Cli::try_parse_from(["keymap-converter", "-i", "a.keymap"]).unwrap();
        assert!(cli.convert_options().is_none());
    }
}
