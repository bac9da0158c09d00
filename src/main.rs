//! ZMK Keymap Layout Converter CLI
//!
//! Rewrites the BASE layer bindings of a `.keymap` file for another keyboard layout.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

// CLI definitions
mod cli;
use cli::Cli;

use keymap_converter::commands::{convert, list};
use keymap_converter::config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout only carries results)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = config::load_registry(cli.layouts.as_deref())?;
    debug!("{} layout maps available", registry.len());

    if cli.list_maps {
        list::print_available_maps(&registry);
        return Ok(());
    }

    let Some(options) = cli.convert_options() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "one of the arguments -m/--map --all is required",
            )
            .exit();
    };

    match convert::run(&registry, &options) {
        Ok(_) => Ok(()),
        Err(e) if e.is_map_selection() => {
            eprintln!("[ERROR] {e}\n");
            eprint!("{}", list::format_available_maps(&registry));
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
