//! Keymap conversion command handler.

use crate::convert::BlockPattern;
use crate::error::ConvertError;
use keymap_layouts::builtin::QWERTY;
use keymap_layouts::{LayoutRegistry, RegisteredMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which maps to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One map string, e.g. `qwerty->colemak_dh`
    Map(String),
    /// Every `qwerty->*` map
    AllFromQwerty,
}

/// Options for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub selection: Selection,
    pub input: PathBuf,
    /// Explicit output path (single map only)
    pub output: Option<PathBuf>,
    /// Layer node whose bindings are converted
    pub layer: String,
}

/// A map paired with the file it will be written to
#[derive(Debug)]
pub struct Job<'r> {
    pub map: &'r RegisteredMap,
    pub output: PathBuf,
}

/// Directory that default outputs are written to
fn output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Default output path: `<input dir>/<destination>.keymap`
pub fn default_output_path(input: &Path, destination: &str) -> PathBuf {
    output_dir(input).join(format!("{destination}.keymap"))
}

/// Resolve the selected maps and their output paths.
/// Map errors are reported before the input file is looked at.
pub fn plan<'r>(
    registry: &'r LayoutRegistry,
    options: &ConvertOptions,
) -> Result<Vec<Job<'r>>, ConvertError> {
    let jobs = match &options.selection {
        Selection::Map(spec) => {
            let map = registry.resolve(spec)?;
            let output = options
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(&options.input, &map.destination));
            vec![Job { map, output }]
        }
        Selection::AllFromQwerty => {
            let maps = registry.maps_from(QWERTY);
            if maps.is_empty() {
                return Err(ConvertError::NoQwertyMaps);
            }
            if options.output.is_some() {
                warn!("--out is ignored when using --all");
            }
            maps.into_iter()
                .map(|map| Job {
                    map,
                    output: default_output_path(&options.input, &map.destination),
                })
                .collect()
        }
    };
    Ok(jobs)
}

/// Convert the input keymap with every selected map and write the results.
/// Returns the written paths in order.
pub fn run(registry: &LayoutRegistry, options: &ConvertOptions) -> Result<Vec<PathBuf>, ConvertError> {
    let jobs = plan(registry, options)?;

    let pattern = BlockPattern::new(&options.layer).map_err(|source| ConvertError::Layer {
        layer: options.layer.clone(),
        source,
    })?;

    if !options.input.is_file() {
        return Err(ConvertError::InputNotFound(options.input.clone()));
    }
    let contents = std::fs::read_to_string(&options.input).map_err(|source| ConvertError::Read {
        path: options.input.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        debug!(
            "Applying {}->{} ({} keys) to layer {}",
            job.map.source,
            job.map.destination,
            job.map.map.len(),
            pattern.layer()
        );

        let conversion = pattern.convert(&contents, &job.map.map);
        if !conversion.block_found {
            warn!(
                "No {} bindings block found in {}; writing it unchanged",
                pattern.layer(),
                options.input.display()
            );
        }

        std::fs::write(&job.output, &conversion.output).map_err(|source| ConvertError::Write {
            path: job.output.clone(),
            source,
        })?;
        info!(
            "{} tokens rewritten for {}",
            conversion.replaced, job.map.destination
        );
        println!(
            "[OK] Converted {} -> {}",
            options.input.display(),
            job.output.display()
        );
        written.push(job.output);
    }

    Ok(written)
}
