use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;

use domdef::io::{WriteOptions, load, write_target};
use domdef::{DomainDefinition, Target, targets};

pub mod vmd;

/// Path argument that selects standard output instead of a file.
const STDOUT_PATH: &str = "-";

/// Aggregated IO parameters collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: PathBuf,
    pub offset: i32,
    /// Requested outputs in the order they are written; `None` means stdout.
    pub outputs: Vec<(Target, Option<PathBuf>)>,
}

/// Sets up stderr logging: `info` by default, `debug` when verbose, `RUST_LOG` wins.
pub fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    if let Ok(filters) = std::env::var(DEFAULT_FILTER_ENV) {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Loads the domain definition named by the parameters.
pub fn load_input(params: &IoParameters) -> Result<DomainDefinition> {
    let definition = load(&params.input, params.offset).with_context(|| {
        format!(
            "Failed to load domain definitions from {}",
            params.input.display()
        )
    })?;

    log::debug!(
        "loaded {} domains and {} compounds (resids {}..{}, offset {})",
        definition.domains().len(),
        definition.compounds().len(),
        definition.first(),
        definition.last(),
        definition.offset()
    );

    Ok(definition)
}

/// Writes every requested output in order, stopping at the first failure.
pub fn save_outputs(
    definition: &DomainDefinition,
    params: &IoParameters,
    options: &WriteOptions,
) -> Result<()> {
    for (target, output) in &params.outputs {
        let output = output.as_deref().filter(|path| *path != Path::new(STDOUT_PATH));
        save_output(definition, *target, output, options)?;
        if let Some(path) = output {
            log_usage_hint(*target, path);
        }
    }
    Ok(())
}

fn save_output(
    definition: &DomainDefinition,
    target: Target,
    output: Option<&Path>,
    options: &WriteOptions,
) -> Result<()> {
    log::debug!(
        "writing {} ({}) to {}",
        target,
        targets::describe(target),
        output.map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
    );

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_target(&mut writer, definition, target, options).with_context(|| {
                format!("Failed to write {} output to {}", target, path.display())
            })?;
            writer.flush().context("Failed to flush output writer")?
        }
        None => {
            let stdout = stdio::stdout();
            let handle = stdout.lock();
            let mut writer = BufWriter::new(handle);
            write_target(&mut writer, definition, target, options)
                .with_context(|| format!("Failed to write {} output to stdout", target))?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

fn log_usage_hint(target: Target, path: &Path) {
    let path = path.display();
    match target {
        Target::Domdef => log::info!("Wrote domain definitions to '{}'", path),
        Target::Vmd => log::info!("Load macros with 'source {}' in VMD", path),
        Target::Bendix => log::info!("Wrote domains to Bendix helix file '{}'", path),
        Target::Pymol => log::info!("Load selection with '@{}' in PyMOL", path),
        Target::Charmm => log::info!(
            "Add SELECTION definitions to Charmm script with 'stream \"{}\"'",
            path
        ),
        Target::Xvg => log::info!("Wrote xvg file with secondary structure graph to '{}'", path),
    }
}
