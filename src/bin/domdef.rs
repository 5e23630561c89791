use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod commands;

use commands::IoParameters;
use commands::vmd::VmdArgs;
use domdef::Target;
use domdef::io::WriteOptions;

#[derive(Parser, Debug)]
#[command(
    name = "domdef",
    about = "Read a domain definition file and write selection macros for VMD, PyMOL, CHARMM, Bendix, and XVG.",
    long_about = "Read a domain definition file and write selection macros for VMD, PyMOL, CHARMM, Bendix, and XVG.\n\n\
Input lines are 'name start_resid end_resid'. Lines beginning with '@name' define compound \
selections from previously defined names using | (or), & (and), ! (not) and parentheses. \
Empty lines and lines starting with '#' are ignored.",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Domain definition file.
    #[arg(value_name = "DOMAIN_FILE")]
    input: PathBuf,
    /// Rewrite the domain definitions to FILE ('-' or omitted: stdout).
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,
    /// VMD Tcl output defining macro selections.
    #[arg(short = 't', long = "vmd", value_name = "FILE")]
    vmd: Option<PathBuf>,
    /// Helix definition file for Bendix.
    #[arg(short = 'b', long = "bendix", value_name = "FILE")]
    bendix: Option<PathBuf>,
    /// PyMOL output defining selections.
    #[arg(short = 'p', long = "pymol", value_name = "FILE")]
    pymol: Option<PathBuf>,
    /// CHARMM output defining selections.
    #[arg(short = 'c', long = "charmm", value_name = "FILE")]
    charmm: Option<PathBuf>,
    /// XVG output of secondary structure blocks.
    #[arg(short = 'x', long = "xvg", value_name = "FILE")]
    xvg: Option<PathBuf>,
    /// Add OFFSET to the resids in the domain file.
    #[arg(
        short = 'n',
        long = "offset",
        value_name = "OFFSET",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    offset: i32,
    #[command(flatten)]
    vmd_args: VmdArgs,
    /// Verbose output. See more with e.g. RUST_LOG=trace
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn io_parameters(&self) -> IoParameters {
        let mut outputs = vec![(Target::Domdef, self.file.clone())];
        let optional = [
            (Target::Vmd, &self.vmd),
            (Target::Bendix, &self.bendix),
            (Target::Pymol, &self.pymol),
            (Target::Charmm, &self.charmm),
            (Target::Xvg, &self.xvg),
        ];
        outputs.extend(
            optional
                .into_iter()
                .filter_map(|(target, path)| path.clone().map(|p| (target, Some(p)))),
        );

        IoParameters {
            input: self.input.clone(),
            offset: self.offset,
            outputs,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    let io_params = cli.io_parameters();
    let options = WriteOptions::from(&cli.vmd_args);

    let definition = commands::load_input(&io_params)?;
    commands::save_outputs(&definition, &io_params, &options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn outputs_follow_flag_order_with_stdout_default() {
        let cli = Cli::parse_from(["domdef", "adk.dom", "-x", "g.xvg", "-t", "m.tcl", "-n", "-3"]);
        let params = cli.io_parameters();

        assert_eq!(params.offset, -3);
        assert_eq!(
            params.outputs,
            vec![
                (Target::Domdef, None),
                (Target::Vmd, Some(PathBuf::from("m.tcl"))),
                (Target::Xvg, Some(PathBuf::from("g.xvg"))),
            ]
        );
    }

    #[test]
    fn vmd_style_defaults() {
        let cli = Cli::parse_from(["domdef", "adk.dom"]);
        assert_eq!(WriteOptions::from(&cli.vmd_args), WriteOptions::default());
    }
}
