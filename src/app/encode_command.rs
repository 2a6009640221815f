use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use satred::{
    cnf::CnfFormula,
    io::{DimacsWriter, FormulaWriter, PrettyWriter},
};
use std::path::Path;

const CMD_NAME: &str = "encode";

const ARG_OUT: &str = "ARG_OUT";
const ARG_PRETTY: &str = "ARG_PRETTY";

pub(crate) struct EncodeCommand;

impl EncodeCommand {
    pub(crate) fn new() -> Self {
        EncodeCommand
    }
}

impl<'a> Command<'a> for EncodeCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Encodes an instance into a CNF formula without solving it")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::problem_arg())
            .arg(cli_manager::logging_level_cli_arg())
            .arg(
                Arg::with_name(ARG_OUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .help("the output file for the DIMACS formula (default: standard output)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_PRETTY)
                    .long("pretty")
                    .empty_values(false)
                    .multiple(false)
                    .help("an output file for the human-readable formula")
                    .required(false),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let kind = common::problem_kind(arg_matches)?;
        let formula = common::encode_instance(&common::read_instance(file, kind)?);
        write_dimacs(&formula, arg_matches.value_of(ARG_OUT))?;
        if let Some(pretty_file) = arg_matches.value_of(ARG_PRETTY) {
            common::write_formula_file(&formula, Path::new(pretty_file), &PrettyWriter)?;
        }
        Ok(())
    }
}

fn write_dimacs(formula: &CnfFormula, output_file: Option<&str>) -> Result<()> {
    match output_file {
        Some(f) => common::write_formula_file(formula, Path::new(f), &DimacsWriter),
        None => DimacsWriter
            .write(formula, &mut std::io::stdout())
            .context("while writing the formula to the standard output"),
    }
}
