use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use satred::{
    cnf::CnfFormula,
    io::{DimacsReader, InstanceReader},
};

const CMD_NAME: &str = "check";

const ARG_DIMACS: &str = "ARG_DIMACS";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input instance files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::problem_arg())
            .arg(
                Arg::with_name(ARG_DIMACS)
                    .long("dimacs")
                    .empty_values(false)
                    .multiple(false)
                    .help("a DIMACS file that must contain the formula encoding the instance")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let kind = common::problem_kind(arg_matches)?;
        let instance = common::read_instance(file, kind)?;
        if let common::Instance::Cover(problem) = &instance {
            problem
                .uncoverable_subjects()
                .iter()
                .for_each(|s| warn!(r#"no teacher can teach subject "{}""#, s));
        }
        info!("no error found in {}", file);
        if let Some(dimacs_file) = arg_matches.value_of(ARG_DIMACS) {
            check_dimacs_file(&common::encode_instance(&instance), dimacs_file)?;
            info!("{} contains the formula encoding the instance", dimacs_file);
        }
        Ok(())
    }
}

fn check_dimacs_file(formula: &CnfFormula, dimacs_file: &str) -> Result<()> {
    let problem = common::read_file_path_with(dimacs_file, &|r| DimacsReader.read(r))?;
    if problem.n_vars() != formula.n_vars() {
        return Err(anyhow!(
            "the DIMACS file declares {} variables, expected {}",
            problem.n_vars(),
            formula.n_vars()
        ));
    }
    if problem.clauses().len() != formula.n_clauses() {
        return Err(anyhow!(
            "the DIMACS file contains {} clauses, expected {}",
            problem.clauses().len(),
            formula.n_clauses()
        ));
    }
    match formula
        .clauses()
        .iter()
        .zip(problem.clauses())
        .position(|(expected, actual)| expected != actual)
    {
        Some(i) => Err(anyhow!(
            "clause with index {} of the DIMACS file differs from the encoding",
            i
        )),
        None => Ok(()),
    }
}
