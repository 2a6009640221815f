use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info};
use satred::{
    cover::CoverProblem,
    io::AnswerWriter,
    nfa::NfaInstance,
    sat::SatSolverFactory,
    solvers::{AcceptanceComputer, CoverComputer, NfaAcceptanceSolver, SetCoverSolver},
};
use std::path::Path;

const CMD_NAME: &str = "solve";

const ARG_OUTPUT_DIR: &str = "OUTPUT_DIR";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Encodes an instance, writes the formula files and solves it")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::problem_arg())
            .arg(
                Arg::with_name(ARG_OUTPUT_DIR)
                    .long("output-dir")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("output")
                    .help("the directory in which the formula files are written")
                    .required(false),
            )
            .args(&common::external_sat_solver_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let kind = common::problem_kind(arg_matches)?;
        let output_dir = Path::new(arg_matches.value_of(ARG_OUTPUT_DIR).unwrap_or("output"));
        let instance = common::read_instance(file, kind)?;
        let solver_factory = common::create_sat_solver_factory(arg_matches)?;
        let output = OutputLocation {
            dir: output_dir,
            kind,
            input_file: file,
        };
        match instance {
            common::Instance::Nfa(instance) => solve_nfa(&instance, solver_factory, &output),
            common::Instance::Cover(problem) => solve_cover(&problem, solver_factory, &output),
        }
    }
}

struct OutputLocation<'a> {
    dir: &'a Path,
    kind: common::ProblemKind,
    input_file: &'a str,
}

fn solve_nfa(
    instance: &NfaInstance,
    solver_factory: Box<dyn SatSolverFactory>,
    output: &OutputLocation,
) -> Result<()> {
    let mut solver = NfaAcceptanceSolver::new_with_sat_solver_factory(instance, solver_factory);
    common::write_formula_files(solver.formula(), output.dir, output.kind, output.input_file)?;
    let run = solver.compute_accepting_run()?;
    let simulation = instance.automaton().accepts(instance.word());
    let writer = AnswerWriter;
    let mut out = std::io::stdout();
    writer.write_sat_acceptance(&mut out, run.as_deref())?;
    writer.write_simulation_acceptance(&mut out, simulation)?;
    if run.is_some() != simulation {
        error!("Error: SAT-based and NFA-based results do not match.");
    } else {
        info!("SAT-based and simulation-based results match");
    }
    Ok(())
}

fn solve_cover(
    problem: &CoverProblem,
    solver_factory: Box<dyn SatSolverFactory>,
    output: &OutputLocation,
) -> Result<()> {
    let mut solver = SetCoverSolver::new_with_sat_solver_factory(problem, solver_factory);
    common::write_formula_files(solver.formula(), output.dir, output.kind, output.input_file)?;
    let cover = solver.compute_cover()?;
    if let Some(c) = &cover {
        if problem.is_cover(c) {
            info!("the selected teachers cover all the required subjects");
        } else {
            error!("Error: the selected teachers are not a cover.");
        }
    }
    AnswerWriter.write_cover(&mut std::io::stdout(), cover.as_deref())
}
