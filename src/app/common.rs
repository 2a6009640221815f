use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, EncodeCommand,
    SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use log::info;
use satred::{
    cnf::CnfFormula,
    cover::{CoverEncoder, CoverProblem},
    encodings::ProblemEncoder,
    io::{
        CoverInstanceReader, DimacsWriter, FormulaWriter, InstanceReader, NfaInstanceReader,
        PrettyWriter,
    },
    nfa::{NfaEncoder, NfaInstance},
    sat::{
        default_solver, ExternalSatSolverFactory, SatSolver, SatSolverFactory, SolvingListener,
        SolvingResult,
    },
};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read},
    path::{Path, PathBuf},
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Satred, SAT reductions for NFA acceptance and teacher set cover.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(EncodeCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the JSON file that contains the instance")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";

pub(crate) fn problem_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_PROBLEM)
        .short("p")
        .long("problem")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["nfa", "cover"])
        .help("the problem described by the input file")
        .required(true)
}

/// The problems handled by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProblemKind {
    Nfa,
    Cover,
}

impl ProblemKind {
    /// Returns the prefix of the output file names for this problem.
    pub(crate) fn file_prefix(&self) -> &'static str {
        match self {
            ProblemKind::Nfa => "nfa",
            ProblemKind::Cover => "cover",
        }
    }
}

impl TryFrom<&str> for ProblemKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "nfa" => Ok(ProblemKind::Nfa),
            "cover" => Ok(ProblemKind::Cover),
            _ => Err(anyhow!(r#"unknown problem "{}""#, value)),
        }
    }
}

pub(crate) fn problem_kind(arg_matches: &ArgMatches<'_>) -> Result<ProblemKind> {
    ProblemKind::try_from(arg_matches.value_of(ARG_PROBLEM).unwrap_or_default())
}

/// An instance read from an input file.
pub(crate) enum Instance {
    Nfa(NfaInstance),
    Cover(CoverProblem),
}

pub(crate) fn read_instance(file_path: &str, kind: ProblemKind) -> Result<Instance> {
    let instance = match kind {
        ProblemKind::Nfa => {
            let instance =
                read_file_path_with(file_path, &|r| NfaInstanceReader::default().read(r))?;
            let nfa = instance.automaton();
            info!(
                "the automaton has {} state(s), {} symbol(s) and {} transition(s); the word has length {}",
                nfa.n_states(),
                nfa.n_symbols(),
                nfa.n_transitions(),
                instance.word().len()
            );
            Instance::Nfa(instance)
        }
        ProblemKind::Cover => {
            let problem =
                read_file_path_with(file_path, &|r| CoverInstanceReader::default().read(r))?;
            info!(
                "the instance has {} teacher(s) and {} required subject(s), looking for {} teacher(s)",
                problem.teachers().len(),
                problem.subjects().len(),
                problem.k()
            );
            Instance::Cover(problem)
        }
    };
    Ok(instance)
}

pub(crate) fn encode_instance(instance: &Instance) -> CnfFormula {
    match instance {
        Instance::Nfa(instance) => NfaEncoder::new(instance.automaton(), instance.word()).encode(),
        Instance::Cover(problem) => CoverEncoder::new(problem).encode(),
    }
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized).with_context(|| format!("while opening {:?}", canonicalized))?,
    );
    (reader)(&mut file_reader).with_context(|| format!("while reading {:?}", canonicalized))
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

/// Returns the paths of the DIMACS and human-readable files written for an input file.
pub(crate) fn output_file_paths(
    output_dir: &Path,
    kind: ProblemKind,
    input_file: &str,
) -> (PathBuf, PathBuf) {
    let stem = Path::new(input_file)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let base = format!("{}_output_{}", kind.file_prefix(), stem);
    (
        output_dir.join(format!("{}.cnf", base)),
        output_dir.join(format!("{}.txt", base)),
    )
}

pub(crate) fn write_formula_file(
    formula: &CnfFormula,
    path: &Path,
    writer: &dyn FormulaWriter,
) -> Result<()> {
    let context = || format!("while writing {:?}", path);
    let mut out = BufWriter::new(File::create(path).with_context(context)?);
    writer.write(formula, &mut out).with_context(context)?;
    info!("formula written to {:?}", path);
    Ok(())
}

pub(crate) fn write_formula_files(
    formula: &CnfFormula,
    output_dir: &Path,
    kind: ProblemKind,
    input_file: &str,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("while creating directory {:?}", output_dir))?;
    let (dimacs_path, pretty_path) = output_file_paths(output_dir, kind, input_file);
    write_formula_file(formula, &dimacs_path, &DimacsWriter)?;
    write_formula_file(formula, &pretty_path, &PrettyWriter)
}

const ARG_EXTERNAL_SAT_SOLVER: &str = "EXTERNAL_SAT_SOLVER";
const ARG_EXTERNAL_SAT_SOLVER_OPTIONS: &str = "EXTERNAL_SAT_SOLVER_OPTIONS";

pub(crate) fn external_sat_solver_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_EXTERNAL_SAT_SOLVER)
            .long("external-sat-solver")
            .empty_values(false)
            .multiple(false)
            .help("a path to an external SAT solver to replace the embedded one")
            .required(false),
        Arg::with_name(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
            .long("external-sat-solver-opt")
            .requires(ARG_EXTERNAL_SAT_SOLVER)
            .empty_values(false)
            .multiple(true)
            .allow_hyphen_values(true)
            .help("a option to give to the external SAT solver")
            .required(false),
    ]
}

pub(crate) fn create_sat_solver_factory(
    arg_matches: &ArgMatches<'_>,
) -> Result<Box<dyn SatSolverFactory>> {
    let external_solver_options = arg_matches
        .values_of(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
        .map(|v| v.map(|o| o.to_string()).collect::<Vec<String>>())
        .unwrap_or_default();
    if let Some(s) = arg_matches.value_of(ARG_EXTERNAL_SAT_SOLVER) {
        let path = canonicalize_file_path(s)?;
        info!("using {path:?} for problems requiring a SAT solver");
        let mut factory = ExternalSatSolverFactory::new(
            path.to_string_lossy().to_string(),
            external_solver_options,
        );
        factory.add_solver_listener(Box::new(|| {
            Box::<SatSolvingLogger>::default() as Box<dyn SolvingListener>
        }));
        Ok(Box::new(factory))
    } else {
        info!("using the default SAT solver for problems requiring a SAT solver");
        Ok(Box::new(LoggingDefaultSatSolverFactory))
    }
}

struct LoggingDefaultSatSolverFactory;

impl SatSolverFactory for LoggingDefaultSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        let mut solver = default_solver();
        solver.add_listener(Box::<SatSolvingLogger>::default());
        solver
    }
}

#[derive(Default)]
struct SatSolvingLogger;

impl SolvingListener for SatSolvingLogger {
    fn solving_start(&self, n_vars: usize, n_clauses: usize) {
        info!(
            "launching SAT solver on an instance with {} variables and {} clauses",
            n_vars, n_clauses
        );
    }

    fn solving_end(&self, result: &SolvingResult) {
        let r = match result {
            SolvingResult::Satisfiable(_) => "SAT",
            SolvingResult::Unsatisfiable => "UNSAT",
            SolvingResult::Unknown => "UNKNOWN",
        };
        info!("SAT solver ended with result {}", r);
    }
}
