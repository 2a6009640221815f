use super::{
    buffered_sat_solver::{BufferedSatSolver, DimacsInstanceRead},
    sat_solver::{SolvingListener, SolvingResult},
    Literal, SatSolver, SatSolverFactory,
};
use crate::Error;
use anyhow::{Context, Result};
use log::debug;
use std::{
    io::{Cursor, Read},
    process::{Command, Stdio},
};

/// A SAT solver which execution is made by a system command.
///
/// The system command is composed by an executable program, and a potential list of CLI arguments.
///
/// The SAT solver must read the DIMACS instance from the standard input (if it does not by default, this may be possible with the right CLI arguments).
/// Its output format must follow the one from the SAT competitions.
pub struct ExternalSatSolver {
    buffered_sat_solver: BufferedSatSolver,
}

impl ExternalSatSolver {
    /// Builds a new external SAT solver.
    ///
    /// The `program` argument is the path from a directory in execution path to the software to execute.
    /// The `options` parameter is the CLI options to provide to the software under execution.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use satred::sat::{ExternalSatSolver, Literal, SatSolver};
    /// let mut solver = ExternalSatSolver::new(
    ///     "/home/me/my_solver".to_string(),
    ///     vec!["-i".to_string(), "/dev/stdin".to_string()],
    /// );
    /// solver.add_clause(vec![Literal::from(-1), Literal::from(-2)]);
    /// solver.add_clause(vec![Literal::from(-1), Literal::from(2)]);
    /// let model = solver.solve().unwrap().into_model().unwrap().unwrap();
    /// assert_eq!(Some(false), model.value_of(1));
    /// ```
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self {
            buffered_sat_solver: BufferedSatSolver::new(Box::new(move |r| {
                exec_solver(r, &program, &options)
            })),
        }
    }
}

impl SatSolver for ExternalSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        self.buffered_sat_solver.add_clause(cl)
    }

    fn solve(&mut self) -> Result<SolvingResult> {
        self.buffered_sat_solver.solve()
    }

    fn n_vars(&self) -> usize {
        self.buffered_sat_solver.n_vars()
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.buffered_sat_solver.add_listener(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        self.buffered_sat_solver.reserve(new_max_id)
    }
}

fn exec_solver(
    mut reader: DimacsInstanceRead,
    program: &str,
    options: &[String],
) -> Result<Box<dyn Read>> {
    let unavailable = |e: std::io::Error| Error::SolverUnavailable(format!("{}: {}", program, e));
    let mut child = Command::new(program)
        .args(options)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(unavailable)?;
    let mut stdin = child
        .stdin
        .take()
        .context("failed to open the stdin of the SAT solver")?;
    let writer = std::thread::spawn(move || std::io::copy(&mut reader, &mut stdin));
    let mut output = Vec::new();
    child
        .stdout
        .take()
        .context("failed to open the stdout of the SAT solver")?
        .read_to_end(&mut output)
        .map_err(unavailable)?;
    // solvers may exit before reading their whole input (e.g. on a trivial conflict)
    match writer.join() {
        Ok(Ok(n)) => debug!("wrote {} bytes to the SAT solver", n),
        Ok(Err(e)) => debug!("the SAT solver did not read its whole input: {}", e),
        Err(_) => debug!("the thread writing to the SAT solver panicked"),
    }
    child.wait().map_err(unavailable)?;
    Ok(Box::new(Cursor::new(output)))
}

/// A factory building [`ExternalSatSolver`] instances that share the same program and options.
pub struct ExternalSatSolverFactory {
    program: String,
    options: Vec<String>,
    listener_factories: Vec<Box<dyn Fn() -> Box<dyn SolvingListener>>>,
}

impl ExternalSatSolverFactory {
    /// Builds a new factory given the program to execute and its CLI options.
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self {
            program,
            options,
            listener_factories: vec![],
        }
    }

    /// Adds a function building a listener for each new solver.
    pub fn add_solver_listener(&mut self, listener_factory: Box<dyn Fn() -> Box<dyn SolvingListener>>) {
        self.listener_factories.push(listener_factory);
    }
}

impl SatSolverFactory for ExternalSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        let mut solver = ExternalSatSolver::new(self.program.clone(), self.options.clone());
        self.listener_factories
            .iter()
            .for_each(|f| solver.add_listener((f)()));
        Box::new(solver)
    }
}
