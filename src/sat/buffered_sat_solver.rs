use super::{
    sat_solver::{SolvingListener, SolvingResult},
    Assignment, Literal, SatSolver,
};
use crate::io::dimacs_writer;
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Cursor, Read};

/// The type of the functions that run a solver on a DIMACS instance and return its textual output.
pub type SolvingFn = dyn Fn(DimacsInstanceRead) -> Result<Box<dyn Read>>;

/// A reader over the DIMACS text of the instance held by a [`BufferedSatSolver`].
pub struct DimacsInstanceRead {
    preamble: Cursor<String>,
    clauses: Cursor<String>,
}

impl Read for DimacsInstanceRead {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let r = self.preamble.read(buf)?;
        if r > 0 {
            return Ok(r);
        }
        self.clauses.read(buf)
    }
}

const DEFAULT_BUFFER_CAP: usize = 1 << 20;

const OUTPUT_CONTEXT: &str = "error while reading solving function output in BufferedSatSolver";

/// A SAT solver that writes its instance in the DIMACS format and delegates the search to a solving function.
///
/// The output of the solving function must follow the SAT competition format
/// (a `s SATISFIABLE` or `s UNSATISFIABLE` status line, `v` value lines, `c` comment lines).
pub struct BufferedSatSolver {
    n_vars: usize,
    n_clauses: usize,
    clauses: String,
    solving_fn: Box<SolvingFn>,
    listeners: Vec<Box<dyn SolvingListener>>,
}

impl BufferedSatSolver {
    /// Builds a new buffered solver given the function in charge of the search.
    pub fn new(solving_fn: Box<SolvingFn>) -> Self {
        Self {
            n_vars: 0,
            n_clauses: 0,
            clauses: String::with_capacity(DEFAULT_BUFFER_CAP),
            solving_fn,
            listeners: Vec::new(),
        }
    }

    fn read_solver_output(&self, solver_output: Box<dyn Read>) -> Result<SolvingResult> {
        let mut status = None;
        let mut assignment = vec![None; self.n_vars];
        let mut assignment_line_seen = false;
        let mut assignment_line_end = false;
        for line in BufReader::new(solver_output).lines() {
            let line = line.context(OUTPUT_CONTEXT)?;
            let mut set_status = |b| {
                if status.is_some() {
                    return Err(anyhow!("{}: multiple status lines", OUTPUT_CONTEXT));
                }
                status = Some(b);
                Ok(())
            };
            if line == "s SATISFIABLE" {
                set_status(true)?;
            } else if line == "s UNSATISFIABLE" {
                set_status(false)?;
            } else if line.starts_with("v ") {
                assignment_line_seen = true;
                for w in line.split_ascii_whitespace().skip(1) {
                    let n = w
                        .parse::<isize>()
                        .map_err(|_| anyhow!(r#"{}: "{}" is not a literal"#, OUTPUT_CONTEXT, w))?;
                    if n == 0 {
                        if assignment_line_end {
                            return Err(anyhow!("{}: multiple zeroes on value line", OUTPUT_CONTEXT));
                        }
                        assignment_line_end = true;
                    } else {
                        let v = n.unsigned_abs() - 1;
                        if v >= self.n_vars {
                            return Err(anyhow!(
                                "{}: a variable in value line is out of bounds",
                                OUTPUT_CONTEXT
                            ));
                        }
                        assignment[v] = Some(n > 0);
                    }
                }
            } else if !line.starts_with("c ") && line != "c" && line != "v" && !line.is_empty() {
                return Err(anyhow!(r#"{}: unexpected line "{}""#, OUTPUT_CONTEXT, line));
            }
        }
        Ok(match status {
            Some(true) if assignment_line_seen => {
                SolvingResult::Satisfiable(Assignment::new(assignment))
            }
            Some(true) => SolvingResult::Unknown,
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        })
    }
}

impl SatSolver for BufferedSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        cl.iter()
            .for_each(|l| self.n_vars = usize::max(self.n_vars, usize::from(l.var())));
        dimacs_writer::push_clause_line(&mut self.clauses, &cl);
        self.n_clauses += 1;
    }

    fn solve(&mut self) -> Result<SolvingResult> {
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars, self.n_clauses));
        let instance_reader = DimacsInstanceRead {
            preamble: Cursor::new(dimacs_writer::preamble(self.n_vars, self.n_clauses)),
            clauses: Cursor::new(self.clauses.clone()),
        };
        let solver_output = (self.solving_fn)(instance_reader)?;
        let solving_result = self.read_solver_output(solver_output)?;
        self.listeners
            .iter()
            .for_each(|l| l.solving_end(&solving_result));
        Ok(solving_result)
    }

    fn n_vars(&self) -> usize {
        self.n_vars
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.listeners.push(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        if new_max_id > self.n_vars {
            self.n_vars = new_max_id;
        }
    }
}
