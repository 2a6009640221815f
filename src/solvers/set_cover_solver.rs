use super::{specs::CoverComputer, utils};
use crate::{
    cnf::CnfFormula,
    cover::{CoverDecoder, CoverEncoder, CoverProblem},
    encodings::ProblemEncoder,
    sat::{DefaultSatSolverFactory, SatSolverFactory},
};
use anyhow::Result;

/// A SAT-based solver for the teacher set cover problem.
pub struct SetCoverSolver<'a> {
    problem: &'a CoverProblem,
    solver_factory: Box<dyn SatSolverFactory>,
    formula: Option<CnfFormula>,
}

impl<'a> SetCoverSolver<'a> {
    /// Builds a new SAT based solver for the set cover problem.
    ///
    /// The underlying SAT solver is one returned by [default_solver](crate::sat::default_solver).
    pub fn new(problem: &'a CoverProblem) -> Self {
        Self::new_with_sat_solver_factory(problem, Box::new(DefaultSatSolverFactory))
    }

    /// Builds a new SAT based solver for the set cover problem.
    ///
    /// The SAT solver to use in given through the solver factory.
    pub fn new_with_sat_solver_factory(
        problem: &'a CoverProblem,
        solver_factory: Box<dyn SatSolverFactory>,
    ) -> Self {
        Self {
            problem,
            solver_factory,
            formula: None,
        }
    }

    /// Returns the formula encoding the problem.
    pub fn formula(&mut self) -> &CnfFormula {
        let problem = self.problem;
        self.formula
            .get_or_insert_with(|| CoverEncoder::new(problem).encode())
    }
}

impl CoverComputer for SetCoverSolver<'_> {
    fn compute_cover(&mut self) -> Result<Option<Vec<String>>> {
        let problem = self.problem;
        let formula = self
            .formula
            .get_or_insert_with(|| CoverEncoder::new(problem).encode());
        utils::solve_and_decode(formula, self.solver_factory.as_ref(), &CoverDecoder)
    }
}
