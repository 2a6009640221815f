use crate::{
    cnf::CnfFormula,
    encodings::ModelDecoder,
    sat::{Assignment, SatSolverFactory},
};
use anyhow::Result;
use log::debug;

// Gives a formula to a new solver and returns its model, if any.
pub(crate) fn solve_formula(
    formula: &CnfFormula,
    solver_factory: &dyn SatSolverFactory,
) -> Result<Option<Assignment>> {
    let mut solver = solver_factory.new_solver();
    formula.load_into(solver.as_mut());
    let model = solver.solve()?.into_model()?;
    debug!(
        "the formula is {}",
        if model.is_some() {
            "satisfiable"
        } else {
            "unsatisfiable"
        }
    );
    Ok(model)
}

// Solves a formula and translates its model, if any, with a decoder.
pub(crate) fn solve_and_decode<D>(
    formula: &CnfFormula,
    solver_factory: &dyn SatSolverFactory,
    decoder: &D,
) -> Result<Option<D::Answer>>
where
    D: ModelDecoder,
{
    match solve_formula(formula, solver_factory)? {
        Some(assignment) => Ok(Some(decoder.decode(formula.interner(), &assignment)?)),
        None => Ok(None),
    }
}
