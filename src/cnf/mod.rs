//! CNF formulas over named propositions.

mod clause_store;
pub use clause_store::ClauseStore;

mod cnf_formula;
pub use cnf_formula::CnfFormula;

mod var_interner;
pub use var_interner::VarInterner;
