//! SAT-based solvers for the problems handled by this crate.

mod nfa_acceptance_solver;
pub use nfa_acceptance_solver::NfaAcceptanceSolver;

mod set_cover_solver;
pub use set_cover_solver::SetCoverSolver;

mod specs;
pub use specs::AcceptanceComputer;
pub use specs::CoverComputer;

mod utils;
