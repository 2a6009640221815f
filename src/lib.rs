//! Satred reduces decision problems to propositional satisfiability.
//!
//! Two problems are handled: the acceptance of a word by a nondeterministic finite automaton ([`nfa`]),
//! and the selection of exactly `k` teachers covering a set of subjects ([`cover`]).
//! Both are encoded into CNF formulas over named propositions ([`cnf`]), which can be written in the DIMACS format ([`io`])
//! and given to a SAT solver ([`sat`]); the models are then decoded back into domain answers ([`solvers`]).

#![warn(missing_docs)]

pub mod cnf;

pub mod cover;

pub mod encodings;

mod error;
pub use error::Error;

pub mod io;

pub mod nfa;

pub mod sat;

pub mod solvers;
