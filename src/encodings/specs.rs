use crate::{cnf::CnfFormula, cnf::VarInterner, sat::Assignment};
use anyhow::Result;

/// The trait for encoders from a problem instance to a CNF formula.
pub trait ProblemEncoder {
    /// Encodes the instance into a new formula.
    ///
    /// Two calls on the same instance produce identical formulas, including variable indices.
    fn encode(&self) -> CnfFormula;
}

/// The trait for objects translating back a model into an answer to the problem.
pub trait ModelDecoder {
    /// The type of the answers.
    type Answer;

    /// Projects a model of the formula into an answer, using the names given by the interner.
    ///
    /// An error is returned if the model contradicts an invariant guaranteed by the encoding.
    fn decode(&self, interner: &VarInterner, assignment: &Assignment) -> Result<Self::Answer>;
}
