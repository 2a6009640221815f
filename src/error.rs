use thiserror::Error;

/// The kinds of failures that abort a reduction before or after the SAT solver call.
///
/// Unsatisfiability is not an error: it is reported through the solving results.
/// These errors travel inside [`anyhow::Error`] values and can be recovered with `downcast_ref`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The automaton refers to a state or a symbol it does not declare.
    #[error("invalid automaton structure: {0}")]
    InvalidAutomatonStructure(String),

    /// The input word contains a symbol which is not in the alphabet of the automaton.
    #[error(r#"input word contains symbol "{symbol}" at position {position}, which is not in the alphabet"#)]
    InvalidInputSymbol {
        /// the faulty symbol
        symbol: String,
        /// the index of the symbol in the word
        position: usize,
    },

    /// The set cover instance is malformed (no teacher, duplicate teacher names, non-positive k).
    #[error("invalid problem structure: {0}")]
    InvalidProblemStructure(String),

    /// The model returned by the solver breaks an invariant guaranteed by the encoding.
    #[error("inconsistent model: {0}")]
    InconsistentModel(String),

    /// The SAT solver could not be invoked or did not give an answer.
    #[error("SAT solver unavailable: {0}")]
    SolverUnavailable(String),
}
