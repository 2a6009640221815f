//! Objects used to read problem instances and to write formulas and answers.

mod answer_writer;
pub use answer_writer::AnswerWriter;

mod cover_reader;
pub use cover_reader::CoverInstanceReader;

mod dimacs_reader;
pub use dimacs_reader::DimacsProblem;
pub use dimacs_reader::DimacsReader;

pub(crate) mod dimacs_writer;
pub use dimacs_writer::DimacsWriter;

mod nfa_reader;
pub use nfa_reader::NfaInstanceReader;

mod pretty_writer;
pub use pretty_writer::PrettyWriter;

mod specs;
pub use specs::FormulaWriter;
pub use specs::InstanceReader;
