//! Objects used to encode problems into CNF formulas and to decode the models.

pub mod cardinality;

mod specs;
pub use specs::ModelDecoder;
pub use specs::ProblemEncoder;
