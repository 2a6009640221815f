//! The reduction of the teacher set cover problem to SAT.

mod cover_decoder;
pub use cover_decoder::CoverDecoder;

mod cover_encoder;
pub use cover_encoder::assign_var_name;
pub use cover_encoder::select_var_name;
pub use cover_encoder::CoverEncoder;

mod cover_problem;
pub use cover_problem::CoverProblem;
pub use cover_problem::Teacher;
