//! Acceptance of words by nondeterministic finite automata, reduced to SAT.

pub(crate) mod automaton;
pub use automaton::Automaton;

mod nfa_decoder;
pub use nfa_decoder::NfaDecoder;

mod nfa_encoder;
pub use nfa_encoder::state_at_time;
pub use nfa_encoder::NfaEncoder;

mod nfa_instance;
pub use nfa_instance::NfaInstance;
