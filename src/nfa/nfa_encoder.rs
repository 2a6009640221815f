use super::Automaton;
use crate::{
    cnf::CnfFormula,
    encodings::{cardinality, ProblemEncoder},
    sat::Literal,
};
use log::info;

/// Returns the name of the proposition stating the automaton is in a state at a time step.
pub fn state_at_time(state: &str, time: usize) -> String {
    format!("{}@{}", state, time)
}

/// An encoder for the acceptance of a word by an NFA.
///
/// The formula uses a proposition `q@t` for each state `q` and each time step `t` in `0..=n`, where `n` is the length of the word.
/// Its models are the accepting runs of the automaton on the word; the clauses are emitted in this order:
///
/// 1. exactly one initial state is occupied at time 0,
/// 2. for each time step `t < n` and each state `q`, occupying `q` at `t` implies occupying one of its successors on the `t`-th symbol at `t+1`
///    or the unit clause `¬q@t` when `q` has no successor on that symbol,
/// 3. exactly one state is occupied at each time step,
/// 4. a final state is occupied at time `n`.
pub struct NfaEncoder<'a> {
    automaton: &'a Automaton,
    word: &'a [usize],
}

impl<'a> NfaEncoder<'a> {
    /// Builds an encoder for a word given by its symbol identifiers.
    pub fn new(automaton: &'a Automaton, word: &'a [usize]) -> Self {
        Self { automaton, word }
    }

    fn state_lit(&self, formula: &mut CnfFormula, state: usize, time: usize) -> Literal {
        formula.pos(&state_at_time(self.automaton.state_name(state), time))
    }

    fn state_lits(&self, formula: &mut CnfFormula, states: &[usize], time: usize) -> Vec<Literal> {
        states
            .iter()
            .map(|s| self.state_lit(formula, *s, time))
            .collect()
    }

    fn encode_initial_states(&self, formula: &mut CnfFormula) {
        let lits = self.state_lits(formula, self.automaton.initial_states(), 0);
        formula.add_clauses(cardinality::exactly_one(&lits));
    }

    fn encode_transitions(&self, formula: &mut CnfFormula) {
        for (t, symbol) in self.word.iter().enumerate() {
            for state in 0..self.automaton.n_states() {
                let current = self.state_lit(formula, state, t);
                let next_states = self.automaton.next_states(state, *symbol);
                if next_states.is_empty() {
                    formula.add_clause(vec![current.negate()]);
                    continue;
                }
                let mut cl = Vec::with_capacity(1 + next_states.len());
                cl.push(current.negate());
                cl.append(&mut self.state_lits(formula, next_states, t + 1));
                formula.add_clause(cl);
            }
        }
    }

    fn encode_single_state_per_step(&self, formula: &mut CnfFormula) {
        let all_states = (0..self.automaton.n_states()).collect::<Vec<usize>>();
        for t in 0..=self.word.len() {
            let lits = self.state_lits(formula, &all_states, t);
            formula.add_clauses(cardinality::exactly_one(&lits));
        }
    }

    fn encode_acceptance(&self, formula: &mut CnfFormula) {
        let lits = self.state_lits(formula, self.automaton.final_states(), self.word.len());
        formula.add_clause(cardinality::at_least_one(&lits));
    }
}

impl ProblemEncoder for NfaEncoder<'_> {
    fn encode(&self) -> CnfFormula {
        let mut formula = CnfFormula::default();
        self.encode_initial_states(&mut formula);
        self.encode_transitions(&mut formula);
        self.encode_single_state_per_step(&mut formula);
        self.encode_acceptance(&mut formula);
        info!(
            "encoded the acceptance of a word of length {} into {} variables and {} clauses",
            self.word.len(),
            formula.n_vars(),
            formula.n_clauses()
        );
        formula
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::automaton::tests::example_automaton;

    fn clause_names(formula: &CnfFormula) -> Vec<Vec<String>> {
        formula
            .clauses()
            .iter()
            .map(|cl| cl.iter().map(|l| formula.literal_name(*l)).collect())
            .collect()
    }

    #[test]
    fn test_state_at_time() {
        assert_eq!("q0@3", state_at_time("q0", 3));
    }

    #[test]
    fn test_encode_example() {
        let nfa = example_automaton();
        let word = nfa.read_word("ab").unwrap();
        let formula = NfaEncoder::new(&nfa, &word).encode();
        let expected: Vec<Vec<&str>> = vec![
            vec!["q0@0"],
            vec!["-q0@0", "q0@1", "q1@1"],
            vec!["-q1@0"],
            vec!["-q0@1"],
            vec!["-q1@1", "q1@2"],
            vec!["q0@0", "q1@0"],
            vec!["-q0@0", "-q1@0"],
            vec!["q0@1", "q1@1"],
            vec!["-q0@1", "-q1@1"],
            vec!["q0@2", "q1@2"],
            vec!["-q0@2", "-q1@2"],
            vec!["q1@2"],
        ];
        assert_eq!(expected, clause_names(&formula));
        assert_eq!(6, formula.n_vars());
    }

    #[test]
    fn test_variable_order() {
        let nfa = example_automaton();
        let word = nfa.read_word("ab").unwrap();
        let formula = NfaEncoder::new(&nfa, &word).encode();
        assert_eq!(
            vec!["q0@0", "q0@1", "q1@1", "q1@0", "q1@2", "q0@2"],
            formula
                .interner()
                .iter()
                .map(|(_, n)| n)
                .collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let nfa = example_automaton();
        let word = nfa.read_word("aab").unwrap();
        let f1 = NfaEncoder::new(&nfa, &word).encode();
        let f2 = NfaEncoder::new(&nfa, &word).encode();
        assert_eq!(f1.clauses(), f2.clauses());
        assert_eq!(f1.n_vars(), f2.n_vars());
    }

    #[test]
    fn test_encode_empty_word() {
        let nfa = example_automaton();
        let formula = NfaEncoder::new(&nfa, &[]).encode();
        assert_eq!(
            vec![
                vec!["q0@0".to_string()],
                vec!["q0@0".to_string(), "q1@0".to_string()],
                vec!["-q0@0".to_string(), "-q1@0".to_string()],
                vec!["q1@0".to_string()],
            ],
            clause_names(&formula)
        );
    }

    #[test]
    fn test_dead_end_states_are_forbidden() {
        let nfa = example_automaton();
        let word = nfa.read_word("b").unwrap();
        let formula = NfaEncoder::new(&nfa, &word).encode();
        let names = clause_names(&formula);
        assert_eq!(vec!["-q0@0"], names[1]);
        assert_eq!(vec!["-q1@0", "q1@1"], names[2]);
    }

    #[test]
    fn test_pairwise_initial_states() {
        let nfa = Automaton::new(&["p", "q", "r"], &["a"], &["p", "q", "r"], &["p"]).unwrap();
        let formula = NfaEncoder::new(&nfa, &[]).encode();
        let names = clause_names(&formula);
        assert_eq!(vec!["p@0", "q@0", "r@0"], names[0]);
        assert_eq!(vec!["-p@0", "-q@0"], names[1]);
        assert_eq!(vec!["-p@0", "-r@0"], names[2]);
        assert_eq!(vec!["-q@0", "-r@0"], names[3]);
    }
}
