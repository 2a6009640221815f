use super::{specs::AcceptanceComputer, utils};
use crate::{
    cnf::CnfFormula,
    encodings::ProblemEncoder,
    nfa::{NfaDecoder, NfaEncoder, NfaInstance},
    sat::{DefaultSatSolverFactory, SatSolverFactory},
};
use anyhow::Result;

/// A SAT-based solver for the acceptance of a word by an NFA.
///
/// The formula is built once, on the first request, and kept for the next ones.
pub struct NfaAcceptanceSolver<'a> {
    instance: &'a NfaInstance,
    solver_factory: Box<dyn SatSolverFactory>,
    formula: Option<CnfFormula>,
}

impl<'a> NfaAcceptanceSolver<'a> {
    /// Builds a new SAT based solver for the acceptance problem.
    ///
    /// The underlying SAT solver is one returned by [default_solver](crate::sat::default_solver).
    pub fn new(instance: &'a NfaInstance) -> Self {
        Self::new_with_sat_solver_factory(instance, Box::new(DefaultSatSolverFactory))
    }

    /// Builds a new SAT based solver for the acceptance problem.
    ///
    /// The SAT solver to use in given through the solver factory.
    pub fn new_with_sat_solver_factory(
        instance: &'a NfaInstance,
        solver_factory: Box<dyn SatSolverFactory>,
    ) -> Self {
        Self {
            instance,
            solver_factory,
            formula: None,
        }
    }

    /// Returns the formula encoding the acceptance of the word.
    pub fn formula(&mut self) -> &CnfFormula {
        let instance = self.instance;
        self.formula.get_or_insert_with(|| encode(instance))
    }
}

fn encode(instance: &NfaInstance) -> CnfFormula {
    NfaEncoder::new(instance.automaton(), instance.word()).encode()
}

impl AcceptanceComputer for NfaAcceptanceSolver<'_> {
    fn compute_accepting_run(&mut self) -> Result<Option<Vec<String>>> {
        let decoder = NfaDecoder::new(self.instance.word().len());
        let instance = self.instance;
        let formula = self.formula.get_or_insert_with(|| encode(instance));
        utils::solve_and_decode(formula, self.solver_factory.as_ref(), &decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        nfa::{automaton::tests::example_automaton, Automaton},
        sat::ExternalSatSolverFactory,
        Error,
    };
    use itertools::Itertools;

    fn words(nfa: &Automaton, max_len: usize) -> Vec<String> {
        let symbols = (0..nfa.n_symbols()).collect::<Vec<usize>>();
        let mut all = vec![String::new()];
        for len in 1..=max_len {
            (0..len)
                .map(|_| symbols.iter())
                .multi_cartesian_product()
                .for_each(|w| all.push(w.iter().map(|s| symbol_char(**s)).collect()));
        }
        all
    }

    fn symbol_char(id: usize) -> char {
        (b'a' + id as u8) as char
    }

    fn check_against_simulation(nfa: Automaton, max_len: usize) {
        for w in words(&nfa, max_len) {
            let instance = NfaInstance::new(nfa.clone(), &w).unwrap();
            let mut solver = NfaAcceptanceSolver::new(&instance);
            let run = solver.compute_accepting_run().unwrap();
            assert_eq!(
                nfa.accepts(instance.word()),
                run.is_some(),
                "word {:?}",
                w
            );
            if let Some(r) = run {
                assert!(nfa.is_accepting_run(instance.word(), &r), "word {:?}", w);
            }
        }
    }

    fn even_a_automaton() -> Automaton {
        let mut nfa = Automaton::new(&["even", "odd"], &["a", "b"], &["even"], &["even"]).unwrap();
        nfa.add_transition("even", "a", &["odd"]).unwrap();
        nfa.add_transition("odd", "a", &["even"]).unwrap();
        nfa.add_transition("even", "b", &["even"]).unwrap();
        nfa.add_transition("odd", "b", &["odd"]).unwrap();
        nfa
    }

    fn third_to_last_automaton() -> Automaton {
        let mut nfa =
            Automaton::new(&["p0", "p1", "p2", "p3"], &["a", "b"], &["p0"], &["p3"]).unwrap();
        nfa.add_transition("p0", "a", &["p0", "p1"]).unwrap();
        nfa.add_transition("p0", "b", &["p0"]).unwrap();
        nfa.add_transition("p1", "a", &["p2"]).unwrap();
        nfa.add_transition("p1", "b", &["p2"]).unwrap();
        nfa.add_transition("p2", "a", &["p3"]).unwrap();
        nfa.add_transition("p2", "b", &["p3"]).unwrap();
        nfa
    }

    fn multiple_initial_states_automaton() -> Automaton {
        let mut nfa = Automaton::new(
            &["s0", "s1", "s2"],
            &["a", "b", "c"],
            &["s0", "s1"],
            &["s2"],
        )
        .unwrap();
        nfa.add_transition("s0", "a", &["s2"]).unwrap();
        nfa.add_transition("s1", "b", &["s1", "s2"]).unwrap();
        nfa.add_transition("s2", "c", &["s0", "s1", "s2"]).unwrap();
        nfa
    }

    fn no_final_state_automaton() -> Automaton {
        let mut nfa = Automaton::new(&["q"], &["a"], &["q"], &[] as &[&str]).unwrap();
        nfa.add_transition("q", "a", &["q"]).unwrap();
        nfa
    }

    fn no_transition_automaton() -> Automaton {
        Automaton::new(&["q0", "q1"], &["a", "b"], &["q0"], &["q0", "q1"]).unwrap()
    }

    macro_rules! test_against_simulation {
        ($automaton:expr, $suffix:ident) => {
            paste::item! {
                #[test]
                fn [< test_sat_matches_simulation_ $suffix >] () {
                    check_against_simulation($automaton, 4);
                }
            }
        };
    }

    test_against_simulation!(example_automaton(), example);
    test_against_simulation!(even_a_automaton(), even_a);
    test_against_simulation!(third_to_last_automaton(), third_to_last);
    test_against_simulation!(multiple_initial_states_automaton(), multiple_initial_states);
    test_against_simulation!(no_final_state_automaton(), no_final_state);
    test_against_simulation!(no_transition_automaton(), no_transition);

    #[test]
    fn test_example_run() {
        let instance = NfaInstance::new(example_automaton(), "ab").unwrap();
        let mut solver = NfaAcceptanceSolver::new(&instance);
        assert_eq!(
            Some(vec!["q0".to_string(), "q1".to_string(), "q1".to_string()]),
            solver.compute_accepting_run().unwrap()
        );
        assert!(solver.is_accepted().unwrap());
    }

    #[test]
    fn test_example_rejected() {
        let instance = NfaInstance::new(example_automaton(), "ba").unwrap();
        let mut solver = NfaAcceptanceSolver::new(&instance);
        assert!(!solver.is_accepted().unwrap());
    }

    #[test]
    fn test_dead_end_initial_state_rejects() {
        let instance = NfaInstance::new(example_automaton(), "b").unwrap();
        let mut solver = NfaAcceptanceSolver::new(&instance);
        assert_eq!(None, solver.compute_accepting_run().unwrap());
    }

    #[test]
    fn test_dead_end_inner_state_rejects() {
        let instance = NfaInstance::new(example_automaton(), "aba").unwrap();
        let mut solver = NfaAcceptanceSolver::new(&instance);
        assert_eq!(None, solver.compute_accepting_run().unwrap());
    }

    #[test]
    fn test_formula_is_cached() {
        let instance = NfaInstance::new(example_automaton(), "ab").unwrap();
        let mut solver = NfaAcceptanceSolver::new(&instance);
        assert_eq!(12, solver.formula().n_clauses());
        assert_eq!(6, solver.formula().n_vars());
    }

    #[test]
    fn test_solver_unavailable() {
        let instance = NfaInstance::new(example_automaton(), "ab").unwrap();
        let mut solver = NfaAcceptanceSolver::new_with_sat_solver_factory(
            &instance,
            Box::new(ExternalSatSolverFactory::new(
                "/nonexistent/sat/solver".to_string(),
                vec![],
            )),
        );
        let err = solver.compute_accepting_run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SolverUnavailable(_))
        ));
    }
}
