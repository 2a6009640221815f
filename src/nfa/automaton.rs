use crate::Error;
use anyhow::Result;
use std::collections::HashMap;

/// A nondeterministic finite automaton.
///
/// States and symbols are given identifiers equal to their index in the declaration lists.
/// If a name appears multiple times in a list, the first occurrence is the only one that is considered.
///
/// # Example
///
/// ```
/// # use satred::nfa::Automaton;
/// let mut nfa = Automaton::new(&["q0", "q1"], &["a", "b"], &["q0"], &["q1"]).unwrap();
/// nfa.add_transition("q0", "a", &["q0", "q1"]).unwrap();
/// nfa.add_transition("q1", "b", &["q1"]).unwrap();
/// let word = nfa.read_word("ab").unwrap();
/// assert!(nfa.accepts(&word));
/// ```
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<String>,
    state_ids: HashMap<String, usize>,
    alphabet: Vec<String>,
    symbol_ids: HashMap<String, usize>,
    transitions: HashMap<(usize, usize), Vec<usize>>,
    initial_states: Vec<usize>,
    final_states: Vec<usize>,
}

fn index_names<S>(names: &[S]) -> (Vec<String>, HashMap<String, usize>)
where
    S: AsRef<str>,
{
    let mut list = Vec::with_capacity(names.len());
    let mut ids = HashMap::with_capacity(names.len());
    names.iter().for_each(|n| {
        ids.entry(n.as_ref().to_string()).or_insert_with(|| {
            list.push(n.as_ref().to_string());
            list.len() - 1
        });
    });
    (list, ids)
}

impl Automaton {
    /// Builds an automaton with no transition.
    ///
    /// An error is returned if an initial or a final state is not declared.
    pub fn new<S>(
        states: &[S],
        alphabet: &[S],
        initial_states: &[S],
        final_states: &[S],
    ) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let (states, state_ids) = index_names(states);
        let (alphabet, symbol_ids) = index_names(alphabet);
        let mut automaton = Automaton {
            states,
            state_ids,
            alphabet,
            symbol_ids,
            transitions: HashMap::new(),
            initial_states: vec![],
            final_states: vec![],
        };
        automaton.initial_states = automaton.state_id_set(initial_states, "initial state")?;
        automaton.final_states = automaton.state_id_set(final_states, "final state")?;
        Ok(automaton)
    }

    fn state_id_set<S>(&self, names: &[S], kind: &str) -> Result<Vec<usize>>
    where
        S: AsRef<str>,
    {
        let mut ids = Vec::with_capacity(names.len());
        for n in names {
            let id = self.state_id(n.as_ref()).ok_or_else(|| {
                Error::InvalidAutomatonStructure(format!(r#"undeclared {} "{}""#, kind, n.as_ref()))
            })?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Adds the transitions from a state to a set of states on a symbol.
    ///
    /// Successors already registered for this state and symbol are kept.
    /// An error is returned if a state or the symbol is not declared.
    pub fn add_transition<S>(&mut self, from: &str, symbol: &str, to: &[S]) -> Result<()>
    where
        S: AsRef<str>,
    {
        let from_id = self.state_id(from).ok_or_else(|| {
            Error::InvalidAutomatonStructure(format!(r#"undeclared state "{}" in transitions"#, from))
        })?;
        let symbol_id = self.symbol_id(symbol).ok_or_else(|| {
            Error::InvalidAutomatonStructure(format!(
                r#"undeclared symbol "{}" in transitions of state "{}""#,
                symbol, from
            ))
        })?;
        let to_ids = self.state_id_set(to, &format!("successor of {} on {}", from, symbol))?;
        let successors = self.transitions.entry((from_id, symbol_id)).or_default();
        to_ids.into_iter().for_each(|id| {
            if !successors.contains(&id) {
                successors.push(id)
            }
        });
        Ok(())
    }

    /// Translates a word given as a string into symbol identifiers, one symbol per character.
    ///
    /// An [`Error::InvalidInputSymbol`] is returned if a character is not in the alphabet.
    pub fn read_word(&self, input: &str) -> Result<Vec<usize>> {
        input
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let symbol = c.to_string();
                self.symbol_id(&symbol).ok_or_else(|| {
                    Error::InvalidInputSymbol {
                        symbol,
                        position: i,
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn n_symbols(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the number of (state, symbol, state) triples in the transition relation.
    pub fn n_transitions(&self) -> usize {
        self.transitions.values().map(|s| s.len()).sum()
    }

    /// Returns the identifier of a state, if declared.
    pub fn state_id(&self, state: &str) -> Option<usize> {
        self.state_ids.get(state).copied()
    }

    /// Returns the identifier of a symbol, if declared.
    pub fn symbol_id(&self, symbol: &str) -> Option<usize> {
        self.symbol_ids.get(symbol).copied()
    }

    /// Returns the name of a state.
    ///
    /// # Panics
    ///
    /// If the identifier is not a state identifier.
    pub fn state_name(&self, id: usize) -> &str {
        &self.states[id]
    }

    /// Returns the state names, ordered by identifier.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Returns the initial state identifiers.
    pub fn initial_states(&self) -> &[usize] {
        &self.initial_states
    }

    /// Returns the final state identifiers.
    pub fn final_states(&self) -> &[usize] {
        &self.final_states
    }

    /// Returns the successors of a state on a symbol.
    pub fn next_states(&self, state: usize, symbol: usize) -> &[usize] {
        self.transitions
            .get(&(state, symbol))
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Checks whether the automaton accepts a word by exploring its runs.
    ///
    /// The runs are explored depth-first from each initial state.
    /// This is the direct simulation the SAT reduction is checked against.
    pub fn accepts(&self, word: &[usize]) -> bool {
        self.initial_states
            .iter()
            .any(|s| self.accepts_from(*s, word))
    }

    fn accepts_from(&self, state: usize, word: &[usize]) -> bool {
        match word.split_first() {
            None => self.final_states.contains(&state),
            Some((symbol, rest)) => self
                .next_states(state, *symbol)
                .iter()
                .any(|next| self.accepts_from(*next, rest)),
        }
    }

    /// Checks that a sequence of state names is an accepting run for a word.
    ///
    /// The run must start in an initial state, follow the transitions on each symbol, and end in a final state.
    pub fn is_accepting_run<S>(&self, word: &[usize], run: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        let ids = match run
            .iter()
            .map(|s| self.state_id(s.as_ref()))
            .collect::<Option<Vec<usize>>>()
        {
            Some(ids) => ids,
            None => return false,
        };
        if ids.len() != word.len() + 1 {
            return false;
        }
        self.initial_states.contains(&ids[0])
            && self.final_states.contains(&ids[word.len()])
            && word
                .iter()
                .enumerate()
                .all(|(t, symbol)| self.next_states(ids[t], *symbol).contains(&ids[t + 1]))
    }
}
