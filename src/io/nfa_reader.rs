use super::InstanceReader;
use crate::nfa::{Automaton, NfaInstance};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeMap, io::Read};

#[derive(Deserialize)]
struct NfaInstanceFile {
    nfa: NfaDescription,
    input_string: String,
}

#[derive(Deserialize)]
struct NfaDescription {
    states: Vec<String>,
    alphabet: Vec<String>,
    transitions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    initial_states: Vec<String>,
    final_states: Vec<String>,
}

/// A reader for NFA acceptance instances written in JSON.
///
/// The expected layout is the following one, where `transitions` maps a state and a symbol to the set of successor states.
/// Pairs with no successor may be omitted.
///
/// ```text
/// {
///   "nfa": {
///     "states": ["q0", "q1"],
///     "alphabet": ["a", "b"],
///     "transitions": {"q0": {"a": ["q0", "q1"]}, "q1": {"b": ["q1"]}},
///     "initial_states": ["q0"],
///     "final_states": ["q1"]
///   },
///   "input_string": "ab"
/// }
/// ```
#[derive(Default)]
pub struct NfaInstanceReader;

impl InstanceReader<NfaInstance> for NfaInstanceReader {
    fn read(&self, reader: &mut dyn Read) -> Result<NfaInstance> {
        let file: NfaInstanceFile =
            serde_json::from_reader(reader).context("while parsing an NFA instance")?;
        let description = file.nfa;
        let mut automaton = Automaton::new(
            &description.states,
            &description.alphabet,
            &description.initial_states,
            &description.final_states,
        )?;
        for (from, by_symbol) in description.transitions.iter() {
            for (symbol, to) in by_symbol.iter() {
                automaton.add_transition(from, symbol, to)?;
            }
        }
        NfaInstance::new(automaton, &file.input_string)
    }
}
