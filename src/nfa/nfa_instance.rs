use super::Automaton;
use anyhow::Result;

/// An automaton together with the word to check.
#[derive(Debug, Clone)]
pub struct NfaInstance {
    automaton: Automaton,
    input_string: String,
    word: Vec<usize>,
}

impl NfaInstance {
    /// Builds a new instance.
    ///
    /// The input string is read one symbol per character;
    /// an [`Error::InvalidInputSymbol`](crate::Error::InvalidInputSymbol) is returned if a character is not in the alphabet.
    pub fn new(automaton: Automaton, input_string: &str) -> Result<Self> {
        let word = automaton.read_word(input_string)?;
        Ok(Self {
            automaton,
            input_string: input_string.to_string(),
            word,
        })
    }

    /// Returns the automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Returns the input string, as given.
    pub fn input_string(&self) -> &str {
        &self.input_string
    }

    /// Returns the word as a sequence of symbol identifiers.
    pub fn word(&self) -> &[usize] {
        &self.word
    }
}
