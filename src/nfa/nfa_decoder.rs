use crate::{cnf::VarInterner, encodings::ModelDecoder, sat::Assignment, Error};
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref STATE_AT_TIME_PATTERN: Regex = Regex::new(r"^(.+)@(\d+)$").unwrap();
}

/// Translates a model of an [`NfaEncoder`](super::NfaEncoder) formula into an accepting run.
///
/// The run is the sequence of the states occupied at times `0..=n`, where `n` is the length of the word.
pub struct NfaDecoder {
    word_len: usize,
}

impl NfaDecoder {
    /// Builds a decoder for a word of the given length.
    pub fn new(word_len: usize) -> Self {
        Self { word_len }
    }
}

impl ModelDecoder for NfaDecoder {
    type Answer = Vec<String>;

    fn decode(&self, interner: &VarInterner, assignment: &Assignment) -> Result<Vec<String>> {
        let mut time_to_state = BTreeMap::new();
        for var in assignment.iter_true_vars() {
            let captures = match interner
                .name_of(var)
                .and_then(|name| STATE_AT_TIME_PATTERN.captures(name))
            {
                Some(c) => c,
                None => continue,
            };
            let state = captures.get(1).map_or("", |m| m.as_str());
            let time = captures[2].parse::<usize>().map_err(|e| {
                Error::InconsistentModel(format!("invalid time step in {}: {}", &captures[0], e))
            })?;
            if let Some(other) = time_to_state.insert(time, state) {
                return Err(Error::InconsistentModel(format!(
                    r#"states "{}" and "{}" are both occupied at time {}"#,
                    other, state, time
                ))
                .into());
            }
        }
        (0..=self.word_len)
            .map(|t| {
                time_to_state.get(&t).map(|s| s.to_string()).ok_or_else(|| {
                    Error::InconsistentModel(format!("no state is occupied at time {}", t)).into()
                })
            })
            .collect()
    }
}
