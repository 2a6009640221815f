use crate::{cnf::VarInterner, encodings::ModelDecoder, sat::Assignment};
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SELECT_PATTERN: Regex = Regex::new(r"^select\((.+)\)$").unwrap();
}

/// Translates a model of a [`CoverEncoder`](super::CoverEncoder) formula into the names of the selected teachers.
///
/// The names are sorted in lexicographic order.
#[derive(Default)]
pub struct CoverDecoder;

impl ModelDecoder for CoverDecoder {
    type Answer = Vec<String>;

    fn decode(&self, interner: &VarInterner, assignment: &Assignment) -> Result<Vec<String>> {
        let mut selected = assignment
            .iter_true_vars()
            .filter_map(|v| interner.name_of(v))
            .filter_map(|name| SELECT_PATTERN.captures(name))
            .map(|c| c[1].to_string())
            .collect::<Vec<String>>();
        selected.sort_unstable();
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let mut interner = VarInterner::default();
        ["assign(B,math)", "select(B)", "select(A)", "select(C)"]
            .iter()
            .for_each(|n| {
                interner.get(n);
            });
        let assignment = Assignment::new(vec![Some(true), Some(true), Some(true), None]);
        assert_eq!(
            vec!["A", "B"],
            CoverDecoder.decode(&interner, &assignment).unwrap()
        );
    }

    #[test]
    fn test_decode_nothing_selected() {
        let mut interner = VarInterner::default();
        interner.get("select(A)");
        let assignment = Assignment::new(vec![Some(false)]);
        assert!(CoverDecoder
            .decode(&interner, &assignment)
            .unwrap()
            .is_empty());
    }
}
