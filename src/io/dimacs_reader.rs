use super::InstanceReader;
use crate::sat::Literal;
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// A CNF formula read from a DIMACS file, given by its variable count and its clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsProblem {
    n_vars: usize,
    clauses: Vec<Vec<Literal>>,
}

impl DimacsProblem {
    /// Returns the number of variables declared in the header.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Returns the clauses, in file order.
    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }
}

/// A reader for the DIMACS CNF format.
///
/// Lines beginning with `c` are comments. The `p cnf <n_vars> <n_clauses>` header must come before any clause.
/// Clauses are sequences of literals ended by `0` and may span multiple lines.
/// The number of clauses must match the header, and literals must refer to declared variables.
#[derive(Default)]
pub struct DimacsReader;

impl InstanceReader<DimacsProblem> for DimacsReader {
    fn read(&self, reader: &mut dyn Read) -> Result<DimacsProblem> {
        let br = BufReader::new(reader);
        let mut header = None;
        let mut clauses = Vec::new();
        let mut current_clause = Vec::new();
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            let trimmed = l.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            let words = trimmed.split_whitespace().collect::<Vec<&str>>();
            let (n_vars, _) = match header {
                None => {
                    header = Some(read_preamble(&words).with_context(context)?);
                    continue;
                }
                Some(h) => h,
            };
            for w in words {
                let lit = read_literal(w, n_vars).with_context(context)?;
                match lit {
                    None => clauses.push(std::mem::take(&mut current_clause)),
                    Some(l) => current_clause.push(l),
                }
            }
        }
        let (n_vars, n_clauses) = header.ok_or_else(|| anyhow!("missing preamble"))?;
        if !current_clause.is_empty() {
            return Err(anyhow!("last clause is not terminated by 0"));
        }
        if clauses.len() != n_clauses {
            return Err(anyhow!(
                "preamble declares {} clauses, got {}",
                n_clauses,
                clauses.len()
            ));
        }
        Ok(DimacsProblem { n_vars, clauses })
    }
}

fn read_preamble(words: &[&str]) -> Result<(usize, usize)> {
    if words.len() != 4 {
        return Err(anyhow!(
            r#"error in preamble; expected 4 words, got {}"#,
            words.len()
        ));
    }
    if words[0] != "p" || words[1] != "cnf" {
        return Err(anyhow!(
            r#"error in preamble; expected "p cnf", got "{} {}""#,
            words[0],
            words[1]
        ));
    }
    let read_count = |word: &str, kind| {
        word.parse::<usize>()
            .map_err(|_| anyhow!("error in preamble: invalid number of {}", kind))
    };
    Ok((
        read_count(words[2], "variables")?,
        read_count(words[3], "clauses")?,
    ))
}

fn read_literal(word: &str, n_vars: usize) -> Result<Option<Literal>> {
    match word.parse::<isize>() {
        Ok(0) => Ok(None),
        Ok(n) if n.unsigned_abs() <= n_vars => Ok(Some(Literal::from(n))),
        Ok(n) => Err(anyhow!(
            "literal {} refers to an undeclared variable (max is {})",
            n,
            n_vars
        )),
        Err(_) => Err(anyhow!(r#""{}" is not a literal"#, word)),
    }
}
