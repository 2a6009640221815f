use super::FormulaWriter;
use crate::{cnf::CnfFormula, sat::Literal};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the DIMACS CNF format.
///
/// The output starts with the `p cnf <n_vars> <n_clauses>` header,
/// followed by one line per clause in which each literal is followed by a space and the line ends with `0`.
/// An empty clause is written as a single `0`.
///
/// # Example
///
/// ```
/// # use satred::cnf::CnfFormula;
/// # use satred::io::{DimacsWriter, FormulaWriter};
/// let mut formula = CnfFormula::default();
/// let a = formula.pos("a");
/// let b = formula.neg("b");
/// formula.add_clause(vec![a, b]);
/// let mut buffer = Vec::new();
/// DimacsWriter::default().write(&formula, &mut buffer).unwrap();
/// assert_eq!("p cnf 2 1\n1 -2 0\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct DimacsWriter;

impl FormulaWriter for DimacsWriter {
    fn write(&self, formula: &CnfFormula, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a DIMACS formula";
        write!(writer, "{}", preamble(formula.n_vars(), formula.n_clauses())).context(context)?;
        let mut line = String::new();
        for cl in formula.clauses() {
            line.clear();
            push_clause_line(&mut line, cl);
            write!(writer, "{}", line).context(context)?;
        }
        writer.flush().context(context)
    }
}

pub(crate) fn preamble(n_vars: usize, n_clauses: usize) -> String {
    format!("p cnf {} {}\n", n_vars, n_clauses)
}

pub(crate) fn push_clause_line(buffer: &mut String, cl: &[Literal]) {
    cl.iter().for_each(|l| buffer.push_str(&format!("{} ", l)));
    buffer.push_str("0\n");
}
