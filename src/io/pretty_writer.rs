use super::FormulaWriter;
use crate::cnf::CnfFormula;
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for a human-readable rendering of CNF formulas.
///
/// Each clause is written as `(l1 ∨ l2 ∨ ...)` where literals are given by their proposition names,
/// prefixed by `-` when negative. Clauses are joined by ` ∧` and a line feed; no connector follows the last clause.
#[derive(Default)]
pub struct PrettyWriter;

impl FormulaWriter for PrettyWriter {
    fn write(&self, formula: &CnfFormula, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a human-readable formula";
        for (i, cl) in formula.clauses().iter().enumerate() {
            if i > 0 {
                write!(writer, " ∧\n").context(context)?;
            }
            let literals = cl
                .iter()
                .map(|l| formula.literal_name(*l))
                .collect::<Vec<String>>();
            write!(writer, "({})", literals.join(" ∨ ")).context(context)?;
        }
        writer.flush().context(context)
    }
}
