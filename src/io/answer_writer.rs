use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the answers computed by the solvers.
///
/// The NFA acceptance answers are written this way:
///   * SAT-based answer: `SAT-BASED: The input string is accepted by the NFA.` followed by the run (`Path: q0 -> q1`),
///     or `SAT-BASED: The input string is not accepted by the NFA.`
///   * simulation-based answer: the same sentences with the `NFA-DFS-BASED` prefix, without the run
///
/// The set cover answers are `SAT-BASED: Satisfiable. Selected teachers: A, B` or `SAT-BASED: Unsatisfiable. No solution found.`
#[derive(Default)]
pub struct AnswerWriter;

fn acceptance_sentence(accepted: bool) -> &'static str {
    if accepted {
        "The input string is accepted by the NFA."
    } else {
        "The input string is not accepted by the NFA."
    }
}

impl AnswerWriter {
    /// Writes the answer of the SAT-based acceptance check, given the accepting run if any.
    pub fn write_sat_acceptance(&self, writer: &mut dyn Write, run: Option<&[String]>) -> Result<()> {
        let context = "while writing a SAT-based acceptance answer";
        writeln!(writer, "SAT-BASED: {}", acceptance_sentence(run.is_some())).context(context)?;
        if let Some(r) = run {
            writeln!(writer, "Path: {}", r.join(" -> ")).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes the answer of the acceptance check made by simulation.
    pub fn write_simulation_acceptance(&self, writer: &mut dyn Write, accepted: bool) -> Result<()> {
        let context = "while writing a simulation-based acceptance answer";
        writeln!(writer, "NFA-DFS-BASED: {}", acceptance_sentence(accepted)).context(context)?;
        writer.flush().context(context)
    }

    /// Writes the answer of the set cover problem, given the selected teachers if any.
    pub fn write_cover(&self, writer: &mut dyn Write, selected: Option<&[String]>) -> Result<()> {
        let context = "while writing a set cover answer";
        match selected {
            Some(teachers) => writeln!(
                writer,
                "SAT-BASED: Satisfiable. Selected teachers: {}",
                teachers.join(", ")
            ),
            None => writeln!(writer, "SAT-BASED: Unsatisfiable. No solution found."),
        }
        .context(context)?;
        writer.flush().context(context)
    }
}
