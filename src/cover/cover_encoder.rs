use super::CoverProblem;
use crate::{
    cnf::CnfFormula,
    encodings::{cardinality, ProblemEncoder},
    sat::Literal,
};
use log::{info, warn};

/// Returns the name of the proposition stating a teacher is selected.
pub fn select_var_name(teacher: &str) -> String {
    format!("select({})", teacher)
}

/// Returns the name of the proposition stating a teacher is assigned to a subject.
///
/// Backslashes and commas in the teacher and subject names are escaped by a backslash,
/// so that distinct pairs never share a proposition.
pub fn assign_var_name(teacher: &str, subject: &str) -> String {
    format!(
        "assign({},{})",
        escape_name_part(teacher),
        escape_name_part(subject)
    )
}

fn escape_name_part(part: &str) -> String {
    part.replace('\\', "\\\\").replace(',', "\\,")
}

/// An encoder for the teacher set cover problem.
///
/// The clauses are emitted in this order:
///
/// 1. for each teacher and each required subject, a unit clause fixing whether the teacher can teach the subject,
/// 2. for each required subject, a clause requiring one of the selected teachers to teach it,
/// 3. the clauses stating exactly `k` teachers are selected, using the naive combination-based encoding.
///
/// The capability propositions are pinned by unit clauses instead of being replaced by constants;
/// this keeps the formula readable when it is written in its named form.
pub struct CoverEncoder<'a> {
    problem: &'a CoverProblem,
}

impl<'a> CoverEncoder<'a> {
    /// Builds an encoder for the given instance.
    pub fn new(problem: &'a CoverProblem) -> Self {
        Self { problem }
    }

    fn encode_capabilities(&self, formula: &mut CnfFormula) {
        for teacher in self.problem.teachers() {
            for subject in self.problem.subjects() {
                let name = assign_var_name(teacher.name(), subject);
                let lit = if teacher.can_teach(subject) {
                    formula.pos(&name)
                } else {
                    formula.neg(&name)
                };
                formula.add_clause(vec![lit]);
            }
        }
    }

    fn encode_coverage(&self, formula: &mut CnfFormula) {
        for subject in self.problem.subjects() {
            let cl = self
                .problem
                .teachers()
                .iter()
                .filter(|t| t.can_teach(subject))
                .map(|t| formula.pos(&select_var_name(t.name())))
                .collect::<Vec<Literal>>();
            if cl.is_empty() {
                warn!(r#"no teacher can teach subject "{}""#, subject);
            }
            formula.add_clause(cl);
        }
    }

    fn encode_selection_count(&self, formula: &mut CnfFormula) {
        let select_lits = self
            .problem
            .teachers()
            .iter()
            .map(|t| formula.pos(&select_var_name(t.name())))
            .collect::<Vec<Literal>>();
        let k = self.problem.k();
        formula.add_clauses(cardinality::naive_at_most_k(&select_lits, k));
        formula.add_clauses(cardinality::naive_at_least_k(&select_lits, k));
    }
}

impl ProblemEncoder for CoverEncoder<'_> {
    fn encode(&self) -> CnfFormula {
        let mut formula = CnfFormula::default();
        self.encode_capabilities(&mut formula);
        self.encode_coverage(&mut formula);
        self.encode_selection_count(&mut formula);
        info!(
            "encoded the selection of {} teachers among {} for {} subjects into {} variables and {} clauses",
            self.problem.k(),
            self.problem.teachers().len(),
            self.problem.subjects().len(),
            formula.n_vars(),
            formula.n_clauses()
        );
        formula
    }
}
