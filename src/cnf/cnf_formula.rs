use super::{ClauseStore, VarInterner};
use crate::sat::{Literal, SatSolver};

/// A CNF formula over named propositions.
///
/// The formula owns the interner giving indices to the propositions and the clauses built on them.
/// It is produced by an encoder, then serialized and/or given to a SAT solver.
#[derive(Debug, Default, Clone)]
pub struct CnfFormula {
    interner: VarInterner,
    clauses: ClauseStore,
}

impl CnfFormula {
    /// Returns the positive literal of the proposition with the given name.
    pub fn pos(&mut self, name: &str) -> Literal {
        self.interner.pos(name)
    }

    /// Returns the negative literal of the proposition with the given name.
    pub fn neg(&mut self, name: &str) -> Literal {
        self.interner.neg(name)
    }

    /// Appends a clause.
    pub fn add_clause(&mut self, clause: Vec<Literal>) {
        self.clauses.add(clause);
    }

    /// Appends a sequence of clauses, keeping their order.
    pub fn add_clauses<I>(&mut self, clauses: I)
    where
        I: IntoIterator<Item = Vec<Literal>>,
    {
        clauses.into_iter().for_each(|cl| self.clauses.add(cl));
    }

    /// Returns the interner of this formula.
    pub fn interner(&self) -> &VarInterner {
        &self.interner
    }

    /// Returns the clauses of this formula.
    pub fn clauses(&self) -> &ClauseStore {
        &self.clauses
    }

    /// Returns the number of variables, as given by the interner.
    pub fn n_vars(&self) -> usize {
        self.interner.n_vars()
    }

    /// Returns the number of clauses.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the name of a literal, prefixed by a minus sign if it is negative.
    ///
    /// Variables unknown to the interner are rendered by their index.
    pub fn literal_name(&self, lit: Literal) -> String {
        let var = usize::from(lit.var());
        let sign = if lit.is_positive() { "" } else { "-" };
        match self.interner.name_of(var) {
            Some(name) => format!("{}{}", sign, name),
            None => format!("{}{}", sign, var),
        }
    }

    /// Loads this formula into a SAT solver.
    ///
    /// All the interned variables are reserved, so that the model returned by the solver covers each of them.
    pub fn load_into(&self, solver: &mut dyn SatSolver) {
        solver.reserve(self.n_vars());
        self.clauses
            .iter()
            .for_each(|cl| solver.add_clause(cl.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clause, sat::CadicalSolver};

    #[test]
    fn test_formula_counts() {
        let mut formula = CnfFormula::default();
        let a = formula.pos("a");
        let not_b = formula.neg("b");
        formula.add_clause(vec![a, not_b]);
        formula.add_clauses(vec![vec![not_b], vec![]]);
        assert_eq!(2, formula.n_vars());
        assert_eq!(3, formula.n_clauses());
        assert_eq!(
            vec![clause![1, -2], clause![-2], clause![]],
            formula.clauses().iter().cloned().collect::<Vec<Vec<Literal>>>()
        );
    }

    #[test]
    fn test_literal_name() {
        let mut formula = CnfFormula::default();
        let a = formula.pos("q0@1");
        assert_eq!("q0@1", formula.literal_name(a));
        assert_eq!("-q0@1", formula.literal_name(a.negate()));
        assert_eq!("-7", formula.literal_name(Literal::from(-7)));
    }

    #[test]
    fn test_load_into() {
        let mut formula = CnfFormula::default();
        let a = formula.pos("a");
        formula.pos("unused");
        formula.add_clause(vec![a]);
        let mut solver = CadicalSolver::default();
        formula.load_into(&mut solver);
        assert_eq!(2, solver.n_vars());
        let model = solver.solve().unwrap().into_model().unwrap().unwrap();
        assert_eq!(Some(true), model.value_of(1));
    }
}
