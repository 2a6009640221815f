use super::cadical_solver::CadicalSolver;
use crate::Error;
use anyhow::Result;
use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A variable in a SAT solver.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u64);
impl_var_from!(u32);

macro_rules! impl_var_from_neg {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                if v < 0 {
                    panic!("cannot build a variable from a negative integer")
                }
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from_neg!(isize);
impl_var_from_neg!(i64);
impl_var_from_neg!(i32);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A literal in a SAT solver.
///
/// A literal is represented by a non-null integer: its absolute value is the variable, its sign the polarity.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Builds the positive literal of a variable.
    pub fn positive<T>(v: T) -> Self
    where
        T: Into<Variable>,
    {
        Self::from(usize::from(v.into()) as isize)
    }

    /// Returns the opposite literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable of this literal.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns `true` iff this literal is not a negated variable.
    pub fn is_positive(&self) -> bool {
        self.0.get() > 0
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i64);
impl_lit_from!(i32);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<$crate::sat::Literal>
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::sat::Literal::from).collect::<Vec<$crate::sat::Literal>>()
    );
}

/// An assignment of the variables `1..=n` returned by a SAT solver.
///
/// Backends may leave some variables unassigned (for example variables occurring in no clause).
/// This is the reason why accessors to assigned value returns an [Option<bool>].
#[derive(Debug, PartialEq, Eq)]
pub struct Assignment(Vec<Option<bool>>);

impl Assignment {
    pub(crate) fn new(assignment: Vec<Option<bool>>) -> Self {
        Self(assignment)
    }

    /// Returns the value potentially assigned to the variable.
    ///
    /// Variables beyond the scope of the assignment are considered unassigned.
    pub fn value_of<T>(&self, v: T) -> Option<bool>
    where
        T: Into<Variable>,
    {
        self.0.get(usize::from(v.into()) - 1).copied().flatten()
    }

    /// Returns the number of variables covered by this assignment.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff this assignment covers no variable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the variables set to `true`, in increasing order.
    pub fn iter_true_vars(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| if *v == Some(true) { Some(i + 1) } else { None })
    }
}

/// The answer of a SAT solver.
#[derive(Debug, PartialEq, Eq)]
pub enum SolvingResult {
    /// The formula is satisfiable; the model is given.
    Satisfiable(Assignment),
    /// The formula is unsatisfiable.
    Unsatisfiable,
    /// The solver gave no usable answer.
    Unknown,
}

impl SolvingResult {
    /// Returns the underlying model if it exists, or [Option::None] if the formula is unsatisfiable.
    ///
    /// An [`Error::SolverUnavailable`] is returned if the solver answered [SolvingResult::Unknown].
    pub fn into_model(self) -> Result<Option<Assignment>> {
        match self {
            SolvingResult::Satisfiable(assignment) => Ok(Some(assignment)),
            SolvingResult::Unsatisfiable => Ok(None),
            SolvingResult::Unknown => Err(Error::SolverUnavailable(
                "the solver did not decide the formula".to_string(),
            )
            .into()),
        }
    }
}

/// A trait for SAT solvers.
///
/// This is the boundary between the reductions and the satisfiability procedure:
/// nothing in the encoders or the decoders depends on the way the solver works.
pub trait SatSolver {
    /// Adds a clause to this solver.
    fn add_clause(&mut self, cl: Vec<Literal>);

    /// Solves the problem formed by the clauses added so far.
    ///
    /// Failures to invoke the underlying procedure are returned as errors.
    fn solve(&mut self) -> Result<SolvingResult>;

    /// Returns the number of variables known by this solver.
    fn n_vars(&self) -> usize;

    /// Adds a listener, warned when the solver starts and ends a search.
    fn add_listener(&mut self, listener: Box<dyn SolvingListener>);

    /// Ensures the variables up to `new_max_id` are part of the problem, even if they occur in no clause.
    fn reserve(&mut self, new_max_id: usize);
}

/// A trait for objects listening to the solving steps of a SAT solver.
pub trait SolvingListener {
    /// Called when a search begins.
    fn solving_start(&self, n_vars: usize, n_clauses: usize);

    /// Called when a search ends.
    fn solving_end(&self, result: &SolvingResult);
}

/// A trait for objects building new SAT solvers.
pub trait SatSolverFactory {
    /// Builds a new, empty, SAT solver.
    fn new_solver(&self) -> Box<dyn SatSolver>;
}

/// The default SAT solver (Cadical).
pub fn default_solver() -> Box<dyn SatSolver> {
    Box::<CadicalSolver>::default()
}

/// A factory building the default SAT solver.
#[derive(Default)]
pub struct DefaultSatSolverFactory;

impl SatSolverFactory for DefaultSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        default_solver()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_from_pos() {
        let v = Variable::from(1);
        assert_eq!(1, usize::from(v))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_var_from_null() {
        Variable::from(0);
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_var_from_neg() {
        Variable::from(-1);
    }

    #[test]
    fn test_lit_from_neg() {
        let l = Literal::from(-3);
        assert_eq!(-3, isize::from(l));
        assert!(!l.is_positive());
        assert_eq!(3, usize::from(l.var()));
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_lit_from_null() {
        Literal::from(0);
    }

    #[test]
    fn test_positive_lit() {
        assert_eq!(Literal::from(4), Literal::positive(4usize));
    }

    #[test]
    fn test_negate_lit() {
        assert_eq!(Literal::from(-1), Literal::from(1).negate());
        assert_eq!(Literal::from(1), Literal::from(-1).negate());
    }

    #[test]
    fn test_assignment_out_of_scope() {
        let assignment = Assignment::new(vec![Some(true), None]);
        assert_eq!(Some(true), assignment.value_of(1));
        assert_eq!(None, assignment.value_of(2));
        assert_eq!(None, assignment.value_of(3));
    }

    #[test]
    fn test_assignment_true_vars() {
        let assignment = Assignment::new(vec![Some(false), Some(true), None, Some(true)]);
        assert_eq!(vec![2, 4], assignment.iter_true_vars().collect::<Vec<usize>>());
    }

    #[test]
    fn test_into_model_some() {
        assert_eq!(
            Some(Assignment::new(vec![])),
            SolvingResult::Satisfiable(Assignment::new(vec![]))
                .into_model()
                .unwrap()
        );
    }

    #[test]
    fn test_into_model_none() {
        assert_eq!(None, SolvingResult::Unsatisfiable.into_model().unwrap());
    }

    #[test]
    fn test_into_model_unknown() {
        let err = SolvingResult::Unknown.into_model().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SolverUnavailable(_))
        ));
    }
}
