//! Clause patterns for cardinality constraints.
//!
//! The encodings here add no auxiliary variable. The pairwise at-most-one encoding is quadratic,
//! while the naive at-most-k and at-least-k encodings enumerate combinations and grow exponentially.

use crate::sat::Literal;
use itertools::Itertools;

/// Returns the clause stating that at least one of the literals holds.
///
/// An empty set of literals gives the empty clause.
pub fn at_least_one(lits: &[Literal]) -> Vec<Literal> {
    lits.to_vec()
}

/// Returns the binary clauses stating that at most one of the literals holds.
///
/// A clause is produced for each unordered pair of literals, in lexicographic order of their positions.
pub fn pairwise_at_most_one(lits: &[Literal]) -> impl Iterator<Item = Vec<Literal>> + '_ {
    lits.iter()
        .tuple_combinations()
        .map(|(l1, l2)| vec![l1.negate(), l2.negate()])
}

/// Returns the clauses stating that exactly one of the literals holds.
pub fn exactly_one(lits: &[Literal]) -> impl Iterator<Item = Vec<Literal>> + '_ {
    std::iter::once(at_least_one(lits)).chain(pairwise_at_most_one(lits))
}

/// Returns the clauses stating that at most `k` of the literals hold.
///
/// Each combination of `k+1` literals gives a clause forbidding them to hold together.
/// No clause is produced when `k` is at least the number of literals.
pub fn naive_at_most_k(lits: &[Literal], k: usize) -> Box<dyn Iterator<Item = Vec<Literal>> + '_> {
    if k >= lits.len() {
        return Box::new(std::iter::empty());
    }
    Box::new(
        lits.iter()
            .combinations(k + 1)
            .map(|comb| comb.into_iter().map(|l| l.negate()).collect()),
    )
}

/// Returns the clauses stating that at least `k` of the literals hold.
///
/// Each combination of `n-k+1` literals (where `n` is the number of literals) gives a clause requiring one of them to hold.
/// If `k > n`, the constraint cannot be satisfied and a single empty clause is returned.
pub fn naive_at_least_k(lits: &[Literal], k: usize) -> Box<dyn Iterator<Item = Vec<Literal>> + '_> {
    if k > lits.len() {
        return Box::new(std::iter::once(vec![]));
    }
    Box::new(
        lits.iter()
            .combinations(lits.len() - k + 1)
            .map(|comb| comb.into_iter().copied().collect()),
    )
}
