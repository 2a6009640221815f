use crate::sat::Literal;

/// An ordered sequence of clauses.
///
/// Clauses are kept in insertion order. No check is made on the literals they contain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClauseStore {
    clauses: Vec<Vec<Literal>>,
}

impl ClauseStore {
    /// Appends a clause.
    pub fn add(&mut self, clause: Vec<Literal>) {
        self.clauses.push(clause);
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` iff no clause was added.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates over the clauses in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Literal>> {
        self.clauses.iter()
    }
}

impl<'a> IntoIterator for &'a ClauseStore {
    type Item = &'a Vec<Literal>;
    type IntoIter = std::slice::Iter<'a, Vec<Literal>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause;

    #[test]
    fn test_insertion_order() {
        let mut store = ClauseStore::default();
        assert!(store.is_empty());
        store.add(clause![2, -1]);
        store.add(clause![]);
        store.add(clause![1]);
        assert_eq!(3, store.len());
        assert_eq!(
            vec![clause![2, -1], clause![], clause![1]],
            store.iter().cloned().collect::<Vec<Vec<Literal>>>()
        );
    }
}
