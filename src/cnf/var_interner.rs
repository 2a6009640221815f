use crate::sat::Literal;
use std::collections::HashMap;

/// Gives integer indices to named propositions.
///
/// The first call to [`get`](Self::get) with a name allocates the next unused index (starting at 1);
/// later calls with the same name return the same index.
/// Indices are a byproduct of the order of the calls: they must not be compared between two interners.
///
/// # Example
///
/// ```
/// # use satred::cnf::VarInterner;
/// let mut interner = VarInterner::default();
/// assert_eq!(1, interner.get("q0@0"));
/// assert_eq!(2, interner.get("q1@0"));
/// assert_eq!(1, interner.get("q0@0"));
/// assert_eq!(Some("q1@0"), interner.name_of(2));
/// ```
#[derive(Debug, Default, Clone)]
pub struct VarInterner {
    names: Vec<String>,
    name_to_var: HashMap<String, usize>,
}

impl VarInterner {
    /// Returns the index of a proposition, allocating it if the name is new.
    pub fn get(&mut self, name: &str) -> usize {
        if let Some(v) = self.name_to_var.get(name) {
            return *v;
        }
        self.names.push(name.to_string());
        self.name_to_var.insert(name.to_string(), self.names.len());
        self.names.len()
    }

    /// Returns the positive literal of a proposition, allocating it if the name is new.
    pub fn pos(&mut self, name: &str) -> Literal {
        Literal::positive(self.get(name))
    }

    /// Returns the negative literal of a proposition, allocating it if the name is new.
    pub fn neg(&mut self, name: &str) -> Literal {
        self.pos(name).negate()
    }

    /// Returns the name of the proposition associated with an index, if any.
    pub fn name_of(&self, var: usize) -> Option<&str> {
        var.checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(|s| s.as_str())
    }

    /// Returns the number of allocated indices, which is also the greatest one.
    pub fn n_vars(&self) -> usize {
        self.names.len()
    }

    /// Iterates over the pairs of indices and names, by increasing index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_allocation() {
        let mut interner = VarInterner::default();
        assert_eq!(0, interner.n_vars());
        assert_eq!(1, interner.get("a"));
        assert_eq!(2, interner.get("b"));
        assert_eq!(1, interner.get("a"));
        assert_eq!(3, interner.get("c"));
        assert_eq!(3, interner.n_vars());
    }

    #[test]
    fn test_reverse_lookup() {
        let mut interner = VarInterner::default();
        interner.get("select(A)");
        interner.get("select(B)");
        assert_eq!(None, interner.name_of(0));
        assert_eq!(Some("select(A)"), interner.name_of(1));
        assert_eq!(Some("select(B)"), interner.name_of(2));
        assert_eq!(None, interner.name_of(3));
    }

    #[test]
    fn test_literals() {
        let mut interner = VarInterner::default();
        assert_eq!(Literal::from(-1), interner.neg("x"));
        assert_eq!(Literal::from(1), interner.pos("x"));
        assert_eq!(Literal::from(2), interner.pos("y"));
    }

    #[test]
    fn test_deterministic() {
        let names = ["q0@0", "q1@0", "q0@1", "q0@0", "q1@1"];
        let mut i1 = VarInterner::default();
        let mut i2 = VarInterner::default();
        let v1 = names.iter().map(|n| i1.get(n)).collect::<Vec<usize>>();
        let v2 = names.iter().map(|n| i2.get(n)).collect::<Vec<usize>>();
        assert_eq!(v1, v2);
        assert_eq!(
            vec![(1, "q0@0"), (2, "q1@0"), (3, "q0@1"), (4, "q1@1")],
            i1.iter().collect::<Vec<(usize, &str)>>()
        );
    }
}
