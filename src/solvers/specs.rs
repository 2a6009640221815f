use anyhow::Result;

/// A trait for solvers checking the acceptance of a word by an automaton.
pub trait AcceptanceComputer {
    /// Computes an accepting run of the automaton on the word.
    ///
    /// In case the word is not accepted, [Option::None] is returned.
    /// Otherwise, the run is returned as the sequence of state names occupied after reading each prefix of the word.
    fn compute_accepting_run(&mut self) -> Result<Option<Vec<String>>>;

    /// Checks whether the word is accepted.
    fn is_accepted(&mut self) -> Result<bool> {
        Ok(self.compute_accepting_run()?.is_some())
    }
}

/// A trait for solvers computing a selection of teachers covering a set of subjects.
pub trait CoverComputer {
    /// Computes a cover.
    ///
    /// In case no cover of the requested size exists, [Option::None] is returned.
    /// Otherwise, the selected teacher names are returned in lexicographic order.
    fn compute_cover(&mut self) -> Result<Option<Vec<String>>>;
}
