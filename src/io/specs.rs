use crate::cnf::CnfFormula;
use anyhow::Result;
use std::io::{Read, Write};

/// A trait implemented by objects able to read problem instances.
pub trait InstanceReader<T> {
    /// Reads an instance.
    ///
    /// Structural errors are reported before the instance is returned, so that no encoding is made on an invalid instance.
    ///
    /// # Example
    ///
    /// ```
    /// # use satred::io::{CoverInstanceReader, InstanceReader};
    /// let content = r#"{"teachers": [{"name": "A", "subjects": ["math"]}], "subjects": ["math"], "k": 1}"#;
    /// let problem = CoverInstanceReader::default().read(&mut content.as_bytes()).unwrap();
    /// assert_eq!(1, problem.k());
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<T>;
}

/// A trait implemented by objects that serialize CNF formulas.
pub trait FormulaWriter {
    /// Writes a formula.
    fn write(&self, formula: &CnfFormula, writer: &mut dyn Write) -> Result<()>;
}
