use super::InstanceReader;
use crate::cover::{CoverProblem, Teacher};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct CoverInstanceFile {
    teachers: Vec<TeacherDescription>,
    subjects: Vec<String>,
    k: i64,
}

#[derive(Deserialize)]
struct TeacherDescription {
    name: String,
    subjects: Vec<String>,
}

/// A reader for teacher set cover instances written in JSON.
///
/// ```text
/// {
///   "teachers": [
///     {"name": "A", "subjects": ["math"]},
///     {"name": "B", "subjects": ["science"]}
///   ],
///   "subjects": ["math", "science"],
///   "k": 2
/// }
/// ```
#[derive(Default)]
pub struct CoverInstanceReader;

impl InstanceReader<CoverProblem> for CoverInstanceReader {
    fn read(&self, reader: &mut dyn Read) -> Result<CoverProblem> {
        let file: CoverInstanceFile =
            serde_json::from_reader(reader).context("while parsing a set cover instance")?;
        let teachers = file
            .teachers
            .iter()
            .map(|t| Teacher::new(&t.name, &t.subjects))
            .collect();
        CoverProblem::new(teachers, &file.subjects, file.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn read_str(s: &str) -> Result<CoverProblem> {
        CoverInstanceReader::default().read(&mut s.as_bytes())
    }

    #[test]
    fn test_read_ok() {
        let problem = read_str(
            r#"{"teachers": [{"name": "A", "subjects": ["math"]}, {"name": "B", "subjects": ["science"]}],
                "subjects": ["math", "science"], "k": 2}"#,
        )
        .unwrap();
        assert_eq!(2, problem.teachers().len());
        assert_eq!("B", problem.teachers()[1].name());
        assert_eq!(&["math".to_string(), "science".to_string()], problem.subjects());
        assert_eq!(2, problem.k());
    }

    #[test]
    fn test_missing_k() {
        let err = read_str(r#"{"teachers": [], "subjects": []}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("`k`"));
    }

    #[test]
    fn test_negative_k() {
        let err = read_str(
            r#"{"teachers": [{"name": "A", "subjects": ["math"]}], "subjects": ["math"], "k": -1}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidProblemStructure(_))
        ));
    }

    #[test]
    fn test_no_teacher() {
        let err = read_str(r#"{"teachers": [], "subjects": ["math"], "k": 1}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidProblemStructure(_))
        ));
    }
}
