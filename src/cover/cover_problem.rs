use crate::Error;
use anyhow::Result;
use std::collections::HashSet;

/// A teacher and the subjects they can teach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
    subjects: Vec<String>,
}

impl Teacher {
    /// Builds a new teacher.
    ///
    /// Repeated subjects are only considered once.
    pub fn new<S>(name: &str, subjects: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut unique_subjects: Vec<String> = Vec::with_capacity(subjects.len());
        subjects.iter().for_each(|s| {
            if !unique_subjects.iter().any(|u| u == s.as_ref()) {
                unique_subjects.push(s.as_ref().to_string());
            }
        });
        Self {
            name: name.to_string(),
            subjects: unique_subjects,
        }
    }

    /// Returns the name of the teacher.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subjects the teacher can teach.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Returns `true` iff the teacher can teach the subject.
    pub fn can_teach(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

/// An instance of the teacher set cover problem.
///
/// The question is whether exactly `k` teachers can be selected so that each required subject is taught by one of them.
///
/// # Example
///
/// ```
/// # use satred::cover::{CoverProblem, Teacher};
/// let problem = CoverProblem::new(
///     vec![Teacher::new("A", &["math"]), Teacher::new("B", &["science"])],
///     &["math", "science"],
///     2,
/// )
/// .unwrap();
/// assert_eq!(2, problem.k());
/// ```
#[derive(Debug, Clone)]
pub struct CoverProblem {
    teachers: Vec<Teacher>,
    subjects: Vec<String>,
    k: usize,
}

impl CoverProblem {
    /// Builds a new instance.
    ///
    /// An [`Error::InvalidProblemStructure`] is returned if there is no teacher,
    /// if two teachers share the same name, or if `k` is not positive.
    /// Repeated required subjects are only considered once.
    /// No upper bound is checked on `k`: a `k` greater than the number of teachers gives an unsatisfiable formula.
    pub fn new<S>(teachers: Vec<Teacher>, subjects: &[S], k: i64) -> Result<Self>
    where
        S: AsRef<str>,
    {
        if teachers.is_empty() {
            return Err(
                Error::InvalidProblemStructure("at least one teacher is required".to_string()).into(),
            );
        }
        let mut names = HashSet::with_capacity(teachers.len());
        if let Some(t) = teachers.iter().find(|t| !names.insert(t.name())) {
            return Err(Error::InvalidProblemStructure(format!(
                r#"teacher name "{}" is used more than once"#,
                t.name()
            ))
            .into());
        }
        if k <= 0 {
            return Err(Error::InvalidProblemStructure(format!(
                "k must be a positive integer, got {}",
                k
            ))
            .into());
        }
        let mut unique_subjects: Vec<String> = Vec::with_capacity(subjects.len());
        subjects.iter().for_each(|s| {
            if !unique_subjects.iter().any(|u| u == s.as_ref()) {
                unique_subjects.push(s.as_ref().to_string());
            }
        });
        Ok(Self {
            teachers,
            subjects: unique_subjects,
            k: k as usize,
        })
    }

    /// Returns the teachers, in input order.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Returns the required subjects, in input order.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Returns the number of teachers to select.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the teacher with the given name, if any.
    pub fn teacher(&self, name: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.name() == name)
    }

    /// Returns the required subjects no teacher can teach.
    pub fn uncoverable_subjects(&self) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|s| !self.teachers.iter().any(|t| t.can_teach(s)))
            .map(|s| s.as_str())
            .collect()
    }

    /// Checks that a set of teacher names is a solution: it has exactly `k` distinct known teachers covering all the subjects.
    pub fn is_cover<S>(&self, selected: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        let teachers = match selected
            .iter()
            .map(|n| self.teacher(n.as_ref()))
            .collect::<Option<Vec<&Teacher>>>()
        {
            Some(t) => t,
            None => return false,
        };
        let distinct = teachers.iter().map(|t| t.name()).collect::<HashSet<&str>>();
        distinct.len() == self.k
            && teachers.len() == self.k
            && self
                .subjects
                .iter()
                .all(|s| teachers.iter().any(|t| t.can_teach(s)))
    }
}
