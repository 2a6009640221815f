use assert_cmd::Command;
use assert_fs::{
    prelude::{FileWriteStr, PathChild},
    TempDir,
};
use predicates::prelude::predicate;
use std::fs;

const NFA_INSTANCE: &str = r#"{
    "nfa": {
        "states": ["q0", "q1"],
        "alphabet": ["a", "b"],
        "transitions": {"q0": {"a": ["q0", "q1"]}, "q1": {"b": ["q1"]}},
        "initial_states": ["q0"],
        "final_states": ["q1"]
    },
    "input_string": "INPUT"
}"#;

const COVER_INSTANCE: &str = r#"{
    "teachers": [
        {"name": "A", "subjects": ["math"]},
        {"name": "B", "subjects": ["science"]}
    ],
    "subjects": ["math", "science"],
    "k": K
}"#;

fn solve(
    problem: &str,
    file_name: &str,
    content: &str,
    expected: &str,
) -> Result<TempDir, Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = dir.child(file_name);
    input.write_str(content)?;
    let mut cmd = Command::cargo_bin("satred")?;
    cmd.arg("solve")
        .arg("-p")
        .arg(problem)
        .arg("-f")
        .arg(input.path())
        .arg("--output-dir")
        .arg(dir.child("output").path())
        .arg("--logging-level")
        .arg("off");
    cmd.assert().success().stdout(predicate::eq(expected));
    Ok(dir)
}

#[test]
fn test_nfa_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = solve(
        "nfa",
        "input1.json",
        &NFA_INSTANCE.replace("INPUT", "ab"),
        "SAT-BASED: The input string is accepted by the NFA.\nPath: q0 -> q1 -> q1\nNFA-DFS-BASED: The input string is accepted by the NFA.\n",
    )?;
    let cnf = fs::read_to_string(dir.child("output").child("nfa_output_input1.cnf").path())?;
    assert_eq!(
        "p cnf 6 12\n1 0\n-1 2 3 0\n-4 0\n-2 0\n-3 5 0\n1 4 0\n-1 -4 0\n2 3 0\n-2 -3 0\n6 5 0\n-6 -5 0\n5 0\n",
        cnf
    );
    let txt = fs::read_to_string(dir.child("output").child("nfa_output_input1.txt").path())?;
    assert!(txt.starts_with("(q0@0) ∧\n(-q0@0 ∨ q0@1 ∨ q1@1) ∧\n"));
    assert!(txt.ends_with("(q1@2)"));
    dir.close()?;
    Ok(())
}

#[test]
fn test_nfa_rejected() -> Result<(), Box<dyn std::error::Error>> {
    solve(
        "nfa",
        "input2.json",
        &NFA_INSTANCE.replace("INPUT", "ba"),
        "SAT-BASED: The input string is not accepted by the NFA.\nNFA-DFS-BASED: The input string is not accepted by the NFA.\n",
    )?
    .close()?;
    Ok(())
}

#[test]
fn test_cover_satisfiable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = solve(
        "cover",
        "teachers.json",
        &COVER_INSTANCE.replace('K', "2"),
        "SAT-BASED: Satisfiable. Selected teachers: A, B\n",
    )?;
    let cnf = fs::read_to_string(dir.child("output").child("cover_output_teachers.cnf").path())?;
    assert!(cnf.starts_with("p cnf 6 8\n"));
    assert!(dir
        .child("output")
        .child("cover_output_teachers.txt")
        .path()
        .exists());
    dir.close()?;
    Ok(())
}

#[test]
fn test_cover_unsatisfiable() -> Result<(), Box<dyn std::error::Error>> {
    solve(
        "cover",
        "teachers.json",
        &COVER_INSTANCE.replace('K', "1"),
        "SAT-BASED: Unsatisfiable. No solution found.\n",
    )?
    .close()?;
    Ok(())
}

#[test]
fn test_cover_k_greater_than_teacher_count() -> Result<(), Box<dyn std::error::Error>> {
    solve(
        "cover",
        "teachers.json",
        &COVER_INSTANCE.replace('K', "3"),
        "SAT-BASED: Unsatisfiable. No solution found.\n",
    )?
    .close()?;
    Ok(())
}

#[test]
fn test_invalid_symbol_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = dir.child("input.json");
    input.write_str(&NFA_INSTANCE.replace("INPUT", "abc"))?;
    let mut cmd = Command::cargo_bin("satred")?;
    cmd.arg("solve")
        .arg("-p")
        .arg("nfa")
        .arg("-f")
        .arg(input.path())
        .arg("--output-dir")
        .arg(dir.child("output").path())
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure().stdout(predicate::str::is_empty());
    assert!(!dir.child("output").path().exists());
    dir.close()?;
    Ok(())
}

#[test]
fn test_missing_external_solver() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = dir.child("input.json");
    input.write_str(&COVER_INSTANCE.replace('K', "2"))?;
    let mut cmd = Command::cargo_bin("satred")?;
    cmd.arg("solve")
        .arg("-p")
        .arg("cover")
        .arg("-f")
        .arg(input.path())
        .arg("--output-dir")
        .arg(dir.child("output").path())
        .arg("--external-sat-solver")
        .arg(dir.child("no_such_solver").path())
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure();
    dir.close()?;
    Ok(())
}
