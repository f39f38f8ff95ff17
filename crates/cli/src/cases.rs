//! Sample-case directories: `<name>.in` / `<name>.ans` pairs checked in bulk.

use anyhow::{Context, Result};
use puzzles::{compare, Comparison, Problem};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One input with its answer key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub input: PathBuf,
    pub answer: PathBuf,
}

/// Collect the `.in`/`.ans` pairs in `dir`, sorted by name.
///
/// Files with other extensions are ignored; a half without its partner is
/// skipped with a warning.
pub fn discover(dir: &Path) -> Result<Vec<Case>> {
    let mut halves: BTreeMap<String, (Option<PathBuf>, Option<PathBuf>)> = BTreeMap::new();
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let (Some(stem), Some(ext)) = (path.file_stem(), path.extension()) else {
            continue;
        };
        let slot = halves
            .entry(stem.to_string_lossy().into_owned())
            .or_default();
        if ext.eq_ignore_ascii_case("in") {
            slot.0 = Some(path);
        } else if ext.eq_ignore_ascii_case("ans") {
            slot.1 = Some(path);
        }
    }
    let mut cases = Vec::new();
    for (name, pair) in halves {
        match pair {
            (Some(input), Some(answer)) => cases.push(Case {
                name,
                input,
                answer,
            }),
            (None, None) => {}
            (input, _) => {
                let missing = if input.is_some() { ".ans" } else { ".in" };
                tracing::warn!(case = %name, missing, "skipping unpaired case");
            }
        }
    }
    Ok(cases)
}

/// How one case went.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    WrongAnswer(Comparison),
    Failed(String),
}

/// Result of running one case.
#[derive(Debug)]
pub struct CaseRun {
    pub problem: Problem,
    pub name: String,
    pub outcome: Outcome,
}

impl CaseRun {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }
}

impl fmt::Display for CaseRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}/{}", self.problem, self.name);
        match &self.outcome {
            Outcome::Passed => write!(f, "{label}: ok"),
            Outcome::WrongAnswer(cmp) => write!(f, "{label}: wrong answer\n{cmp}"),
            Outcome::Failed(reason) => write!(f, "{label}: error: {reason}"),
        }
    }
}

/// Solve `case` with `problem` and compare against its key.
pub fn run_case(problem: Problem, case: &Case) -> Result<CaseRun> {
    let input = fs::read_to_string(&case.input)
        .with_context(|| format!("reading {}", case.input.display()))?;
    let key = fs::read_to_string(&case.answer)
        .with_context(|| format!("reading {}", case.answer.display()))?;
    let outcome = match problem.solve(&input) {
        Ok(produced) => {
            let cmp = compare(&produced, &key);
            if cmp.is_success() {
                Outcome::Passed
            } else {
                Outcome::WrongAnswer(cmp)
            }
        }
        Err(e) => Outcome::Failed(e.to_string()),
    };
    Ok(CaseRun {
        problem,
        name: case.name.clone(),
        outcome,
    })
}

/// Case directory for `problem`: `<dir>/<id>/` when present, else `dir` itself.
pub fn problem_dir(dir: &Path, problem: Problem) -> PathBuf {
    let nested = dir.join(problem.id());
    if nested.is_dir() {
        nested
    } else {
        dir.to_path_buf()
    }
}
