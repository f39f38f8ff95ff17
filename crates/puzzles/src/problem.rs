//! Problem registry: maps a problem id to its solver.

use std::fmt;
use std::str::FromStr;

use crate::input::InputError;
use crate::{ants, gaps, jewelry, ledger, teque, volume};

/// Errors surfaced by any solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The input ended early or held an unparsable token.
    Input(InputError),
    /// A teque command word that is not one of the four known commands.
    UnknownCommand { word: String },
    /// A teque `get` past the end of the sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// No solver is registered under this id.
    UnknownProblem { name: String },
    /// A polyhedron face with fewer than three vertices.
    DegenerateFace { polyhedron: usize, face: usize },
    /// A friendship pair names a person outside `0..n`.
    InvalidNode { node: usize, n: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Input(e) => write!(f, "bad input: {e}"),
            SolveError::UnknownCommand { word } => write!(f, "unknown command {word:?}"),
            SolveError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            SolveError::UnknownProblem { name } => write!(
                f,
                "unknown problem {name:?} (known: {})",
                Problem::ALL.map(|p| p.id()).join(", ")
            ),
            SolveError::DegenerateFace { polyhedron, face } => write!(
                f,
                "face {face} of polyhedron {polyhedron} is degenerate (needs ≥3 vertices)"
            ),
            SolveError::InvalidNode { node, n } => {
                write!(f, "person {node} out of range for {n} people")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for SolveError {
    fn from(e: InputError) -> Self {
        SolveError::Input(e)
    }
}

/// Every puzzle this crate can solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Problem {
    Teque,
    ThreeDPrinter,
    JewelryBox,
    PrincessPeach,
    Ants,
    MoneyMatters,
}

impl Problem {
    pub const ALL: [Problem; 6] = [
        Problem::Teque,
        Problem::ThreeDPrinter,
        Problem::JewelryBox,
        Problem::PrincessPeach,
        Problem::Ants,
        Problem::MoneyMatters,
    ];

    /// Judge id of the problem.
    pub fn id(self) -> &'static str {
        match self {
            Problem::Teque => "teque",
            Problem::ThreeDPrinter => "threedprinter",
            Problem::JewelryBox => "jewelrybox",
            Problem::PrincessPeach => "princesspeach",
            Problem::Ants => "ants",
            Problem::MoneyMatters => "moneymatters",
        }
    }

    /// Solve one full input; the answer has no trailing newline.
    pub fn solve(self, input: &str) -> Result<String, SolveError> {
        match self {
            Problem::Teque => teque::solve(input),
            Problem::ThreeDPrinter => volume::solve(input),
            Problem::JewelryBox => jewelry::solve(input),
            Problem::PrincessPeach => gaps::solve(input),
            Problem::Ants => ants::solve(input),
            Problem::MoneyMatters => ledger::solve(input),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Problem {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Problem::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or(SolveError::UnknownProblem {
                name: s.to_string(),
            })
    }
}
