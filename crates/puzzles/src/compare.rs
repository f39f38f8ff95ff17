//! Line-by-line answer comparison, tolerant of float noise.
//!
//! Lines are trimmed before comparing. Two lines match when they have the
//! same tokens, where a pair of tokens that both parse as `f64` only has to
//! agree within `cfg::ABS_TOL` or `cfg::REL_TOL`.

use std::fmt;

use crate::cfg::{ABS_TOL, REL_TOL};

/// One line that differs between produced and expected output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMismatch {
    /// 1-based line number.
    pub line: usize,
    pub got: Option<String>,
    pub expected: Option<String>,
}

/// Outcome of comparing an output against an answer key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub lines_checked: usize,
    pub mismatches: Vec<LineMismatch>,
}

impl Comparison {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return write!(f, "Success ({} lines)", self.lines_checked);
        }
        writeln!(
            f,
            "{} of {} lines differ",
            self.mismatches.len(),
            self.lines_checked
        )?;
        for m in &self.mismatches {
            let got = m.got.as_deref().unwrap_or("<missing>");
            let expected = m.expected.as_deref().unwrap_or("<missing>");
            writeln!(f, "line {}:", m.line)?;
            writeln!(f, "  - {got}")?;
            writeln!(f, "  + {expected}")?;
        }
        Ok(())
    }
}

fn tokens_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => {
            let diff = (x - y).abs();
            diff <= ABS_TOL || diff <= REL_TOL * x.abs().max(y.abs())
        }
        _ => false,
    }
}

fn lines_match(got: &str, expected: &str) -> bool {
    let mut g = got.split_whitespace();
    let mut e = expected.split_whitespace();
    loop {
        match (g.next(), e.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if tokens_match(a, b) => continue,
            _ => return false,
        }
    }
}

/// Compare `output` against `key`, ignoring trailing blank lines on either side.
pub fn compare(output: &str, key: &str) -> Comparison {
    let got: Vec<&str> = output.trim_end().lines().map(str::trim).collect();
    let expected: Vec<&str> = key.trim_end().lines().map(str::trim).collect();
    let n = got.len().max(expected.len());
    let mismatches = (0..n)
        .filter_map(|i| {
            let (g, e) = (got.get(i).copied(), expected.get(i).copied());
            match (g, e) {
                (Some(a), Some(b)) if lines_match(a, b) => None,
                _ => Some(LineMismatch {
                    line: i + 1,
                    got: g.map(str::to_string),
                    expected: e.map(str::to_string),
                }),
            }
        })
        .collect();
    Comparison {
        lines_checked: n,
        mismatches,
    }
}
