//! Ants on a pole: earliest and latest time all ants have fallen off.
//!
//! Two ants bouncing off each other is indistinguishable from them passing
//! through, so each ant simply walks to one end.

use crate::input::Tokens;
use crate::problem::SolveError;

/// `(earliest, latest)` fall-off times for ants at `positions` on a pole of length `len`.
pub fn fall_times(len: u64, positions: &[u64]) -> (u64, u64) {
    positions.iter().fold((0, 0), |(early, late), &p| {
        let to_far_end = len.saturating_sub(p);
        (early.max(p.min(to_far_end)), late.max(p.max(to_far_end)))
    })
}

pub fn solve(input: &str) -> Result<String, SolveError> {
    let mut tokens = Tokens::new(input);
    let cases: usize = tokens.next()?;
    let mut lines = Vec::new();
    for _ in 0..cases {
        let len: u64 = tokens.next()?;
        let n: usize = tokens.next()?;
        let positions: Vec<u64> = tokens.next_n(n)?;
        let (early, late) = fall_times(len, &positions);
        lines.push(format!("{early} {late}"));
    }
    Ok(lines.join("\n"))
}
