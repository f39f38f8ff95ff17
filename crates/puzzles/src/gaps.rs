//! Princess Peach: list the obstacles Mario did not find.

use crate::input::Tokens;
use crate::problem::SolveError;

/// Ids in `0..n` that never appear in `found`, ascending, and the number of
/// distinct ids that did. Ids outside `0..n` are ignored.
///
/// Memory is bounded by `found`, not by `n`.
pub fn missing(n: usize, found: &[usize]) -> (impl Iterator<Item = usize>, usize) {
    let mut hits: Vec<usize> = found.iter().copied().filter(|&id| id < n).collect();
    hits.sort_unstable();
    hits.dedup();
    let distinct = hits.len();
    let mut next_hit = hits.into_iter().peekable();
    let gaps = (0..n).filter(move |&i| {
        if next_hit.peek() == Some(&i) {
            next_hit.next();
            false
        } else {
            true
        }
    });
    (gaps, distinct)
}

pub fn solve(input: &str) -> Result<String, SolveError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next()?;
    let y: usize = tokens.next()?;
    let found: Vec<usize> = tokens.next_n(y)?;
    let (gaps, distinct) = missing(n, &found);
    let mut lines: Vec<String> = gaps.map(|i| i.to_string()).collect();
    lines.push(format!("Mario got {distinct} of the dangerous obstacles."));
    Ok(lines.join("\n"))
}
