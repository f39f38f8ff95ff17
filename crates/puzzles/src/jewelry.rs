//! Jewelry box: largest open box folded from an `x × y` sheet.
//!
//! Cutting an `h × h` square from each corner gives volume
//! `V(h) = h (x - 2h)(y - 2h)`; the smaller root of `V'(h) = 0` is the maximum.

use crate::input::Tokens;
use crate::problem::SolveError;

/// Optimal corner cut `h` for an `x × y` sheet.
pub fn best_cut(x: f64, y: f64) -> f64 {
    (x + y - (x * x - x * y + y * y).sqrt()) / 6.0
}

/// Largest box volume for an `x × y` sheet.
pub fn max_volume(x: f64, y: f64) -> f64 {
    let h = best_cut(x, y);
    h * (x - 2.0 * h) * (y - 2.0 * h)
}

pub fn solve(input: &str) -> Result<String, SolveError> {
    let mut tokens = Tokens::new(input);
    let t: usize = tokens.next()?;
    let mut lines = Vec::new();
    for _ in 0..t {
        let x: f64 = tokens.next()?;
        let y: f64 = tokens.next()?;
        // `{:?}` keeps the `.0` on whole volumes.
        lines.push(format!("{:?}", max_volume(x, y)));
    }
    Ok(lines.join("\n"))
}
