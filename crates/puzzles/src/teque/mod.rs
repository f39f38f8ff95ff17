//! Balanced double-ended sequence ("teque") and its command loop.
//!
//! Purpose
//! - Indexable sequence with amortized O(1) push at the front, the back and
//!   the middle, and O(1) `get`.
//! - The command loop reads the teque problem format and collects the answers
//!   of every `get`.
//!
//! Model
//! - Two `VecDeque` halves, `front ++ back`. The front half holds the same
//!   number of elements as the back half or exactly one more, so the midpoint
//!   is always the seam between the halves and every rebalance moves a single
//!   element across it.

mod command;
mod types;

pub use command::{run_commands, solve, Command};
pub use types::{Iter, Teque};

#[cfg(test)]
mod tests;
