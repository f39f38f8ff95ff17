//! Solutions to small competitive-programming puzzles.
//!
//! Every solver reads the whole problem input as text and returns the full
//! answer text. The one real data structure lives in [`teque`]; the rest are
//! short formula or scan solvers sharing the [`input`] tokenizer.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - The CLI dispatches through [`Problem`]; prefer it over calling solver
//!   modules directly.

pub mod ants;
pub mod cfg;
pub mod compare;
pub mod gaps;
pub mod gen;
pub mod input;
pub mod jewelry;
pub mod ledger;
pub mod problem;
pub mod teque;
pub mod volume;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compare::{compare, Comparison};
pub use problem::{Problem, SolveError};
pub use teque::Teque;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compare::{compare, Comparison, LineMismatch};
    pub use crate::input::{InputError, Tokens};
    pub use crate::problem::{Problem, SolveError};
    pub use crate::teque::{Command, Teque};
}
