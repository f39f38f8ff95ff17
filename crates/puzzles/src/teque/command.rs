//! Teque problem format: `N`, then `N` lines of `<command> <operand>`.

use std::fmt;

use super::types::Teque;
use crate::cfg::MAX_PREALLOC;
use crate::input::Tokens;
use crate::problem::SolveError;

/// One parsed teque operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PushBack(i64),
    PushFront(i64),
    PushMiddle(i64),
    Get(usize),
}

impl Command {
    /// Read a command word and its operand.
    pub fn read(tokens: &mut Tokens<'_>) -> Result<Self, SolveError> {
        let word = tokens.next_word()?;
        let cmd = match word {
            "push_back" => Command::PushBack(tokens.next()?),
            "push_front" => Command::PushFront(tokens.next()?),
            "push_middle" => Command::PushMiddle(tokens.next()?),
            "get" => Command::Get(tokens.next()?),
            other => {
                return Err(SolveError::UnknownCommand {
                    word: other.to_string(),
                })
            }
        };
        Ok(cmd)
    }

    /// Apply to `teque`; `Get` yields the element read.
    pub fn apply(self, teque: &mut Teque<i64>) -> Result<Option<i64>, SolveError> {
        match self {
            Command::PushBack(x) => teque.push_back(x),
            Command::PushFront(x) => teque.push_front(x),
            Command::PushMiddle(x) => teque.push_middle(x),
            Command::Get(index) => {
                return teque
                    .get(index)
                    .copied()
                    .map(Some)
                    .ok_or(SolveError::IndexOutOfRange {
                        index,
                        len: teque.len(),
                    })
            }
        }
        Ok(None)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PushBack(x) => write!(f, "push_back {x}"),
            Command::PushFront(x) => write!(f, "push_front {x}"),
            Command::PushMiddle(x) => write!(f, "push_middle {x}"),
            Command::Get(i) => write!(f, "get {i}"),
        }
    }
}

/// Run a full teque input and return the `get` results in issue order.
pub fn run_commands(input: &str) -> Result<Vec<i64>, SolveError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next()?;
    let mut teque = Teque::with_capacity(n.min(MAX_PREALLOC));
    let mut out = Vec::new();
    for _ in 0..n {
        let cmd = Command::read(&mut tokens)?;
        if let Some(value) = cmd.apply(&mut teque)? {
            out.push(value);
        }
    }
    tracing::debug!(commands = n, gets = out.len(), len = teque.len(), "teque");
    Ok(out)
}

/// Teque answer text: one `get` result per line.
pub fn solve(input: &str) -> Result<String, SolveError> {
    let out = run_commands(input)?;
    let lines: Vec<String> = out.iter().map(i64::to_string).collect();
    Ok(lines.join("\n"))
}
