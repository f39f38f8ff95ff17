//! Whitespace tokenizer shared by all solvers.
//!
//! Inputs are small enough to hold in memory, so callers read everything
//! first and then pull typed tokens in order. Line structure is ignored; the
//! puzzle formats are all whitespace-separated.

use std::any::type_name;
use std::fmt;
use std::str::{FromStr, SplitAsciiWhitespace};

use crate::cfg::MAX_PREALLOC;

/// Errors surfaced while reading tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input ended while `expected` was still required.
    UnexpectedEof { expected: &'static str },
    /// A token did not parse as `expected`.
    Malformed {
        token: String,
        expected: &'static str,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input (expected {expected})")
            }
            InputError::Malformed { token, expected } => {
                write!(f, "malformed token {token:?} (expected {expected})")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Cursor over the whitespace-separated tokens of an input text.
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    /// Next raw token.
    pub fn next_word(&mut self) -> Result<&'a str, InputError> {
        self.inner
            .next()
            .ok_or(InputError::UnexpectedEof { expected: "a token" })
    }

    /// Next token parsed as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T, InputError> {
        let expected = short_type_name::<T>();
        let token = self
            .inner
            .next()
            .ok_or(InputError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| InputError::Malformed {
            token: token.to_string(),
            expected,
        })
    }

    /// Next `n` tokens parsed as `T`.
    pub fn next_n<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>, InputError> {
        let mut out = Vec::with_capacity(n.min(MAX_PREALLOC));
        for _ in 0..n {
            out.push(self.next()?);
        }
        Ok(out)
    }

    /// Tokens not yet consumed.
    pub fn remaining(self) -> usize {
        self.inner.count()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mixed_tokens_across_lines() {
        let mut t = Tokens::new("3\npush_back 9\r\n  get 0\n");
        assert_eq!(t.next::<usize>().unwrap(), 3);
        assert_eq!(t.next_word().unwrap(), "push_back");
        assert_eq!(t.next::<i64>().unwrap(), 9);
        assert_eq!(t.next_word().unwrap(), "get");
        assert_eq!(t.remaining(), 1);
    }

    #[test]
    fn eof_names_expected_type() {
        let mut t = Tokens::new("  \n");
        assert_eq!(
            t.next::<u32>(),
            Err(InputError::UnexpectedEof { expected: "u32" })
        );
    }

    #[test]
    fn malformed_keeps_token() {
        let mut t = Tokens::new("1.5");
        let err = t.next::<i64>().unwrap_err();
        assert_eq!(
            err,
            InputError::Malformed {
                token: "1.5".into(),
                expected: "i64"
            }
        );
        assert!(err.to_string().contains("\"1.5\""));
    }

    #[test]
    fn next_n_collects_in_order() {
        let mut t = Tokens::new("1 2 3 4");
        assert_eq!(t.next_n::<i32>(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(t.next::<f64>().unwrap(), 4.0);
    }
}
