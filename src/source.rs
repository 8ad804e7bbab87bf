//! Value sources: where read-driven fills get their numbers.
//!
//! A [`ValueSource`] hands out one primitive per call. The fill strategies
//! never buffer ahead, so the number of reads a fill performs is exactly the
//! number of coordinates/slots it populates.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::fill_error::FillError;

/// Yields one primitive number per read.
pub trait ValueSource {
    fn read_int(&mut self) -> Result<i32, FillError>;
    fn read_long(&mut self) -> Result<i64, FillError>;
    fn read_double(&mut self) -> Result<f64, FillError>;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn read_int(&mut self) -> Result<i32, FillError> {
        (**self).read_int()
    }

    fn read_long(&mut self) -> Result<i64, FillError> {
        (**self).read_long()
    }

    fn read_double(&mut self) -> Result<f64, FillError> {
        (**self).read_double()
    }
}

fn parse_token<T: FromStr>(token: String, kind: &'static str) -> Result<T, FillError> {
    token
        .trim()
        .parse()
        .map_err(|_| FillError::Parse { token, kind })
}

/// Replays a fixed script of tokens, front to back.
///
/// ```
/// # use array_filler::source::{ScriptedSource, ValueSource};
/// let mut src = ScriptedSource::new([5, 200]);
/// assert_eq!(src.read_int().unwrap(), 5);
/// assert_eq!(src.read_long().unwrap(), 200);
/// assert!(src.read_int().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    tokens: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self {
            tokens: tokens.into_iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Tokens not yet read.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn next_token(&mut self) -> Result<String, FillError> {
        self.tokens.pop_front().ok_or(FillError::SourceExhausted)
    }
}

impl ValueSource for ScriptedSource {
    fn read_int(&mut self) -> Result<i32, FillError> {
        parse_token(self.next_token()?, "i32")
    }

    fn read_long(&mut self) -> Result<i64, FillError> {
        parse_token(self.next_token()?, "i64")
    }

    fn read_double(&mut self) -> Result<f64, FillError> {
        parse_token(self.next_token()?, "f64")
    }
}

/// Reads whitespace-separated tokens from any buffered reader.
///
/// Lines are pulled lazily, one at a time, as tokens run out.
#[derive(Debug)]
pub struct TokenSource<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, FillError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(FillError::SourceExhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead> ValueSource for TokenSource<R> {
    fn read_int(&mut self) -> Result<i32, FillError> {
        parse_token(self.next_token()?, "i32")
    }

    fn read_long(&mut self) -> Result<i64, FillError> {
        parse_token(self.next_token()?, "i64")
    }

    fn read_double(&mut self) -> Result<f64, FillError> {
        parse_token(self.next_token()?, "f64")
    }
}
