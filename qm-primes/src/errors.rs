// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types returned by parsing and by the fixed-width bit-sequence backends.

use std::io;
use thiserror::Error;

/// Result type alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error for reading a minterm list.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("too many variables in '{input}'")]
    Capacity {
        input: String,
        #[source]
        source: CapacityError,
    },

    #[error("failed to read '{input}'")]
    Io {
        input: String,
        #[source]
        source: io::Error,
    },
}

/// A malformed input line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("parse error: at line {line} in '{input}': {kind}")]
pub struct ParseError {
    /// The input identifier (a path, or `<stdin>`).
    pub input: String,
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected '0' or '1' but found {found:?} at column {column}")]
    InvalidChar { found: char, column: usize },

    #[error("expected {expected} variables but found {found}")]
    WrongLength { found: usize, expected: usize },

    #[error("unexpected end-of-file (expected new-line)")]
    UnexpectedEof,
}

/// A fixed-width backend was asked to hold more positions than it has.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("more than {capacity} variables are not supported by this backend")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Failure to turn a single line into a cube, before line context is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineError {
    Syntax(ParseErrorKind),
    Capacity(CapacityError),
}

impl From<ParseErrorKind> for LineError {
    fn from(kind: ParseErrorKind) -> Self {
        LineError::Syntax(kind)
    }
}

impl From<CapacityError> for LineError {
    fn from(err: CapacityError) -> Self {
        LineError::Capacity(err)
    }
}
