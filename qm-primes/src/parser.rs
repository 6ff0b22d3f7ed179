// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading minterm lists.
//!
//! The input is one minterm per line, each a string of `0` and `1` terminated by a new-line. The
//! first line fixes the number of variables; every later line must have the same length.

use crate::{
    bits::BitSeq,
    cube::{Cube, Vars},
    cube_set::CubeSet,
    errors::{Error, LineError, ParseError, ParseErrorKind, Result},
};
use log::debug;
use std::io::BufRead;

/// Reads cubes line by line, tracking the line number for error reports.
pub struct CubeReader<R> {
    reader: R,
    input: String,
    lineno: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> CubeReader<R> {
    /// Creates a reader. `input` names the source in error messages.
    pub fn new(reader: R, input: impl Into<String>) -> Self {
        Self {
            reader,
            input: input.into(),
            lineno: 0,
            buf: Vec::new(),
        }
    }

    /// Reads the first minterm, which fixes the number of variables.
    ///
    /// Returns `None` at end of input.
    pub fn first<B: BitSeq>(&mut self) -> Result<Option<(Cube<B>, Vars)>> {
        let terminated = match self.read_line()? {
            Some(terminated) => terminated,
            None => return Ok(None),
        };
        let cube = self.check(Cube::parse_first(&self.buf), terminated)?;
        let vars = Vars::new(cube.len());
        Ok(Some((cube, vars)))
    }

    /// Reads a subsequent minterm over `vars` variables.
    ///
    /// Returns `None` at end of input.
    pub fn next_cube<B: BitSeq>(&mut self, vars: Vars) -> Result<Option<Cube<B>>> {
        let terminated = match self.read_line()? {
            Some(terminated) => terminated,
            None => return Ok(None),
        };
        let cube = self.check(Cube::parse_next(&self.buf, vars), terminated)?;
        Ok(Some(cube))
    }

    /// The number of lines read so far.
    #[inline]
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Reads one line into `buf` without its new-line. Returns whether the new-line was present.
    fn read_line(&mut self) -> Result<Option<bool>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| Error::Io {
                input: self.input.clone(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.lineno += 1;
        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        }
        Ok(Some(terminated))
    }

    fn check<B: BitSeq>(
        &self,
        parsed: Result<Cube<B>, LineError>,
        terminated: bool,
    ) -> Result<Cube<B>> {
        match parsed {
            Ok(cube) if terminated => Ok(cube),
            Ok(_) => Err(self.parse_error(ParseErrorKind::UnexpectedEof)),
            // A line cut short by the end of the input.
            Err(LineError::Syntax(ParseErrorKind::WrongLength { found, expected }))
                if !terminated && found < expected =>
            {
                Err(self.parse_error(ParseErrorKind::UnexpectedEof))
            }
            Err(LineError::Syntax(kind)) => Err(self.parse_error(kind)),
            Err(LineError::Capacity(source)) => Err(Error::Capacity {
                input: self.input.clone(),
                source,
            }),
        }
    }

    fn parse_error(&self, kind: ParseErrorKind) -> Error {
        ParseError {
            input: self.input.clone(),
            line: self.lineno,
            kind,
        }
        .into()
    }
}

impl<B: BitSeq> CubeSet<B> {
    /// Parses a minterm list into a normalized set, returning the number of variables.
    ///
    /// Empty input yields an empty set over zero variables.
    pub fn parse(reader: impl BufRead, input: &str) -> Result<(Self, Vars)> {
        let mut reader = CubeReader::new(reader, input);
        let mut set = Self::new();
        let vars = match reader.first()? {
            Some((cube, vars)) => {
                set.push(cube);
                vars
            }
            None => return Ok((set, Vars::new(0))),
        };
        while let Some(cube) = reader.next_cube(vars)? {
            set.push(cube);
        }
        let lines = reader.lineno();
        set.normalize();
        debug!(
            "read {} lines ({} distinct minterms) over {} variables from '{}'",
            lines,
            set.len(),
            vars.count(),
            input
        );
        Ok((set, vars))
    }
}

/// Returns the length of the first line of `input`, without its new-line.
pub fn first_line_len(input: &[u8]) -> usize {
    input
        .iter()
        .position(|&ch| ch == b'\n')
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{Bits16, Bits8, GrowableBits};

    fn parse(input: &str) -> Result<(CubeSet<Bits8>, Vars)> {
        CubeSet::parse(input.as_bytes(), "test.in")
    }

    fn parse_error(input: &str) -> ParseError {
        match parse(input) {
            Err(Error::Parse(err)) => err,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let (set, vars) = parse("").unwrap();
        assert!(set.is_empty());
        assert_eq!(vars.count(), 0);
    }

    #[test]
    fn test_parse_valid() {
        let (set, vars) = parse("011\n000\n011\n110\n").unwrap();
        assert_eq!(vars.count(), 3);
        assert_eq!(set.len(), 3);
        assert!(set.is_normalized());
        assert_eq!(set.matrix_display(vars).to_string(), "000\n011\n110\n");
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_error("01\n0x\n");
        assert_eq!(err.line, 2);
        assert_eq!(err.input, "test.in");
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidChar {
                found: 'x',
                column: 2
            }
        );

        let err = parse_error("010\n01\n");
        assert_eq!(err.line, 2);
        assert_eq!(
            err.kind,
            ParseErrorKind::WrongLength {
                found: 2,
                expected: 3
            }
        );

        let err = parse_error("010\n111\n0101\n");
        assert_eq!(err.line, 3);
        assert_eq!(
            err.kind,
            ParseErrorKind::WrongLength {
                found: 4,
                expected: 3
            }
        );

        let err = parse_error("2\n");
        assert_eq!(err.line, 1);

        assert_eq!(
            err.to_string(),
            "parse error: at line 1 in 'test.in': expected '0' or '1' but found '2' at column 1"
        );
    }

    #[test]
    fn test_unexpected_eof() {
        assert_eq!(parse_error("01").kind, ParseErrorKind::UnexpectedEof);
        assert_eq!(parse_error("01\n1").kind, ParseErrorKind::UnexpectedEof);
        let err = parse_error("01\n10");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
        assert_eq!(err.line, 2);
        // A bad character is reported before the missing new-line.
        assert!(matches!(
            parse_error("01\n1x").kind,
            ParseErrorKind::InvalidChar { found: 'x', .. }
        ));
        // Overlong unterminated lines report the length.
        assert!(matches!(
            parse_error("01\n101").kind,
            ParseErrorKind::WrongLength { found: 3, .. }
        ));
    }

    #[test]
    fn test_capacity() {
        let input = "01010101010101010\n";
        match CubeSet::<Bits16>::parse(input.as_bytes(), "wide.in") {
            Err(Error::Capacity { input, source }) => {
                assert_eq!(input, "wide.in");
                assert_eq!(source.capacity, 16);
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
        let (set, vars) = CubeSet::<GrowableBits>::parse(input.as_bytes(), "wide.in").unwrap();
        assert_eq!(vars.count(), 17);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_zero_variables() {
        let (set, vars) = parse("\n\n").unwrap();
        assert_eq!(vars.count(), 0);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first_line_len() {
        assert_eq!(first_line_len(b""), 0);
        assert_eq!(first_line_len(b"0101\n01"), 4);
        assert_eq!(first_line_len(b"010"), 3);
    }
}
