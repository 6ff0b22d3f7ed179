// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    bits::BitSeq,
    errors::{CapacityError, LineError, ParseErrorKind},
};
use std::{cmp::Ordering, fmt, io};

/// The number of variables of a run, fixed by the first input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vars {
    count: usize,
}

impl Vars {
    #[inline]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    #[inline]
    pub fn count(self) -> usize {
        self.count
    }
}

/// A face of the boolean hypercube.
///
/// Position `i` is constrained iff `mask[i]` is set, in which case `values[i]` is its value.
/// Value bits outside the mask are always cleared, and `ones` always equals the number of
/// constrained positions whose value is 1.
#[derive(Clone, Debug)]
pub struct Cube<B> {
    mask: B,
    values: B,
    ones: usize,
}

impl<B: BitSeq> Cube<B> {
    /// Creates a cube from a mask and values of equal length.
    pub fn new(mask: B, mut values: B) -> Self {
        assert_eq!(
            mask.len(),
            values.len(),
            "mask and values must have the same length"
        );
        values.retain_masked(&mask);
        let ones = values.count_ones_masked(&mask);
        Self { mask, values, ones }
    }

    /// Creates the minterm whose leftmost variable is the most significant bit of `index`.
    pub fn from_minterm_index(index: u64, vars: Vars) -> Result<Self, CapacityError> {
        let n = vars.count();
        let mut mask = B::with_len(n)?;
        let mut values = B::with_len(n)?;
        for ix in 0..n {
            mask.set(ix, true);
            let shift = n - 1 - ix;
            values.set(ix, shift < 64 && (index >> shift) & 1 == 1);
        }
        Ok(Self::new(mask, values))
    }

    /// Parses the first line of input, which also fixes the number of variables.
    ///
    /// `line` excludes the trailing new-line.
    pub fn parse_first(line: &[u8]) -> Result<Self, LineError> {
        let mut mask = B::with_len(0)?;
        let mut values = B::with_len(0)?;
        for (ix, &ch) in line.iter().enumerate() {
            let value = parse_bit(ch, ix)?;
            mask.push(true)?;
            values.push(value)?;
        }
        Ok(Self::new(mask, values))
    }

    /// Parses a subsequent line, which must have exactly `vars` characters.
    ///
    /// `line` excludes the trailing new-line.
    pub fn parse_next(line: &[u8], vars: Vars) -> Result<Self, LineError> {
        let n = vars.count();
        let mut mask = B::with_len(n)?;
        let mut values = B::with_len(n)?;
        for (ix, &ch) in line.iter().enumerate() {
            let value = parse_bit(ch, ix)?;
            if ix < n {
                mask.set(ix, true);
                values.set(ix, value);
            }
        }
        if line.len() != n {
            return Err(ParseErrorKind::WrongLength {
                found: line.len(),
                expected: n,
            }
            .into());
        }
        Ok(Self::new(mask, values))
    }

    #[inline]
    pub fn mask(&self) -> &B {
        &self.mask
    }

    #[inline]
    pub fn values(&self) -> &B {
        &self.values
    }

    /// The number of constrained positions with value 1.
    #[inline]
    pub fn ones(&self) -> usize {
        self.ones
    }

    /// The number of variables this cube is defined over.
    #[inline]
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// The number of constrained positions.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.mask.count_ones()
    }

    /// Returns the value at `ix`, or `None` if the position is a don't care.
    #[inline]
    pub fn literal(&self, ix: usize) -> Option<bool> {
        self.mask.get(ix).then(|| self.values.get(ix))
    }

    /// If `self` and `other` share a mask and differ in exactly one constrained position, returns
    /// that position.
    ///
    /// When `self.ones() <= other.ones()`, a match implies `other.ones() == self.ones() + 1` and
    /// the differing position is 0 in `self` and 1 in `other`.
    #[inline]
    pub fn matches(&self, other: &Self) -> Option<usize> {
        if self.mask != other.mask {
            return None;
        }
        self.values
            .single_masked_difference(&other.values, &self.mask)
    }

    /// Returns a copy of `self` with position `at` turned into a don't care.
    pub fn merge(&self, at: usize) -> Self {
        let mut mask = self.mask.clone();
        mask.set(at, false);
        Self::new(mask, self.values.clone())
    }

    /// Returns true if every point of `other` is also a point of `self`.
    pub fn covers(&self, other: &Self) -> bool {
        (0..self.len()).all(|ix| match self.literal(ix) {
            Some(value) => other.literal(ix) == Some(value),
            None => true,
        })
    }

    #[inline]
    pub fn matrix_display(&self, vars: Vars) -> CubeMatrixDisplay<'_, B> {
        CubeMatrixDisplay::new(self, vars)
    }

    #[inline]
    pub fn algebraic_display(&self, vars: Vars) -> CubeAlgebraicDisplay<'_, B> {
        CubeAlgebraicDisplay::new(self, vars)
    }

    /// Writes the cube in matrix form followed by a new-line.
    pub fn print(&self, out: &mut impl io::Write, vars: Vars) -> io::Result<()> {
        writeln!(out, "{}", self.matrix_display(vars))
    }
}

fn parse_bit(ch: u8, ix: usize) -> Result<bool, ParseErrorKind> {
    match ch {
        b'0' => Ok(false),
        b'1' => Ok(true),
        _ => Err(ParseErrorKind::InvalidChar {
            found: char::from(ch),
            column: ix + 1,
        }),
    }
}

impl<B: BitSeq> PartialEq for Cube<B> {
    fn eq(&self, other: &Self) -> bool {
        // Value bits outside the mask are always clear, so this also compares exactly the
        // constrained values.
        self.mask == other.mask && self.values == other.values
    }
}

impl<B: BitSeq> Eq for Cube<B> {}

impl<B: BitSeq> PartialOrd for Cube<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by `ones`, then mask, then values.
///
/// Sorting a set this way groups cubes with equal `ones` into contiguous blocks, and within a
/// block groups cubes with equal masks.
impl<B: BitSeq> Ord for Cube<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ones
            .cmp(&other.ones)
            .then_with(|| self.mask.cmp(&other.mask))
            .then_with(|| self.values.cmp(&other.values))
    }
}

pub struct CubeMatrixDisplay<'a, B> {
    cube: &'a Cube<B>,
    vars: Vars,
    format: MatrixDisplayFormat,
}

impl<'a, B: BitSeq> CubeMatrixDisplay<'a, B> {
    pub fn new(cube: &'a Cube<B>, vars: Vars) -> Self {
        Self {
            cube,
            vars,
            format: MatrixDisplayFormat::default(),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }
}

impl<'a, B: BitSeq> fmt::Display for CubeMatrixDisplay<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ix in 0..self.vars.count() {
            write!(f, "{}", self.format.char_for(self.cube.literal(ix)))?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixDisplayFormat {
    /// Display a cube using the format `10-1`, with dashes representing don't cares.
    Dashes,

    /// Display a cube using the format `1021`, with `2` representing don't cares.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for a position.
    pub fn char_for(self, literal: Option<bool>) -> char {
        match literal {
            Some(true) => '1',
            Some(false) => '0',
            None => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}

impl Default for MatrixDisplayFormat {
    fn default() -> Self {
        Self::Dashes
    }
}

/// Displays a cube as a product term such as `a b' d`.
pub struct CubeAlgebraicDisplay<'a, B> {
    cube: &'a Cube<B>,
    vars: Vars,
}

impl<'a, B: BitSeq> CubeAlgebraicDisplay<'a, B> {
    pub fn new(cube: &'a Cube<B>, vars: Vars) -> Self {
        Self { cube, vars }
    }
}

impl<'a, B: BitSeq> fmt::Display for CubeAlgebraicDisplay<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for ix in 0..self.vars.count() {
            let value = match self.cube.literal(ix) {
                Some(value) => value,
                None => continue,
            };
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", AlgebraicSymbol::input(ix))?;
            if !value {
                write!(f, "'")?;
            }
        }
        if first {
            // No literals: the cube covers every point.
            write!(f, "1")?;
        }
        Ok(())
    }
}

const ALGEBRAIC_SYMBOLS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Debug)]
pub(crate) enum AlgebraicSymbol {
    Char(char),
    String(String),
}

impl AlgebraicSymbol {
    pub(crate) fn input(ix: usize) -> Self {
        if ix < 26 {
            return Self::Char(ALGEBRAIC_SYMBOLS[ix]);
        }
        let last_ch = ALGEBRAIC_SYMBOLS[ix % 26];

        match Self::input(ix / 26) {
            Self::Char(ch) => Self::String(format!("{}{}", ch, last_ch)),
            Self::String(mut s) => {
                s.push(last_ch);
                Self::String(s)
            }
        }
    }
}

impl fmt::Display for AlgebraicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{}", *ch),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}
