// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    bits::BitSeq,
    cube::{MatrixDisplayFormat, Vars},
    cube_set::CubeSet,
};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

#[derive(Clone, Debug)]
pub struct CubeSetMatrixDisplay<'a, B> {
    set: &'a CubeSet<B>,
    vars: Vars,
    format: MatrixDisplayFormat,
    cube_separator: (Cow<'a, str>, bool),
}

impl<'a, B: BitSeq> CubeSetMatrixDisplay<'a, B> {
    pub fn new(set: &'a CubeSet<B>, vars: Vars) -> Self {
        Self {
            set,
            vars,
            format: MatrixDisplayFormat::default(),
            cube_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_cube_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.cube_separator = (separator.into(), print_last);
        self
    }
}

impl<'a, B: BitSeq> fmt::Display for CubeSetMatrixDisplay<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cube_count = self.set.len();
        for (elem_ix, elem) in self.set.iter().enumerate() {
            let cube_display = elem.matrix_display(self.vars).with_format(self.format);
            write!(f, "{}", cube_display)?;

            let (cube_separator, print_last) = &self.cube_separator;
            if *print_last || elem_ix < cube_count - 1 {
                write!(f, "{}", cube_separator)?;
            }
        }

        Ok(())
    }
}

/// Displays a set as a sum of products, such as `a b' + c`.
pub struct CubeSetAlgebraicDisplay<'a, B> {
    set: &'a CubeSet<B>,
    vars: Vars,
    separator: Cow<'a, str>,
}

impl<'a, B: BitSeq> CubeSetAlgebraicDisplay<'a, B> {
    pub fn new(set: &'a CubeSet<B>, vars: Vars) -> Self {
        Self {
            set,
            vars,
            separator: Cow::Borrowed(" + "),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a, B: BitSeq> fmt::Display for CubeSetAlgebraicDisplay<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.set.is_empty() {
            return write!(f, "0");
        }
        for elem in self.set.iter().with_position() {
            match elem {
                Position::First(cube) | Position::Middle(cube) => {
                    write!(
                        f,
                        "{}{}",
                        cube.algebraic_display(self.vars),
                        self.separator
                    )?;
                }
                Position::Last(cube) | Position::Only(cube) => {
                    write!(f, "{}", cube.algebraic_display(self.vars))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bits::Bits8,
        cube::{Cube, MatrixDisplayFormat, Vars},
        cube_set::CubeSet,
    };

    fn set() -> (CubeSet<Bits8>, Vars) {
        let vars = Vars::new(3);
        let set = CubeSet::from_cubes(
            [0b000, 0b001, 0b100]
                .into_iter()
                .map(|ix| Cube::from_minterm_index(ix, vars).unwrap()),
        );
        (set, vars)
    }

    #[test]
    fn test_matrix_display() {
        let (set, vars) = set();
        assert_eq!(
            set.matrix_display(vars)
                .with_format(MatrixDisplayFormat::Numeric)
                .with_cube_separator(", ", false)
                .to_string(),
            "000, 001, 100"
        );
        let empty = CubeSet::<Bits8>::new();
        assert_eq!(empty.matrix_display(vars).to_string(), "");
    }

    #[test]
    fn test_algebraic_display() {
        let (set, vars) = set();
        assert_eq!(
            set.algebraic_display(vars).to_string(),
            "a' b' c' + a' b' c + a b' c'"
        );
        assert_eq!(
            set.algebraic_display(vars).with_separator("\n").to_string(),
            "a' b' c'\na' b' c\na b' c'"
        );
        assert_eq!(CubeSet::<Bits8>::new().algebraic_display(vars).to_string(), "0");
    }
}
