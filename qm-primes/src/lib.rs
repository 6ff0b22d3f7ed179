// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime implicants of a boolean function given as a list of minterms, computed with the
//! Quine-McCluskey algorithm.
//!
//! ```
//! use qm_primes::{bits::Bits8, cube_set::CubeSet};
//!
//! let input = "000\n001\n010\n011\n100\n";
//! let (minterms, vars) = CubeSet::<Bits8>::parse(input.as_bytes(), "<example>").unwrap();
//! let primes = minterms.prime_implicants();
//! assert_eq!(primes.matrix_display(vars).to_string(), "-00\n0--\n");
//! ```

pub mod bits;
pub mod cube;
pub mod cube_set;
pub mod errors;
pub mod parser;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
