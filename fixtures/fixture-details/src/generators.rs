// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-vector generators producing minterm lists.

use color_eyre::{eyre::ensure, Result};
use qm_primes::{bits::GrowableBits, cube::{Cube, Vars}};
use std::io::Write;

/// The largest variable count the counter generator accepts.
pub const MAX_COUNTER_VARS: usize = 64;

/// Returns every assignment over `vars` variables in ascending binary order, stopping before
/// the all-ones assignment.
///
/// The prime implicants of this set are the `vars` cubes with a single `0`, and every level of the
/// reduction is as large as it can get for that many variables.
pub fn counter_minterms(vars: usize) -> Result<impl Iterator<Item = u64>> {
    ensure!(
        (1..=MAX_COUNTER_VARS).contains(&vars),
        "variable count {} must be in range 1..={}",
        vars,
        MAX_COUNTER_VARS
    );
    let last = if vars < 64 {
        (1u64 << vars) - 1
    } else {
        u64::MAX
    };
    Ok(0..last)
}

/// Writes minterm indexes over `vars` variables, one line per minterm, leftmost variable first.
pub fn write_minterms(
    out: &mut impl Write,
    vars: usize,
    minterms: impl IntoIterator<Item = u64>,
) -> Result<()> {
    let vars = Vars::new(vars);
    for index in minterms {
        let cube = Cube::<GrowableBits>::from_minterm_index(index, vars)?;
        cube.print(out, vars)?;
    }
    Ok(())
}
