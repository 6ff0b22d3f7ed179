// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    bits::BitSeq,
    cube::{Cube, Vars},
    cube_set::CubeSet,
};
use proptest::prelude::*;
use std::ops::RangeInclusive;

/// Generates a variable count in `vars` together with a random normalized set of minterms over
/// that many variables.
///
/// Each of the `2^n` points is independently present or absent, so every subset (including the
/// empty set and the full set) can be generated.
pub fn minterm_set<B>(vars: RangeInclusive<usize>) -> BoxedStrategy<(Vars, CubeSet<B>)>
where
    B: BitSeq + 'static,
{
    assert!(
        *vars.end() <= 16,
        "minterm sets over {} variables are too large to enumerate",
        vars.end()
    );
    vars.prop_flat_map(|n| (Just(n), prop::collection::vec(any::<bool>(), 1 << n)))
        .prop_map(|(n, present)| {
            let vars = Vars::new(n);
            let set = present
                .into_iter()
                .enumerate()
                .filter(|(_, present)| *present)
                .map(|(ix, _)| {
                    Cube::from_minterm_index(ix as u64, vars)
                        .expect("backend must hold the requested variable count")
                })
                .collect();
            (vars, set)
        })
        .boxed()
}
