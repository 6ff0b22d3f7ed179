// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime implicant generation by repeated merging (Quine-McCluskey).
//!
//! Each round takes the current level of cubes, merges every pair differing in exactly one
//! constrained position into the next level, and moves the cubes that merged with nothing into
//! the prime set. Every merge removes one constrained position, so the loop ends after at most
//! `n` merging rounds for `n` variables.

use crate::{bits::BitSeq, cube::Cube, cube_set::CubeSet};
use itertools::{iproduct, Itertools};
use log::{debug, info, trace};
use std::{cmp::Ordering, iter::Peekable, mem, ops::Range};

/// How candidate pairs are chosen within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairingStrategy {
    /// Compare every pair of cubes in the level.
    AllPairs,

    /// Only compare cubes whose `ones` differ by one and whose masks are equal, using the sort
    /// order of a normalized level to find them as contiguous runs.
    BlockSlice,
}

impl Default for PairingStrategy {
    fn default() -> Self {
        Self::BlockSlice
    }
}

/// Counters collected while generating prime implicants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Non-empty levels processed.
    pub levels: usize,
    /// Levels that produced a non-empty next level.
    pub rounds: usize,
    /// Pairs passed to [`Cube::matches`].
    pub comparisons: u64,
    /// Successful matches, including ones producing a duplicate cube.
    pub merges: u64,
}

/// Drives the merge rounds, owning the current and next level buffers.
#[derive(Clone, Debug)]
pub struct PrimeGenerator<B> {
    strategy: PairingStrategy,
    current: CubeSet<B>,
    next: CubeSet<B>,
    prime: Vec<bool>,
    stats: ReductionStats,
}

impl<B: BitSeq> PrimeGenerator<B> {
    pub fn new(mut minterms: CubeSet<B>, strategy: PairingStrategy) -> Self {
        if !minterms.is_normalized() {
            minterms.normalize();
        }
        Self {
            strategy,
            current: minterms,
            next: CubeSet::new(),
            prime: Vec::new(),
            stats: ReductionStats::default(),
        }
    }

    /// The level the next call to [`step`](Self::step) will process.
    #[inline]
    pub fn current(&self) -> &CubeSet<B> {
        &self.current
    }

    #[inline]
    pub fn stats(&self) -> ReductionStats {
        self.stats
    }

    /// Returns true once no level is left to process.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.current.is_empty()
    }

    /// Runs one round, appending the primes found in the current level to `primes`.
    ///
    /// Returns false without doing anything if there is no level left.
    pub fn step(&mut self, primes: &mut CubeSet<B>) -> bool {
        let Self {
            strategy,
            current,
            next,
            prime,
            stats,
        } = self;
        if current.is_empty() {
            return false;
        }

        let cubes = current.as_slice();
        prime.clear();
        prime.resize(cubes.len(), true);
        next.clear();

        let mut merger = Merger {
            cubes,
            prime: &mut prime[..],
            next: &mut *next,
            comparisons: 0,
            merges: 0,
        };
        match strategy {
            PairingStrategy::AllPairs => merger.all_pairs(),
            PairingStrategy::BlockSlice => merger.block_slice(),
        }
        let (comparisons, merges) = (merger.comparisons, merger.merges);

        let before = primes.len();
        for (cube, &is_prime) in cubes.iter().zip(prime.iter()) {
            if is_prime {
                primes.push(cube.clone());
            }
        }
        next.normalize();

        stats.levels += 1;
        if !next.is_empty() {
            stats.rounds += 1;
        }
        stats.comparisons += comparisons;
        stats.merges += merges;
        debug!(
            "level {}: {} cubes, {} comparisons, {} merges, {} primes, {} cubes in next level",
            stats.levels,
            cubes.len(),
            comparisons,
            merges,
            primes.len() - before,
            next.len(),
        );

        mem::swap(current, next);
        true
    }

    /// Runs rounds until no level is left, appending every prime to `primes`.
    pub fn run(mut self, primes: &mut CubeSet<B>) -> ReductionStats {
        while self.step(primes) {}
        self.stats
    }
}

/// Pairs up cubes of one level.
struct Merger<'a, B> {
    cubes: &'a [Cube<B>],
    prime: &'a mut [bool],
    next: &'a mut CubeSet<B>,
    comparisons: u64,
    merges: u64,
}

impl<'a, B: BitSeq> Merger<'a, B> {
    #[inline]
    fn try_pair(&mut self, i: usize, j: usize) -> Option<usize> {
        self.comparisons += 1;
        let at = self.cubes[i].matches(&self.cubes[j])?;
        self.prime[i] = false;
        self.prime[j] = false;
        self.merges += 1;
        // Duplicates are removed when the next level is normalized.
        self.next.push(self.cubes[i].merge(at));
        Some(at)
    }

    fn all_pairs(&mut self) {
        for (i, j) in (0..self.cubes.len()).tuple_combinations() {
            self.try_pair(i, j);
        }
    }

    /// Requires `cubes` to be normalized.
    fn block_slice(&mut self) {
        debug_assert!(
            self.cubes.windows(2).all(|pair| pair[0] < pair[1]),
            "level must be normalized"
        );
        let cubes = self.cubes;
        let blocks: Vec<_> = runs(cubes, 0..cubes.len(), |a, b| a.ones() == b.ones()).collect();

        for pair in blocks.windows(2) {
            let (lower, upper) = (pair[0].clone(), pair[1].clone());
            if cubes[upper.start].ones() != cubes[lower.start].ones() + 1 {
                continue;
            }
            trace!(
                "blocks with {} and {} ones: {} x {} cubes",
                cubes[lower.start].ones(),
                cubes[upper.start].ones(),
                lower.len(),
                upper.len()
            );
            self.slice_pairs(
                runs(cubes, lower, same_mask).peekable(),
                runs(cubes, upper, same_mask).peekable(),
            );
        }
    }

    /// Walks the same-mask slices of two adjacent blocks in mask order, comparing only slices
    /// with equal masks.
    fn slice_pairs(
        &mut self,
        mut lower: Peekable<Runs<'a, B>>,
        mut upper: Peekable<Runs<'a, B>>,
    ) {
        let cubes = self.cubes;
        while let (Some(l), Some(u)) = (lower.peek(), upper.peek()) {
            match cubes[l.start].mask().cmp(cubes[u.start].mask()) {
                Ordering::Less => {
                    lower.next();
                }
                Ordering::Greater => {
                    upper.next();
                }
                Ordering::Equal => {
                    for (i, j) in iproduct!(l.clone(), u.clone()) {
                        if let Some(at) = self.try_pair(i, j) {
                            debug_assert!(
                                !cubes[i].values().get(at) && cubes[j].values().get(at),
                                "lower cube must have 0 and upper cube 1 at the merged position"
                            );
                        }
                    }
                    lower.next();
                    upper.next();
                }
            }
        }
    }
}

fn same_mask<B: BitSeq>(a: &Cube<B>, b: &Cube<B>) -> bool {
    a.mask() == b.mask()
}

/// Splits `range` of `cubes` into maximal runs of neighbours for which `same` holds.
fn runs<B>(
    cubes: &[Cube<B>],
    range: Range<usize>,
    same: fn(&Cube<B>, &Cube<B>) -> bool,
) -> Runs<'_, B> {
    Runs {
        cubes,
        start: range.start,
        end: range.end,
        same,
    }
}

struct Runs<'a, B> {
    cubes: &'a [Cube<B>],
    start: usize,
    end: usize,
    same: fn(&Cube<B>, &Cube<B>) -> bool,
}

impl<'a, B> Iterator for Runs<'a, B> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }
        let start = self.start;
        let mut end = start + 1;
        while end < self.end && (self.same)(&self.cubes[start], &self.cubes[end]) {
            end += 1;
        }
        self.start = end;
        Some(start..end)
    }
}

impl<B: BitSeq> CubeSet<B> {
    /// Computes the prime implicants of the function whose on-set is this set of minterms.
    #[inline]
    pub fn prime_implicants(self) -> Self {
        self.prime_implicants_with(PairingStrategy::default())
    }

    #[inline]
    pub fn prime_implicants_with(self, strategy: PairingStrategy) -> Self {
        self.prime_implicants_with_stats(strategy).0
    }

    /// Computes the normalized prime implicant set along with counters for the run.
    pub fn prime_implicants_with_stats(self, strategy: PairingStrategy) -> (Self, ReductionStats) {
        let minterms = self.len();
        let mut primes = CubeSet::new();
        let stats = PrimeGenerator::new(self, strategy).run(&mut primes);
        primes.normalize();
        info!(
            "{} minterms -> {} prime implicants ({:?}: {} levels, {} comparisons, {} merges)",
            minterms,
            primes.len(),
            strategy,
            stats.levels,
            stats.comparisons,
            stats.merges
        );
        (primes, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bits::{Bits8, GrowableBits},
        cube::Vars,
        proptest_helpers::minterm_set,
    };
    use proptest::prelude::*;

    fn minterms(vars: Vars, indexes: &[u64]) -> CubeSet<Bits8> {
        indexes
            .iter()
            .map(|&ix| Cube::from_minterm_index(ix, vars).unwrap())
            .collect()
    }

    fn primes_str(set: CubeSet<Bits8>, vars: Vars, strategy: PairingStrategy) -> String {
        set.prime_implicants_with(strategy)
            .matrix_display(vars)
            .to_string()
    }

    const STRATEGIES: [PairingStrategy; 2] =
        [PairingStrategy::AllPairs, PairingStrategy::BlockSlice];

    #[test]
    fn test_basic() {
        for strategy in STRATEGIES {
            let vars = Vars::new(3);
            assert_eq!(primes_str(CubeSet::new(), vars, strategy), "");
            assert_eq!(primes_str(minterms(vars, &[0]), vars, strategy), "000\n");
            assert_eq!(primes_str(minterms(vars, &[0, 1]), vars, strategy), "00-\n");
            assert_eq!(
                primes_str(minterms(vars, &[0, 1, 2, 3, 4]), vars, strategy),
                "-00\n0--\n"
            );

            let vars = Vars::new(2);
            assert_eq!(
                primes_str(minterms(vars, &[0, 1, 2, 3]), vars, strategy),
                "--\n"
            );

            let vars = Vars::new(4);
            assert_eq!(
                primes_str(minterms(vars, &[4, 8, 9, 10, 11, 12, 14, 15]), vars, strategy),
                "-100\n1--0\n10--\n1-1-\n"
            );
        }
    }

    #[test]
    fn test_step() {
        let vars = Vars::new(2);
        let mut gen = PrimeGenerator::new(minterms(vars, &[0, 1, 3]), PairingStrategy::BlockSlice);
        let mut primes = CubeSet::new();

        assert!(gen.step(&mut primes));
        assert!(primes.is_empty());
        assert_eq!(gen.current().matrix_display(vars).to_string(), "0-\n-1\n");

        assert!(gen.step(&mut primes));
        assert_eq!(primes.len(), 2);
        assert!(gen.is_done());
        assert!(!gen.step(&mut primes));

        let stats = gen.stats();
        assert_eq!(stats.levels, 2);
        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.merges, 2);
    }

    #[test]
    fn test_block_slice_skips_pairs() {
        let vars = Vars::new(6);
        let all: Vec<u64> = (0..64).collect();
        let (primes, stats) =
            minterms(vars, &all).prime_implicants_with_stats(PairingStrategy::BlockSlice);
        let (reference, reference_stats) =
            minterms(vars, &all).prime_implicants_with_stats(PairingStrategy::AllPairs);
        assert_eq!(primes, reference);
        assert_eq!(primes.matrix_display(vars).to_string(), "------\n");
        assert_eq!(stats.merges, reference_stats.merges);
        assert_eq!(stats.rounds, 6);
        assert_eq!(stats.levels, 7);
        assert!(stats.comparisons < reference_stats.comparisons);
    }

    #[test]
    fn test_counter() {
        // Every assignment except all ones: one prime per variable.
        let vars = Vars::new(5);
        let all_but_last: Vec<u64> = (0..31).collect();
        for strategy in STRATEGIES {
            assert_eq!(
                primes_str(minterms(vars, &all_but_last), vars, strategy),
                "----0\n---0-\n--0--\n-0---\n0----\n"
            );
        }
    }

    #[test]
    fn test_growable_matches_word() {
        let input = "0000\n0001\n0011\n0111\n1111\n1110\n";
        let (word, vars) = CubeSet::<Bits8>::parse(input.as_bytes(), "word").unwrap();
        let (growable, _) = CubeSet::<GrowableBits>::parse(input.as_bytes(), "growable").unwrap();
        assert_eq!(
            word.prime_implicants().matrix_display(vars).to_string(),
            growable.prime_implicants().matrix_display(vars).to_string()
        );
    }

    fn all_points(vars: Vars) -> impl Iterator<Item = Cube<Bits8>> {
        (0..1u64 << vars.count()).map(move |ix| Cube::from_minterm_index(ix, vars).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn strategies_agree((_vars, set) in minterm_set::<Bits8>(1..=7)) {
            let reference = set.clone().prime_implicants_with(PairingStrategy::AllPairs);
            let optimized = set.prime_implicants_with(PairingStrategy::BlockSlice);
            prop_assert_eq!(reference, optimized);
        }

        #[test]
        fn primes_are_sound_and_maximal((vars, set) in minterm_set::<Bits8>(1..=6)) {
            let (primes, stats) =
                set.clone().prime_implicants_with_stats(PairingStrategy::BlockSlice);

            // Exactly the input points are covered.
            for point in all_points(vars) {
                prop_assert_eq!(primes.covers(&point), set.contains(&point));
            }

            // No prime can be widened without covering a point outside the input.
            for prime in primes.iter() {
                for ix in 0..vars.count() {
                    if prime.literal(ix).is_none() {
                        continue;
                    }
                    let wider = prime.merge(ix);
                    prop_assert!(all_points(vars).any(|p| wider.covers(&p) && !set.contains(&p)));
                }
            }

            prop_assert!(primes.is_normalized());
            prop_assert!(stats.rounds <= vars.count());
            prop_assert!(stats.levels <= vars.count() + 1);
        }
    }
}
