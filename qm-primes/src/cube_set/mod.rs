// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod display;

pub use display::*;

use crate::{
    bits::BitSeq,
    cube::{Cube, Vars},
};
use std::io;

/// A collection of cubes.
///
/// Cubes can be added either with [`insert`](Self::insert), which keeps the set free of
/// duplicates at linear cost per insertion, or with [`push`](Self::push) followed by
/// [`normalize`](Self::normalize), which sorts and removes duplicates in one pass.
#[derive(Clone, Debug)]
pub struct CubeSet<B> {
    cubes: Vec<Cube<B>>,
}

impl<B: BitSeq> CubeSet<B> {
    #[inline]
    pub fn new() -> Self {
        Self { cubes: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cubes: Vec::with_capacity(capacity),
        }
    }

    /// Collects the given cubes into a normalized set.
    pub fn from_cubes(cubes: impl IntoIterator<Item = Cube<B>>) -> Self {
        let mut set = Self {
            cubes: cubes.into_iter().collect(),
        };
        set.normalize();
        set
    }

    /// Adds `cube` unless a structurally equal cube is already present.
    ///
    /// Returns true if the cube was added.
    pub fn insert(&mut self, cube: Cube<B>) -> bool {
        if self.contains(&cube) {
            return false;
        }
        self.cubes.push(cube);
        true
    }

    /// Adds `cube` without checking for duplicates.
    #[inline]
    pub fn push(&mut self, cube: Cube<B>) {
        self.cubes.push(cube);
    }

    /// Sorts the set by the cube order and removes duplicates.
    pub fn normalize(&mut self) {
        self.cubes.sort_unstable();
        self.cubes.dedup();
    }

    /// Returns true if the set is sorted and free of duplicates.
    pub fn is_normalized(&self) -> bool {
        self.cubes.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[inline]
    pub fn contains(&self, cube: &Cube<B>) -> bool {
        self.cubes.iter().any(|elem| elem == cube)
    }

    /// Returns true if some cube in the set covers every point of `cube`.
    pub fn covers(&self, cube: &Cube<B>) -> bool {
        self.cubes.iter().any(|elem| elem.covers(cube))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Removes every cube, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.cubes.clear();
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cube<B>> {
        self.cubes.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cube<B>] {
        &self.cubes
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Cube<B>> {
        self.cubes
    }

    #[inline]
    pub fn matrix_display(&self, vars: Vars) -> CubeSetMatrixDisplay<'_, B> {
        CubeSetMatrixDisplay::new(self, vars)
    }

    #[inline]
    pub fn algebraic_display(&self, vars: Vars) -> CubeSetAlgebraicDisplay<'_, B> {
        CubeSetAlgebraicDisplay::new(self, vars)
    }

    /// Writes every cube in matrix form, one per line, in iteration order.
    pub fn print(&self, out: &mut impl io::Write, vars: Vars) -> io::Result<()> {
        for cube in &self.cubes {
            cube.print(out, vars)?;
        }
        Ok(())
    }
}

impl<B: BitSeq> Default for CubeSet<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares cubes in iteration order; normalize both sides to compare as sets.
impl<B: BitSeq> PartialEq for CubeSet<B> {
    fn eq(&self, other: &Self) -> bool {
        self.cubes == other.cubes
    }
}

impl<B: BitSeq> Eq for CubeSet<B> {}

impl<'a, B> IntoIterator for &'a CubeSet<B> {
    type Item = &'a Cube<B>;
    type IntoIter = std::slice::Iter<'a, Cube<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.iter()
    }
}

impl<B: BitSeq> FromIterator<Cube<B>> for CubeSet<B> {
    fn from_iter<I: IntoIterator<Item = Cube<B>>>(iter: I) -> Self {
        Self::from_cubes(iter)
    }
}
