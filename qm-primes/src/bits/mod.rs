// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-length boolean sequences used for cube masks and values.
//!
//! Two families of backends implement [`BitSeq`]:
//!
//! * [`WordBits`] packs the sequence into a single machine word. It is fast but holds at most
//!   8, 16, 32 or 64 positions depending on the word type.
//! * [`GrowableBits`] is backed by a [`bitvec`] vector and has no fixed capacity.
//!
//! Both backends order sequences the same way: lexicographically by position, position 0 first,
//! with `false < true`.

mod growable;
mod word;

pub use growable::*;
pub use word::*;

use crate::errors::CapacityError;
use std::fmt;

pub trait BitSeq: Clone + Eq + Ord + fmt::Debug {
    /// The maximum number of positions, or `None` if unbounded.
    const CAPACITY: Option<usize>;

    /// Creates a sequence of `len` false positions.
    fn with_len(len: usize) -> Result<Self, CapacityError>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, ix: usize) -> bool;

    fn set(&mut self, ix: usize, value: bool);

    /// Appends a position to the end of the sequence.
    ///
    /// Fixed-width backends return an error once their capacity is exhausted.
    fn push(&mut self, value: bool) -> Result<(), CapacityError>;

    fn count_ones(&self) -> usize {
        (0..self.len()).filter(|&ix| self.get(ix)).count()
    }

    /// Counts positions set both in `self` and in `mask`.
    fn count_ones_masked(&self, mask: &Self) -> usize {
        (0..self.len())
            .filter(|&ix| mask.get(ix) && self.get(ix))
            .count()
    }

    /// If `self` and `other` differ in exactly one position set in `mask`, returns that position.
    fn single_masked_difference(&self, other: &Self, mask: &Self) -> Option<usize> {
        let mut found = None;
        for ix in 0..self.len() {
            if mask.get(ix) && self.get(ix) != other.get(ix) {
                if found.is_some() {
                    return None;
                }
                found = Some(ix);
            }
        }
        found
    }

    /// Clears every position not set in `mask`.
    fn retain_masked(&mut self, mask: &Self) {
        for ix in 0..self.len() {
            if !mask.get(ix) {
                self.set(ix, false);
            }
        }
    }
}

/// The available [`BitSeq`] implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Word8,
    Word16,
    Word32,
    Word64,
    Growable,
}

impl Backend {
    /// Returns the fastest backend able to hold `vars` positions.
    pub fn smallest_for(vars: usize) -> Self {
        match vars {
            0..=8 => Backend::Word8,
            9..=16 => Backend::Word16,
            17..=32 => Backend::Word32,
            33..=64 => Backend::Word64,
            _ => Backend::Growable,
        }
    }

    pub fn capacity(self) -> Option<usize> {
        match self {
            Backend::Word8 => Bits8::CAPACITY,
            Backend::Word16 => Bits16::CAPACITY,
            Backend::Word32 => Bits32::CAPACITY,
            Backend::Word64 => Bits64::CAPACITY,
            Backend::Growable => GrowableBits::CAPACITY,
        }
    }
}

/// Formats any bit-sequence as a string of `0` and `1`.
pub(crate) fn fmt_bits<B: BitSeq>(bits: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ix in 0..bits.len() {
        f.write_str(if bits.get(ix) { "1" } else { "0" })?;
    }
    Ok(())
}
