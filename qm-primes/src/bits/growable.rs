// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{fmt_bits, BitSeq};
use crate::errors::CapacityError;
use bitvec::vec::BitVec;
use std::{cmp::Ordering, fmt};

/// A bit-sequence of unbounded length, backed by a [`BitVec`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct GrowableBits {
    bits: BitVec,
}

impl BitSeq for GrowableBits {
    const CAPACITY: Option<usize> = None;

    fn with_len(len: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            bits: BitVec::repeat(false, len),
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    fn get(&self, ix: usize) -> bool {
        self.bits[ix]
    }

    #[inline]
    fn set(&mut self, ix: usize, value: bool) {
        self.bits.set(ix, value);
    }

    fn push(&mut self, value: bool) -> Result<(), CapacityError> {
        self.bits.push(value);
        Ok(())
    }

    fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    fn count_ones_masked(&self, mask: &Self) -> usize {
        self.bits
            .iter()
            .by_vals()
            .zip(mask.bits.iter().by_vals())
            .filter(|&(value, mask)| value && mask)
            .count()
    }
}

impl PartialOrd for GrowableBits {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GrowableBits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .iter()
            .by_vals()
            .cmp(other.bits.iter().by_vals())
    }
}

impl fmt::Debug for GrowableBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrowableBits(")?;
        fmt_bits(self, f)?;
        write!(f, ")")
    }
}
