// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{fmt_bits, BitSeq};
use crate::errors::CapacityError;
use std::{
    cmp::Ordering,
    fmt,
    hash::Hash,
    ops::{BitAnd, BitXor},
};

/// An unsigned integer usable as storage for [`WordBits`].
pub trait Word:
    Copy + Eq + Ord + Hash + fmt::Debug + BitAnd<Output = Self> + BitXor<Output = Self>
{
    const BITS: usize;
    const ZERO: Self;

    /// The single-bit word for position `ix`. Position 0 is the most significant bit.
    fn bit(ix: usize) -> Self;

    fn count_ones(self) -> usize;

    fn leading_zeros(self) -> usize;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;

                #[inline]
                fn bit(ix: usize) -> Self {
                    (1 as $ty) << (<Self as Word>::BITS - 1 - ix)
                }

                #[inline]
                fn count_ones(self) -> usize {
                    <$ty>::count_ones(self) as usize
                }

                #[inline]
                fn leading_zeros(self) -> usize {
                    <$ty>::leading_zeros(self) as usize
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

/// A bit-sequence packed into one machine word.
///
/// Position `i` lives at bit `W::BITS - 1 - i` and unused low bits stay zero, so comparing the
/// words numerically is the same as comparing the sequences lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordBits<W> {
    word: W,
    len: u8,
}

pub type Bits8 = WordBits<u8>;
pub type Bits16 = WordBits<u16>;
pub type Bits32 = WordBits<u32>;
pub type Bits64 = WordBits<u64>;

impl<W: Word> WordBits<W> {
    #[inline]
    pub fn word(&self) -> W {
        self.word
    }

    #[inline]
    fn check_ix(&self, ix: usize) {
        debug_assert!(
            ix < self.len(),
            "position {} must be in range 0..{}",
            ix,
            self.len()
        );
    }
}

impl<W: Word> BitSeq for WordBits<W> {
    const CAPACITY: Option<usize> = Some(W::BITS);

    fn with_len(len: usize) -> Result<Self, CapacityError> {
        if len > W::BITS {
            return Err(CapacityError { capacity: W::BITS });
        }
        Ok(Self {
            word: W::ZERO,
            len: len as u8,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    fn get(&self, ix: usize) -> bool {
        self.check_ix(ix);
        self.word & W::bit(ix) != W::ZERO
    }

    #[inline]
    fn set(&mut self, ix: usize, value: bool) {
        self.check_ix(ix);
        let bit = W::bit(ix);
        if (self.word & bit != W::ZERO) != value {
            self.word = self.word ^ bit;
        }
    }

    fn push(&mut self, value: bool) -> Result<(), CapacityError> {
        if self.len() == W::BITS {
            return Err(CapacityError { capacity: W::BITS });
        }
        self.len += 1;
        self.set(self.len() - 1, value);
        Ok(())
    }

    #[inline]
    fn count_ones(&self) -> usize {
        self.word.count_ones()
    }

    #[inline]
    fn count_ones_masked(&self, mask: &Self) -> usize {
        (self.word & mask.word).count_ones()
    }

    #[inline]
    fn single_masked_difference(&self, other: &Self, mask: &Self) -> Option<usize> {
        let diff = (self.word ^ other.word) & mask.word;
        (diff.count_ones() == 1).then(|| diff.leading_zeros())
    }

    #[inline]
    fn retain_masked(&mut self, mask: &Self) {
        self.word = self.word & mask.word;
    }
}

impl<W: Word> PartialOrd for WordBits<W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Word> Ord for WordBits<W> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // A shorter sequence that is a prefix of a longer one sorts first.
        self.word
            .cmp(&other.word)
            .then_with(|| self.len.cmp(&other.len))
    }
}

impl<W: Word> fmt::Debug for WordBits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordBits<{}>(", W::BITS)?;
        fmt_bits(self, f)?;
        write!(f, ")")
    }
}
