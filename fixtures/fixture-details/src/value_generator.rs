// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::eyre, Result};
use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Generates values from proptest strategies deterministically, from a string seed.
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    /// Creates a new value generator whose output depends only on `seed`.
    pub fn from_seed(seed: impl AsRef<[u8]>) -> Self {
        let mut seed_bytes = [0u8; 32];
        for (ix, chunk) in seed_bytes.chunks_mut(8).enumerate() {
            let mut hasher = XxHash64::with_seed(ix as u64);
            hasher.write(seed.as_ref());
            chunk.copy_from_slice(&hasher.finish().to_le_bytes());
        }
        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Creates a new generator seeded from this one.
    ///
    /// The values produced by the clone do not depend on how many values are later drawn from
    /// `self`.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(Config::default(), self.runner.new_rng()),
        }
    }

    /// Draws one value from `strategy`.
    pub fn generate<S: Strategy>(&mut self, strategy: S) -> Result<S::Value> {
        let tree = strategy
            .new_tree(&mut self.runner)
            .map_err(|reason| eyre!("failed to generate value: {}", reason))?;
        Ok(tree.current())
    }
}
