// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod all;
mod generators;
mod value_generator;

pub use all::*;
pub use generators::*;
pub use value_generator::*;
