// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::value_generator::ValueGenerator;
use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::{eyre::WrapErr, Result};
use once_cell::sync::Lazy;
use qm_primes::{
    bits::GrowableBits, cube::Vars, cube_set::CubeSet, primes::PairingStrategy,
    proptest_helpers::minterm_set,
};
use std::fs;

/// The golden fixtures stored in `fixtures/data`.
///
/// Each fixture is a pair of files: `<name>.in` holding minterms and `<name>.out` holding the
/// expected prime implicants.
pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir: Utf8PathBuf = env!("CARGO_MANIFEST_DIR").into();
        let dir = dir
            .parent()
            .expect("fixture-details lives inside the fixtures directory")
            .join("data");
        Self { dir }
    }

    #[inline]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Returns every fixture with an input file, sorted by name.
    pub fn fixtures(&self) -> Result<Vec<Fixture>> {
        let mut fixtures = Vec::new();
        for entry in self
            .dir
            .read_dir_utf8()
            .wrap_err_with(|| format!("failed to read fixture directory '{}'", self.dir))?
        {
            let entry = entry.wrap_err("failed to read fixture directory entry")?;
            let path = entry.path();
            if path.extension() == Some("in") {
                if let Some(name) = path.file_stem() {
                    fixtures.push(Fixture::new(&self.dir, name));
                }
            }
        }
        fixtures.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(fixtures)
    }

    /// Writes `count` seeded random fixture inputs.
    pub fn generate_inputs(&self, count: usize) -> Result<()> {
        let mut value_gen = ValueGenerator::from_seed("qm-primes_random");

        for ix in 0..count {
            let mut gen = value_gen.partial_clone();
            let (vars, set) = gen.generate(minterm_set::<GrowableBits>(3..=10))?;
            let fixture = Fixture::new(&self.dir, &format!("random-{:03}", ix));
            fixture.write_input(&set, vars)?;
            println!(
                "wrote {} ({} minterms over {} variables)",
                fixture.input,
                set.len(),
                vars.count()
            );
        }

        Ok(())
    }

    /// Regenerates every golden output with the all-pairs strategy.
    pub fn generate_outputs(&self) -> Result<()> {
        for fixture in self.fixtures()? {
            let (minterms, vars) = fixture.read_input()?;
            let primes = minterms.prime_implicants_with(PairingStrategy::AllPairs);
            let mut out = Vec::new();
            primes.print(&mut out, vars)?;
            fs::write(&fixture.output, out)
                .wrap_err_with(|| format!("failed to write '{}'", fixture.output))?;
            println!("wrote {} ({} prime implicants)", fixture.output, primes.len());
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
}

impl Fixture {
    fn new(dir: &Utf8Path, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            input: dir.join(format!("{}.in", name)),
            output: dir.join(format!("{}.out", name)),
        }
    }

    pub fn read_input(&self) -> Result<(CubeSet<GrowableBits>, Vars)> {
        let bytes =
            fs::read(&self.input).wrap_err_with(|| format!("failed to read '{}'", self.input))?;
        Ok(CubeSet::parse(&bytes[..], self.input.as_str())?)
    }

    pub fn read_expected(&self) -> Result<String> {
        fs::read_to_string(&self.output)
            .wrap_err_with(|| format!("failed to read '{}'", self.output))
    }

    fn write_input(&self, set: &CubeSet<GrowableBits>, vars: Vars) -> Result<()> {
        let mut out = Vec::new();
        set.print(&mut out, vars)?;
        fs::write(&self.input, out).wrap_err_with(|| format!("failed to write '{}'", self.input))
    }
}
