// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use color_eyre::Result;
use fixture_details::{counter_minterms, write_minterms, AllFixtures};
use std::io::{self, BufWriter, Write};

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Subcommand)]
pub enum FixtureManagerCommand {
    /// Write seeded random fixture inputs
    GenerateInputs {
        #[clap(long, short, default_value_t = 16)]
        count: usize,
    },
    /// Regenerate the golden output of every fixture
    GenerateOutputs,
    /// Print every assignment except all-ones, in ascending order
    Counter {
        #[clap(long, short)]
        vars: usize,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::GenerateInputs { count } => AllFixtures::get().generate_inputs(count),
            Self::GenerateOutputs => AllFixtures::get().generate_outputs(),
            Self::Counter { vars } => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                write_minterms(&mut out, vars, counter_minterms(vars)?)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}
