// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads minterms, one per line, and writes their prime implicants.

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::{eyre::WrapErr, Result};
use log::{info, LevelFilter};
use qm_primes::{
    bits::{Backend, BitSeq, Bits16, Bits32, Bits64, Bits8, GrowableBits},
    cube::{MatrixDisplayFormat, Vars},
    cube_set::CubeSet,
    parser::first_line_len,
    primes::PairingStrategy,
};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    process,
};

#[derive(Debug, Parser)]
#[clap(name = "qm-primes", version)]
#[clap(about = "Computes the prime implicants of a list of minterms")]
struct Args {
    /// Input file with one minterm per line ('-' for standard input)
    #[clap(value_name = "INPUT")]
    input: Option<String>,

    /// Output file ('-' for standard output)
    #[clap(value_name = "OUTPUT")]
    output: Option<String>,

    /// How candidate pairs are chosen in each round
    #[clap(long, value_enum, default_value = "block-slice")]
    strategy: StrategyArg,

    /// Bit-sequence backend; 'auto' picks the smallest one that fits
    #[clap(long, value_enum, default_value = "auto")]
    backend: BackendArg,

    /// Output format
    #[clap(long, value_enum, default_value = "dashes")]
    format: FormatArg,

    /// Increase log verbosity (can be repeated)
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    AllPairs,
    BlockSlice,
}

impl From<StrategyArg> for PairingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::AllPairs => PairingStrategy::AllPairs,
            StrategyArg::BlockSlice => PairingStrategy::BlockSlice,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendArg {
    Auto,
    #[clap(name = "8")]
    Word8,
    #[clap(name = "16")]
    Word16,
    #[clap(name = "32")]
    Word32,
    #[clap(name = "64")]
    Word64,
    Growable,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Dashes,
    Numeric,
    Algebraic,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // Usage errors exit with status 1 like every other failure.
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    };

    color_eyre::install()?;
    simplelog::TermLogger::init(
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let (input_name, input) = read_input(args.input.as_deref())?;
    let backend = match args.backend {
        BackendArg::Auto => Backend::smallest_for(first_line_len(&input)),
        BackendArg::Word8 => Backend::Word8,
        BackendArg::Word16 => Backend::Word16,
        BackendArg::Word32 => Backend::Word32,
        BackendArg::Word64 => Backend::Word64,
        BackendArg::Growable => Backend::Growable,
    };
    info!("using {:?} backend", backend);

    // Everything is computed before the output is opened, so errors never leave a partial file.
    let rendered = match backend {
        Backend::Word8 => run::<Bits8>(&input, &input_name, &args)?,
        Backend::Word16 => run::<Bits16>(&input, &input_name, &args)?,
        Backend::Word32 => run::<Bits32>(&input, &input_name, &args)?,
        Backend::Word64 => run::<Bits64>(&input, &input_name, &args)?,
        Backend::Growable => run::<GrowableBits>(&input, &input_name, &args)?,
    };

    write_output(args.output.as_deref(), &rendered)
}

fn run<B: BitSeq>(input: &[u8], input_name: &str, args: &Args) -> Result<Vec<u8>> {
    let (minterms, vars) = CubeSet::<B>::parse(input, input_name)?;
    let primes = minterms.prime_implicants_with(args.strategy.into());
    render(&primes, vars, args.format).wrap_err("failed to render prime implicants")
}

fn render<B: BitSeq>(primes: &CubeSet<B>, vars: Vars, format: FormatArg) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        FormatArg::Dashes => primes.print(&mut out, vars)?,
        FormatArg::Numeric => write!(
            out,
            "{}",
            primes
                .matrix_display(vars)
                .with_format(MatrixDisplayFormat::Numeric)
        )?,
        FormatArg::Algebraic => {
            for cube in primes {
                writeln!(out, "{}", cube.algebraic_display(vars))?;
            }
        }
    }
    Ok(out)
}

fn read_input(path: Option<&str>) -> Result<(String, Vec<u8>)> {
    let mut input = Vec::new();
    match path {
        None | Some("-") => {
            io::stdin()
                .lock()
                .read_to_end(&mut input)
                .wrap_err("can not read standard input")?;
            Ok(("<stdin>".to_owned(), input))
        }
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut input))
                .wrap_err_with(|| format!("can not read input file '{}'", path))?;
            Ok((path.to_owned(), input))
        }
    }
}

fn write_output(path: Option<&str>, rendered: &[u8]) -> Result<()> {
    match path {
        None | Some("-") => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(rendered)
                .and_then(|()| out.flush())
                .wrap_err("can not write standard output")
        }
        Some(path) => File::create(path)
            .and_then(|file| {
                let mut out = BufWriter::new(file);
                out.write_all(rendered)?;
                out.flush()
            })
            .wrap_err_with(|| format!("can not write output file '{}'", path)),
    }
}
