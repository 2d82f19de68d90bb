mod config;

use chi_rng::{Distribution, Engine};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;

/// Fast deterministic random numbers from the command line
#[derive(Parser, Debug)]
#[command(name = "chirng", version, about, long_about = None)]
struct Args {
    /// Seed word passed to `put`; repeat for several words, applied in order
    #[arg(short, long, global = true)]
    seed: Vec<u64>,

    /// Mix process and environment data into the engine (default when no seed is given)
    #[arg(short, long, global = true)]
    randomize: bool,

    /// JSON config file with seeds and a default distribution
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Raw 64-bit words
    U64 {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Uniform integers in 0..N
    Modn {
        n: u64,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// A random permutation of 0..N
    Permute { n: usize },
    /// LEN random bytes, hex encoded
    Bytes { len: usize },
    /// Real-valued samples
    Sample {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(short, long, value_enum)]
        dist: Option<UnitDist>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UnitDist {
    One,
    OneR,
    Two,
    TwoR,
    Tri,
    Exp,
    Normal,
}

impl UnitDist {
    fn sample(self, engine: &mut Engine) -> f64 {
        match self {
            UnitDist::One => engine.one(),
            UnitDist::OneR => engine.one_r(),
            UnitDist::Two => engine.two(),
            UnitDist::TwoR => engine.two_r(),
            UnitDist::Tri => engine.tri(),
            UnitDist::Exp => engine.exp(),
            UnitDist::Normal => engine.normal().0,
        }
    }
}

/// Build the engine from config seeds, then command line seeds.
fn build_engine(args: &Args, config: &CliConfig) -> Engine {
    let mut engine = Engine::new();
    for &word in config.seeds.iter().chain(args.seed.iter()) {
        engine.put(word);
    }

    let seeded = !config.seeds.is_empty() || !args.seed.is_empty();
    if args.randomize || !seeded {
        engine.randomize();
        info!("engine randomized, output is not reproducible");
    } else {
        debug!(
            "engine seeded with {} words",
            config.seeds.len() + args.seed.len()
        );
    }
    engine
}

/// Write the output of `command` drawn from `engine` to `out`.
fn render(
    command: Command,
    engine: &mut Engine,
    config: &CliConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Command::U64 { count } => {
            for _ in 0..count {
                writeln!(out, "{}", engine.next64())?;
            }
        }
        Command::Modn { n, count } => {
            // modn(0) and modn(1) print their conventional values
            for _ in 0..count {
                writeln!(out, "{}", engine.modn(n))?;
            }
        }
        Command::Permute { n } => {
            let mut perm = vec![0u32; n];
            engine.permute(&mut perm);
            for v in perm {
                writeln!(out, "{}", v)?;
            }
        }
        Command::Bytes { len } => {
            let mut buf = vec![0u8; len];
            engine.fill(&mut buf);
            writeln!(out, "{}", hex::encode(&buf))?;
        }
        Command::Sample { count, dist } => {
            let sampler: Box<dyn Fn(&mut Engine) -> f64> = match (dist, &config.distribution) {
                (Some(unit), _) => Box::new(move |e: &mut Engine| unit.sample(e)),
                (None, Some(configured)) => {
                    let configured: Distribution = configured.clone();
                    Box::new(move |e: &mut Engine| configured.sample(e))
                }
                (None, None) => Box::new(|e: &mut Engine| e.one()),
            };
            for _ in 0..count {
                writeln!(out, "{}", sampler(&mut *engine))?;
            }
        }
    }
    out.flush()
}

fn run(args: Args, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let mut engine = build_engine(&args, &config);

    render(args.command, &mut engine, &config, out)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize the logger
    colog::init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run(args, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
