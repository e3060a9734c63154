//! Rotating Cube CLI
//!
//! Scrambles, turns and inspects an NxNxN cube from the terminal, printing
//! the state as an unfolded net.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use twister::{
    format_net, infer_move, legal_moves, parse_sequence, Cube, Error, Topology, DEFAULT_DIM,
    DEFAULT_SHUFFLE_MOVES,
};

/// Turns an NxNxN rotating-face cube and prints its state.
#[derive(Parser)]
#[command(name = "twister")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Topology file (TOML); the standard cube when omitted.
    #[arg(long, global = true)]
    topology: Option<PathBuf>,

    /// Cells per face edge.
    #[arg(long, global = true, default_value_t = DEFAULT_DIM)]
    dim: usize,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every legal move code.
    Moves,
    /// Shuffle a solved cube and print it.
    Scramble {
        /// Number of random moves.
        #[arg(long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
        moves: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply move codes to a solved (or scrambled) cube.
    Apply {
        /// Move codes, e.g. `Ud Ri`.
        #[arg(required = true)]
        codes: Vec<String>,
        /// Random moves to apply before the given codes.
        #[arg(long, default_value_t = 0)]
        scramble: usize,
        /// Seed for the scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Find the single move between the states two sequences reach.
    Infer {
        /// Codes leading to the first state.
        #[arg(long, default_value = "")]
        from: String,
        /// Codes leading to the second state.
        #[arg(long)]
        to: String,
    },
    /// Print the active topology as TOML.
    Topology,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs at `warn` by default; `RUST_LOG` overrides the flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let topology = Arc::new(match &cli.topology {
        Some(path) => Topology::load(path)?,
        None => Topology::standard(),
    });

    match cli.command {
        Command::Moves => {
            let codes: Vec<String> = legal_moves(&topology)
                .map(|mv| mv.code(&topology))
                .collect();
            println!("{}", codes.join(" "));
        }
        Command::Scramble { moves, seed } => {
            let mut cube = new_cube(&topology, cli.dim, seed)?;
            cube.shuffle(moves);
            print!("{}", format_net(cube.state(), &topology));
        }
        Command::Apply {
            codes,
            scramble,
            seed,
        } => {
            // validate every code before turning anything
            let moves = parse_sequence(&codes.join(" "), &topology)?;
            let mut cube = new_cube(&topology, cli.dim, seed)?;
            cube.shuffle(scramble);
            for mv in moves {
                let reward = cube.apply(mv).reward;
                println!(
                    "{}: {} reward={}",
                    cube.move_count(),
                    mv.code(&topology),
                    reward
                );
            }
            print!("{}", format_net(cube.state(), &topology));
            println!("solved: {}", cube.is_solved());
        }
        Command::Infer { from, to } => {
            let before = reach(&topology, cli.dim, &from)?;
            let after = reach(&topology, cli.dim, &to)?;
            match infer_move(&topology, before.state(), after.state()) {
                Some(mv) => println!("{}", mv.code(&topology)),
                None => println!("no single move"),
            }
        }
        Command::Topology => {
            print!("{}", topology.to_toml_string()?);
        }
    }

    Ok(())
}

fn new_cube(topology: &Arc<Topology>, dim: usize, seed: Option<u64>) -> Result<Cube, Error> {
    let cube = Cube::new(Arc::clone(topology), dim)?;
    Ok(match seed {
        Some(seed) => cube.seeded(seed),
        None => cube,
    })
}

/// A cube after applying `sequence` to the solved state.
fn reach(topology: &Arc<Topology>, dim: usize, sequence: &str) -> Result<Cube, Error> {
    let mut cube = new_cube(topology, dim, None)?;
    for mv in parse_sequence(sequence, topology)? {
        cube.apply(mv);
    }
    Ok(cube)
}
