use std::io;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};

use ordered_tree::shell::Shell;
use ordered_tree::SuccessorSplice;

/// Interactive shell over an unbalanced binary search tree of integers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Opt {
    /// seed for the `random` command (drawn from the OS if omitted)
    #[arg(long, value_name = "int")]
    seed: Option<u64>,

    /// keep the in-order successor's right subtree when deleting a node with two children
    #[arg(long)]
    relink_successor: bool,

    /// log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let splice = if opt.relink_successor {
        SuccessorSplice::Relink
    } else {
        SuccessorSplice::Detach
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), rng, splice).run()?;

    Ok(())
}
