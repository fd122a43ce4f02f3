//! CLI tool for primetree.
//!
//! Generates the prime leaf set, computes the tree root, and produces proof
//! payloads for the transaction-submission side. Nothing here talks to a
//! chain or touches key material.

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use primetree_core::LeafOrdering;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "primetree")]
#[command(about = "Merkle inclusion proofs over the first N primes", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of leaves to generate (overrides the config file)
    #[arg(long, short = 'n', global = true)]
    count: Option<usize>,

    /// Leaf ordering (overrides the config file)
    #[arg(long, value_enum, global = true)]
    ordering: Option<OrderingArg>,

    /// Accept leaf counts that are not a power of two
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Print the leaf set
    Leaves,

    /// Print the tree root
    Root,

    /// Build proofs for one or more leaves
    Prove {
        /// Prime to prove (repeatable)
        #[arg(long = "prime")]
        primes: Vec<u64>,

        /// Prove a randomly chosen leaf
        #[arg(long)]
        random: bool,

        /// Write the payload to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Payload format
        #[arg(long, value_enum, default_value = "json")]
        format: PayloadFormat,
    },

    /// Check proof payloads against the regenerated tree
    Verify {
        /// Payload file produced by `prove`
        bundle: PathBuf,

        /// Payload format
        #[arg(long, value_enum, default_value = "json")]
        format: PayloadFormat,
    },
}

/// Leaf orderings selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderingArg {
    /// Leaf digests sorted by byte value (default)
    Sorted,
    /// Leaf digests in generation order
    Generation,
}

impl From<OrderingArg> for LeafOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Sorted => LeafOrdering::SortedDigest,
            OrderingArg::Generation => LeafOrdering::Generation,
        }
    }
}

/// Proof payload encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PayloadFormat {
    /// Pretty-printed JSON with hex strings
    Json,
    /// bincode, one bundle per file
    Bin,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = commands::resolve_config(
        cli.config.as_deref(),
        cli.count,
        cli.ordering.map(LeafOrdering::from),
        cli.lenient,
    )?;

    match cli.command {
        Commands::Leaves => commands::leaves(&config),
        Commands::Root => commands::root(&config),
        Commands::Prove {
            primes,
            random,
            output,
            format,
        } => commands::prove(&config, &primes, random, output.as_deref(), format),
        Commands::Verify { bundle, format } => commands::verify(cli.count, &bundle, format),
    }
}
