//! Command implementations for the primetree CLI.

mod payload;
mod prove;
mod verify;

pub use prove::prove;
pub use verify::verify;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use primetree_core::{generate_leaves, LeafOrdering, ProofConfig};
use primetree_prover::precomputed::{reference_root, REFERENCE_LEAF_COUNT};
use primetree_prover::MerkleTree;
use std::path::Path;

/// Load the config file (or defaults) and apply command-line overrides.
pub fn resolve_config(
    path: Option<&Path>,
    count: Option<usize>,
    ordering: Option<LeafOrdering>,
    lenient: bool,
) -> Result<ProofConfig> {
    let mut config = match path {
        Some(path) => ProofConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ProofConfig::default(),
    };

    if let Some(count) = count {
        config.leaf_count = count;
    }
    if let Some(ordering) = ordering {
        config.ordering = ordering;
    }
    if lenient {
        config.strict = false;
    }

    Ok(config)
}

/// Generate the leaf set and build its tree.
fn build_tree(config: &ProofConfig) -> Result<(Vec<u64>, MerkleTree)> {
    let leaves = generate_leaves(config.leaf_count).context("Failed to generate leaves")?;
    let tree = MerkleTree::from_leaves(&leaves, config).context("Failed to build tree")?;
    info!(
        "Built tree over {} leaves (depth {}, {} ordering)",
        tree.len(),
        tree.depth(),
        tree.ordering()
    );
    Ok((leaves, tree))
}

/// Leaves command: print the leaf set.
pub fn leaves(config: &ProofConfig) -> Result<()> {
    let leaves = generate_leaves(config.leaf_count).context("Failed to generate leaves")?;

    println!("Leaves: {}", leaves.len());
    for row in &leaves.iter().chunks(16) {
        println!("  {}", row.format(" "));
    }

    Ok(())
}

/// Root command: print the root and compare it to the reference root.
pub fn root(config: &ProofConfig) -> Result<()> {
    let (_, tree) = build_tree(config)?;

    println!("Root: {}", tree.root());
    println!("  Leaves: {}", tree.len());
    println!("  Depth: {}", tree.depth());
    println!("  Ordering: {}", tree.ordering());

    if config.leaf_count == REFERENCE_LEAF_COUNT {
        let matches = tree.root() == reference_root(config.ordering);
        println!("  Matches reference root: {}", if matches { "yes" } else { "no" });
    }

    Ok(())
}
