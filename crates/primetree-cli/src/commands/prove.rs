//! Prove command: build inclusion proofs for selected leaves.

use super::{build_tree, payload};
use crate::PayloadFormat;
use anyhow::{anyhow, bail, Context, Result};
use log::info;
use primetree_core::ProofConfig;
use primetree_prover::ProofBundle;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Build one proof bundle per selected prime from a single tree build.
pub fn prove(
    config: &ProofConfig,
    primes: &[u64],
    random: bool,
    output: Option<&Path>,
    format: PayloadFormat,
) -> Result<()> {
    if primes.is_empty() && !random {
        bail!("Nothing to prove. Pass --prime <P> (repeatable) or --random.");
    }

    let (leaves, tree) = build_tree(config)?;

    let mut selected = primes.to_vec();
    if random {
        let pick = leaves
            .choose(&mut rand::rng())
            .ok_or_else(|| anyhow!("Leaf set is empty"))?;
        info!("Randomly selected leaf {}", pick);
        selected.push(*pick);
    }

    let mut bundles = Vec::with_capacity(selected.len());
    for prime in selected {
        let (proof, leaf) = tree
            .proof(prime)
            .with_context(|| format!("Failed to prove leaf {}", prime))?;
        info!("Proof for {}: {} siblings", prime, proof.len());
        bundles.push(ProofBundle::new(prime, proof, leaf, tree.root(), config));
    }

    let encoded = payload::encode(&bundles, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &encoded)
                .with_context(|| format!("Failed to write payload to {}", path.display()))?;
            println!("Wrote {} proof(s) to {}", bundles.len(), path.display());
        }
        None => match format {
            PayloadFormat::Json => println!("{}", String::from_utf8_lossy(&encoded)),
            PayloadFormat::Bin => bail!("Binary payloads need --output <FILE>"),
        },
    }

    Ok(())
}
