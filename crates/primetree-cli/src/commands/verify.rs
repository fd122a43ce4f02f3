//! Verify command: check payloads against a freshly built tree.

use super::{build_tree, payload};
use crate::PayloadFormat;
use anyhow::{bail, Result};
use primetree_core::{Hash256, ProofConfig};
use std::path::Path;

/// Verify every bundle in a payload file.
///
/// Each bundle is checked against the tree regenerated from the leaf count,
/// ordering and strictness it records. A bundle passes when its leaf decodes
/// to its prime, its proof folds to its recorded root, and that root equals
/// the regenerated one. `requested_count` is the `--count` flag, if given;
/// a bundle built for a different leaf count is an error.
pub fn verify(requested_count: Option<usize>, path: &Path, format: PayloadFormat) -> Result<()> {
    let bundles = payload::read(path, format)?;

    if let Some(count) = requested_count {
        if let Some(bundle) = bundles.iter().find(|bundle| bundle.leaf_count != count) {
            bail!(
                "Proof for {} was built over {} leaves, but --count {} was requested",
                bundle.prime,
                bundle.leaf_count,
                count
            );
        }
    }

    println!("Verifying {} proof(s) from {}", bundles.len(), path.display());
    println!();

    let mut failures = 0usize;
    let mut roots: Vec<(ProofConfig, Hash256)> = Vec::new();
    for bundle in &bundles {
        let config = bundle.config();
        let cached = roots
            .iter()
            .find(|(built, _)| *built == config)
            .map(|(_, root)| *root);
        let expected_root = match cached {
            Some(root) => root,
            None => {
                let (_, tree) = build_tree(&config)?;
                roots.push((config, tree.root()));
                tree.root()
            }
        };

        let folds = bundle.verify();
        let root_matches = bundle.root == expected_root;
        let ok = matches!(folds, Ok(true)) && root_matches;
        if !ok {
            failures += 1;
        }

        println!(
            "  {} ({} siblings, {} leaves): {}",
            bundle.prime,
            bundle.proof.len(),
            bundle.leaf_count,
            if ok { "ok" } else { "FAILED" }
        );
        match folds {
            Ok(true) => {}
            Ok(false) => println!("    proof does not fold to the recorded root"),
            Err(e) => println!("    {}", e),
        }
        if !root_matches {
            println!("    recorded root {} != tree root {}", bundle.root, expected_root);
        }
    }

    println!();
    if failures > 0 {
        bail!("{} of {} proof(s) failed verification", failures, bundles.len());
    }
    println!("All proofs verified.");
    Ok(())
}
