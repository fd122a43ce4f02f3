//! Reading and writing proof payload files.

use crate::PayloadFormat;
use anyhow::{bail, Context, Result};
use primetree_prover::ProofBundle;
use std::path::Path;

/// Encode bundles in the requested format.
///
/// JSON payloads are always a list; binary payloads hold exactly one bundle.
pub fn encode(bundles: &[ProofBundle], format: PayloadFormat) -> Result<Vec<u8>> {
    match format {
        PayloadFormat::Json => {
            let json = serde_json::to_string_pretty(bundles).context("Failed to encode payload")?;
            Ok(json.into_bytes())
        }
        PayloadFormat::Bin => match bundles {
            [bundle] => Ok(bundle.to_bytes()?),
            _ => bail!(
                "Binary payloads hold a single proof, got {}. Use --format json for several.",
                bundles.len()
            ),
        },
    }
}

/// Read bundles back from a payload file.
///
/// A JSON payload is either a list of bundles or a single bundle object.
pub fn read(path: &Path, format: PayloadFormat) -> Result<Vec<ProofBundle>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read payload {}", path.display()))?;

    match format {
        PayloadFormat::Json => {
            let text = std::str::from_utf8(&bytes).context("Payload is not valid UTF-8")?;
            if text.trim_start().starts_with('[') {
                serde_json::from_str(text).context("Failed to parse payload list")
            } else {
                Ok(vec![ProofBundle::from_json(text)?])
            }
        }
        PayloadFormat::Bin => Ok(vec![ProofBundle::from_bytes(&bytes)?]),
    }
}
