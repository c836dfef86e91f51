use std::path::Path;
use std::{env, fs};

use color_eyre::Result;
use dotenv::dotenv;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use zkholos_primitives::proof::ProofBundle;
use zkholos_prover::artifacts::ArtifactPaths;
use zkholos_prover::verifier::OffchainVerifier;

/// Re-checks a previously generated proof bundle against the
/// verification-key artifact.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(Level::INFO)
        .init();
    dotenv().ok();

    let bundle_path = env::args().nth(1).unwrap_or_else(|| "proof.json".to_string());
    let artifacts_dir =
        env::var("ZKHOLOS_ARTIFACTS_DIR").unwrap_or_else(|_| "build/circuits".to_string());

    let raw = fs::read_to_string(&bundle_path)?;
    let bundle: ProofBundle = serde_json::from_str(&raw)?;

    let paths = ArtifactPaths::under(Path::new(&artifacts_dir));
    let verifier = OffchainVerifier::new(paths.verification_key);
    let valid = verifier.verify_bundle(&bundle)?;

    println!("Proof verification result: {valid}");
    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
