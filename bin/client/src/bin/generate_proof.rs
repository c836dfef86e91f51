use std::path::Path;
use std::{env, fs};

use color_eyre::Result;
use dotenv::dotenv;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use zkholos_primitives::claim::EligibilityClaim;
use zkholos_prover::artifacts::ArtifactPaths;
use zkholos_prover::generator::{GeneratorConfig, ProofGenerator};
use zkholos_prover::verifier::OffchainVerifier;

/// Generates an eligibility proof for the claim JSON given as the first
/// argument, sanity-checks it off-chain, and prints the proof bundle.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(Level::INFO)
        .init();
    dotenv().ok();

    let claim_path = env::args().nth(1).unwrap_or_else(|| "claim.json".to_string());
    let artifacts_dir =
        env::var("ZKHOLOS_ARTIFACTS_DIR").unwrap_or_else(|_| "build/circuits".to_string());

    let raw = fs::read_to_string(&claim_path)?;
    let claim: EligibilityClaim = serde_json::from_str(&raw)?;

    let generator = ProofGenerator::new(GeneratorConfig {
        artifacts: ArtifactPaths::under(Path::new(&artifacts_dir)),
        ..Default::default()
    });
    let bundle = generator.generate(&claim).await?;

    // local sanity check before anything is submitted on-chain
    let verifier = OffchainVerifier::new(generator.config().artifacts.verification_key.clone());
    let valid = verifier.verify_bundle(&bundle)?;
    tracing::info!(valid, "proof generated");

    println!("{}", serde_json::to_string_pretty(&bundle)?);

    Ok(())
}
