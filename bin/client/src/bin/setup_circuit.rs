use std::env;
use std::path::Path;

use color_eyre::Result;
use dotenv::dotenv;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use zkholos_prover::artifacts::ArtifactPaths;
use zkholos_prover::setup::run_setup;

/// One-time circuit setup: generates the proving key, verification key and
/// circuit manifest consumed by the generator and both verifiers.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(Level::INFO)
        .init();
    dotenv().ok();

    let artifacts_dir =
        env::var("ZKHOLOS_ARTIFACTS_DIR").unwrap_or_else(|_| "build/circuits".to_string());
    let paths = ArtifactPaths::under(Path::new(&artifacts_dir));

    run_setup(&paths, &mut rand::thread_rng())?;
    println!("Circuit setup complete, artifacts written to {artifacts_dir}");

    Ok(())
}
