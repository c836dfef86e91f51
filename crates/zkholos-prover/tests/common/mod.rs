use tempfile::TempDir;

use zkholos_primitives::claim::EligibilityClaim;
use zkholos_prover::artifacts::ArtifactPaths;
use zkholos_prover::generator::{GeneratorConfig, ProofGenerator};
use zkholos_prover::setup;

/// The well-formed claim from the end-to-end scenario.
pub fn sample_claim() -> EligibilityClaim {
    EligibilityClaim {
        region_hash: "123".into(),
        election_id: "1".into(),
        voter_address: "0x1234567890123456789012345678901234567890".into(),
        region: "1".into(),
        is_registered: 1,
        is_eligible: 1,
    }
}

/// Runs circuit setup into a fresh temp dir. The dir guard must stay alive
/// for as long as the artifacts are used.
pub fn setup_artifacts() -> (TempDir, ArtifactPaths) {
    let dir = TempDir::new().expect("temp dir");
    let paths = ArtifactPaths::under(dir.path());
    let mut rng = ark_std::test_rng();
    setup::run_setup(&paths, &mut rng).expect("circuit setup");
    (dir, paths)
}

pub fn generator_for(paths: &ArtifactPaths) -> ProofGenerator {
    ProofGenerator::new(GeneratorConfig {
        artifacts: paths.clone(),
        proving_timeout_secs: 300,
    })
}
