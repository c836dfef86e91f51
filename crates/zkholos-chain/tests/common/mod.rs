use alloy_primitives::{address, Address, U256};
use tempfile::TempDir;

use zkholos_primitives::calldata::ProofCalldata;
use zkholos_primitives::claim::EligibilityClaim;
use zkholos_primitives::proof::ProofBundle;
use zkholos_prover::artifacts::{self, ArtifactPaths};
use zkholos_prover::generator::{GeneratorConfig, ProofGenerator};
use zkholos_prover::setup;

pub const ADMIN: Address = address!("00000000000000000000000000000000000000ad");
pub const VOTER: Address = address!("1234567890123456789012345678901234567890");
pub const OTHER_VOTER: Address = address!("2222222222222222222222222222222222222222");

pub fn claim_for(voter: Address, region: &str, election_id: u64) -> EligibilityClaim {
    EligibilityClaim {
        region_hash: "123".into(),
        election_id: election_id.to_string(),
        voter_address: voter.to_string(),
        region: region.into(),
        is_registered: 1,
        is_eligible: 1,
    }
}

pub fn setup_artifacts() -> (TempDir, ArtifactPaths) {
    let dir = TempDir::new().expect("temp dir");
    let paths = ArtifactPaths::under(dir.path());
    let mut rng = ark_std::test_rng();
    setup::run_setup(&paths, &mut rng).expect("circuit setup");
    (dir, paths)
}

pub async fn prove(paths: &ArtifactPaths, claim: &EligibilityClaim) -> ProofBundle {
    ProofGenerator::new(GeneratorConfig {
        artifacts: paths.clone(),
        proving_timeout_secs: 300,
    })
    .generate(claim)
    .await
    .expect("proof generation")
}

pub fn parse_calldata(bundle: &ProofBundle) -> ProofCalldata {
    ProofCalldata::parse(&bundle.calldata).expect("calldata parse")
}

pub fn verification_key(paths: &ArtifactPaths) -> ark_groth16::VerifyingKey<ark_bn254::Bn254> {
    (*artifacts::load_verifying_key(&paths.verification_key).expect("verification key")).clone()
}

pub fn election(id: u64) -> U256 {
    U256::from(id)
}
