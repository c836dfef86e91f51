//! Proof generation against the Groth16 backend.

use std::time::Duration;

use ark_bn254::Bn254;
use ark_crypto_primitives::snark::SNARK;
use ark_groth16::Groth16;
use serde::{Deserialize, Serialize};
use tokio::task;
use tokio::time::timeout;

use zkholos_primitives::calldata::ProofCalldata;
use zkholos_primitives::claim::EligibilityClaim;
use zkholos_primitives::commitment::derive_commitment;
use zkholos_primitives::proof::{EligibilityProof, ProofBundle};

use crate::artifacts::{self, ArtifactPaths};
use crate::circuit::EligibilityCircuit;
use crate::error::{ProverError, Result};
use crate::poseidon;

pub const DEFAULT_PROVING_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub artifacts: ArtifactPaths,
    pub proving_timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactPaths::default(),
            proving_timeout_secs: DEFAULT_PROVING_TIMEOUT_SECS,
        }
    }
}

/// Drives the proving backend for one claim at a time. Proving is CPU and
/// memory heavy; each call runs as a single long-lived blocking task and no
/// exclusive resource is held across it.
#[derive(Debug, Clone)]
pub struct ProofGenerator {
    config: GeneratorConfig,
}

impl ProofGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub async fn generate(&self, claim: &EligibilityClaim) -> Result<ProofBundle> {
        // reject malformed claims before any artifact or backend work
        let inputs = claim.to_field_inputs()?;
        let voter = claim.voter_address_parsed()?;
        let election_id = claim.election_id_parsed()?;

        // artifact presence is checked up front; the backend's own failure
        // mode on a missing file is far less diagnosable
        artifacts::require_exists(&self.config.artifacts.manifest, "circuit manifest")?;
        artifacts::require_exists(&self.config.artifacts.proving_key, "proving key")?;
        let manifest = artifacts::load_manifest(&self.config.artifacts.manifest)?;
        manifest.ensure_current()?;
        let pk = artifacts::load_proving_key(&self.config.artifacts.proving_key)?;

        let (circuit, public_signals) =
            EligibilityCircuit::from_claim(&inputs, poseidon::poseidon_config())?;
        public_signals.expect_arity(manifest.arity())?;

        tracing::info!(election_id = %claim.election_id, "generating eligibility proof");

        // invoked exactly once; proving is deterministic given identical
        // inputs and a trusted setup, so a retry would mask a real bug
        let proving = task::spawn_blocking(move || {
            let mut rng = rand::thread_rng();
            Groth16::<Bn254>::prove(&pk, circuit, &mut rng)
        });
        let proof = match timeout(
            Duration::from_secs(self.config.proving_timeout_secs),
            proving,
        )
        .await
        {
            Err(_) => return Err(ProverError::ProvingTimeout(self.config.proving_timeout_secs)),
            Ok(Err(join_err)) => {
                return Err(ProverError::ProofGeneration(format!(
                    "proving task failed: {join_err}"
                )))
            }
            Ok(Ok(Err(e))) => {
                tracing::error!("proof generation failed: {e}");
                return Err(ProverError::ProofGeneration(e.to_string()));
            }
            Ok(Ok(Ok(proof))) => proof,
        };

        let proof = EligibilityProof::Groth16Bn254(proof);
        let calldata = ProofCalldata::encode(&proof, &public_signals)?;

        Ok(ProofBundle {
            proof,
            public_signals,
            calldata,
            election_id,
            commitment: derive_commitment(voter, election_id),
        })
    }
}
