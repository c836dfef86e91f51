//! One-time circuit setup.
//!
//! Stand-in for the external circuit-compilation/ceremony pipeline:
//! performs circuit-specific Groth16 key generation and writes the artifact
//! set consumed by the generator and both verifiers.

use ark_bn254::Bn254;
use ark_crypto_primitives::snark::CircuitSpecificSetupSNARK;
use ark_groth16::Groth16;
use rand::{CryptoRng, RngCore};

use crate::artifacts::{self, ArtifactPaths};
use crate::circuit::EligibilityCircuit;
use crate::error::{ProverError, Result};
use crate::poseidon;

pub fn run_setup<R: RngCore + CryptoRng>(paths: &ArtifactPaths, rng: &mut R) -> Result<()> {
    let circuit = EligibilityCircuit::blank(poseidon::poseidon_config());
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit, rng)
        .map_err(|e| ProverError::Setup(format!("key generation failed: {e}")))?;
    artifacts::store_artifacts(paths, &pk, &vk)?;
    tracing::info!(
        manifest = %paths.manifest.display(),
        proving_key = %paths.proving_key.display(),
        verification_key = %paths.verification_key.display(),
        "circuit setup complete"
    );
    Ok(())
}
