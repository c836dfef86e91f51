//! Off-chain proof verification.
//!
//! Used for local sanity checks before on-chain submission. The contract is
//! boolean-returning: `Ok(false)` means the cryptographic check ran and
//! rejected, an error means the check could not run at all. Accept/reject
//! results must match the on-chain verifier for identical inputs.

use std::path::PathBuf;

use ark_bn254::Bn254;
use ark_crypto_primitives::snark::SNARK;
use ark_groth16::Groth16;

use zkholos_primitives::proof::{EligibilityProof, ProofBundle, PublicSignals};

use crate::artifacts;
use crate::error::{ProverError, Result};

#[derive(Debug, Clone)]
pub struct OffchainVerifier {
    verification_key: PathBuf,
}

impl OffchainVerifier {
    pub fn new(verification_key: impl Into<PathBuf>) -> Self {
        Self {
            verification_key: verification_key.into(),
        }
    }

    pub fn verify(&self, signals: &PublicSignals, proof: &EligibilityProof) -> Result<bool> {
        let vk = artifacts::load_verifying_key(&self.verification_key)?;
        signals.expect_arity(vk.gamma_abc_g1.len().saturating_sub(1))?;

        let pvk = Groth16::<Bn254>::process_vk(&vk)
            .map_err(|e| ProverError::Verification(format!("processing verification key: {e}")))?;
        Groth16::<Bn254>::verify_with_processed_vk(&pvk, signals.as_slice(), proof.as_groth16())
            .map_err(|e| ProverError::Verification(format!("verification backend error: {e}")))
    }

    pub fn verify_bundle(&self, bundle: &ProofBundle) -> Result<bool> {
        self.verify(&bundle.public_signals, &bundle.proof)
    }
}
