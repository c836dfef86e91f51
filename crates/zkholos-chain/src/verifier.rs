//! The eligibility verifier contract.
//!
//! Per-commitment state machine: `Unused -> Used`, terminal. A commitment,
//! once consumed, never transitions back.

use std::collections::HashSet;

use alloy_primitives::B256;
use ark_bn254::Bn254;
use ark_groth16::VerifyingKey;

use zkholos_primitives::calldata::ProofCalldata;

use crate::backend::{Groth16Backend, VerificationBackend};
use crate::error::{ChainError, Result};

#[derive(Debug)]
pub struct EligibilityVerifier {
    backend: Box<dyn VerificationBackend>,
    used_commitments: HashSet<B256>,
}

impl EligibilityVerifier {
    pub fn new(backend: Box<dyn VerificationBackend>) -> Self {
        Self {
            backend,
            used_commitments: HashSet::new(),
        }
    }

    /// Production construction: real pairing checks against `vk`.
    pub fn groth16(vk: VerifyingKey<Bn254>) -> Result<Self> {
        Ok(Self::new(Box::new(Groth16Backend::new(vk)?)))
    }

    pub fn is_used(&self, commitment: &B256) -> bool {
        self.used_commitments.contains(commitment)
    }

    /// Verifies the proof and consumes the commitment in one transaction.
    ///
    /// The replay check runs before the cryptographic check: a spent
    /// commitment rejects the whole operation even if the proof itself is
    /// still valid. On success the commitment write and the success return
    /// happen in the same call, so no window exists where a proof is
    /// accepted without its nullifier being recorded.
    pub fn verify_and_consume(
        &mut self,
        calldata: &ProofCalldata,
        commitment: B256,
    ) -> Result<()> {
        if self.used_commitments.contains(&commitment) {
            return Err(ChainError::CommitmentReused);
        }
        if !self.backend.verify(calldata)? {
            return Err(ChainError::VerificationRejected);
        }
        self.used_commitments.insert(commitment);
        tracing::debug!(%commitment, "commitment consumed");
        Ok(())
    }
}
