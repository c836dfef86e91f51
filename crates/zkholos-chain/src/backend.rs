//! Verification backends.
//!
//! Verification is a capability selected at construction time: the
//! production backend evaluates the real pairing equation against its
//! embedded verification key, the mock backend returns a configured
//! constant for test environments. The two are distinct types; production
//! code has no runtime toggle.

use std::fmt;

use ark_bn254::Bn254;
use ark_crypto_primitives::snark::SNARK;
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};

use zkholos_primitives::calldata::ProofCalldata;

use crate::error::{ChainError, Result};

pub trait VerificationBackend: Send + Sync + fmt::Debug {
    /// Runs the verification equation over the supplied proof components
    /// and public inputs. `Ok(false)` means checked-and-rejected; an error
    /// means the check could not run.
    fn verify(&self, calldata: &ProofCalldata) -> Result<bool>;
}

/// Production backend: Groth16 pairing check over BN254 with the
/// verification key embedded at construction.
pub struct Groth16Backend {
    pvk: PreparedVerifyingKey<Bn254>,
}

impl Groth16Backend {
    pub fn new(vk: VerifyingKey<Bn254>) -> Result<Self> {
        let pvk = Groth16::<Bn254>::process_vk(&vk)
            .map_err(|e| ChainError::Verifier(format!("processing verification key: {e}")))?;
        Ok(Self { pvk })
    }

    pub fn arity(&self) -> usize {
        self.pvk.vk.gamma_abc_g1.len().saturating_sub(1)
    }
}

impl fmt::Debug for Groth16Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Groth16Backend")
            .field("arity", &self.arity())
            .finish()
    }
}

impl VerificationBackend for Groth16Backend {
    fn verify(&self, calldata: &ProofCalldata) -> Result<bool> {
        calldata.public_inputs.expect_arity(self.arity())?;
        let proof = Proof::<Bn254> {
            a: calldata.a,
            b: calldata.b,
            c: calldata.c,
        };
        Groth16::<Bn254>::verify_with_processed_vk(
            &self.pvk,
            calldata.public_inputs.as_slice(),
            &proof,
        )
        .map_err(|e| ChainError::Verifier(format!("verification backend error: {e}")))
    }
}

/// Test double returning a configured constant without evaluating any
/// cryptography. Wired in only by test harnesses.
#[derive(Debug, Clone, Copy)]
pub struct MockBackend {
    accept: bool,
}

impl MockBackend {
    pub fn new(accept: bool) -> Self {
        Self { accept }
    }
}

impl VerificationBackend for MockBackend {
    fn verify(&self, _calldata: &ProofCalldata) -> Result<bool> {
        Ok(self.accept)
    }
}
