//! Proof generation and off-chain verification for zkHolos voter
//! eligibility.
//!
//! The pipeline is strictly sequential per claim: validate the claim,
//! canonicalize its fields, check that the circuit artifacts exist, invoke
//! the Groth16 backend exactly once, and hand back the proof bundle with
//! its calldata encoding. The off-chain verifier re-checks a bundle against
//! the verification-key artifact before anything is submitted on-chain.

pub mod artifacts;
pub mod circuit;
pub mod error;
pub mod generator;
pub mod poseidon;
pub mod setup;
pub mod verifier;

pub use error::{ProverError, Result};
pub use generator::{GeneratorConfig, ProofGenerator};
pub use verifier::OffchainVerifier;
