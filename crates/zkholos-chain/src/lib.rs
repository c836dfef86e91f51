//! On-chain execution model for zkHolos eligibility verification.
//!
//! Models the ledger side of the pipeline: the eligibility verifier
//! contract (pairing check plus one-time commitment bookkeeping) and the
//! voter registry that consumes verified proofs. Every state-mutating entry
//! point takes `&mut self`; the execution environment serializes calls, so
//! each call is one atomic transaction and the commitment-uniqueness check
//! is race-free by construction.

pub mod backend;
pub mod error;
pub mod registry;
pub mod verifier;

pub use backend::{Groth16Backend, MockBackend, VerificationBackend};
pub use error::{ChainError, Result};
pub use registry::{VoterRecord, VoterRegistry};
pub use verifier::EligibilityVerifier;
