//! Core types for the zkHolos voter-eligibility proof pipeline
//!
//! This crate holds the data model shared by the prover and the on-chain
//! execution model: eligibility claims and their validation, the canonical
//! string-to-field-element encoding, proof and public-signal types, the
//! calldata wire format, commitment derivation, and the verification-key
//! JSON artifact codec.

pub mod calldata;
pub mod claim;
pub mod commitment;
pub mod error;
pub mod field;
pub(crate) mod points;
pub mod proof;
pub mod vkey;

pub use error::{PrimitivesError, Result};
pub use proof::{EligibilityProof, ProofBundle, PublicSignals};
