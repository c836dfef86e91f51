use thiserror::Error;
use zkholos_primitives::PrimitivesError;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Commitment already used")]
    CommitmentReused,
    #[error("Invalid proof")]
    VerificationRejected,
    #[error("Voter already registered")]
    DuplicateRegistration,
    #[error("Voter is not registered")]
    UnknownVoter,
    #[error("Caller is not the contract admin")]
    NotAdmin,
    #[error("Proof is bound to a different election")]
    ElectionMismatch,
    #[error("Verifier error: {0}")]
    Verifier(String),
    #[error("Primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

pub type Result<T> = core::result::Result<T, ChainError>;
