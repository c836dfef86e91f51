use thiserror::Error;
use zkholos_primitives::PrimitivesError;

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("Artifact missing: {0}; run circuit setup first")]
    ArtifactMissing(String),
    #[error("Artifact error: {0}")]
    Artifact(String),
    #[error("Proof generation failed: {0}")]
    ProofGeneration(String),
    #[error("Proof generation timed out after {0}s")]
    ProvingTimeout(u64),
    #[error("Verification failed to run: {0}")]
    Verification(String),
    #[error("Setup error: {0}")]
    Setup(String),
    #[error("Primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

pub type Result<T> = core::result::Result<T, ProverError>;
