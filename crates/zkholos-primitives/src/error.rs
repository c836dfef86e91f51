use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimitivesError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Calldata error: {0}")]
    Calldata(String),
    #[error("Signal arity error: expected {expected} public signals, got {got}")]
    SignalArity { expected: usize, got: usize },
    #[error("Verification key error: {0}")]
    VerificationKey(String),
}

pub type Result<T> = core::result::Result<T, PrimitivesError>;
