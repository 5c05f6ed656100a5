/// Error type definitions
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Signing failed: {0}")]
    SigningError(String),

    #[error("Verification failed: {0}")]
    VerificationError(String),

    /// The signature did not verify. This is the only verification outcome a
    /// well-formed call can produce; every other variant signals misuse or a
    /// provider malfunction.
    #[error("Signature rejected")]
    SignatureRejected,

    #[error("Key generation failed: {0}")]
    KeyGenerationError(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SchemeError>;
