/// Unified interface for post-quantum signature schemes
use crate::error::Result;

/// Fixed byte-length capability set of a signature scheme
///
/// Published explicitly so callers validate lengths against these values at
/// the API boundary instead of assuming them from buffer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeSizes {
    /// Public key length in bytes
    pub public_key: usize,
    /// Secret key length in bytes
    pub secret_key: usize,
    /// Signature length in bytes; also the attached-envelope overhead
    /// beyond the message length
    pub signature: usize,
}

/// Signature scheme trait
///
/// Covers the three-operation contract: key-pair generation, signing
/// (detached or attached), and verification of an attached envelope.
/// The context string is bound into the signature and must be threaded
/// unchanged through sign and verify.
pub trait SignatureScheme {
    /// Generate keypair
    fn generate_keypair(&mut self) -> Result<()>;

    /// Sign message, returning detached signature bytes
    fn sign_detached(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>>;

    /// Sign message, returning an attached envelope of exactly
    /// `message.len() + sizes().signature` bytes
    fn sign_attached(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>>;

    /// Verify an attached envelope and recover the original message
    ///
    /// Returns `SchemeError::SignatureRejected` when the envelope does not
    /// verify under this scheme's public key and the given context.
    fn verify_attached(&self, envelope: &[u8], context: &[u8]) -> Result<Vec<u8>>;

    /// Get public key
    fn public_key(&self) -> &[u8];

    /// Fixed byte lengths of this scheme
    fn sizes(&self) -> SchemeSizes;

    /// Algorithm name
    fn algorithm_name(&self) -> &str;
}
