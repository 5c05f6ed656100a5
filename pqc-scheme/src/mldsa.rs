//! ML-DSA-65 post-quantum digital signature implementation
//!
//! # About ML-DSA-65
//!
//! ML-DSA (Module-Lattice Digital Signature Algorithm) is the lattice-based
//! signature scheme standardized by NIST as FIPS 204 (the final form of
//! CRYSTALS-Dilithium). Why we chose ML-DSA-65:
//!
//! ## Security
//! - **NIST Security Level**: Level 3 (equivalent to AES-192)
//! - **Mathematical Foundation**: Module-LWE / Module-SIS lattice problems
//! - **Standardization**: NIST FIPS 204 (officially published in 2024)
//!
//! ## Performance and Size Balance
//! | Parameter Set | Public Key Size | Signature Size | Security Level |
//! |---------------|-----------------|----------------|----------------|
//! | ML-DSA-44 | 1,312 bytes | 2,420 bytes | Level 2 |
//! | **ML-DSA-65** | **1,952 bytes** | **3,309 bytes** | **Level 3** |
//! | ML-DSA-87 | 2,592 bytes | 4,627 bytes | Level 5 |
//!
//! ## Context strings
//! FIPS 204 binds an optional context string (up to 255 bytes) into every
//! signature. The same context must be presented at verification time; a
//! mismatched context invalidates the signature exactly like a tampered
//! message. This module uses the `*_ctx` variants of the underlying
//! `pqcrypto-mldsa` API throughout.

use crate::error::{Result, SchemeError};
use crate::traits::{SchemeSizes, SignatureScheme};
use pqcrypto_mldsa::mldsa65;
use pqcrypto_traits::sign::{DetachedSignature, PublicKey, SecretKey, SignedMessage};

/// FIPS 204 upper bound on the context string length
const MAX_CONTEXT_LEN: usize = 255;

/// ML-DSA-65 signature scheme
///
/// # Example
///
/// ```rust
/// use pqc_scheme::mldsa::MlDsa65Scheme;
/// use pqc_scheme::traits::SignatureScheme;
///
/// // Generate keypair
/// let mut scheme = MlDsa65Scheme::new();
/// scheme.generate_keypair().unwrap();
///
/// // Sign message into an attached envelope
/// let message = b"Conformance trial payload";
/// let context = [0u8; 14];
/// let envelope = scheme.sign_attached(message, &context).unwrap();
///
/// // Verify envelope and recover the message
/// let recovered = scheme.verify_attached(&envelope, &context).unwrap();
/// assert_eq!(recovered, message);
/// ```
#[derive(Clone)]
pub struct MlDsa65Scheme {
    public_key: Vec<u8>,
    secret_key: Vec<u8>,
}

impl MlDsa65Scheme {
    /// Create new ML-DSA-65 scheme (keys not initialized)
    ///
    /// Must call `generate_keypair()` or `from_bytes()` to initialize keys
    pub fn new() -> Self {
        Self {
            public_key: Vec::new(),
            secret_key: Vec::new(),
        }
    }

    /// Restore keypair from bytes
    ///
    /// # Parameters
    /// - `public_key`: Public key bytes (1952 bytes)
    /// - `secret_key`: Secret key bytes (4032 bytes)
    ///
    /// # Errors
    /// - Returns `KeyGenerationError` if key length is incorrect
    pub fn from_bytes(public_key: &[u8], secret_key: &[u8]) -> Result<Self> {
        if public_key.len() != mldsa65::public_key_bytes() {
            return Err(SchemeError::KeyGenerationError(format!(
                "Invalid public key length: expected {} bytes, got {}",
                mldsa65::public_key_bytes(),
                public_key.len()
            )));
        }

        if secret_key.len() != mldsa65::secret_key_bytes() {
            return Err(SchemeError::KeyGenerationError(format!(
                "Invalid secret key length: expected {} bytes, got {}",
                mldsa65::secret_key_bytes(),
                secret_key.len()
            )));
        }

        Ok(Self {
            public_key: public_key.to_vec(),
            secret_key: secret_key.to_vec(),
        })
    }

    /// Create verification-only scheme from public key (no signing capability)
    ///
    /// # Parameters
    /// - `public_key`: Public key bytes (1952 bytes for ML-DSA-65)
    ///
    /// # Errors
    /// - Returns `KeyGenerationError` if public key length is incorrect
    /// - Returns `KeyGenerationError` if public key format is invalid
    ///
    /// # Security
    /// - Created scheme **cannot perform signing operations** (secret key is empty)
    /// - Calling a sign method will return an error
    pub fn from_public_key_only(public_key: &[u8]) -> Result<Self> {
        if public_key.len() != mldsa65::public_key_bytes() {
            return Err(SchemeError::KeyGenerationError(format!(
                "Invalid public key length: expected {} bytes, got {}",
                mldsa65::public_key_bytes(),
                public_key.len()
            )));
        }

        mldsa65::PublicKey::from_bytes(public_key).map_err(|e| {
            SchemeError::KeyGenerationError(format!(
                "Invalid public key format (failed to deserialize): {:?}",
                e
            ))
        })?;

        tracing::debug!(
            "Created verification-only MlDsa65Scheme: pk_len={} bytes (sk=empty)",
            public_key.len()
        );

        Ok(Self {
            public_key: public_key.to_vec(),
            secret_key: Vec::new(),
        })
    }

    /// Get secret key bytes (for persistence)
    ///
    /// # Security Warning
    /// Secret keys should be stored securely, not transmitted over network or logged
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    fn check_context(context: &[u8]) -> Result<()> {
        if context.len() > MAX_CONTEXT_LEN {
            return Err(SchemeError::InvalidContext(format!(
                "Context too long: {} bytes, FIPS 204 allows at most {}",
                context.len(),
                MAX_CONTEXT_LEN
            )));
        }
        Ok(())
    }

    fn signing_key(&self) -> Result<mldsa65::SecretKey> {
        if self.secret_key.is_empty() {
            return Err(SchemeError::SigningError(
                "Secret key not initialized. Call generate_keypair() first.".to_string(),
            ));
        }

        mldsa65::SecretKey::from_bytes(&self.secret_key)
            .map_err(|e| SchemeError::SigningError(format!("Failed to parse secret key: {:?}", e)))
    }
}

impl Default for MlDsa65Scheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureScheme for MlDsa65Scheme {
    /// Generate new ML-DSA-65 keypair
    ///
    /// # Errors
    /// - Returns `KeyGenerationError` when key generation fails
    fn generate_keypair(&mut self) -> Result<()> {
        let (pk, sk) = mldsa65::keypair();

        self.public_key = pk.as_bytes().to_vec();
        self.secret_key = sk.as_bytes().to_vec();

        tracing::debug!(
            "Generated ML-DSA-65 keypair: pk_len={} bytes, sk_len={} bytes",
            self.public_key.len(),
            self.secret_key.len()
        );

        Ok(())
    }

    /// Produce a detached signature over (message, context)
    ///
    /// # Returns
    /// - Signature bytes (3,309 bytes for ML-DSA-65)
    ///
    /// # Errors
    /// - Returns `SigningError` if keys not initialized
    /// - Returns `InvalidContext` if the context exceeds 255 bytes
    fn sign_detached(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        Self::check_context(context)?;
        let sk = self.signing_key()?;

        let signature = mldsa65::detached_sign_ctx(message, context, &sk);

        tracing::debug!(
            "Detached sign: msg_len={} bytes, ctx_len={} bytes, sig_len={} bytes",
            message.len(),
            context.len(),
            signature.as_bytes().len()
        );

        Ok(signature.as_bytes().to_vec())
    }

    /// Produce an attached signed-message envelope over (message, context)
    ///
    /// The envelope carries the signature followed by the message and is
    /// exactly `message.len() + sizes().signature` bytes long.
    ///
    /// # Errors
    /// - Returns `SigningError` if keys not initialized
    /// - Returns `InvalidContext` if the context exceeds 255 bytes
    fn sign_attached(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        Self::check_context(context)?;
        let sk = self.signing_key()?;

        let envelope = mldsa65::sign_ctx(message, context, &sk);
        let envelope_bytes = envelope.as_bytes();

        tracing::debug!(
            "Attached sign: msg_len={} bytes, ctx_len={} bytes, envelope_len={} bytes",
            message.len(),
            context.len(),
            envelope_bytes.len()
        );

        Ok(envelope_bytes.to_vec())
    }

    /// Verify an attached envelope and recover the original message
    ///
    /// # Returns
    /// - `Ok(message)`: Envelope is valid; recovered message bytes
    /// - `Err(SignatureRejected)`: Envelope does not verify
    /// - `Err(_)`: Malformed input or uninitialized key
    ///
    /// # Note
    /// Verification only requires the public key, so it also works on a
    /// scheme created with `from_public_key_only()`.
    fn verify_attached(&self, envelope: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        Self::check_context(context)?;

        if self.public_key.is_empty() {
            return Err(SchemeError::VerificationError(
                "Public key not initialized".to_string(),
            ));
        }

        let pk = mldsa65::PublicKey::from_bytes(&self.public_key).map_err(|e| {
            SchemeError::VerificationError(format!("Failed to parse public key: {:?}", e))
        })?;

        let signed_msg = mldsa65::SignedMessage::from_bytes(envelope).map_err(|e| {
            SchemeError::VerificationError(format!("Malformed envelope: {:?}", e))
        })?;

        match mldsa65::open_ctx(&signed_msg, context, &pk) {
            Ok(recovered) => {
                tracing::debug!(
                    "Envelope verified: envelope_len={} bytes, recovered_len={} bytes",
                    envelope.len(),
                    recovered.len()
                );
                Ok(recovered)
            }
            Err(_) => Err(SchemeError::SignatureRejected),
        }
    }

    /// Get public key bytes
    ///
    /// # Returns
    /// - Public key bytes (1,952 bytes)
    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Fixed byte lengths of ML-DSA-65
    fn sizes(&self) -> SchemeSizes {
        SchemeSizes {
            public_key: mldsa65::public_key_bytes(),
            secret_key: mldsa65::secret_key_bytes(),
            signature: mldsa65::signature_bytes(),
        }
    }

    /// Algorithm name
    fn algorithm_name(&self) -> &str {
        "ML-DSA-65"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: [u8; 14] = [0u8; 14];

    #[test]
    fn test_keypair_generation() {
        let mut scheme = MlDsa65Scheme::new();
        scheme.generate_keypair().unwrap();

        assert_eq!(scheme.public_key().len(), mldsa65::public_key_bytes());
        assert_eq!(scheme.secret_key().len(), mldsa65::secret_key_bytes());
    }

    #[test]
    fn test_attached_sign_and_verify() {
        let mut scheme = MlDsa65Scheme::new();
        scheme.generate_keypair().unwrap();

        let message = b"Conformance trial payload";
        let envelope = scheme.sign_attached(message, &CTX).unwrap();

        assert_eq!(
            envelope.len(),
            message.len() + mldsa65::signature_bytes(),
            "envelope must be message plus fixed signature overhead"
        );

        let recovered = scheme.verify_attached(&envelope, &CTX).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_detached_signature_length() {
        let mut scheme = MlDsa65Scheme::new();
        scheme.generate_keypair().unwrap();

        let signature = scheme.sign_detached(b"test message", &CTX).unwrap();
        assert!(signature.len() <= mldsa65::signature_bytes());
    }

    #[test]
    fn test_tampered_envelope_rejected() {
        let mut scheme = MlDsa65Scheme::new();
        scheme.generate_keypair().unwrap();

        let message = b"Original message";
        let envelope = scheme.sign_attached(message, &CTX).unwrap();

        let mut tampered = envelope.clone();
        tampered[0] = tampered[0].wrapping_add(1);

        let result = scheme.verify_attached(&tampered, &CTX);
        assert!(matches!(result, Err(SchemeError::SignatureRejected)));
    }

    #[test]
    fn test_sign_without_keypair() {
        let scheme = MlDsa65Scheme::new();
        let result = scheme.sign_attached(b"test message", &CTX);

        assert!(result.is_err());
        match result {
            Err(SchemeError::SigningError(msg)) => {
                assert!(msg.contains("not initialized"));
            }
            _ => panic!("Expected SigningError"),
        }
    }

    #[test]
    fn test_context_too_long() {
        let mut scheme = MlDsa65Scheme::new();
        scheme.generate_keypair().unwrap();

        let oversized_ctx = vec![0u8; 256];
        let result = scheme.sign_attached(b"test", &oversized_ctx);

        assert!(matches!(result, Err(SchemeError::InvalidContext(_))));
    }

    #[test]
    fn test_from_bytes() {
        let mut original = MlDsa65Scheme::new();
        original.generate_keypair().unwrap();

        let pk = original.public_key().to_vec();
        let sk = original.secret_key().to_vec();

        let restored = MlDsa65Scheme::from_bytes(&pk, &sk).unwrap();

        assert_eq!(restored.public_key(), original.public_key());
        assert_eq!(restored.secret_key(), original.secret_key());

        let message = b"test message";
        let envelope = restored.sign_attached(message, &CTX).unwrap();
        let recovered = restored.verify_attached(&envelope, &CTX).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_from_bytes_invalid_length() {
        let invalid_pk = vec![0u8; 100];
        let invalid_sk = vec![0u8; 100];

        let result = MlDsa65Scheme::from_bytes(&invalid_pk, &invalid_sk);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_public_key_only() {
        let mut full_scheme = MlDsa65Scheme::new();
        full_scheme.generate_keypair().unwrap();

        let message = b"Verification-only path";
        let envelope = full_scheme.sign_attached(message, &CTX).unwrap();

        let verifier = MlDsa65Scheme::from_public_key_only(full_scheme.public_key()).unwrap();
        assert_eq!(verifier.secret_key().len(), 0);

        let recovered = verifier.verify_attached(&envelope, &CTX).unwrap();
        assert_eq!(recovered, message);

        // Attempting to sign must fail
        let result = verifier.sign_attached(message, &CTX);
        assert!(result.is_err(), "Verification-only scheme should not sign");
    }

    #[test]
    fn test_from_public_key_only_invalid_length() {
        let invalid_pk = vec![0u8; 100];
        let result = MlDsa65Scheme::from_public_key_only(&invalid_pk);

        assert!(result.is_err());
        match result {
            Err(SchemeError::KeyGenerationError(msg)) => {
                assert!(msg.contains("Invalid public key length"));
            }
            _ => panic!("Expected KeyGenerationError for invalid length"),
        }
    }

    #[test]
    fn test_sizes() {
        let scheme = MlDsa65Scheme::new();
        let sizes = scheme.sizes();

        assert_eq!(sizes.public_key, 1952);
        assert_eq!(sizes.public_key, mldsa65::public_key_bytes());
        assert_eq!(sizes.secret_key, mldsa65::secret_key_bytes());
        assert_eq!(sizes.signature, mldsa65::signature_bytes());
    }
}
