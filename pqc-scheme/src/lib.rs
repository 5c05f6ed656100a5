//! Post-quantum signature scheme library
//!
//! Wraps the NIST FIPS 204 ML-DSA-65 digital signature scheme behind a
//! trait-based interface covering keypair generation, detached and attached
//! signing, and verification with message recovery. Signatures are bound to
//! a caller-supplied context string threaded through sign and verify.
//!
//! # Quick Start
//!
//! ```rust
//! use pqc_scheme::mldsa::MlDsa65Scheme;
//! use pqc_scheme::traits::SignatureScheme;
//!
//! // Generate keypair
//! let mut scheme = MlDsa65Scheme::new();
//! scheme.generate_keypair().unwrap();
//!
//! // Sign message into an attached envelope
//! let message = b"payload under test";
//! let context = b"";
//! let envelope = scheme.sign_attached(message, context).unwrap();
//!
//! // Verify and recover the message
//! let recovered = scheme.verify_attached(&envelope, context).unwrap();
//! assert_eq!(recovered, message);
//! ```

pub mod error;
pub mod mldsa;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, SchemeError};
pub use mldsa::MlDsa65Scheme;
pub use traits::{SchemeSizes, SignatureScheme};
