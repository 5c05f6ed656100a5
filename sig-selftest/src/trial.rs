//! Trial runner: one full positive/negative test cycle
//!
//! A trial drives the signature scheme through the happy path (keypair →
//! attached sign → verify → message recovery) with wall-clock timing around
//! each phase, then runs the tamper test on a corrupted copy of the envelope.
//! The cross-key check runs as its own independent, untimed trial.
//!
//! Any contract violation aborts the trial immediately; diagnostics are
//! logged before the error propagates.

use std::time::{Duration, Instant};

use pqc_scheme::SignatureScheme;
use rand::{CryptoRng, RngCore};
use tracing::{debug, error};

use crate::corrupt::select_corruption;
use crate::error::{HarnessError, Result};
use crate::{CTXLEN, MLEN};

/// Elapsed wall-clock time of the timed happy-path phases of one trial.
///
/// The tamper and cross-key checks are deliberately untimed.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings {
    pub keygen: Duration,
    pub sign: Duration,
    pub verify: Duration,
}

/// Run one positive+tamper trial against a fresh scheme instance.
///
/// Steps:
/// 1. draw a random MLEN-byte message from the entropy source;
/// 2. generate a fresh keypair (timed);
/// 3. capture a detached signature, used only in failure diagnostics;
/// 4. produce the attached envelope (timed) and check its exact length;
/// 5. verify the envelope (timed), check recovered length and bytes;
/// 6. corrupt one byte of a copy of the envelope and require rejection.
pub fn run_trial<S, R>(rng: &mut R) -> Result<PhaseTimings>
where
    S: SignatureScheme + Default,
    R: RngCore + CryptoRng,
{
    let context = [0u8; CTXLEN];

    let mut message = vec![0u8; MLEN];
    rng.fill_bytes(&mut message);

    let mut scheme = S::default();
    let start = Instant::now();
    scheme.generate_keypair()?;
    let keygen = start.elapsed();

    // Captured up front so a failed verification can dump the raw signature
    let signature = scheme.sign_detached(&message, &context)?;

    let start = Instant::now();
    let envelope = scheme.sign_attached(&message, &context)?;
    let sign = start.elapsed();

    let expected_len = MLEN + scheme.sizes().signature;
    if envelope.len() != expected_len {
        error!(
            "Signed message lengths wrong: expected {}, got {}",
            expected_len,
            envelope.len()
        );
        return Err(HarnessError::EnvelopeLength {
            expected: expected_len,
            actual: envelope.len(),
        });
    }

    let start = Instant::now();
    let verify_result = scheme.verify_attached(&envelope, &context);
    let verify = start.elapsed();

    let recovered = match verify_result {
        Ok(recovered) => recovered,
        Err(err) => {
            error!("Verification failed: {err}");
            error!(
                "siglen = {}, smlen = {}, mlen = {}",
                signature.len(),
                envelope.len(),
                message.len()
            );
            return Err(HarnessError::VerifyRejected {
                signature_hex: hex::encode(&signature),
                message_hex: hex::encode(&message),
            });
        }
    };

    if recovered.len() != MLEN {
        error!(
            "Message lengths wrong: expected {}, got {}",
            MLEN,
            recovered.len()
        );
        return Err(HarnessError::RecoveredLength {
            expected: MLEN,
            actual: recovered.len(),
        });
    }

    if recovered != message {
        error!("Messages don't match");
        return Err(HarnessError::RoundTripMismatch {
            expected_hex: hex::encode(&message),
            recovered_hex: hex::encode(&recovered),
        });
    }

    // Tamper test: mutate one byte of a copy, the pristine envelope stays intact
    let corruption = select_corruption(rng, envelope.len());
    let corrupted = corruption.apply(&envelope);

    if scheme.verify_attached(&corrupted, &context).is_ok() {
        error!("Trivial forgeries possible");
        return Err(HarnessError::TrivialForgery {
            index: corruption.index,
            delta: corruption.delta,
        });
    }

    debug!(
        "trial passed: keygen={:?} sign={:?} verify={:?} corruption=(byte {}, delta {:#04x})",
        keygen, sign, verify, corruption.index, corruption.delta
    );

    Ok(PhaseTimings { keygen, sign, verify })
}

/// Cross-key check: a signature produced under key A must not verify under
/// an independently generated key B.
pub fn run_cross_key_trial<S, R>(rng: &mut R) -> Result<()>
where
    S: SignatureScheme + Default,
    R: RngCore + CryptoRng,
{
    let context = [0u8; CTXLEN];

    let mut message = vec![0u8; MLEN];
    rng.fill_bytes(&mut message);

    let mut signer = S::default();
    signer.generate_keypair()?;

    let mut unrelated = S::default();
    unrelated.generate_keypair()?;

    let envelope = signer.sign_attached(&message, &context)?;

    if unrelated.verify_attached(&envelope, &context).is_ok() {
        error!("ERROR Signature did verify correctly under wrong public key!");
        return Err(HarnessError::CrossKeyAcceptance);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqc_scheme::MlDsa65Scheme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_run_trial_with_real_scheme() {
        let mut rng = StdRng::seed_from_u64(42);
        let timings = run_trial::<MlDsa65Scheme, _>(&mut rng).unwrap();

        // Wall-clock sanity: the phases did run
        assert!(timings.keygen > Duration::ZERO);
        assert!(timings.sign > Duration::ZERO);
        assert!(timings.verify > Duration::ZERO);
    }

    #[test]
    fn test_cross_key_trial_with_real_scheme() {
        let mut rng = StdRng::seed_from_u64(43);
        run_cross_key_trial::<MlDsa65Scheme, _>(&mut rng).unwrap();
    }
}
