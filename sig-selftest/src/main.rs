//! Signature scheme self-test entry point
//!
//! Runs the full conformance cycle against ML-DSA-65:
//! 1. Initialize logging
//! 2. Execute NTESTS independent trials (round-trip + tamper + cross-key)
//! 3. Print averaged timings and the fixed byte-length constants
//!
//! Exit status is 0 when every trial passes and 1 on the first detected
//! contract violation. No flags or configuration: the trial count, message
//! length, and context length are compile-time constants.

use anyhow::{Context, Result};
use pqc_scheme::MlDsa65Scheme;
use rand::rngs::OsRng;
use tracing::info;

use sig_selftest::{print_summary, run_all, CTXLEN, MLEN, NTESTS};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    info!(
        "Starting ML-DSA-65 self-test: {} trials, MLEN={}, CTXLEN={}",
        NTESTS, MLEN, CTXLEN
    );

    let mut rng = OsRng;
    let summary = run_all::<MlDsa65Scheme, _>(NTESTS, &mut rng)
        .context("signature self-test detected a contract violation")?;

    print_summary(&summary);

    Ok(())
}
