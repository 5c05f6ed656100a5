//! Timing aggregation and the final run report
//!
//! The accumulator is an explicit value threaded through the run loop, never
//! shared mutable state, so trials could be parallelized later without
//! touching the reporting path. Only the timed happy-path phases contribute;
//! tamper and cross-key checks are excluded.

use std::time::Duration;

use pqc_scheme::{SchemeSizes, SignatureScheme};
use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::error::Result;
use crate::trial::{run_cross_key_trial, run_trial, PhaseTimings};

/// Running totals of happy-path phase durations.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimingAccumulator {
    keygen: Duration,
    sign: Duration,
    verify: Duration,
    trials: u32,
}

/// Per-phase averages over a completed run.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAverages {
    pub keygen: Duration,
    pub sign: Duration,
    pub verify: Duration,
}

impl TimingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timings: &PhaseTimings) {
        self.keygen += timings.keygen;
        self.sign += timings.sign;
        self.verify += timings.verify;
        self.trials += 1;
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Per-phase averages, or `None` when no trials were recorded.
    ///
    /// The zero-trial case is surfaced explicitly instead of dividing by
    /// zero; the reporter prints a dedicated diagnostic for it.
    pub fn averages(&self) -> Option<PhaseAverages> {
        if self.trials == 0 {
            return None;
        }

        Some(PhaseAverages {
            keygen: self.keygen / self.trials,
            sign: self.sign / self.trials,
            verify: self.verify / self.trials,
        })
    }
}

/// Outcome of a completed (all-trials-passed) run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub algorithm: String,
    pub trial_count: u32,
    pub timings: TimingAccumulator,
    pub sizes: SchemeSizes,
}

/// Execute `trial_count` independent trials, fail-fast.
///
/// Each iteration runs one positive+tamper trial plus one independent
/// cross-key trial. The first contract violation aborts the run and
/// propagates; remaining trials are not attempted.
pub fn run_all<S, R>(trial_count: u32, rng: &mut R) -> Result<RunSummary>
where
    S: SignatureScheme + Default,
    R: RngCore + CryptoRng,
{
    let mut timings = TimingAccumulator::new();

    for i in 0..trial_count {
        let trial_timings = run_trial::<S, _>(rng)?;
        timings.record(&trial_timings);

        run_cross_key_trial::<S, _>(rng)?;

        info!("trial {}/{} passed", i + 1, trial_count);
    }

    let scheme = S::default();
    Ok(RunSummary {
        algorithm: scheme.algorithm_name().to_string(),
        trial_count,
        timings,
        sizes: scheme.sizes(),
    })
}

/// Render the final human-readable summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    println!();
    match summary.timings.averages() {
        Some(avg) => {
            println!(
                "Average time taken to generate keypair = {:.6} s",
                avg.keygen.as_secs_f64()
            );
            println!(
                "Average time taken to sign message = {:.6} s",
                avg.sign.as_secs_f64()
            );
            println!(
                "Average time taken to verify message = {:.6} s",
                avg.verify.as_secs_f64()
            );
        }
        None => {
            println!("Trial count is zero, cannot calculate average operation times.");
        }
    }

    println!("Algorithm: {}", summary.algorithm);
    println!("Secret key bytes: {}", summary.sizes.secret_key);
    println!("Public key bytes: {}", summary.sizes.public_key);
    println!("Signature bytes: {}", summary.sizes.signature);
    println!("Test successful ({} trials)", summary.trial_count);
}
