use rand::Rng;
use std::time::Duration;

use crate::lookup::LookupError;

/// Decision returned by the fallback policy after a failed formula lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Give up on this entry.
    NoFallback,
    /// Query as a cask after the given delay.
    FallbackAfter(Duration),
}

/// Single jittered fallback: delay drawn uniformly from `[0, max_jitter)`.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    pub max_jitter: Duration,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            max_jitter: Duration::from_millis(3000),
        }
    }
}

impl FallbackPolicy {
    /// Policy with no delay before the fallback (tests, `--max-jitter-ms 0`).
    pub fn immediate() -> Self {
        Self {
            max_jitter: Duration::ZERO,
        }
    }

    /// Draw a delay in `[0, max_jitter)` using `rng`.
    pub fn jitter_with<R: Rng>(&self, rng: &mut R) -> Duration {
        let max_ms = self.max_jitter.as_millis().min(u64::MAX as u128) as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.gen_range(0..max_ms))
    }

    pub fn jitter(&self) -> Duration {
        self.jitter_with(&mut rand::thread_rng())
    }

    /// Decide whether a failed formula lookup falls back to a cask lookup.
    pub fn decide(&self, err: &LookupError) -> FallbackDecision {
        if err.is_invocation() {
            return FallbackDecision::NoFallback;
        }
        FallbackDecision::FallbackAfter(self.jitter())
    }
}
