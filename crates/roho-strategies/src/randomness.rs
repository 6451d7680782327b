//! Injectable sources of uniform random integers.

use std::collections::VecDeque;

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RandomnessError(pub String);

/// A fallible source of uniform integers.
pub trait RandomSource: Send {
    /// Draw uniformly from `[0, upper)`. `upper` must be non-zero.
    fn below(&mut self, upper: u64) -> Result<u64, RandomnessError>;
}

/// Draws from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn below(&mut self, upper: u64) -> Result<u64, RandomnessError> {
        if upper == 0 {
            return Err(RandomnessError("empty range".to_string()));
        }

        // Values below `zone` would bias the modulo toward small results.
        let zone = upper.wrapping_neg() % upper;
        loop {
            let mut buf = [0u8; 8];
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| RandomnessError(format!("os random source: {e}")))?;
            let value = u64::from_le_bytes(buf);
            if value >= zone {
                return Ok(value % upper);
            }
        }
    }
}

/// Replays a fixed script of draws. Used for deterministic dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    draws: VecDeque<Result<u64, RandomnessError>>,
}

impl SequenceRandom {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            draws: draws.into_iter().map(Ok).collect(),
        }
    }

    /// Queue a failure after the draws scripted so far.
    pub fn then_fail(mut self, message: &str) -> Self {
        self.draws.push_back(Err(RandomnessError(message.to_string())));
        self
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for SequenceRandom {
    fn below(&mut self, upper: u64) -> Result<u64, RandomnessError> {
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| Err(RandomnessError("random sequence exhausted".to_string())))?;
        if draw >= upper {
            return Err(RandomnessError(format!(
                "scripted draw {draw} outside [0, {upper})"
            )));
        }
        Ok(draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_stays_in_range() {
        let mut rng = OsRandom;
        for upper in [1, 2, 3, 7, 28, 1000] {
            for _ in 0..200 {
                assert!(rng.below(upper).unwrap() < upper);
            }
        }
        assert_eq!(rng.below(1).unwrap(), 0);
        assert!(rng.below(0).is_err());
    }

    #[test]
    fn test_os_random_covers_small_range() {
        let mut rng = OsRandom;
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.below(4).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_sequence_replays_then_fails() {
        let mut rng = SequenceRandom::new([4, 0]).then_fail("boom");
        assert_eq!(rng.below(8).unwrap(), 4);
        assert_eq!(rng.below(8).unwrap(), 0);
        assert_eq!(rng.below(8).unwrap_err().0, "boom");
        assert!(rng.below(8).is_err());
        assert_eq!(rng.remaining(), 0);
    }
}
