//! Entropy source for the fairness protocol.
//!
//! Commitment keys and the program's secret draws both come from a
//! cryptographically strong generator; a statistical PRNG would let a
//! spectator predict draws from earlier output. The source is owned by the
//! game controller and lives for exactly one game.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Length of a commitment key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Cryptographically strong entropy for one game.
///
/// Generic over the backing generator so tests can inject a scripted one;
/// production code uses [`Entropy::new`] (OS-backed).
pub struct Entropy<R: RngCore + CryptoRng = OsRng> {
    rng: R,
}

impl Entropy<OsRng> {
    /// OS-backed entropy. Failure to obtain entropy from the OS aborts the
    /// process, which is the intended behavior: no fallback generator.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Entropy<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Entropy<R> {
    /// Entropy backed by an explicit generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Rejection sampling over the largest multiple of `bound` that fits in
    /// 32 bits, so no modulo bias. `bound` must be nonzero.
    pub fn next_int(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_int bound must be nonzero");
        let bound = u64::from(bound);
        let zone = (1u64 << 32) - ((1u64 << 32) % bound);
        loop {
            let raw = u64::from(self.rng.next_u32());
            if raw < zone {
                return (raw % bound) as u32;
            }
        }
    }

    /// A fresh 256-bit commitment key. One per round, never reused.
    pub fn fresh_key(&mut self) -> [u8; KEY_LEN] {
        let mut key = [0u8; KEY_LEN];
        self.rng.fill_bytes(&mut key);
        key
    }
}
