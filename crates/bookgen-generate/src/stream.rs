//! Per-record random stream derivation.
//!
//! A record's stream is `ChaCha8Rng` seeded with the SHA-256 digest of the
//! composite key `"{seed}-{index}"`. This pairing is fixed: changing either
//! the key format or the algorithm changes every generated record.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Reproducible source of uniform draws for exactly one record.
#[derive(Debug, Clone)]
pub struct RecordStream {
    rng: ChaCha8Rng,
    draws: u64,
}

impl RecordStream {
    /// Stream for `index` under `seed`. Any index is accepted.
    pub fn derive(seed: &str, index: impl Into<i128>) -> Self {
        Self::from_key(&stream_key(seed, index.into()))
    }

    fn from_key(key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        Self {
            rng: ChaCha8Rng::from_seed(seed),
            draws: 0,
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        self.draws += 1;
        self.rng.random::<f64>()
    }

    /// `floor(draw() * len)`, the uniform index used by every table lookup.
    pub fn index(&mut self, len: usize) -> usize {
        let value = (self.draw() * len as f64) as usize;
        value.min(len.saturating_sub(1))
    }

    /// Bernoulli trial that succeeds with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.draw() < p
    }

    /// Number of `draw` calls made so far (excludes raw `RngCore` use).
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RngCore for RecordStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

/// Composite key identifying a record's stream.
pub fn stream_key(seed: &str, index: i128) -> String {
    format!("{seed}-{index}")
}
