//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Reference generator**: [`Mulberry32`], a 32-bit state with additive
//!   increment `0x6D2B79F5` and two xorshift/multiply mixing rounds.
//!   Output is identical on every platform for a given seed.
//! - **Alternative stream**: ChaCha8, selectable through [`RngKind`].
//! - **Index draw**: [`draw_index`] maps one 32-bit output onto `[0, len)`
//!   as `floor(next / 2^32 * len)`, without floating point.
//!
//! ```
//! use set_core::core::Mulberry32;
//! use rand::RngCore;
//!
//! let mut rng1 = Mulberry32::new(42);
//! let mut rng2 = Mulberry32::new(42);
//! assert_eq!(rng1.next_u32(), rng2.next_u32());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Mulberry32 additive constant.
const INCREMENT: u32 = 0x6D2B_79F5;

/// The reference dealing generator.
///
/// The whole state is one `u32`, so the generator is trivially
/// serializable for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator with the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Which generator backs a deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RngKind {
    /// Reference generator, reproduces the canonical deal sequences.
    #[default]
    Mulberry32,
    /// ChaCha8 seeded from the same seed.
    ChaCha8,
}

/// A dealing generator of either kind.
#[derive(Clone, Debug)]
pub enum DealRng {
    Mulberry32(Mulberry32),
    ChaCha8(ChaCha8Rng),
}

impl DealRng {
    /// Create a generator of the given kind.
    #[must_use]
    pub fn new(kind: RngKind, seed: u32) -> Self {
        match kind {
            RngKind::Mulberry32 => DealRng::Mulberry32(Mulberry32::new(seed)),
            RngKind::ChaCha8 => DealRng::ChaCha8(ChaCha8Rng::seed_from_u64(u64::from(seed))),
        }
    }
}

impl RngCore for DealRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            DealRng::Mulberry32(rng) => rng.next_u32(),
            DealRng::ChaCha8(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            DealRng::Mulberry32(rng) => rng.next_u64(),
            DealRng::ChaCha8(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            DealRng::Mulberry32(rng) => rng.fill_bytes(dest),
            DealRng::ChaCha8(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            DealRng::Mulberry32(rng) => rng.try_fill_bytes(dest),
            DealRng::ChaCha8(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/// Draw an index in `[0, len)` from one 32-bit output.
///
/// Equals `floor(next_u32 / 2^32 * len)`. `len` must be non-zero.
#[inline]
pub fn draw_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "draw from empty range");
    ((u64::from(rng.next_u32()) * len as u64) >> 32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_u32(), 2_581_720_956);
        assert_eq!(rng.next_u32(), 1_925_393_290);
        assert_eq!(rng.next_u32(), 3_661_312_704);

        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = Mulberry32::new(7);
        let mut rng2 = Mulberry32::new(7);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = Mulberry32::new(1);
        let mut rng2 = Mulberry32::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_u32()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_next_unit_range() {
        let mut rng = Mulberry32::new(42);
        let first = rng.next_unit();
        assert!((first - 2_581_720_956.0 / 4_294_967_296.0).abs() < f64::EPSILON);

        for _ in 0..1000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..10 {
            rng.next_u32();
        }

        let mut restored = Mulberry32::new(rng.state());
        let expected: Vec<_> = (0..10).map(|_| rng.next_u32()).collect();
        let actual: Vec<_> = (0..10).map(|_| restored.next_u32()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let rng = Mulberry32::new(12345);
        let json = serde_json::to_string(&rng).unwrap();
        let deserialized: Mulberry32 = serde_json::from_str(&json).unwrap();
        assert_eq!(rng, deserialized);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng1 = Mulberry32::new(3);
        let mut rng2 = Mulberry32::new(3);

        let mut bytes = [0u8; 6];
        rng1.fill_bytes(&mut bytes);

        let first = rng2.next_u32().to_le_bytes();
        let second = rng2.next_u32().to_le_bytes();
        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second[..2]);
    }

    #[test]
    fn test_seedable() {
        let mut a = Mulberry32::from_seed(42u32.to_le_bytes());
        let mut b = Mulberry32::seed_from_u64(42);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_draw_index_in_range() {
        let mut rng = Mulberry32::new(9);
        for len in 1..100 {
            assert!(draw_index(&mut rng, len) < len);
        }
    }

    #[test]
    fn test_draw_index_matches_float_floor() {
        let mut rng1 = Mulberry32::new(42);
        let mut rng2 = Mulberry32::new(42);
        for len in [1usize, 3, 12, 81] {
            let expected = (rng1.next_unit() * len as f64).floor() as usize;
            assert_eq!(draw_index(&mut rng2, len), expected);
        }
    }

    #[test]
    fn test_deal_rng_kinds_differ() {
        let mut m = DealRng::new(RngKind::Mulberry32, 42);
        let mut c = DealRng::new(RngKind::ChaCha8, 42);

        let seq1: Vec<_> = (0..10).map(|_| m.next_u32()).collect();
        let seq2: Vec<_> = (0..10).map(|_| c.next_u32()).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(seq1[0], 2_581_720_956);
    }

    #[test]
    fn test_chacha_is_deterministic() {
        let mut rng1 = DealRng::new(RngKind::ChaCha8, 5);
        let mut rng2 = DealRng::new(RngKind::ChaCha8, 5);
        for _ in 0..10 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }
}
