//! Deterministic pseudo-random numbers for generated backgrounds.

use std::sync::atomic::{AtomicU32, Ordering};

/// Global counter for fresh seeds, so two generators never share one.
static SEED_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Next value of the global seed counter, mixed.
pub fn fresh_seed() -> u32 {
    mix(SEED_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// splitmix32-style finalizer.
pub fn mix(value: u32) -> u32 {
    let mut x = value.wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

/// Small reproducible number stream derived from one seed.
#[derive(Debug, Clone)]
pub struct SeedStream {
    state: u32,
}

impl SeedStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(1);
        mix(self.state)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_unit() * len as f64) as usize % len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_is_reproducible() {
        let mut a = SeedStream::new(42);
        let mut b = SeedStream::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut stream = SeedStream::new(7);
        for _ in 0..1000 {
            let v = stream.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
        for _ in 0..100 {
            assert!(stream.next_index(3) < 3);
        }
    }

    #[test]
    fn test_fresh_seeds_differ() {
        assert_ne!(fresh_seed(), fresh_seed());
    }
}
