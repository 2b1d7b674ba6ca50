//! Randomness sources for the opponent
//!
//! The opponent never reaches for a global generator: every draw goes
//! through [`RandomSource`], so a match can be replayed from a seed or
//! driven from a scripted sequence in tests.

/// Source of the two kinds of draw the opponent needs
pub trait RandomSource {
    /// Uniform value in 0-99 (for percentage checks)
    fn next_percent(&mut self) -> u8;

    /// Uniform value in [0, max). Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_percent(&mut self) -> u8 {
        (**self).next_percent()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Seeded xorshift64* generator
///
/// Deterministic: same seed + session = same sequence of opponent moves
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a 32-byte seed and a session index
    pub fn new(seed: &[u8; 32], session: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }
        state ^= (session as u64).wrapping_mul(0x517cc1b727220a95);
        Self::warmed(state)
    }

    /// Create a generator from a single integer seed
    pub fn from_u64(seed: u64) -> Self {
        Self::warmed(seed.wrapping_mul(0x9e3779b97f4a7c15))
    }

    fn warmed(state: u64) -> Self {
        // xorshift has a fixed point at zero
        let mut rng = Self {
            state: if state == 0 { 0x2545f4914f6cdd1d } else { state },
        };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl RandomSource for SeededRng {
    fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }

    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

/// OS-seeded generator for live play
#[cfg(feature = "entropy")]
#[derive(Clone, Debug)]
pub struct EntropyRng(rand::rngs::SmallRng);

#[cfg(feature = "entropy")]
impl EntropyRng {
    pub fn new() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::SmallRng::from_os_rng())
    }
}

#[cfg(feature = "entropy")]
impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "entropy")]
impl RandomSource for EntropyRng {
    fn next_percent(&mut self) -> u8 {
        use rand::Rng;
        self.0.random_range(0..100u8)
    }

    fn next_range(&mut self, max: u32) -> u32 {
        use rand::Rng;
        if max == 0 {
            return 0;
        }
        self.0.random_range(0..max)
    }
}
