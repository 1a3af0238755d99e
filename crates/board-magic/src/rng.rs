//! Deterministic xorshift generator for magic number candidates.

/// Seed used when none is given, and the starting state for the search
/// that produced the shipped magics.
pub const DEFAULT_SEED: u32 = 1_804_289_383;

/// 32-bit xorshift generator (shifts 13, 17, 5).
///
/// Each instance owns its state, so two generators built from the same seed
/// produce the same sequence. A zero seed would lock the generator at zero
/// and is replaced by [`DEFAULT_SEED`].
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        XorShift32 { state }
    }

    /// Returns the current internal state.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Builds a 64-bit value from the low 16 bits of four successive draws.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let n1 = u64::from(self.next_u32() & 0xFFFF);
        let n2 = u64::from(self.next_u32() & 0xFFFF);
        let n3 = u64::from(self.next_u32() & 0xFFFF);
        let n4 = u64::from(self.next_u32() & 0xFFFF);
        n1 | (n2 << 16) | (n3 << 32) | (n4 << 48)
    }

    /// Returns a magic number candidate: the AND of three 64-bit draws,
    /// which leaves roughly one bit in eight set.
    #[inline]
    pub fn sparse_u64(&mut self) -> u64 {
        self.next_u64() & self.next_u64() & self.next_u64()
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        XorShift32::new(DEFAULT_SEED)
    }
}
