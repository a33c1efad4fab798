//! RNG module - where the next shape comes from
//!
//! The session never reaches for global randomness. It asks a [`ShapeSource`]
//! for a catalog index, so games are reproducible from a seed and tests can
//! script the exact piece sequence with a closure.

/// Picks the catalog index of the next shape to spawn.
pub trait ShapeSource {
    /// Return an index in `0..count`.
    fn next_index(&mut self, count: usize) -> usize;
}

/// Any `FnMut(count) -> index` closure is a shape source.
impl<F> ShapeSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, count: usize) -> usize {
        self(count) % count
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    fn next_index(&mut self, count: usize) -> usize {
        self.next_range(count as u32) as usize
    }
}
