//! Request generations: the ordering key for asynchronous completions.

use std::fmt;

/// Identifies one load or refresh attempt.
///
/// Generations are totally ordered; a larger value was issued later.
/// `RequestGeneration::ZERO` is the generation of the initial, never
/// loaded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub const ZERO: RequestGeneration = RequestGeneration(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Issues strictly increasing generations and remembers the latest one.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: RequestGeneration,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next generation. The first call returns `g1`.
    pub fn next(&mut self) -> RequestGeneration {
        self.latest = RequestGeneration(self.latest.0 + 1);
        self.latest
    }

    /// The most recently issued generation.
    pub fn latest(&self) -> RequestGeneration {
        self.latest
    }

    /// Whether `generation` is the most recently issued one.
    pub fn is_current(&self, generation: RequestGeneration) -> bool {
        generation == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_strictly_increase() {
        let mut counter = GenerationCounter::new();
        assert_eq!(counter.latest(), RequestGeneration::ZERO);
        let g1 = counter.next();
        let g2 = counter.next();
        assert!(g2 > g1);
        assert_eq!(g1.value(), 1);
        assert_eq!(g2.value(), 2);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut counter = GenerationCounter::new();
        let g1 = counter.next();
        assert!(counter.is_current(g1));
        let g2 = counter.next();
        assert!(!counter.is_current(g1));
        assert!(counter.is_current(g2));
    }

    #[test]
    fn test_display() {
        let mut counter = GenerationCounter::new();
        assert_eq!(counter.next().to_string(), "g1");
    }
}
