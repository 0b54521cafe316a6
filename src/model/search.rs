//! Baseline search state
//!
//! Offsets grow along the Fibonacci sequence starting at 2: 2, 3, 5, 8, ...

/// Mutable state of one backward search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    prev: u32,
    current: u32,
    /// Offset under test (0 before the first advance)
    pub offset: u32,
    /// Whether the oracle passed at `offset`
    pub passed: bool,
    /// Number of offsets handed out so far
    pub iterations: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Seed both accumulators at 1
    pub fn new() -> Self {
        Self {
            prev: 1,
            current: 1,
            offset: 0,
            passed: false,
            iterations: 0,
        }
    }

    /// Step to the next offset and return it
    ///
    /// Saturates at `u32::MAX`, which any ceiling stops long before.
    pub fn advance(&mut self) -> u32 {
        let next = self.prev.saturating_add(self.current);
        self.prev = self.current;
        self.current = next;
        self.offset = next;
        self.passed = false;
        self.iterations += 1;
        next
    }

    /// Record the oracle verdict for the current offset
    pub fn record(&mut self, passed: bool) {
        self.passed = passed;
    }
}
