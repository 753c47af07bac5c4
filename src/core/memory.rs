//! Session-only memory register.

/// Single numeric memory cell, default zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryCell {
    value: f64,
}

impl MemoryCell {
    /// Zeroed cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Resets the cell to zero.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Adds `v` into the cell.
    pub fn add(&mut self, v: f64) {
        self.value += v;
    }

    /// Subtracts `v` from the cell.
    pub fn subtract(&mut self, v: f64) {
        self.value -= v;
    }
}
