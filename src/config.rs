/// Tuning for the Strassen engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Operands of side `<= leaf_size` are multiplied with the naive engine.
    /// A leaf size of 0 behaves like 1.
    pub leaf_size: usize,
}

impl StrassenConfig {
    pub fn new() -> Self {
        StrassenConfig { leaf_size: 1 }
    }

    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        // a leaf of 0 would recurse forever on 1x1 operands
        self.leaf_size = leaf_size.max(1);
        self
    }
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self::new()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
