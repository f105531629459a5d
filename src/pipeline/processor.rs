use super::stages::{filter, transform};
use crate::calculator::Calculator;

/// Pipes each value through transform → filter and folds the survivors into
/// an owned [`Calculator`].
///
/// Exactly one calculator is live at any time. It is heap-allocated on
/// construction and replaced wholesale by [`DataProcessor::reset`]; nothing
/// else ever holds a reference to it.
#[derive(Debug)]
pub struct DataProcessor {
    calc: Box<Calculator>,
    // Mirrors the sum of filtered values; no public method surfaces it.
    accumulator: i64,
}

impl DataProcessor {
    pub fn new() -> Self {
        Self {
            calc: Box::new(Calculator::new(0)),
            accumulator: 0,
        }
    }

    /// Run one value through the pipeline and fold the filtered result into
    /// the tally.
    pub fn process(&mut self, value: i64) {
        let transformed = transform(value);
        let filtered = filter(transformed);

        self.accumulator += filtered;
        self.calc.add(filtered);
    }

    /// Current tally, read from the owned calculator.
    pub fn result(&self) -> i64 {
        self.calc.value()
    }

    /// Discard all state: zero the accumulator and replace the owned
    /// calculator with a fresh one.
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.calc = Box::new(Calculator::new(0));
    }
}

impl Default for DataProcessor {
    fn default() -> Self {
        Self::new()
    }
}
