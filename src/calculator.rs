/// Running total with a stored multiplier.
///
/// The multiplier is stored for future use, never applied immediately:
/// [`Calculator::multiply`] applies whatever the *previous* call stored,
/// then stashes the new factor for the next call.
#[derive(Debug, Clone)]
pub struct Calculator {
    value: i64,
    multiplier: i64, // Applied on the next multiply(), not the current one
}

impl Calculator {
    pub fn new(initial_value: i64) -> Self {
        Self {
            value: initial_value,
            multiplier: 1,
        }
    }

    /// Add `x` to the running value.
    pub fn add(&mut self, x: i64) {
        self.value += x;
    }

    /// Apply the previously stored multiplier to the value, then store `x`
    /// as the multiplier for the next call.
    ///
    /// The factor passed in never takes effect within the same call.
    pub fn multiply(&mut self, x: i64) {
        self.value *= self.multiplier;
        self.multiplier = x;
    }

    /// Current value. No mutation.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Overwrite the stored multiplier directly, skipping the
    /// apply-then-store sequence of [`Calculator::multiply`].
    pub fn set_multiplier(&mut self, m: i64) {
        self.multiplier = m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_identity_multiplier() {
        let mut calc = Calculator::new(7);
        assert_eq!(calc.value(), 7);

        // The first multiply applies the initial multiplier, which is 1.
        calc.multiply(9);
        assert_eq!(calc.value(), 7);
    }

    #[test]
    fn test_add_accumulates() {
        let mut calc = Calculator::new(0);
        calc.add(20);
        calc.add(30);
        calc.add(40);
        assert_eq!(calc.value(), 90);
    }

    #[test]
    fn test_add_negative() {
        let mut calc = Calculator::new(10);
        calc.add(-4);
        assert_eq!(calc.value(), 6);
    }

    #[test]
    fn test_multiply_defers_factor_to_next_call() {
        // First call applies the initial multiplier 1, stores 5.
        // Second call applies 5, stores 3. Value stays 0 * 1 * 5 = 0.
        let mut calc = Calculator::new(0);
        calc.multiply(5);
        calc.multiply(3);
        assert_eq!(calc.value(), 0);
    }

    #[test]
    fn test_multiply_defers_with_nonzero_seed() {
        let mut calc = Calculator::new(2);
        calc.add(0);
        assert_eq!(calc.value(), 2);

        calc.multiply(5); // value = 2 * 1 = 2, stores 5
        assert_eq!(calc.value(), 2);

        calc.multiply(3); // value = 2 * 5 = 10, stores 3
        assert_eq!(calc.value(), 10);
    }

    #[test]
    fn test_set_multiplier_bypasses_apply() {
        let mut calc = Calculator::new(4);
        calc.set_multiplier(10);
        // set_multiplier must not touch the value.
        assert_eq!(calc.value(), 4);

        calc.multiply(2); // value = 4 * 10 = 40, stores 2
        assert_eq!(calc.value(), 40);

        calc.multiply(1); // value = 40 * 2 = 80
        assert_eq!(calc.value(), 80);
    }

    #[test]
    fn test_value_does_not_mutate() {
        let mut calc = Calculator::new(3);
        calc.add(2);
        assert_eq!(calc.value(), 5);
        assert_eq!(calc.value(), 5);
    }
}
