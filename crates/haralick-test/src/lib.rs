//! haralick-test - Regression test harness
//!
//! Tracks a sequence of value comparisons inside one regression test,
//! accumulating failures instead of aborting on the first one, so a failed
//! run reports every divergence at once.
//!
//! # Usage
//!
//! ```
//! use haralick_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(1.0, 1.0, 0.0);
//! rp.compare_values(0.5, 0.5000001, 1e-4);
//! assert!(rp.cleanup());
//! ```

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and the
/// overall success status.
pub struct RegParams {
    /// Name of the test (e.g. "textures")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Record an arbitrary boolean check
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, what, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Finish the test, printing a summary
    ///
    /// # Returns
    ///
    /// `true` if every comparison succeeded.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg: {} comparisons", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg: {} of {} comparisons failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_comparisons_pass() {
        let mut rp = RegParams::new("harness_pass");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.5, 0.6));
        assert!(rp.check(true, "always"));
        assert_eq!(rp.index(), 3);
        assert!(rp.cleanup());
    }

    #[test]
    fn test_failures_are_accumulated() {
        let mut rp = RegParams::new("harness_fail");
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(rp.compare_values(3.0, 3.0, 0.0));
        assert!(!rp.check(false, "never"));
        assert!(!rp.cleanup());
    }
}
