//! Coefficient verification against reference vectors

/// Result of comparing a coefficient vector against a reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckOutcome {
    /// Every coefficient matched within tolerance
    Pass,
    /// The vectors differ in length; no element comparison was attempted
    LengthMismatch { actual: usize, expected: usize },
    /// The first coefficient found outside tolerance
    ValueMismatch {
        index: usize,
        actual: f64,
        expected: f64,
    },
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }
}

/// Element-wise comparison of coefficient vectors with an absolute tolerance
#[derive(Debug, Clone, Copy)]
pub struct ToleranceCheck {
    tolerance: f64,
}

impl ToleranceCheck {
    /// Default absolute tolerance for coefficient comparison
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Create a check with the given tolerance magnitude. Stored as an
    /// absolute value; the comparison uses absolute differences.
    pub fn new(tolerance: f64) -> Self {
        ToleranceCheck {
            tolerance: tolerance.abs(),
        }
    }

    /// The tolerance magnitude in use
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compare `actual` against `expected` element-wise
    pub fn check(&self, actual: &[f64], expected: &[f64]) -> CheckOutcome {
        if actual.len() != expected.len() {
            return CheckOutcome::LengthMismatch {
                actual: actual.len(),
                expected: expected.len(),
            };
        }
        for (index, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
            if (a - e).abs() > self.tolerance {
                return CheckOutcome::ValueMismatch {
                    index,
                    actual: a,
                    expected: e,
                };
            }
        }
        CheckOutcome::Pass
    }
}

impl Default for ToleranceCheck {
    fn default() -> Self {
        ToleranceCheck::new(Self::DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_vectors_pass() {
        let check = ToleranceCheck::default();
        let outcome = check.check(&[0.0, 10.0, 0.005], &[0.0, 10.0, 0.0]);
        assert!(outcome.is_pass());
    }

    #[test]
    fn length_mismatch_is_reported_without_element_comparison() {
        let check = ToleranceCheck::default();
        // Shared prefix differs wildly; only the length may be reported.
        let outcome = check.check(&[100.0, 200.0], &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            outcome,
            CheckOutcome::LengthMismatch {
                actual: 2,
                expected: 6
            }
        );
    }

    #[test]
    fn first_out_of_tolerance_coefficient_is_named() {
        let check = ToleranceCheck::default();
        let outcome = check.check(&[0.0, 10.0, 0.5, 0.0], &[0.0, 10.0, 0.0, 0.0]);
        assert_eq!(
            outcome,
            CheckOutcome::ValueMismatch {
                index: 2,
                actual: 0.5,
                expected: 0.0
            }
        );
    }

    #[test]
    fn tolerance_sign_is_ignored() {
        let check = ToleranceCheck::new(-0.01);
        assert_eq!(check.tolerance(), 0.01);
        assert!(check.check(&[1.005], &[1.0]).is_pass());
    }
}
