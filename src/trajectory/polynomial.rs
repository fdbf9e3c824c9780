//! Quintic position polynomials

/// A quintic position profile
/// s(t) = a0 + a1·t + a2·t² + a3·t³ + a4·t⁴ + a5·t⁵,
/// stored as coefficients in ascending power order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuinticPolynomial {
    coefficients: [f64; 6],
}

impl QuinticPolynomial {
    /// Create a polynomial from its six coefficients `[a0..a5]`
    pub fn new(coefficients: [f64; 6]) -> Self {
        QuinticPolynomial { coefficients }
    }

    /// The coefficients in ascending power order
    pub fn coefficients(&self) -> &[f64; 6] {
        &self.coefficients
    }

    /// Position s(t)
    pub fn position(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &a| acc * t + a)
    }

    /// Velocity s'(t)
    pub fn velocity(&self, t: f64) -> f64 {
        let [_, a1, a2, a3, a4, a5] = self.coefficients;
        a1 + t * (2.0 * a2 + t * (3.0 * a3 + t * (4.0 * a4 + t * 5.0 * a5)))
    }

    /// Acceleration s''(t)
    pub fn acceleration(&self, t: f64) -> f64 {
        let [_, _, a2, a3, a4, a5] = self.coefficients;
        2.0 * a2 + t * (6.0 * a3 + t * (12.0 * a4 + t * 20.0 * a5))
    }
}
