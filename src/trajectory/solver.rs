//! Jerk-minimizing trajectory solver

use crate::error::TrajectoryError;
use crate::trajectory::{KinematicState, QuinticPolynomial};

/// Compute the jerk-minimizing trajectory connecting `start` to `end` over
/// `duration` seconds.
///
/// The returned quintic satisfies s(0), s'(0), s''(0) = start and
/// s(T), s'(T), s''(T) = end, and is the unique minimizer of the integrated
/// squared jerk among all such profiles.
///
/// Returns [`TrajectoryError::InvalidDuration`] when `duration` is not a
/// finite, strictly positive number; the boundary-condition system is
/// singular at T = 0.
pub fn jerk_minimizing_trajectory(
    start: &KinematicState,
    end: &KinematicState,
    duration: f64,
) -> Result<QuinticPolynomial, TrajectoryError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(TrajectoryError::InvalidDuration(duration));
    }

    let t = duration;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    // The start state fixes the three low-order coefficients outright.
    let a0 = start.position;
    let a1 = start.velocity;
    let a2 = 0.5 * start.acceleration;

    // End-state residuals once the start-fixed terms are subtracted.
    let c = [
        end.position - (start.position + start.velocity * t + 0.5 * start.acceleration * t2),
        end.velocity - (start.velocity + start.acceleration * t),
        end.acceleration - start.acceleration,
    ];

    // Rows are s(T), s'(T), s''(T); columns are (a3, a4, a5).
    let m = [
        [t3, t4, t5],
        [3.0 * t2, 4.0 * t3, 5.0 * t4],
        [6.0 * t, 12.0 * t2, 20.0 * t3],
    ];

    let [a3, a4, a5] = solve_3x3(&m, &c);

    Ok(QuinticPolynomial::new([a0, a1, a2, a3, a4, a5]))
}

/// Cramer's rule for a 3×3 system M·x = c.
///
/// The boundary-condition matrix is invertible for any T > 0, so no
/// singularity check is needed here once the duration has been validated.
fn solve_3x3(m: &[[f64; 3]; 3], c: &[f64; 3]) -> [f64; 3] {
    let det = det_3x3(m);
    [
        det_3x3(&replace_column(m, c, 0)) / det,
        det_3x3(&replace_column(m, c, 1)) / det,
        det_3x3(&replace_column(m, c, 2)) / det,
    ]
}

fn det_3x3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

fn replace_column(m: &[[f64; 3]; 3], c: &[f64; 3], column: usize) -> [[f64; 3]; 3] {
    let mut out = *m;
    for row in 0..3 {
        out[row][column] = c[row];
    }
    out
}
