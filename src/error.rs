//! Error types for trajectory computation

use thiserror::Error;

/// Errors raised when inputs violate the solver's preconditions
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrajectoryError {
    /// The maneuver duration must be finite and strictly positive; at T = 0
    /// the boundary-condition system is singular
    #[error("invalid maneuver duration {0}: must be finite and greater than zero")]
    InvalidDuration(f64),

    /// A kinematic state holds exactly position, velocity and acceleration
    #[error("kinematic state requires exactly 3 components, got {0}")]
    DimensionMismatch(usize),
}
