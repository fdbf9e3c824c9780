//! Jerk-minimizing trajectory solver.
//!
//! Given the kinematic state (position, velocity, acceleration) at the start
//! and end of a maneuver and its duration, computes the unique quintic
//! polynomial that satisfies both boundary states while minimizing the
//! integrated jerk.

pub mod error;
pub mod trajectory;
pub mod verification;

pub use crate::error::TrajectoryError;
pub use crate::trajectory::{jerk_minimizing_trajectory, KinematicState, QuinticPolynomial};
