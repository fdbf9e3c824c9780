//! Kinematic boundary states

use crate::error::TrajectoryError;

/// Motion state along one generalized coordinate at a boundary time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl KinematicState {
    /// Create a new kinematic state
    pub fn new(position: f64, velocity: f64, acceleration: f64) -> Self {
        KinematicState {
            position,
            velocity,
            acceleration,
        }
    }

    /// Build a state from a `[position, velocity, acceleration]` slice.
    ///
    /// Slices of any other length are rejected rather than truncated or
    /// zero-padded.
    pub fn from_slice(components: &[f64]) -> Result<Self, TrajectoryError> {
        match *components {
            [position, velocity, acceleration] => {
                Ok(KinematicState::new(position, velocity, acceleration))
            }
            _ => Err(TrajectoryError::DimensionMismatch(components.len())),
        }
    }
}

impl From<[f64; 3]> for KinematicState {
    fn from(components: [f64; 3]) -> Self {
        KinematicState::new(components[0], components[1], components[2])
    }
}
