//! Trajectory generation module

pub mod polynomial;
pub mod solver;
pub mod state;

pub use self::polynomial::QuinticPolynomial;
pub use self::solver::jerk_minimizing_trajectory;
pub use self::state::KinematicState;
