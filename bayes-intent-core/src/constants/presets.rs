//! Goal-Navigation Preset
//!
//! A remote mobile robot approaches one of three goals. Each goal yields two
//! readings: the heading angle to the goal (degrees) and the path length to
//! the goal (meters).

/// Number of candidate goals.
pub const GOAL_COUNT: usize = 3;

/// Observation sources per goal: angle and path length.
pub const GOAL_SOURCE_COUNT: usize = 2;

/// Largest angle reading, used to scale angles into [0, 1].
pub const MAX_ANGLE_DEG: f64 = 180.0;

/// Largest path-length reading, used to scale paths into [0, 1].
pub const MAX_PATH_M: f64 = 25.0;

/// Decay weight of the angle source.
pub const ANGLE_WEIGHT: f64 = 0.6;

/// Decay weight of the path source.
pub const PATH_WEIGHT: f64 = 0.4;

/// Transition leak between goals per step.
pub const GOAL_DELTA: f64 = 0.2;

/// Inclusive range of synthetic angle readings.
pub const ANGLE_RANGE: (i32, i32) = (0, 180);

/// Inclusive range of synthetic path readings.
pub const PATH_RANGE: (i32, i32) = (1, 25);
