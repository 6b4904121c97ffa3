//! Numeric constants shared by the fitting routines.

/// Default maximum deviation (linear distance) between an input point and the fitted curve.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Number of Newton-Raphson refinement rounds tried before a region is split.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Number of uniform `t` steps used to approximate the arc length of a candidate curve.
pub const DEFAULT_ARC_LENGTH_GRANULARITY: usize = 10;

/// Lower bound of the error ratio that counts as "no progress" between two refinement rounds.
pub const DEFAULT_STAGNATION_LOW: f64 = 0.9999;

/// Upper bound of the error ratio that counts as "no progress" between two refinement rounds.
pub const DEFAULT_STAGNATION_HIGH: f64 = 1.0001;

/// Tangent scales below `ALPHA_EPSILON_FACTOR * chord_length` are rejected by the least-squares solve.
pub const ALPHA_EPSILON_FACTOR: f64 = 1.0e-6;

/// Interior control points of the fallback curve sit at `chord_length / HEURISTIC_HANDLE_DIVISOR`.
pub const HEURISTIC_HANDLE_DIVISOR: f64 = 3.0;
