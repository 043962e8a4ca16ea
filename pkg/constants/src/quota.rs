//! Quota override constants.

/// Minimum accepted CPU override (cores) while the override is enabled.
pub const MIN_CPU: f64 = 0.0;

/// Minimum accepted memory override (GiB) while the override is enabled.
pub const MIN_MEMORY: f64 = 0.0;

/// Minimum accepted instance-count override while the override is enabled.
pub const MIN_INSTANCES: f64 = 0.0;
