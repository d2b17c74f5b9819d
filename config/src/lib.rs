//! # Config Crate
//!
//! Centralized constants and run configuration for the hull stability
//! pipeline. Tolerances, default hull dimensions and heel ranges are defined
//! here so the geometry and hydrostatics crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{heel_angles, DEFAULT_HEEL_COUNT, DEFAULT_HEEL_MAX_DEG, PLANE_TOLERANCE};
//!
//! // Vertices closer than PLANE_TOLERANCE to a cap plane belong to the cap
//! let z: f64 = 1e-9;
//! assert!(z.abs() < PLANE_TOLERANCE);
//!
//! // Reference heel sweep: 0..=30 degrees in 1 degree steps
//! let angles = heel_angles(DEFAULT_HEEL_MAX_DEG, DEFAULT_HEEL_COUNT);
//! assert_eq!(angles.len(), 31);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and validation only
//! - **Explicit Configuration**: Run parameters travel in [`run::CurveConfig`],
//!   never through ambient state

pub mod constants;
pub mod run;

pub use run::{ConfigError, CurveConfig};
