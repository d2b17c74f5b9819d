//! # Configuration Constants
//!
//! Centralized constants for the hull stability pipeline. All geometric
//! tolerances, default hull parameters and heel sweep defaults are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Hull**: Default Wigley hull dimensions and grid resolution
//! - **Heel**: Default heel sweep
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance below which a vertex is considered to lie on a cap plane.
///
/// Used by the deck (`z = 0`) and end (`x = ±L/2`) closing operations to
/// select the vertices they triangulate.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_TOLERANCE;
///
/// let deck_z = 3e-7;
/// assert!(f64::abs(deck_z) < PLANE_TOLERANCE);
/// ```
pub const PLANE_TOLERANCE: f64 = 1e-6;

/// Half-breadth below which a vertex lies on the centerplane (`y = 0`).
///
/// Centerplane vertices are shared between the two hull halves when the
/// half-hull is mirrored, which is what closes the keel and the stem.
pub const CENTERPLANE_TOLERANCE: f64 = 1e-9;

/// Smallest enclosed volume accepted by the volume integrator.
///
/// A closed mesh whose signed volume magnitude falls below this value is
/// reported as degenerate (open, collapsed or empty).
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_VOLUME;
///
/// let computed = 0.0_f64;
/// assert!(computed.abs() < MIN_VOLUME);
/// ```
pub const MIN_VOLUME: f64 = 1e-12;

// =============================================================================
// HULL CONSTANTS
// =============================================================================

/// Default hull length between perpendiculars `L` (m).
pub const DEFAULT_LENGTH: f64 = 100.0;

/// Default hull breadth `B` (m).
pub const DEFAULT_BREADTH: f64 = 20.0;

/// Default hull depth `T` (m), the keel lies at `z = T`.
pub const DEFAULT_DEPTH: f64 = 10.0;

/// Default number of longitudinal surface samples.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_NX, MIN_GRID_SAMPLES};
///
/// assert!(DEFAULT_NX >= MIN_GRID_SAMPLES);
/// ```
pub const DEFAULT_NX: usize = 61;

/// Default number of vertical surface samples.
pub const DEFAULT_NZ: usize = 61;

/// Minimum samples along either grid axis (one cell needs two rows/columns).
pub const MIN_GRID_SAMPLES: usize = 2;

// =============================================================================
// HEEL CONSTANTS
// =============================================================================

/// Default largest heel angle of a GZ sweep, in degrees.
pub const DEFAULT_HEEL_MAX_DEG: f64 = 30.0;

/// Default number of heel angles in a GZ sweep (0° included).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_HEEL_COUNT, DEFAULT_HEEL_MAX_DEG};
///
/// // 1 degree steps
/// let step = DEFAULT_HEEL_MAX_DEG / (DEFAULT_HEEL_COUNT - 1) as f64;
/// assert_eq!(step, 1.0);
/// ```
pub const DEFAULT_HEEL_COUNT: usize = 31;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely fine grids.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 61 * 61 * 2;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns `count` evenly spaced heel angles from 0 to `max_deg` inclusive.
///
/// A single angle yields `[0.0]`; zero angles yield an empty list.
///
/// # Example
///
/// ```rust
/// use config::constants::heel_angles;
///
/// assert_eq!(heel_angles(30.0, 4), vec![0.0, 10.0, 20.0, 30.0]);
/// assert_eq!(heel_angles(30.0, 1), vec![0.0]);
/// ```
pub fn heel_angles(max_deg: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| max_deg * i as f64 / last)
                .collect()
        }
    }
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
