//! # Hull Surface Sampling
//!
//! Evaluates a half-breadth function on a structured (Nz × Nx) grid covering
//! `x ∈ [-L/2, L/2]` and `z ∈ [0, T]`. The grid describes the starboard
//! half-hull (`y >= 0`).
//!
//! The Wigley form is provided; other analytic forms implement [`HullForm`].


use config::constants::{
    DEFAULT_BREADTH, DEFAULT_DEPTH, DEFAULT_LENGTH, DEFAULT_NX, DEFAULT_NZ, MAX_VERTICES,
    MIN_GRID_SAMPLES,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Point3;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Hull dimensions and grid resolution.
///
/// Fully determines the sampled surface; there is no hidden state.
///
/// # Example
///
/// ```rust
/// use hull_mesh::HullParams;
///
/// let params = HullParams::new(100.0, 20.0, 10.0, 61, 61).unwrap();
/// assert_eq!(params, HullParams::default());
/// assert!(HullParams::new(100.0, 20.0, 0.0, 61, 61).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullParams {
    /// Length between perpendiculars `L` (m)
    pub length: f64,
    /// Breadth `B` (m)
    pub breadth: f64,
    /// Depth `T` (m); the keel lies at `z = T`
    pub depth: f64,
    /// Samples along the length
    pub nx: usize,
    /// Samples along the depth
    pub nz: usize,
}

impl HullParams {
    /// Creates validated hull parameters.
    pub fn new(length: f64, breadth: f64, depth: f64, nx: usize, nz: usize) -> Result<Self, MeshError> {
        let params = Self {
            length,
            breadth,
            depth,
            nx,
            nz,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every parameter, for values built with struct literal syntax.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for non-positive or non-finite
    /// dimensions and for fewer than two samples on either axis,
    /// [`MeshError::TooManyVertices`] when the mirrored grid would exceed
    /// [`MAX_VERTICES`].
    pub fn validate(&self) -> Result<(), MeshError> {
        for (name, value) in [
            ("length", self.length),
            ("breadth", self.breadth),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be positive and finite, got {}", value),
                ));
            }
        }
        for (name, value) in [("nx", self.nx), ("nz", self.nz)] {
            if value < MIN_GRID_SAMPLES {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be >= {}, got {}", MIN_GRID_SAMPLES, value),
                ));
            }
        }
        let count = self.nx.saturating_mul(self.nz).saturating_mul(2);
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }
        Ok(())
    }

    /// Longitudinal position of the bow end, `-L/2`.
    #[inline]
    pub fn bow_x(&self) -> f64 {
        -self.length / 2.0
    }

    /// Longitudinal position of the stern end, `+L/2`.
    #[inline]
    pub fn stern_x(&self) -> f64 {
        self.length / 2.0
    }
}

impl Default for HullParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            breadth: DEFAULT_BREADTH,
            depth: DEFAULT_DEPTH,
            nx: DEFAULT_NX,
            nz: DEFAULT_NZ,
        }
    }
}

// =============================================================================
// HULL FORMS
// =============================================================================

/// An analytic hull shape given by its half-breadth.
pub trait HullForm {
    /// Half-breadth `y >= 0` at longitudinal position `x` and depth `z`.
    fn half_breadth(&self, x: f64, z: f64) -> f64;
}

/// The Wigley parabolic hull.
///
/// `y(x, z) = (B/2)·(1 − (2x/L)²)·(1 − (z/T)²)`, zero outside the hull domain.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{HullForm, HullParams, Wigley};
///
/// let wigley = Wigley::from(&HullParams::default());
/// assert_eq!(wigley.half_breadth(0.0, 0.0), 10.0);
/// assert_eq!(wigley.half_breadth(50.0, 0.0), 0.0);
/// assert_eq!(wigley.half_breadth(0.0, 10.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wigley {
    length: f64,
    breadth: f64,
    depth: f64,
}

impl Wigley {
    /// Creates a Wigley form with the given principal dimensions.
    pub fn new(length: f64, breadth: f64, depth: f64) -> Self {
        Self {
            length,
            breadth,
            depth,
        }
    }
}

impl From<&HullParams> for Wigley {
    fn from(params: &HullParams) -> Self {
        Self::new(params.length, params.breadth, params.depth)
    }
}

impl HullForm for Wigley {
    fn half_breadth(&self, x: f64, z: f64) -> f64 {
        if x.abs() > self.length / 2.0 || z < 0.0 || z > self.depth {
            return 0.0;
        }

        let x_term = 1.0 - (2.0 * x / self.length).powi(2);
        let z_term = 1.0 - (z / self.depth).powi(2);

        (self.breadth / 2.0 * x_term * z_term).max(0.0)
    }
}

// =============================================================================
// GRID
// =============================================================================

/// Row-major (Nz × Nx) array of surface samples.
///
/// Row `i` is the waterline at depth `z_i`, column `j` the station at `x_j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    points: Vec<Point3>,
}

impl Grid {
    /// Wraps row-major samples.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] if the buffer length disagrees with the
    /// shape or either axis has fewer than two samples.
    pub fn new(rows: usize, cols: usize, points: Vec<Point3>) -> Result<Self, MeshError> {
        if rows < MIN_GRID_SAMPLES || cols < MIN_GRID_SAMPLES {
            return Err(MeshError::invalid_parameter(
                "shape",
                format!("grid needs at least 2x2 samples, got {}x{}", rows, cols),
            ));
        }
        if points.len() != rows * cols {
            return Err(MeshError::invalid_parameter(
                "points",
                format!("expected {} samples for {}x{}, got {}", rows * cols, rows, cols, points.len()),
            ));
        }
        Ok(Self { rows, cols, points })
    }

    /// Number of rows (Nz).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (Nx).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major linear index of sample (i, j).
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Sample at row `i`, column `j`.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        self.points[self.index(i, j)]
    }

    /// All samples, row-major.
    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Samples the Wigley hull described by `params`.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{sample, HullParams};
///
/// let grid = sample(&HullParams::new(100.0, 20.0, 10.0, 5, 3).unwrap()).unwrap();
/// assert_eq!(grid.shape(), (3, 5));
/// assert_eq!(grid.point(0, 2).y, 10.0);
/// ```
pub fn sample(params: &HullParams) -> Result<Grid, MeshError> {
    sample_form(&Wigley::from(params), params)
}

/// Samples any hull form on the grid described by `params`.
///
/// Stations are `x_j = -L/2 + L·j/(Nx−1)` and waterlines `z_i = T·i/(Nz−1)`,
/// so the first and last samples land exactly on the domain bounds.
pub fn sample_form<F>(form: &F, params: &HullParams) -> Result<Grid, MeshError>
where
    F: HullForm + ?Sized,
{
    params.validate()?;

    let HullParams {
        length,
        depth,
        nx,
        nz,
        ..
    } = *params;
    let half = length / 2.0;
    let x_span = (nx - 1) as f64;
    let z_span = (nz - 1) as f64;

    let mut points = Vec::with_capacity(nx * nz);
    for i in 0..nz {
        let z = depth * i as f64 / z_span;
        for j in 0..nx {
            let x = -half + length * j as f64 / x_span;
            points.push(Point3::new(x, form.half_breadth(x, z), z));
        }
    }

    debug!(nx, nz, "sampled hull surface");
    Grid::new(nz, nx, points)
}
