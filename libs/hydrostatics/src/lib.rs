//! # Hydrostatics
//!
//! Submerged volume, centre of buoyancy and righting-lever (GZ) curves for
//! closed hull meshes built by [`hull_mesh`].
//!
//! ## Pipeline (per heel angle)
//!
//! ```text
//! base Mesh → rotate_about_x(θ) → clip_at_draft(T) → volume_and_centroid
//!           → KN = |B.y|, GZ = KN − KG·sin θ
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::CurveConfig;
//! use hull_mesh::{assemble_hull, HullParams};
//! use hydrostatics::gz_curve;
//!
//! let hull = assemble_hull(&HullParams::new(100.0, 20.0, 10.0, 21, 21).unwrap()).unwrap();
//! let conf = CurveConfig::new(2.0, 6.0, 30.0, 4).unwrap();
//! let curve = gz_curve(&hull, &conf);
//! assert_eq!(curve.len(), 4);
//! assert!(curve.failures().next().is_none());
//! ```

pub mod clip;
pub mod curve;
pub mod error;
pub mod volume;

#[cfg(test)]
mod fixtures;

pub use clip::{clip_at_draft, Clipped};
pub use curve::{evaluate_heel, gz_curve, GzCurve, GzPoint};
pub use error::{HeelError, HydrostaticsError};
pub use volume::{volume_and_centroid, VolumeProperties};
