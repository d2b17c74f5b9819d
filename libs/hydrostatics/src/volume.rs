//! # Volume and Centroid
//!
//! Divergence-theorem integration over a closed triangle mesh: each face
//! spans a tetrahedron with the origin, and the signed tetrahedra sum to the
//! enclosed volume and its first moment.

use config::constants::MIN_VOLUME;
use glam::DVec3;
use hull_mesh::{Mesh, Point3};
use serde::Serialize;

use crate::error::HydrostaticsError;

/// Enclosed volume and its centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeProperties {
    /// Absolute enclosed volume (m³)
    pub volume: f64,
    /// Signed volume; negative when the faces are wound inward
    pub signed_volume: f64,
    /// Centroid of the enclosed volume (centre of buoyancy when submerged)
    pub centroid: Point3,
}

/// Integrates volume and centroid of a closed mesh.
///
/// # Errors
///
/// [`HydrostaticsError::DegenerateMesh`] when `|V| < MIN_VOLUME`.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{Mesh, Point3};
/// use hydrostatics::volume_and_centroid;
///
/// let tetra = Mesh::from_parts(
///     vec![Point3::ZERO, Point3::X, Point3::Y, Point3::Z],
///     vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
/// )
/// .unwrap();
/// let props = volume_and_centroid(&tetra).unwrap();
/// assert!((props.volume - 1.0 / 6.0).abs() < 1e-12);
/// assert!((props.centroid - Point3::splat(0.25)).length() < 1e-12);
/// ```
pub fn volume_and_centroid(mesh: &Mesh) -> Result<VolumeProperties, HydrostaticsError> {
    let mut signed_volume = 0.0;
    let mut moment = DVec3::ZERO;

    for &tri in mesh.triangles() {
        let [v0, v1, v2] = mesh.corners(tri);
        let vol = v0.dot(v1.cross(v2)) / 6.0;
        signed_volume += vol;
        moment += (v0 + v1 + v2) * (vol / 4.0);
    }

    if signed_volume.abs() < MIN_VOLUME {
        return Err(HydrostaticsError::DegenerateMesh {
            volume: signed_volume,
        });
    }

    Ok(VolumeProperties {
        volume: signed_volume.abs(),
        signed_volume,
        centroid: moment / signed_volume,
    })
}
