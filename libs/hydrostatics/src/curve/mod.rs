//! # GZ Curve
//!
//! Sweeps heel angles over a fixed base hull and reports the cross-curve
//! lever `KN` and the righting lever `GZ = KN − KG·sin θ` at each angle.
//!
//! Angles are independent and run on the rayon pool. Every worker derives
//! its own rotated and clipped meshes from the shared base.


use config::CurveConfig;
use hull_mesh::{rotate_about_x, Mesh, Point3};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::clip::clip_at_draft;
use crate::error::{HeelError, HydrostaticsError};
use crate::volume::volume_and_centroid;

/// Hydrostatic result at one heel angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GzPoint {
    /// Heel angle (degrees)
    pub heel_deg: f64,
    /// Transverse distance from the heel axis to the centre of buoyancy (m)
    pub kn: f64,
    /// Righting lever (m)
    pub gz: f64,
    /// Submerged volume (m³)
    pub volume: f64,
    /// Centre of buoyancy in the heeled frame
    pub centre_of_buoyancy: Point3,
}

/// A heel sweep, one entry per requested angle in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct GzCurve {
    /// Vertical centre of gravity used for GZ (m)
    pub kg: f64,
    /// Waterplane depth (m)
    pub draft: f64,
    entries: Vec<Result<GzPoint, HeelError>>,
}

impl GzCurve {
    /// All entries in angle order.
    pub fn entries(&self) -> &[Result<GzPoint, HeelError>] {
        &self.entries
    }

    /// Angles that evaluated successfully.
    pub fn points(&self) -> impl Iterator<Item = &GzPoint> {
        self.entries.iter().filter_map(|e| e.as_ref().ok())
    }

    /// Angles that failed.
    pub fn failures(&self) -> impl Iterator<Item = &HeelError> {
        self.entries.iter().filter_map(|e| e.as_ref().err())
    }

    /// Number of angles in the sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no angles were requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest righting lever among the successful angles.
    pub fn max_gz(&self) -> Option<&GzPoint> {
        self.points().max_by(|a, b| a.gz.total_cmp(&b.gz))
    }
}

/// Evaluates one heel angle: rotate, clip at `draft`, integrate.
///
/// # Errors
///
/// [`HydrostaticsError::EmptySubmergedRegion`] when nothing lies below the
/// waterplane, [`HydrostaticsError::DegenerateMesh`] when the submerged
/// volume vanishes.
pub fn evaluate_heel(
    base: &Mesh,
    kg: f64,
    draft: f64,
    heel_deg: f64,
) -> Result<GzPoint, HydrostaticsError> {
    let theta = heel_deg.to_radians();
    let heeled = rotate_about_x(base, theta);
    let clipped = clip_at_draft(&heeled, draft);
    if clipped.is_empty() {
        return Err(HydrostaticsError::EmptySubmergedRegion { draft });
    }

    let props = volume_and_centroid(&clipped.mesh)?;
    let kn = props.centroid.y.abs();
    let gz = kn - kg * theta.sin();

    debug!(heel_deg, volume = props.volume, kn, gz, "evaluated heel angle");
    Ok(GzPoint {
        heel_deg,
        kn,
        gz,
        volume: props.volume,
        centre_of_buoyancy: props.centroid,
    })
}

/// Computes the GZ curve of `base` over the sweep in `conf`.
///
/// Failures are recorded against their angle; the sweep never aborts.
pub fn gz_curve(base: &Mesh, conf: &CurveConfig) -> GzCurve {
    let angles = conf.heel_angles_deg();

    let entries: Vec<_> = angles
        .par_iter()
        .map(|&heel_deg| {
            evaluate_heel(base, conf.kg, conf.draft, heel_deg)
                .map_err(|source| HeelError { heel_deg, source })
        })
        .collect();

    for failure in entries.iter().filter_map(|e| e.as_ref().err()) {
        warn!(heel_deg = failure.heel_deg, error = %failure.source, "heel angle failed");
    }
    debug!(
        angles = entries.len(),
        kg = conf.kg,
        draft = conf.draft,
        "computed GZ curve"
    );

    GzCurve {
        kg: conf.kg,
        draft: conf.draft,
        entries,
    }
}
