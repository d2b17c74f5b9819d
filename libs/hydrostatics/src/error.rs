//! # Hydrostatics Errors

use hull_mesh::MeshError;
use thiserror::Error;

/// Errors raised while evaluating buoyancy properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydrostaticsError {
    /// Enclosed volume too small to locate a centroid
    #[error("Degenerate mesh: enclosed volume {volume:e} is below the integration threshold")]
    DegenerateMesh { volume: f64 },

    /// Nothing of the hull lies below the waterplane
    #[error("No submerged region at draft {draft} m")]
    EmptySubmergedRegion { draft: f64 },

    /// Hull construction failed
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// A failure at one heel angle of a curve sweep.
///
/// The rest of the sweep carries on; the failure is reported in its slot.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("heel {heel_deg}°: {source}")]
pub struct HeelError {
    /// Heel angle that failed (degrees)
    pub heel_deg: f64,
    /// What went wrong at that angle
    pub source: HydrostaticsError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_heel_error_message_and_source() {
        let err = HeelError {
            heel_deg: 12.5,
            source: HydrostaticsError::EmptySubmergedRegion { draft: 11.0 },
        };
        assert_eq!(err.to_string(), "heel 12.5°: No submerged region at draft 11 m");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: HydrostaticsError = MeshError::invalid_parameter("nx", "must be >= 2, got 1").into();
        assert_eq!(err.to_string(), "Invalid parameter 'nx': must be >= 2, got 1");
    }
}
