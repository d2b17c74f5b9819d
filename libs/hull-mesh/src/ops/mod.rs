//! # Mesh Operations
//!
//! Stages that turn a sampled surface into a closed hull and move it:
//! triangulation, mirroring, capping and the heeling rotation.

pub mod assemble;
mod transform;
mod triangulate;

pub use assemble::{close_deck, close_end, mirror};
pub use transform::rotate_about_x;
pub use triangulate::triangulate;

use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::surface::{sample_form, HullForm, HullParams, Wigley};

/// Builds the closed Wigley hull for `params`.
///
/// # Errors
///
/// Propagates parameter validation failures from sampling.
pub fn assemble_hull(params: &HullParams) -> Result<Mesh, MeshError> {
    assemble_form(&Wigley::from(params), params)
}

/// Builds a closed hull for any half-breadth form.
///
/// Runs sample → triangulate → mirror → close deck → close bow → close stern.
pub fn assemble_form<F>(form: &F, params: &HullParams) -> Result<Mesh, MeshError>
where
    F: HullForm + ?Sized,
{
    let grid = sample_form(form, params)?;
    let half = triangulate(&grid);
    let hull = mirror(&half);
    let hull = close_deck(&hull);
    let hull = close_end(&hull, params.bow_x());
    let hull = close_end(&hull, params.stern_x());

    debug!(
        vertices = hull.vertex_count(),
        triangles = hull.triangle_count(),
        degenerate = hull.degenerate_face_count(),
        "assembled hull"
    );
    Ok(hull)
}
