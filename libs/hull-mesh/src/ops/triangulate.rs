//! # Grid Triangulation
//!
//! Turns a sampled half-hull grid into an open triangle mesh.

use tracing::debug;

use crate::mesh::{Mesh, MeshBuilder};
use crate::surface::Grid;

/// Triangulates a structured grid into a half-hull surface.
///
/// Vertices keep the grid's row-major order. Each cell with corners
/// `v0=(i,j)`, `v1=(i,j+1)`, `v2=(i+1,j+1)`, `v3=(i+1,j)` is split along the
/// `v0–v2` diagonal into `(v0, v2, v1)` and `(v0, v3, v2)`, whose normals
/// point toward `+y` for a starboard half-hull.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{sample, triangulate, HullParams};
///
/// let grid = sample(&HullParams::new(100.0, 20.0, 10.0, 5, 4).unwrap()).unwrap();
/// let mesh = triangulate(&grid);
/// assert_eq!(mesh.vertex_count(), 20);
/// assert_eq!(mesh.triangle_count(), 2 * 3 * 4);
/// ```
pub fn triangulate(grid: &Grid) -> Mesh {
    let (rows, cols) = grid.shape();
    let mut builder = MeshBuilder::with_capacity(rows * cols, 2 * (rows - 1) * (cols - 1));

    for &point in grid.points() {
        builder.add_vertex(point);
    }

    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let v0 = grid.index(i, j) as u32;
            let v1 = grid.index(i, j + 1) as u32;
            let v2 = grid.index(i + 1, j + 1) as u32;
            let v3 = grid.index(i + 1, j) as u32;

            builder.add_triangle(v0, v2, v1);
            builder.add_triangle(v0, v3, v2);
        }
    }

    debug!(
        vertices = builder.vertex_count(),
        triangles = builder.triangle_count(),
        "triangulated half-hull"
    );
    builder.build()
}
