//! # Hull Assembly
//!
//! Completes a triangulated starboard half-hull into a closed solid:
//!
//! - **mirror**: reflect across the centerplane `y = 0`
//! - **close_deck**: cap the open deck at `z = 0`
//! - **close_end**: cap an open end section at `x = x_value`
//!
//! Caps follow the mesh's own boundary loops, so every boundary edge is
//! traversed by exactly one cap face in the opposite direction and the result
//! stays consistently oriented.


use config::constants::{CENTERPLANE_TOLERANCE, PLANE_TOLERANCE};
use tracing::debug;

use crate::mesh::{Mesh, MeshBuilder, Point3};
use crate::topology;

// =============================================================================
// MIRROR
// =============================================================================

/// Reflects a half-hull across the centerplane and joins both halves.
///
/// Vertices with `|y| <= CENTERPLANE_TOLERANCE` are shared by both halves;
/// every other vertex gets a port twin with `y` negated, appended after the
/// starboard vertices. Mirrored faces swap their second and third index so
/// the port half keeps an outward winding. Faces lying entirely on the
/// centerplane are dropped together with their mirror image.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{mirror, Mesh, Point3};
///
/// let half = Mesh::from_parts(
///     vec![Point3::ZERO, Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0)],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
/// let whole = mirror(&half);
/// assert_eq!(whole.vertex_count(), 4);
/// assert_eq!(whole.triangles(), &[[0, 1, 2], [0, 3, 1]]);
/// ```
pub fn mirror(mesh: &Mesh) -> Mesh {
    let vertex_count = mesh.vertex_count();
    let mut builder = MeshBuilder::with_capacity(vertex_count * 2, mesh.triangle_count() * 2);

    for &v in mesh.vertices() {
        builder.add_vertex(v);
    }

    let on_centerplane: Vec<bool> = mesh
        .vertices()
        .iter()
        .map(|v| v.y.abs() <= CENTERPLANE_TOLERANCE)
        .collect();

    let twin: Vec<u32> = mesh
        .vertices()
        .iter()
        .enumerate()
        .map(|(index, v)| {
            if on_centerplane[index] {
                index as u32
            } else {
                builder.add_vertex(Point3::new(v.x, -v.y, v.z))
            }
        })
        .collect();

    let kept: Vec<[u32; 3]> = mesh
        .triangles()
        .iter()
        .copied()
        .filter(|tri| !tri.iter().all(|&v| on_centerplane[v as usize]))
        .collect();

    for &[a, b, c] in &kept {
        builder.add_triangle(a, b, c);
    }
    for &[a, b, c] in &kept {
        builder.add_triangle(twin[a as usize], twin[c as usize], twin[b as usize]);
    }

    debug!(
        welded = on_centerplane.iter().filter(|&&w| w).count(),
        dropped = mesh.triangle_count() - kept.len(),
        triangles = builder.triangle_count(),
        "mirrored half-hull"
    );
    builder.build()
}

// =============================================================================
// CAPS
// =============================================================================

/// An axis-aligned plane to cap, with the coordinates used to pick the first
/// ring vertex.
#[derive(Debug, Clone, Copy)]
struct CapPlane {
    axis: usize,
    value: f64,
    order: [usize; 2],
}

impl CapPlane {
    fn contains(&self, p: Point3) -> bool {
        (p[self.axis] - self.value).abs() < PLANE_TOLERANCE
    }

    fn sort_key(&self, p: Point3) -> (f64, f64) {
        (p[self.order[0]], p[self.order[1]])
    }
}

/// Closes the deck opening at `z = 0` with a fan around its centroid.
///
/// A mesh with no open boundary on the deck plane is returned unchanged.
pub fn close_deck(mesh: &Mesh) -> Mesh {
    cap(
        mesh,
        CapPlane {
            axis: 2,
            value: 0.0,
            order: [0, 1],
        },
    )
}

/// Closes an end section at `x = x_value` with a fan around its centroid.
///
/// Knife-edge ends have no open boundary after mirroring and come back
/// unchanged.
pub fn close_end(mesh: &Mesh, x_value: f64) -> Mesh {
    cap(
        mesh,
        CapPlane {
            axis: 0,
            value: x_value,
            order: [2, 1],
        },
    )
}

fn cap(mesh: &Mesh, plane: CapPlane) -> Mesh {
    let loops = topology::boundary_loops(mesh);
    let mut builder = MeshBuilder::from_mesh(mesh);
    let mut caps = 0usize;

    for boundary in loops {
        // Out-of-plane vertices are bridged by a chord
        let mut ring: Vec<u32> = boundary
            .into_iter()
            .filter(|&v| plane.contains(mesh.vertex(v)))
            .collect();
        ring.dedup();
        if ring.len() < 3 {
            continue;
        }

        // Boundary loops run with their owning faces; the cap runs against them
        ring.reverse();
        let start = (0..ring.len())
            .min_by(|&i, &j| {
                let a = plane.sort_key(mesh.vertex(ring[i]));
                let b = plane.sort_key(mesh.vertex(ring[j]));
                a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
            })
            .unwrap_or(0);
        ring.rotate_left(start);

        let mut center: Point3 =
            ring.iter().map(|&v| mesh.vertex(v)).sum::<Point3>() / ring.len() as f64;
        center[plane.axis] = plane.value;
        let c = builder.add_vertex(center);

        let n = ring.len();
        for k in 0..n {
            let (a, b) = (ring[k], ring[(k + 1) % n]);
            if a != b {
                builder.add_triangle(c, a, b);
            }
        }
        caps += 1;
    }

    debug!(
        axis = plane.axis,
        value = plane.value,
        caps,
        triangles = builder.triangle_count(),
        "capped plane"
    );
    builder.build()
}
