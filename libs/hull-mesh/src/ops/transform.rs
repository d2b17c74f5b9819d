//! # Rigid Transform
//!
//! Heeling rotation about the longitudinal (x) axis.

use glam::DMat3;

use crate::mesh::Mesh;

/// Rotates every vertex by `theta` radians about the x axis.
///
/// `y' = y·cosθ − z·sinθ`, `z' = y·sinθ + z·cosθ`. Faces are copied
/// unchanged; a proper rotation keeps the winding outward.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{rotate_about_x, Mesh, Point3};
///
/// let mesh = Mesh::from_parts(vec![Point3::ZERO, Point3::Y, Point3::Z], vec![[0, 1, 2]]).unwrap();
/// let heeled = rotate_about_x(&mesh, std::f64::consts::FRAC_PI_2);
/// assert!((heeled.vertex(1) - Point3::Z).length() < 1e-12);
/// ```
pub fn rotate_about_x(mesh: &Mesh, theta: f64) -> Mesh {
    let rotation = DMat3::from_rotation_x(theta);
    let vertices = mesh.vertices().iter().map(|&v| rotation * v).collect();
    mesh.with_vertices(vertices)
}
