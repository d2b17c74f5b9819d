//! # Mesh Data Structure
//!
//! Indexed triangle mesh. A [`Mesh`] is immutable once built; stages that
//! grow geometry do so in a [`MeshBuilder`] and hand the finished value on.

use config::constants::{EPSILON, MAX_VERTICES};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// A point in the hull frame (x longitudinal, y transverse, z down from deck).
pub type Point3 = DVec3;

/// A triangle mesh with vertices and indices.
///
/// Faces are wound so the right-hand-rule normal points out of the solid.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{Mesh, Point3};
///
/// let mesh = Mesh::from_parts(
///     vec![Point3::ZERO, Point3::X, Point3::Y],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<Point3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from raw buffers, checking every face.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidTopology`] when a face references a missing vertex
    /// or repeats a vertex, [`MeshError::TooManyVertices`] past
    /// [`MAX_VERTICES`].
    pub fn from_parts(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        if vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices.len(),
                max: MAX_VERTICES,
            });
        }
        let vertex_count = vertices.len();
        for (index, tri) in triangles.iter().enumerate() {
            if tri.iter().any(|&v| v as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {} {:?} references a vertex outside 0..{}",
                    index, tri, vertex_count
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "face {} {:?} repeats a vertex",
                    index, tri
                )));
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Point3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn corners(&self, tri: [u32; 3]) -> [Point3; 3] {
        [self.vertex(tri[0]), self.vertex(tri[1]), self.vertex(tri[2])]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Point3, Point3) {
        if self.vertices.is_empty() {
            return (Point3::ZERO, Point3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Area-weighted face normal sum.
    ///
    /// Zero (up to rounding) for any closed surface, whatever its shape.
    pub fn vector_area(&self) -> Point3 {
        self.triangles
            .iter()
            .map(|&tri| {
                let [v0, v1, v2] = self.corners(tri);
                (v1 - v0).cross(v2 - v0) * 0.5
            })
            .sum()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - All vertices are finite
    ///
    /// Zero-area faces are allowed: knife-edge hull ends legitimately produce
    /// them in fan caps.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let faces_ok = self.triangles.iter().all(|tri| {
            tri.iter().all(|&v| v < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });

        faces_ok && self.vertices.iter().all(|v| v.is_finite())
    }

    /// Number of faces whose area is below [`EPSILON`].
    pub fn degenerate_face_count(&self) -> usize {
        self.triangles
            .iter()
            .filter(|&&tri| {
                let [v0, v1, v2] = self.corners(tri);
                (v1 - v0).cross(v2 - v0).length() * 0.5 < EPSILON
            })
            .count()
    }

    /// Same faces over moved vertex positions.
    pub(crate) fn with_vertices(&self, vertices: Vec<Point3>) -> Mesh {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        Mesh {
            vertices,
            triangles: self.triangles.clone(),
        }
    }

    /// Consumes the mesh and returns its buffers.
    pub fn into_parts(self) -> (Vec<Point3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Growable vertex/face buffer used while a stage constructs a mesh.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{MeshBuilder, Point3};
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(Point3::ZERO);
/// let b = builder.add_vertex(Point3::X);
/// let c = builder.add_vertex(Point3::Y);
/// builder.add_triangle(a, b, c);
/// let mesh = builder.build();
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Starts from a copy of an existing mesh, for stages that only append.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices.clone(),
            triangles: mesh.triangles.clone(),
        }
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Point3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        debug_assert!(v0 != v1 && v1 != v2 && v0 != v2, "degenerate face {v0} {v1} {v2}");
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Point3 {
        self.vertices[index as usize]
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles added so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Finalizes the buffers into an immutable mesh.
    pub fn build(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            triangles: self.triangles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetrahedron() -> Mesh {
        Mesh::from_parts(
            vec![Point3::ZERO, Point3::X, Point3::Y, Point3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_from_parts_rejects_out_of_range_index() {
        let err = Mesh::from_parts(vec![Point3::ZERO], vec![[0, 1, 2]]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidTopology { .. }));
    }

    #[test]
    fn test_from_parts_rejects_repeated_vertex() {
        let err = Mesh::from_parts(vec![Point3::ZERO, Point3::X], vec![[0, 1, 1]]).unwrap_err();
        assert!(err.to_string().contains("repeats a vertex"));
    }

    #[test]
    fn test_builder_add_vertex_and_triangle() {
        let mut builder = MeshBuilder::with_capacity(3, 1);
        let idx = builder.add_vertex(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        builder.add_vertex(Point3::X);
        builder.add_vertex(Point3::Y);
        builder.add_triangle(0, 1, 2);
        assert_eq!(builder.triangle_count(), 1);
        let mesh = builder.build();
        assert_eq!(mesh.vertex(0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_builder_from_mesh_leaves_source_untouched() {
        let mesh = unit_tetrahedron();
        let mut builder = MeshBuilder::from_mesh(&mesh);
        builder.add_vertex(Point3::ONE);
        assert_eq!(builder.vertex_count(), 5);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = Mesh::from_parts(
            vec![
                Point3::new(-1.0, -2.0, -3.0),
                Point3::new(4.0, 5.0, 6.0),
                Point3::ZERO,
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Point3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vector_area_of_closed_mesh_vanishes() {
        let area = unit_tetrahedron().vector_area();
        assert!(area.length() < 1e-12, "vector area {:?}", area);
    }

    #[test]
    fn test_mesh_validate() {
        assert!(unit_tetrahedron().validate());
        let bad = Mesh {
            vertices: vec![Point3::ZERO, Point3::new(f64::NAN, 0.0, 0.0), Point3::Y],
            triangles: vec![[0, 1, 2]],
        };
        assert!(!bad.validate());
    }

    #[test]
    fn test_degenerate_face_count() {
        let mesh = Mesh::from_parts(
            vec![Point3::ZERO, Point3::X, Point3::X * 2.0, Point3::Y],
            vec![[0, 1, 2], [0, 1, 3]],
        )
        .unwrap();
        assert_eq!(mesh.degenerate_face_count(), 1);
    }
}
