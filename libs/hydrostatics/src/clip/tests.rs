//! # Clipper Tests

use super::*;
use crate::fixtures::cuboid;
use crate::volume::volume_and_centroid;
use crate::HydrostaticsError;
use approx::assert_relative_eq;
use hull_mesh::topology;

fn block() -> Mesh {
    cuboid(Point3::new(-1.0, -2.0, 0.0), Point3::new(1.0, 2.0, 2.0))
}

fn normal(mesh: &Mesh, tri: [u32; 3]) -> Point3 {
    let [v0, v1, v2] = mesh.corners(tri);
    (v1 - v0).cross(v2 - v0)
}

#[test]
fn test_clip_block_in_half() {
    let clipped = clip_at_draft(&block(), 1.0);

    // 4 kept corners, 8 crossings (4 vertical edges, 4 side diagonals), 1 cap centre
    assert_eq!(clipped.mesh.vertex_count(), 13);
    assert_eq!(clipped.waterline.len(), 8);
    assert!(topology::is_closed(&clipped.mesh));

    let props = volume_and_centroid(&clipped.mesh).unwrap();
    assert_relative_eq!(props.volume, 8.0, epsilon = 1e-9);
    assert_relative_eq!(props.centroid.z, 1.5, epsilon = 1e-9);
    assert!(props.centroid.x.abs() < 1e-9);
    assert!(props.centroid.y.abs() < 1e-9);
}

#[test]
fn test_cap_faces_point_up() {
    let clipped = clip_at_draft(&block(), 1.0);
    let mesh = &clipped.mesh;
    let centre = (mesh.vertex_count() - 1) as u32;

    let cap: Vec<_> = mesh
        .triangles()
        .iter()
        .copied()
        .filter(|tri| tri.contains(&centre))
        .collect();
    assert_eq!(cap.len(), 8);
    for tri in cap {
        assert!(normal(mesh, tri).z < 0.0, "cap face {:?} points down", tri);
    }
}

#[test]
fn test_waterline_vertices_lie_on_plane() {
    let clipped = clip_at_draft(&block(), 0.7);
    for &[a, b] in &clipped.waterline {
        assert_eq!(clipped.mesh.vertex(a).z, 0.7);
        assert_eq!(clipped.mesh.vertex(b).z, 0.7);
    }
}

#[test]
fn test_fully_dry_is_empty() {
    let clipped = clip_at_draft(&block(), 3.0);
    assert!(clipped.is_empty());
    assert_eq!(clipped.mesh.vertex_count(), 0);
    assert!(clipped.waterline.is_empty());
}

#[test]
fn test_fully_submerged_keeps_every_face() {
    let mesh = block();
    for draft in [-1.0, 0.0] {
        let clipped = clip_at_draft(&mesh, draft);
        assert_eq!(clipped.mesh.triangle_count(), mesh.triangle_count());
        assert_eq!(clipped.mesh.vertex_count(), mesh.vertex_count());
        assert!(clipped.waterline.is_empty());

        let props = volume_and_centroid(&clipped.mesh).unwrap();
        assert_relative_eq!(props.volume, 16.0, epsilon = 1e-12);
    }
}

#[test]
fn test_plane_through_bottom_face_is_degenerate() {
    // Only the z = 2 face is submerged, and it lies on the plane
    let clipped = clip_at_draft(&block(), 2.0);

    assert!(clipped.mesh.validate());
    assert_eq!(clipped.mesh.vertex_count(), 5);
    assert_eq!(clipped.mesh.triangle_count(), 6);
    assert!(topology::is_closed(&clipped.mesh));
    assert!(matches!(
        volume_and_centroid(&clipped.mesh),
        Err(HydrostaticsError::DegenerateMesh { .. })
    ));
}

#[test]
fn test_winding_kept_when_odd_vertex_is_not_first() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 2.0);
    let c = Point3::new(0.0, 1.0, 0.0);

    // One submerged vertex in the middle of the tuple
    let one = Mesh::from_parts(vec![a, b, c], vec![[0, 1, 2]]).unwrap();
    let reference = normal(&one, [0, 1, 2]);
    let clipped = clip_at_draft(&one, 1.0);
    assert_eq!(clipped.mesh.triangle_count(), 1);
    assert!(normal(&clipped.mesh, clipped.mesh.triangle(0)).dot(reference) > 0.0);

    // One dry vertex in the middle of the tuple
    let two = Mesh::from_parts(vec![b, a, Point3::new(0.0, 1.0, 2.0)], vec![[0, 1, 2]]).unwrap();
    let reference = normal(&two, [0, 1, 2]);
    let clipped = clip_at_draft(&two, 1.0);
    assert_eq!(clipped.mesh.triangle_count(), 2);
    for &tri in clipped.mesh.triangles() {
        assert!(normal(&clipped.mesh, tri).dot(reference) > 0.0);
    }
}

#[test]
fn test_crossings_are_shared_between_faces() {
    // Two faces sharing the crossing edge 0–2
    let mesh = Mesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(-1.0, 0.0, 0.0),
        ],
        vec![[0, 2, 1], [0, 3, 2]],
    )
    .unwrap();
    let clipped = clip_at_draft(&mesh, 1.0);

    // Submerged apex, three crossings and the cap centre
    assert_eq!(clipped.mesh.vertex_count(), 5);
    assert_eq!(clipped.waterline.len(), 2);
}

#[test]
fn test_vertex_on_plane_is_reused() {
    let mesh = Mesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 2.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let clipped = clip_at_draft(&mesh, 1.0);

    // Vertex 1 sits on the plane: no interpolated copy of it
    assert_eq!(clipped.mesh.vertex_count(), 3);
    assert_eq!(clipped.mesh.triangle_count(), 1);
    assert!(clipped.mesh.vertices().iter().all(|v| v.is_finite()));
    assert_eq!(clipped.waterline.len(), 1);
}
