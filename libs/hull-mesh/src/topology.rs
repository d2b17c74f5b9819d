//! # Mesh Topology
//!
//! Half-edge bookkeeping over an indexed triangle list: closure checks and
//! boundary loop extraction.
//!
//! A directed edge `(a, b)` is *paired* when some face also traverses
//! `(b, a)`. In a closed, consistently oriented mesh every directed edge
//! appears exactly once and is paired.

use std::collections::HashMap;

use crate::mesh::Mesh;

/// Directed edges of every face, in face order.
pub fn directed_edges(mesh: &Mesh) -> impl Iterator<Item = (u32, u32)> + '_ {
    mesh.triangles()
        .iter()
        .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
}

/// Counts how many times each directed edge is traversed.
fn edge_counts(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
    let mut counts = HashMap::with_capacity(mesh.triangle_count() * 3);
    for edge in directed_edges(mesh) {
        *counts.entry(edge).or_insert(0) += 1;
    }
    counts
}

/// Returns true if the mesh is a closed, consistently oriented 2-manifold
/// at the index level.
///
/// Every directed edge must occur exactly once and its reverse exactly once.
/// An empty mesh is not closed.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{topology, Mesh, Point3};
///
/// let open = Mesh::from_parts(vec![Point3::ZERO, Point3::X, Point3::Y], vec![[0, 1, 2]]).unwrap();
/// assert!(!topology::is_closed(&open));
/// ```
pub fn is_closed(mesh: &Mesh) -> bool {
    if mesh.is_empty() {
        return false;
    }
    let counts = edge_counts(mesh);
    counts
        .iter()
        .all(|(&(a, b), &n)| n == 1 && counts.get(&(b, a)) == Some(&1))
}

/// Directed edges with no reverse partner, in face order.
pub fn boundary_edges(mesh: &Mesh) -> Vec<(u32, u32)> {
    let counts = edge_counts(mesh);
    directed_edges(mesh)
        .filter(|&(a, b)| !counts.contains_key(&(b, a)))
        .collect()
}

/// Chains the boundary edges into loops.
///
/// Each loop lists vertex indices in the direction the owning faces
/// traverse them; the closing edge from the last vertex back to the first is
/// implied. A loop that cannot be closed (non-manifold boundary) is returned
/// as far as it could be walked.
pub fn boundary_loops(mesh: &Mesh) -> Vec<Vec<u32>> {
    let edges = boundary_edges(mesh);

    let mut outgoing: HashMap<u32, Vec<usize>> = HashMap::new();
    for (index, &(a, _)) in edges.iter().enumerate() {
        outgoing.entry(a).or_default().push(index);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let (first, mut current) = edges[start];
        let mut ring = vec![first];

        while current != first {
            ring.push(current);
            let next = outgoing
                .get(&current)
                .and_then(|candidates| candidates.iter().copied().find(|&e| !used[e]));
            match next {
                Some(e) => {
                    used[e] = true;
                    current = edges[e].1;
                }
                None => break,
            }
        }

        loops.push(ring);
    }

    loops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Point3;

    fn tetrahedron() -> Mesh {
        Mesh::from_parts(
            vec![Point3::ZERO, Point3::X, Point3::Y, Point3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert!(is_closed(&mesh));
        assert!(boundary_edges(&mesh).is_empty());
        assert!(boundary_loops(&mesh).is_empty());
    }

    #[test]
    fn test_empty_mesh_is_not_closed() {
        assert!(!is_closed(&Mesh::new()));
    }

    #[test]
    fn test_open_tetrahedron_has_one_loop() {
        let mut mesh = tetrahedron();
        let (vertices, mut triangles) = mesh.into_parts();
        // Remove the base face [0, 2, 1]
        triangles.remove(0);
        mesh = Mesh::from_parts(vertices, triangles).unwrap();

        assert!(!is_closed(&mesh));
        let loops = boundary_loops(&mesh);
        assert_eq!(loops.len(), 1);

        // The remaining faces traverse the hole opposite to the removed face
        let mut ring = loops[0].clone();
        let start = ring.iter().position(|&v| v == 0).unwrap();
        ring.rotate_left(start);
        assert_eq!(ring, vec![0, 1, 2]);
    }

    #[test]
    fn test_flipped_face_breaks_closure() {
        let (vertices, mut triangles) = tetrahedron().into_parts();
        triangles[3] = [1, 3, 2];
        let mesh = Mesh::from_parts(vertices, triangles).unwrap();
        assert!(!is_closed(&mesh));
    }

    #[test]
    fn test_two_separate_holes() {
        // Two disjoint triangles, each its own loop
        let mesh = Mesh::from_parts(
            vec![
                Point3::ZERO,
                Point3::X,
                Point3::Y,
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(5.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [3, 4, 5]],
        )
        .unwrap();
        let loops = boundary_loops(&mesh);
        assert_eq!(loops, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }
}
