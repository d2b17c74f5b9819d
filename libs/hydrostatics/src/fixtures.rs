//! Shared meshes for unit tests.

use hull_mesh::{Mesh, Point3};

/// Axis-aligned box with outward faces.
pub(crate) fn cuboid(min: Point3, max: Point3) -> Mesh {
    let corners = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        })
        .collect();
    let faces = vec![
        [0, 2, 1], [1, 2, 3], // z = min
        [4, 5, 6], [5, 7, 6], // z = max
        [0, 1, 4], [1, 5, 4], // y = min
        [2, 6, 3], [3, 6, 7], // y = max
        [0, 4, 2], [2, 4, 6], // x = min
        [1, 3, 5], [3, 7, 5], // x = max
    ];
    Mesh::from_parts(corners, faces).unwrap()
}
