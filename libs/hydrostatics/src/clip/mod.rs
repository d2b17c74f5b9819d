//! # Waterplane Clipping
//!
//! Cuts a closed mesh with the horizontal plane `z = draft` and keeps the
//! submerged part (`z >= draft`), closing the cut with a waterplane cap.
//!
//! ## Per-face cases
//!
//! | submerged | action                                             |
//! |-----------|----------------------------------------------------|
//! | 3         | keep the face                                      |
//! | 2         | quadrilateral below the plane, split in two        |
//! | 1         | triangle below the plane                           |
//! | 0         | drop the face                                      |
//!
//! Crossing points are shared between the two faces of the edge they lie
//! on, so a closed input yields a closed output.
//!
//! ## Limitations
//!
//! The cap is a fan around the waterline centroid with vertices ordered by
//! angle. It is exact only for a single star-shaped waterline loop.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use config::constants::approx_zero;
use hull_mesh::{Mesh, MeshBuilder, Point3};
use tracing::debug;

/// The submerged part of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipped {
    /// Submerged faces plus the waterplane cap
    pub mesh: Mesh,
    /// Cut edges lying on the waterplane, as indices into `mesh`
    pub waterline: Vec<[u32; 2]>,
}

impl Clipped {
    /// Returns true if nothing lies below the waterplane.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

/// Incremental output with vertex sharing local to one clip call.
struct Clipper<'a> {
    source: &'a Mesh,
    draft: f64,
    builder: MeshBuilder,
    kept: HashMap<u32, u32>,
    crossings: HashMap<(u32, u32), u32>,
    waterline: Vec<[u32; 2]>,
}

impl<'a> Clipper<'a> {
    fn new(source: &'a Mesh, draft: f64) -> Self {
        Self {
            source,
            draft,
            builder: MeshBuilder::new(),
            kept: HashMap::new(),
            crossings: HashMap::new(),
            waterline: Vec::new(),
        }
    }

    fn is_submerged(&self, index: u32) -> bool {
        self.source.vertex(index).z >= self.draft
    }

    /// Output index of an original vertex.
    fn keep(&mut self, index: u32) -> u32 {
        let source = self.source;
        let builder = &mut self.builder;
        *self
            .kept
            .entry(index)
            .or_insert_with(|| builder.add_vertex(source.vertex(index)))
    }

    /// Output index of the point where edge `wet`–`dry` meets the waterplane.
    fn crossing(&mut self, wet: u32, dry: u32) -> u32 {
        if let Some(&index) = self.crossings.get(&(wet, dry)) {
            return index;
        }

        let a = self.source.vertex(wet);
        let b = self.source.vertex(dry);
        let denom = b.z - a.z;
        let t = if approx_zero(denom) {
            0.0
        } else {
            (self.draft - a.z) / denom
        };

        let index = if t <= 0.0 {
            // Submerged end sits on the plane
            self.keep(wet)
        } else {
            let mut p = a + (b - a) * t;
            p.z = self.draft;
            self.builder.add_vertex(p)
        };
        self.crossings.insert((wet, dry), index);
        index
    }

    fn emit(&mut self, a: u32, b: u32, c: u32) {
        if a != b && b != c && a != c {
            self.builder.add_triangle(a, b, c);
        }
    }

    fn emit_waterline(&mut self, a: u32, b: u32) {
        if a != b {
            self.waterline.push([a, b]);
        }
    }

    fn clip_face(&mut self, tri: [u32; 3]) {
        let wet = tri.map(|v| self.is_submerged(v));
        let count = wet.iter().filter(|&&w| w).count();

        match count {
            0 => {}
            3 => {
                let [a, b, c] = tri.map(|v| self.keep(v));
                self.emit(a, b, c);
            }
            1 => {
                // Rotate so the submerged vertex leads; winding is preserved
                let lead = wet.iter().position(|&w| w).unwrap_or(0);
                let [s, d1, d2] = rotate(tri, lead);

                let s_out = self.keep(s);
                let p1 = self.crossing(s, d1);
                let p2 = self.crossing(s, d2);
                self.emit(s_out, p1, p2);
                self.emit_waterline(p1, p2);
            }
            _ => {
                // Rotate so the dry vertex leads
                let lead = wet.iter().position(|&w| !w).unwrap_or(0);
                let [d, s1, s2] = rotate(tri, lead);

                let s1_out = self.keep(s1);
                let s2_out = self.keep(s2);
                let p1 = self.crossing(s1, d);
                let p2 = self.crossing(s2, d);
                self.emit(p1, s1_out, s2_out);
                self.emit(p1, s2_out, p2);
                self.emit_waterline(p2, p1);
            }
        }
    }

    /// Closes the cut with a fan whose normals point toward `-z`.
    fn cap(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut ring: Vec<u32> = self
            .waterline
            .iter()
            .flatten()
            .copied()
            .filter(|&v| seen.insert(v))
            .collect();
        if ring.len() < 3 {
            return 0;
        }

        let sum: Point3 = ring.iter().map(|&v| self.builder.vertex(v)).sum();
        let center = sum / ring.len() as f64;

        let angle = |p: Point3| (p.y - center.y).atan2(p.x - center.x);
        ring.sort_by(|&a, &b| {
            angle(self.builder.vertex(a)).total_cmp(&angle(self.builder.vertex(b)))
        });

        let c = self
            .builder
            .add_vertex(Point3::new(center.x, center.y, self.draft));
        let n = ring.len();
        for k in 0..n {
            self.emit(c, ring[(k + 1) % n], ring[k]);
        }
        n
    }
}

fn rotate(tri: [u32; 3], lead: usize) -> [u32; 3] {
    [tri[lead], tri[(lead + 1) % 3], tri[(lead + 2) % 3]]
}

/// Clips `mesh` at `draft`, keeping the part with `z >= draft`.
///
/// A vertex exactly on the plane counts as submerged. Fully dry input gives
/// an empty mesh; fully submerged input comes back face for face with no cap.
///
/// # Example
///
/// ```rust
/// use hull_mesh::{assemble_hull, topology, HullParams};
/// use hydrostatics::clip_at_draft;
///
/// let hull = assemble_hull(&HullParams::new(100.0, 20.0, 10.0, 21, 21).unwrap()).unwrap();
/// let clipped = clip_at_draft(&hull, 6.0);
/// assert!(topology::is_closed(&clipped.mesh));
/// assert!(clip_at_draft(&hull, 11.0).is_empty());
/// ```
pub fn clip_at_draft(mesh: &Mesh, draft: f64) -> Clipped {
    let mut clipper = Clipper::new(mesh, draft);
    for &tri in mesh.triangles() {
        clipper.clip_face(tri);
    }
    let cap_faces = clipper.cap();

    debug!(
        draft,
        faces = clipper.builder.triangle_count(),
        waterline = clipper.waterline.len(),
        cap_faces,
        "clipped at waterplane"
    );

    Clipped {
        mesh: clipper.builder.build(),
        waterline: clipper.waterline,
    }
}
