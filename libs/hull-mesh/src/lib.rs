//! # Hull Mesh
//!
//! Builds closed triangle meshes of ship hulls described by an analytic
//! half-breadth function, and heels them about the longitudinal axis.
//!
//! ## Architecture
//!
//! ```text
//! HullParams → surface::sample → Grid
//!            → ops::triangulate → half-hull Mesh
//!            → ops::mirror → ops::close_deck → ops::close_end (×2)
//!            → closed base Mesh
//! ```
//!
//! ## Coordinate System
//!
//! - `x`: longitudinal, `-L/2` (bow) to `+L/2` (stern)
//! - `y`: transverse, half-breadth on the starboard half is `>= 0`
//! - `z`: vertical, `0` at the deck plane, increasing toward the keel at `T`
//!
//! ## Usage
//!
//! ```rust
//! use hull_mesh::{assemble_hull, topology, HullParams};
//!
//! let params = HullParams::new(100.0, 20.0, 10.0, 13, 7).unwrap();
//! let hull = assemble_hull(&params).unwrap();
//! assert!(topology::is_closed(&hull));
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod surface;
pub mod topology;

pub use error::MeshError;
pub use mesh::{Mesh, MeshBuilder, Point3};
pub use ops::{assemble_form, assemble_hull, close_deck, close_end, mirror, rotate_about_x, triangulate};
pub use surface::{sample, sample_form, Grid, HullForm, HullParams, Wigley};
