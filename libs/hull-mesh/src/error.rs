//! # Mesh Errors
//!
//! Error types for hull sampling and mesh construction.

use thiserror::Error;

/// Errors that can occur while building hull meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A hull or grid parameter is out of range
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Face indices do not describe a valid triangle mesh
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
