// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Reasons a surface cannot become an [`FfdBody`](crate::FfdBody).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    /// The surface has no vertices.
    #[error("surface mesh is empty")]
    EmptyMesh,
    /// The vertex count is not a multiple of three.
    #[error("surface is not a triangle list: {len} vertices")]
    NotTriangulated {
        /// Number of vertices supplied.
        len: usize,
    },
    /// The surface is flat along at least one axis, so lattice-local
    /// coordinates would divide by zero.
    #[error("surface bounding box is degenerate: span {span:?}")]
    DegenerateExtent {
        /// Bounding-box extent per axis.
        span: [f32; 3],
    },
    /// A position, normal or the body center is NaN or infinite.
    #[error("surface or center contains non-finite values")]
    NonFiniteInput,
}

/// Errors surfaced while loading or validating scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failure while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON syntax or shape mismatch.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A configured body could not be built.
    #[error("body {index}: {source}")]
    Body {
        /// Position of the body in the config's list.
        index: usize,
        /// Underlying construction failure.
        #[source]
        source: BodyError,
    },
}
