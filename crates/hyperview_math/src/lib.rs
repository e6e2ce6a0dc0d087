//! 4D Mathematics Library
//!
//! This crate provides 4D vectors, plane rotations, and wireframe shape
//! generators for hyperview.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`], [`Vec2`] - projected points
//! - [`RotationState`] - six plane angles applied in a fixed order
//!
//! ## Shape Types
//!
//! - [`Shape4D`] - Capability shared by all generators
//! - [`Wireframe`] - Generated vertices plus [`Edge`] connectivity
//! - [`Tesseract4D`], [`Hypersphere4D`], [`Simplex4D`], [`Hyperoctahedron4D`],
//!   [`Hyperdodecahedron4D`], [`Duocylinder4D`], [`TwistedTorus4D`]

mod vec4;
mod vec3;
pub mod rotation;
pub mod shape;
pub mod tesseract;
pub mod hypersphere;
pub mod simplex;
pub mod hyperoctahedron;
pub mod hyperdodecahedron;
pub mod duocylinder;
pub mod twisted_torus;

pub use vec4::Vec4;
pub use vec3::{Vec3, Vec2};
pub use rotation::{RotationPlane, RotationState, wrap_degrees};
pub use shape::{Edge, Shape4D, Wireframe, WireframeStats, compute_stats};
pub use tesseract::Tesseract4D;
pub use hypersphere::Hypersphere4D;
pub use simplex::Simplex4D;
pub use hyperoctahedron::Hyperoctahedron4D;
pub use hyperdodecahedron::Hyperdodecahedron4D;
pub use duocylinder::Duocylinder4D;
pub use twisted_torus::TwistedTorus4D;
