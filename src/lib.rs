//! Hyperview - 4D polytope viewer
//!
//! Generates 4D shapes, rotates them in the six coordinate planes and
//! draws depth-sorted wireframe projections onto any
//! [`hyperview_render::Canvas`].
//!
//! The [`Viewer`] is the entry point for hosts; the member crates can be
//! used directly for lower-level access.

pub mod config;
pub mod input;
pub mod systems;
pub mod viewer;

pub use config::{AppConfig, ConfigError};
pub use viewer::{ShapeInfo, Viewer};
