//! Scene-level types for hyperview
//!
//! This crate sits between the pure geometry of `hyperview_math` and the
//! renderer:
//!
//! - [`ShapeKind`] - Selectable shapes, each resolving to a generator
//! - [`ShapeDescriptor`] - Static names, descriptions and nominal stats
//! - [`SceneParameters`] - Projection and generation settings
//! - [`SceneState`] - Rotation plus parameters, passed to every frame
//! - [`Snapshot`] - Read-only debug/export view

mod error;
mod scene;
mod shapes;
mod descriptor;
mod snapshot;

pub use error::ParseError;
pub use scene::{
    CustomShapeParams, ProjectionMode, SceneChanges, SceneParameter, SceneParameters, SceneState,
    MAX_CUSTOM_POINTS, MIN_CUSTOM_RADIUS, MIN_DISTANCE, MIN_SCALE, QUALITY_LIMIT,
};
pub use shapes::ShapeKind;
pub use descriptor::{list_shapes, NominalStats, ShapeDescriptor, StatValue};
pub use snapshot::{export_vertices, import_vertices, ExportError, Snapshot};

// Re-export commonly used types from hyperview_math for convenience
pub use hyperview_math::{
    compute_stats, Edge, RotationPlane, RotationState, Shape4D, Vec2, Vec3, Vec4, Wireframe,
    WireframeStats,
};
