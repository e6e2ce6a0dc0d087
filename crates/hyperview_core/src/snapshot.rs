//! Read-only debug and export views of the scene
//!
//! Nothing here feeds back into rendering; snapshots are for inspection,
//! logging and saving the current vertex set.

use serde::{Serialize, Deserialize};
use hyperview_math::{RotationState, Vec4, Wireframe};
use crate::scene::{ProjectionMode, SceneState};
use crate::shapes::ShapeKind;

/// Failure to serialize a snapshot or vertex list
pub type ExportError = ron::Error;

/// Summary of what is currently on screen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub shape: ShapeKind,
    pub vertices: usize,
    pub edges: usize,
    pub projection_mode: ProjectionMode,
    pub rotation: RotationState,
}

impl Snapshot {
    pub fn capture(shape: ShapeKind, wireframe: &Wireframe, state: &SceneState) -> Self {
        Self {
            shape,
            vertices: wireframe.vertex_count(),
            edges: wireframe.edge_count(),
            projection_mode: state.params.projection,
            rotation: state.rotation,
        }
    }

    /// Pretty-printed RON form of the snapshot
    pub fn to_ron(&self) -> Result<String, ExportError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

/// Serialize vertices as a list of `(x, y, z, w)` tuples
pub fn export_vertices(vertices: &[Vec4]) -> Result<String, ExportError> {
    let tuples: Vec<(f32, f32, f32, f32)> = vertices
        .iter()
        .map(|v| (v.x, v.y, v.z, v.w))
        .collect();
    ron::to_string(&tuples)
}

/// Parse the output of [`export_vertices`] back into points
pub fn import_vertices(text: &str) -> Result<Vec<Vec4>, ron::error::SpannedError> {
    let tuples: Vec<(f32, f32, f32, f32)> = ron::from_str(text)?;
    Ok(tuples.into_iter().map(|(x, y, z, w)| Vec4::new(x, y, z, w)).collect())
}
