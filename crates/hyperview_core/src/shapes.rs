//! Shape selection
//!
//! [`ShapeKind`] names every shape the viewer can show. Each variant
//! resolves to a [`Shape4D`] generator built from the current
//! [`SceneParameters`], so adding a shape is a compile-checked change
//! instead of a string lookup.

use std::str::FromStr;
use serde::{Serialize, Deserialize};
use hyperview_math::{
    Shape4D, Wireframe, Tesseract4D, Hypersphere4D, Simplex4D, Hyperoctahedron4D,
    Hyperdodecahedron4D, Duocylinder4D, TwistedTorus4D,
};
use crate::error::ParseError;
use crate::scene::{SceneChanges, SceneParameters};

/// Identifier of a selectable shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// 4D hypercube, 16 vertices at (±1, ±1, ±1, ±1)
    #[default]
    Tesseract,
    /// Sampled 3-sphere, density set by quality
    Hypersphere,
    /// 5-cell
    Simplex,
    /// 16-cell
    Hyperoctahedron,
    /// 32-vertex golden-ratio stand-in for the 120-cell
    Hyperdodecahedron,
    /// Product of two circles, density set by quality
    Duocylinder,
    /// Torus with a w wobble, set by the custom point count and radius
    Custom,
}

impl ShapeKind {
    /// Every shape, in menu order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Tesseract,
        ShapeKind::Hypersphere,
        ShapeKind::Simplex,
        ShapeKind::Hyperoctahedron,
        ShapeKind::Hyperdodecahedron,
        ShapeKind::Duocylinder,
        ShapeKind::Custom,
    ];

    /// Stable lowercase identifier
    pub const fn id(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "tesseract",
            ShapeKind::Hypersphere => "hypersphere",
            ShapeKind::Simplex => "simplex",
            ShapeKind::Hyperoctahedron => "hyperoctahedron",
            ShapeKind::Hyperdodecahedron => "hyperdodecahedron",
            ShapeKind::Duocylinder => "duocylinder",
            ShapeKind::Custom => "custom",
        }
    }

    /// Build the generator for this shape from the current parameters
    pub fn create_shape(&self, params: &SceneParameters) -> Box<dyn Shape4D> {
        match self {
            ShapeKind::Tesseract => Box::new(Tesseract4D::default()),
            ShapeKind::Hypersphere => Box::new(Hypersphere4D::new(params.quality)),
            ShapeKind::Simplex => Box::new(Simplex4D::default()),
            ShapeKind::Hyperoctahedron => Box::new(Hyperoctahedron4D::default()),
            ShapeKind::Hyperdodecahedron => Box::new(Hyperdodecahedron4D::new()),
            ShapeKind::Duocylinder => Box::new(Duocylinder4D::from_quality(params.quality)),
            ShapeKind::Custom => {
                Box::new(TwistedTorus4D::new(params.custom.points, params.custom.radius))
            }
        }
    }

    /// Generate a fresh wireframe for this shape
    pub fn generate(&self, params: &SceneParameters) -> Wireframe {
        let wireframe = self.create_shape(params).generate();
        log::debug!(
            "Generated {}: {} vertices, {} edges",
            self.id(),
            wireframe.vertex_count(),
            wireframe.edge_count()
        );
        wireframe
    }

    /// True when a change of this kind requires regenerating this shape
    pub fn is_affected_by(&self, changes: SceneChanges) -> bool {
        match self {
            ShapeKind::Hypersphere | ShapeKind::Duocylinder => {
                changes.contains(SceneChanges::QUALITY)
            }
            ShapeKind::Custom => changes.contains(SceneChanges::CUSTOM),
            _ => false,
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownShape(s.to_string()))
    }
}
