//! Scene parameters and state
//!
//! Everything a frame needs besides the wireframe itself: the projection
//! settings, the generation parameters for parametric shapes, and the
//! current rotation. The state is an explicit value that callers pass to
//! each pipeline stage; there is no process-wide scene.

use std::str::FromStr;
use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use hyperview_math::RotationState;
use crate::error::ParseError;

/// Smallest viewer distance accepted for the perspective 4D→3D projection
pub const MIN_DISTANCE: f32 = 0.1;
/// Smallest pixel scale accepted for the 3D→2D projection
pub const MIN_SCALE: f32 = 1.0;
/// Hard upper bound for the quality setting (hypersphere cost grows as N⁶)
pub const QUALITY_LIMIT: usize = 50;
/// Upper bound for the custom shape's grid size
pub const MAX_CUSTOM_POINTS: usize = 200;
/// Smallest radius accepted for the custom shape
pub const MIN_CUSTOM_RADIUS: f32 = 0.1;

/// How the w axis is removed when going from 4D to 3D
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Drop w, keep (x, y, z)
    #[default]
    Orthogonal,
    /// Scale (x, y, z) by distance / (distance + w)
    Perspective,
}

impl ProjectionMode {
    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Orthogonal => "orthogonal",
            ProjectionMode::Perspective => "perspective",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthogonal => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthogonal,
        }
    }
}

impl std::fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "orthogonal" => Ok(ProjectionMode::Orthogonal),
            "perspective" => Ok(ProjectionMode::Perspective),
            _ => Err(ParseError::UnknownProjection(s.to_string())),
        }
    }
}

/// Parameters of the user-defined shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomShapeParams {
    /// Grid size along each of the two angles
    pub points: usize,
    /// Base radius; the torus radii and wobble scale with it
    pub radius: f32,
}

impl Default for CustomShapeParams {
    fn default() -> Self {
        Self { points: 12, radius: 1.0 }
    }
}

bitflags! {
    /// What a parameter change invalidates
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SceneChanges: u8 {
        /// Nothing changed
        const NONE = 0;
        /// Only the current frame needs redrawing
        const FRAME = 1 << 0;
        /// Parametric shapes must be regenerated
        const QUALITY = 1 << 1;
        /// The custom shape must be regenerated
        const CUSTOM = 1 << 2;
    }
}

/// A single control-surface change
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneParameter {
    Projection(ProjectionMode),
    Distance(f32),
    Scale(f32),
    Quality(usize),
    CustomPoints(usize),
    CustomRadius(f32),
}

/// Projection and generation settings read every frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneParameters {
    pub projection: ProjectionMode,
    /// Viewer distance along w, only used by perspective projection
    pub distance: f32,
    /// Pixels per unit for the final 2D projection
    pub scale: f32,
    /// Sampling density N for parametric shapes
    pub quality: usize,
    pub custom: CustomShapeParams,
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Orthogonal,
            distance: 5.0,
            scale: 100.0,
            quality: 20,
            custom: CustomShapeParams::default(),
        }
    }
}

impl SceneParameters {
    /// Copy with every field clamped into its safe range
    pub fn sanitized(mut self) -> Self {
        self.distance = self.distance.max(MIN_DISTANCE);
        self.scale = self.scale.max(MIN_SCALE);
        self.quality = self.quality.clamp(1, QUALITY_LIMIT);
        self.custom.points = self.custom.points.min(MAX_CUSTOM_POINTS);
        self.custom.radius = self.custom.radius.max(MIN_CUSTOM_RADIUS);
        self
    }

    /// Apply one change, clamping it, and report what it invalidates
    ///
    /// Non-finite values are ignored.
    pub fn apply(&mut self, parameter: SceneParameter) -> SceneChanges {
        match parameter {
            SceneParameter::Projection(mode) => {
                self.projection = mode;
                SceneChanges::FRAME
            }
            SceneParameter::Distance(d) if d.is_finite() => {
                self.distance = d.max(MIN_DISTANCE);
                SceneChanges::FRAME
            }
            SceneParameter::Scale(s) if s.is_finite() => {
                self.scale = s.max(MIN_SCALE);
                SceneChanges::FRAME
            }
            SceneParameter::Quality(q) => {
                self.quality = q.clamp(1, QUALITY_LIMIT);
                SceneChanges::FRAME | SceneChanges::QUALITY
            }
            SceneParameter::CustomPoints(p) => {
                self.custom.points = p.min(MAX_CUSTOM_POINTS);
                SceneChanges::FRAME | SceneChanges::CUSTOM
            }
            SceneParameter::CustomRadius(r) if r.is_finite() => {
                self.custom.radius = r.max(MIN_CUSTOM_RADIUS);
                SceneChanges::FRAME | SceneChanges::CUSTOM
            }
            _ => {
                log::warn!("Ignoring non-finite scene parameter {:?}", parameter);
                SceneChanges::NONE
            }
        }
    }
}

/// Rotation plus parameters: the full per-frame input besides geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub rotation: RotationState,
    pub params: SceneParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = SceneParameters::default();
        assert_eq!(p.projection, ProjectionMode::Orthogonal);
        assert_eq!(p.distance, 5.0);
        assert_eq!(p.scale, 100.0);
        assert_eq!(p.quality, 20);
        assert_eq!(p.custom.points, 12);
    }

    #[test]
    fn test_distance_clamped() {
        let mut p = SceneParameters::default();
        let changes = p.apply(SceneParameter::Distance(-3.0));
        assert_eq!(p.distance, MIN_DISTANCE);
        assert_eq!(changes, SceneChanges::FRAME);
    }

    #[test]
    fn test_quality_clamped_and_flags_regeneration() {
        let mut p = SceneParameters::default();
        let changes = p.apply(SceneParameter::Quality(10_000));
        assert_eq!(p.quality, QUALITY_LIMIT);
        assert!(changes.contains(SceneChanges::QUALITY));

        p.apply(SceneParameter::Quality(0));
        assert_eq!(p.quality, 1);
    }

    #[test]
    fn test_custom_changes() {
        let mut p = SceneParameters::default();
        let changes = p.apply(SceneParameter::CustomRadius(0.0));
        assert_eq!(p.custom.radius, MIN_CUSTOM_RADIUS);
        assert!(changes.contains(SceneChanges::CUSTOM));
        assert!(!changes.contains(SceneChanges::QUALITY));

        p.apply(SceneParameter::CustomPoints(5_000));
        assert_eq!(p.custom.points, MAX_CUSTOM_POINTS);
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut p = SceneParameters::default();
        let changes = p.apply(SceneParameter::Scale(f32::NAN));
        assert_eq!(changes, SceneChanges::NONE);
        assert_eq!(p.scale, 100.0);
    }

    #[test]
    fn test_sanitized() {
        let p = SceneParameters { distance: 0.0, scale: -5.0, quality: 0, ..Default::default() }.sanitized();
        assert_eq!(p.distance, MIN_DISTANCE);
        assert_eq!(p.scale, MIN_SCALE);
        assert_eq!(p.quality, 1);
    }

    #[test]
    fn test_projection_parse_and_toggle() {
        assert_eq!("Perspective".parse::<ProjectionMode>(), Ok(ProjectionMode::Perspective));
        assert!("isometric".parse::<ProjectionMode>().is_err());
        assert_eq!(ProjectionMode::Orthogonal.toggled(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_scene_state_serialization() {
        let state = SceneState::default();
        let text = ron::to_string(&state).unwrap();
        let back: SceneState = ron::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}
