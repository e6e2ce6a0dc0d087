//! 4D → 3D → 2D projection
//!
//! The first stage removes w, either by dropping it or by a perspective
//! divide along w. The second stage applies a fixed-focal-length
//! perspective along z and maps the result to pixels around the canvas
//! center.

use hyperview_core::{ProjectionMode, SceneParameters, MIN_DISTANCE};
use hyperview_math::{Vec2, Vec3, Vec4};

/// Focal length of the 3D → 2D stage, in the same units as z·[`DEPTH_SCALE`]
pub const FOCAL_LENGTH: f32 = 400.0;
/// Multiplier applied to z before the 3D → 2D perspective divide
pub const DEPTH_SCALE: f32 = 50.0;

/// Projects rotated 4D points onto a canvas of a given size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub mode: ProjectionMode,
    /// Viewer distance along w, never below [`MIN_DISTANCE`]
    pub distance: f32,
    /// Pixels per unit
    pub scale: f32,
    /// Canvas center in pixels
    pub center: Vec2,
}

impl Projector {
    pub fn new(params: &SceneParameters, width: f32, height: f32) -> Self {
        Self {
            mode: params.projection,
            distance: params.distance.max(MIN_DISTANCE),
            scale: params.scale,
            center: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Remove the w axis
    ///
    /// In perspective mode a point with `w == -distance` has no image and
    /// yields non-finite coordinates.
    #[inline]
    pub fn project_to_3d(&self, p: Vec4) -> Vec3 {
        match self.mode {
            ProjectionMode::Orthogonal => p.xyz(),
            ProjectionMode::Perspective => {
                let factor = self.distance / (self.distance + p.w);
                p.xyz().scaled(factor)
            }
        }
    }

    /// Map a 3D point to canvas pixels
    #[inline]
    pub fn project_to_2d(&self, p: Vec3) -> Vec2 {
        let factor = FOCAL_LENGTH / (FOCAL_LENGTH + p.z * DEPTH_SCALE);
        Vec2::new(
            self.center.x + p.x * self.scale * factor,
            self.center.y + p.y * self.scale * factor,
        )
    }

    /// Both stages at once
    #[inline]
    pub fn project(&self, p: Vec4) -> Vec2 {
        self.project_to_2d(self.project_to_3d(p))
    }

    pub fn project_all(&self, points: &[Vec4]) -> Vec<Vec2> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn projector(mode: ProjectionMode, distance: f32) -> Projector {
        let params = SceneParameters { projection: mode, distance, ..Default::default() };
        Projector::new(&params, 800.0, 600.0)
    }

    #[test]
    fn test_orthogonal_drops_w() {
        let p = projector(ProjectionMode::Orthogonal, 5.0);
        let v = p.project_to_3d(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_perspective_divides_by_w() {
        let p = projector(ProjectionMode::Perspective, 5.0);
        let v = p.project_to_3d(Vec4::new(1.0, 1.0, 1.0, 5.0));
        assert!(approx_eq(v.x, 0.5));
        assert!(approx_eq(v.z, 0.5));

        // Nearer along w means larger
        let v = p.project_to_3d(Vec4::new(1.0, 0.0, 0.0, -2.5));
        assert!(approx_eq(v.x, 2.0));
    }

    #[test]
    fn test_perspective_origin_is_fixed() {
        let p = projector(ProjectionMode::Perspective, 5.0);
        assert_eq!(p.project_to_3d(Vec4::ZERO), Vec3::ZERO);
        assert_eq!(p.project(Vec4::ZERO), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_distance_clamped() {
        let p = projector(ProjectionMode::Perspective, 0.0);
        assert_eq!(p.distance, MIN_DISTANCE);
        assert!(p.project_to_3d(Vec4::new(1.0, 0.0, 0.0, 0.0)).x.is_finite());
    }

    #[test]
    fn test_2d_stage() {
        let p = projector(ProjectionMode::Orthogonal, 5.0);
        let at_zero = p.project_to_2d(Vec3::new(1.0, -1.0, 0.0));
        assert!(approx_eq(at_zero.x, 500.0));
        assert!(approx_eq(at_zero.y, 200.0));

        // z = 8 halves the size: 400 / (400 + 400)
        let far = p.project_to_2d(Vec3::new(1.0, 0.0, 8.0));
        assert!(approx_eq(far.x, 450.0));
    }

    #[test]
    fn test_degenerate_perspective_is_not_finite() {
        let p = projector(ProjectionMode::Perspective, 2.0);
        let v = p.project(Vec4::new(1.0, 0.0, 0.0, -2.0));
        assert!(!v.x.is_finite() || !v.y.is_finite());
    }
}
