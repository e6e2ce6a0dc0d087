//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! A [`RotationState`] holds one angle (in degrees) per plane and applies the
//! six plane rotations one after another, always in the order of
//! [`RotationPlane::ALL`]. Each step sees the coordinates produced by the
//! previous one, so the composition is order dependent: rotations in
//! different planes of 4D space do not commute.

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - spins the familiar 3D view around the Z axis
    XY,
    /// XZ plane - spins the familiar 3D view around the Y axis
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - spins the familiar 3D view around the X axis
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes, in the order they are applied by [`RotationState::rotate`]
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The pair of coordinate indices (0 = x .. 3 = w) spanning this plane
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Lowercase axis-pair name (`"xy"`, `"zw"`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }

    /// Look up a plane by its axis-pair name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|plane| plane.name().eq_ignore_ascii_case(name))
    }

    /// Rotate `v` by `degrees` within this plane only
    ///
    /// For the axis pair (i, j): i' = i·cosθ − j·sinθ, j' = i·sinθ + j·cosθ.
    pub fn rotate(self, v: Vec4, degrees: f32) -> Vec4 {
        let (i, j) = self.axes();
        let mut coords = v.to_array();
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (ci, cj) = (coords[i], coords[j]);
        coords[i] = ci * cos - cj * sin;
        coords[j] = ci * sin + cj * cos;
        Vec4::from_array(coords)
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Six rotation angles in degrees, one per coordinate plane
///
/// The state is independent of the shape being shown: it survives shape
/// changes and is only modified by user input, animation or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub xy: f32,
    pub xz: f32,
    pub xw: f32,
    pub yz: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationState {
    /// No rotation in any plane
    pub const IDENTITY: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    /// Create a rotation with a single non-zero plane
    pub fn from_plane_angle(plane: RotationPlane, degrees: f32) -> Self {
        let mut state = Self::IDENTITY;
        *state.angle_mut(plane) = degrees;
        state
    }

    /// Current angle of a plane, in degrees
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YZ => self.yz,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    #[inline]
    fn angle_mut(&mut self, plane: RotationPlane) -> &mut f32 {
        match plane {
            RotationPlane::XY => &mut self.xy,
            RotationPlane::XZ => &mut self.xz,
            RotationPlane::XW => &mut self.xw,
            RotationPlane::YZ => &mut self.yz,
            RotationPlane::YW => &mut self.yw,
            RotationPlane::ZW => &mut self.zw,
        }
    }

    /// Set the angle of a plane, wrapped into `[0, 360)`
    pub fn set_angle(&mut self, plane: RotationPlane, degrees: f32) {
        *self.angle_mut(plane) = wrap_degrees(degrees);
    }

    /// Add `delta` degrees to a plane, wrapped into `[0, 360)`
    pub fn add_angle(&mut self, plane: RotationPlane, delta: f32) {
        let angle = self.angle_mut(plane);
        *angle = wrap_degrees(*angle + delta);
    }

    /// Reset every plane to 0°
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Copy of this state with every angle wrapped into `[0, 360)`
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        for plane in RotationPlane::ALL {
            out.set_angle(plane, self.angle(plane));
        }
        out
    }

    /// Whole-degree value shown next to a plane's slider
    pub fn display_degrees(&self, plane: RotationPlane) -> i32 {
        (self.angle(plane).round() as i32).rem_euclid(360)
    }

    /// Rotate a point through all six planes in fixed order
    ///
    /// The input point is never modified, so the generated shape stays
    /// stable while the angles change.
    pub fn rotate(&self, v: Vec4) -> Vec4 {
        RotationPlane::ALL
            .into_iter()
            .fold(v, |acc, plane| {
                let degrees = self.angle(plane);
                if degrees == 0.0 { acc } else { plane.rotate(acc, degrees) }
            })
    }

    /// Rotate every point of a slice
    pub fn rotate_all(&self, points: &[Vec4]) -> Vec<Vec4> {
        points.iter().map(|&p| self.rotate(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        a.approx_eq(b, EPSILON)
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(RotationState::IDENTITY.rotate(v), v);
    }

    #[test]
    fn test_xy_rotation_90() {
        let r = RotationState::from_plane_angle(RotationPlane::XY, 90.0);

        // Rotating X by 90° in XY plane should give Y
        let rotated = r.rotate(Vec4::X);
        assert!(vec_approx_eq(rotated, Vec4::Y), "Expected Y, got {:?}", rotated);

        // Rotating Y by 90° in XY plane should give -X
        let rotated = r.rotate(Vec4::Y);
        assert!(vec_approx_eq(rotated, -Vec4::X), "Expected -X, got {:?}", rotated);
    }

    #[test]
    fn test_xw_rotation_90() {
        let r = RotationState::from_plane_angle(RotationPlane::XW, 90.0);

        // x -> w and w -> -x
        let rotated = r.rotate(Vec4::X);
        assert!(vec_approx_eq(rotated, Vec4::W), "Expected W, got {:?}", rotated);
        let rotated = r.rotate(Vec4::W);
        assert!(vec_approx_eq(rotated, -Vec4::X), "Expected -X, got {:?}", rotated);
    }

    #[test]
    fn test_zw_rotation_90() {
        let r = RotationState::from_plane_angle(RotationPlane::ZW, 90.0);
        let rotated = r.rotate(Vec4::Z);
        assert!(vec_approx_eq(rotated, Vec4::W), "Expected W, got {:?}", rotated);
    }

    #[test]
    fn test_rotation_is_reversible_per_plane() {
        let v = Vec4::new(0.3, -1.1, 2.0, 0.7);
        for plane in RotationPlane::ALL {
            let forward = RotationState::from_plane_angle(plane, 37.5);
            let backward = RotationState::from_plane_angle(plane, -37.5);
            let round_trip = backward.rotate(forward.rotate(v));
            assert!(vec_approx_eq(round_trip, v), "{} did not reverse: {:?}", plane, round_trip);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let r = RotationState { xy: 12.0, xz: 250.0, xw: 33.3, yz: 90.0, yw: 181.0, zw: 7.0 };
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!((v.length() - r.rotate(v).length()).abs() < EPSILON * 10.0);
    }

    #[test]
    fn test_rotation_order_matters() {
        // XY then XW differs from applying XW first
        let v = Vec4::X;
        let r = RotationState { xy: 90.0, xw: 90.0, ..RotationState::IDENTITY };
        let sequential = r.rotate(v);
        // XY: X -> Y, then XW leaves Y untouched
        assert!(vec_approx_eq(sequential, Vec4::Y), "got {:?}", sequential);

        let reversed = RotationPlane::XY.rotate(RotationPlane::XW.rotate(v, 90.0), 90.0);
        assert!(!vec_approx_eq(sequential, reversed));
    }

    #[test]
    fn test_set_and_add_wrap() {
        let mut r = RotationState::IDENTITY;
        r.set_angle(RotationPlane::YW, 370.0);
        assert!((r.yw - 10.0).abs() < EPSILON);

        r.add_angle(RotationPlane::YW, -20.0);
        assert!((r.yw - 350.0).abs() < EPSILON);

        r.add_angle(RotationPlane::XY, 359.5);
        r.add_angle(RotationPlane::XY, 0.8);
        assert!((r.xy - 0.3).abs() < 0.001);
    }

    #[test]
    fn test_normalized_and_reset() {
        let mut r = RotationState { xy: 725.0, zw: -90.0, ..RotationState::IDENTITY };
        let n = r.normalized();
        assert!((n.xy - 5.0).abs() < EPSILON);
        assert!((n.zw - 270.0).abs() < EPSILON);

        r.reset();
        assert_eq!(r, RotationState::IDENTITY);
    }

    #[test]
    fn test_display_degrees() {
        let r = RotationState { xy: 359.6, xz: 44.4, ..RotationState::IDENTITY };
        assert_eq!(r.display_degrees(RotationPlane::XY), 0);
        assert_eq!(r.display_degrees(RotationPlane::XZ), 44);
    }

    #[test]
    fn test_plane_names() {
        assert_eq!(RotationPlane::from_name("xw"), Some(RotationPlane::XW));
        assert_eq!(RotationPlane::from_name("ZW"), Some(RotationPlane::ZW));
        assert_eq!(RotationPlane::from_name("xq"), None);
        for plane in RotationPlane::ALL {
            assert_eq!(RotationPlane::from_name(plane.name()), Some(plane));
        }
    }
}
