//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// 4D point or direction with x, y, z, w components
/// The w component is the fourth spatial axis, dropped or used for perspective on projection
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a Vec4 from an `[x, y, z, w]` array
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components as an `[x, y, z, w]` array
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z, 3 = w)
    ///
    /// # Panics
    /// Panics if `axis > 3`.
    #[inline]
    pub fn axis(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("Vec4 axis index {} out of range", axis),
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalized(self) -> Self {
        self.normalized_to(1.0)
    }

    /// Rescale to the given Euclidean length
    ///
    /// A zero vector has no direction and stays at the origin.
    #[inline]
    pub fn normalized_to(self, target_length: f32) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (target_length / len)
        } else {
            Self::ZERO
        }
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// True when every component is within `epsilon` of `other`
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec4::X.length(), 1.0);

        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_distance() {
        let a = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let b = Vec4::new(-1.0, 1.0, 1.0, 1.0);
        assert!((a.distance(b) - 2.0).abs() < 0.0001);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec4::new(0.3, -1.2, 2.0, 0.5);
        let b = Vec4::new(-0.7, 0.4, 1.0, -2.5);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_normalized() {
        let n = Vec4::new(3.0, 0.0, 0.0, 0.0).normalized();
        assert!((n.x - 1.0).abs() < 0.0001);
        assert_eq!(n.y, 0.0);
        assert_eq!(n.z, 0.0);
        assert_eq!(n.w, 0.0);
    }

    #[test]
    fn test_normalized_to_target_length() {
        let v = Vec4::new(0.0, 0.0, 0.0, -2.5).normalized_to(1.8);
        assert!((v.length() - 1.8).abs() < 0.0001);
        assert!((v.w + 1.8).abs() < 0.0001);

        let v = Vec4::new(1.0, -1.0, -1.0, 1.0).normalized_to(1.8);
        assert!((v.length() - 1.8).abs() < 0.0001);
        assert!((v.x - 0.9).abs() < 0.0001);
    }

    #[test]
    fn test_normalized_zero_stays_zero() {
        assert_eq!(Vec4::ZERO.normalized_to(1.8), Vec4::ZERO);
    }

    #[test]
    fn test_axis_access() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.axis(0), 1.0);
        assert_eq!(v.axis(3), 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec4::from([1.0, 2.0, 3.0, 4.0]), v);
    }

    #[test]
    fn test_operators() {
        let a = Vec4::new(5.0, 6.0, 7.0, 8.0);
        let b = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a - b, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-b, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_pod_layout() {
        let vertices = [Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::W];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 1.0]);
    }
}
