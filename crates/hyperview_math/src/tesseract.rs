//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! Two vertices share an edge exactly when they differ in one coordinate.

use crate::{Vec4, shape::{Shape4D, Wireframe}};

/// The 4D hypercube
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tesseract4D {
    /// Half the side length
    half_size: f32,
}

impl Default for Tesseract4D {
    /// Side length 2, vertices at ±1
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Tesseract4D {
    /// Tesseract centered at the origin with side length `size`
    pub fn new(size: f32) -> Self {
        Self { half_size: size * 0.5 }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.half_size
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    /// The 16 corner vertices
    ///
    /// Vertex `i` takes `+h` on an axis when the matching bit of `i` is set:
    /// bit 3 is x and bit 0 is w, so w alternates fastest.
    pub fn vertices(&self) -> [Vec4; 16] {
        let h = self.half_size;
        let sign = |i: usize, bit: usize| if i & (1 << bit) != 0 { h } else { -h };
        std::array::from_fn(|i| Vec4::new(sign(i, 3), sign(i, 2), sign(i, 1), sign(i, 0)))
    }
}

/// Number of coordinates in which two points differ, compared exactly
fn differing_axes(a: Vec4, b: Vec4) -> usize {
    (0..4).filter(|&k| a.axis(k) != b.axis(k)).count()
}

impl Shape4D for Tesseract4D {
    fn generate(&self) -> Wireframe {
        let mut wireframe = Wireframe::from_parts(self.vertices().to_vec(), Vec::with_capacity(32));
        wireframe.connect_pairs(|a, b| differing_axes(a, b) == 1);
        wireframe
    }
}
