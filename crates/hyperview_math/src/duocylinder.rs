//! Duocylinder: the Cartesian product of two circles
//!
//! Point (i, j) of an n × n grid maps to
//! `(r·cos θi, r·sin θi, r·cos θj, r·sin θj)` with θk = 2πk/n. The ridge
//! where both circles meet is a flat torus, so the grid wraps in both
//! directions.

use std::f32::consts::TAU;
use crate::{Vec4, shape::{Shape4D, Wireframe}};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Duocylinder4D {
    segments: usize,
    radius: f32,
}

impl Duocylinder4D {
    pub const RADIUS: f32 = 1.2;

    /// Duocylinder with `segments` samples around each circle
    pub fn new(segments: usize) -> Self {
        Self { segments, radius: Self::RADIUS }
    }

    /// Grid size used for a given quality setting: ⌊quality/2⌋ + 2
    pub fn from_quality(quality: usize) -> Self {
        Self::new(quality / 2 + 2)
    }

    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Shape4D for Duocylinder4D {
    fn generate(&self) -> Wireframe {
        let n = self.segments;
        let r = self.radius;
        let mut vertices = Vec::with_capacity(n * n);
        for i in 0..n {
            let (sin1, cos1) = (i as f32 / n as f32 * TAU).sin_cos();
            for j in 0..n {
                let (sin2, cos2) = (j as f32 / n as f32 * TAU).sin_cos();
                vertices.push(Vec4::new(r * cos1, r * sin1, r * cos2, r * sin2));
            }
        }

        let mut wireframe = Wireframe::from_parts(vertices, Vec::new());
        wireframe.connect_toroidal_grid(n);
        wireframe
    }
}
