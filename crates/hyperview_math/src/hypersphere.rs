//! Sampled 3-sphere (the surface of a 4D ball)
//!
//! Points come from 4D spherical coordinates with two polar angles
//! u, v ∈ [0, π] and one azimuth t ∈ [0, 2π]:
//!
//! ```text
//! x = r·sin u·sin v·cos t
//! y = r·sin u·sin v·sin t
//! z = r·sin u·cos v
//! w = r·cos u
//! ```
//!
//! The grid is N × N × ⌊N/2⌋. Edges join every pair of samples closer than
//! [`Hypersphere4D::LINK_DISTANCE`], which is quadratic in the sample count;
//! callers are expected to cap N.

use std::f32::consts::PI;
use crate::{Vec4, shape::{Shape4D, Wireframe}};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hypersphere4D {
    resolution: usize,
    radius: f32,
}

impl Hypersphere4D {
    pub const RADIUS: f32 = 1.5;
    pub const LINK_DISTANCE: f32 = 0.6;

    /// Hypersphere of radius 1.5 sampled at the given resolution N
    pub fn new(resolution: usize) -> Self {
        Self { resolution, radius: Self::RADIUS }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of samples the grid produces
    pub fn sample_count(&self) -> usize {
        if self.resolution < 2 {
            0
        } else {
            self.resolution * self.resolution * (self.resolution / 2)
        }
    }

    fn sample_vertices(&self) -> Vec<Vec4> {
        let n = self.resolution;
        // u and v divide by n - 1, so a single row has no defined step
        if n < 2 {
            return Vec::new();
        }
        let half = n / 2;
        let polar_step = PI / (n - 1) as f32;
        // With a single azimuth row the angle stays at 0
        let azimuth_step = if half > 1 { 2.0 * PI / (half - 1) as f32 } else { 0.0 };
        let r = self.radius;

        let mut vertices = Vec::with_capacity(self.sample_count());
        for i in 0..n {
            let u = i as f32 * polar_step;
            for j in 0..n {
                let v = j as f32 * polar_step;
                for k in 0..half {
                    let t = k as f32 * azimuth_step;
                    vertices.push(Vec4::new(
                        r * u.sin() * v.sin() * t.cos(),
                        r * u.sin() * v.sin() * t.sin(),
                        r * u.sin() * v.cos(),
                        r * u.cos(),
                    ));
                }
            }
        }
        vertices
    }
}

impl Shape4D for Hypersphere4D {
    fn generate(&self) -> Wireframe {
        let mut wireframe = Wireframe::from_parts(self.sample_vertices(), Vec::new());
        wireframe.connect_pairs(|a, b| a.distance(b) < Self::LINK_DISTANCE);
        wireframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        let wf = Hypersphere4D::new(6).generate();
        assert_eq!(wf.vertex_count(), 6 * 6 * 3);
        assert_eq!(Hypersphere4D::new(6).sample_count(), 108);
    }

    #[test]
    fn test_points_lie_on_sphere() {
        let wf = Hypersphere4D::new(8).generate();
        for v in &wf.vertices {
            assert!((v.length() - Hypersphere4D::RADIUS).abs() < 0.001, "{:?} off the sphere", v);
        }
    }

    #[test]
    fn test_edges_are_short() {
        let wf = Hypersphere4D::new(8).generate();
        assert!(wf.edge_count() > 0);
        for edge in &wf.edges {
            let [a, b] = edge.indices;
            assert!(a < b);
            assert!(wf.vertices[a].distance(wf.vertices[b]) < Hypersphere4D::LINK_DISTANCE);
        }
    }

    #[test]
    fn test_degenerate_resolutions_do_not_panic() {
        assert!(Hypersphere4D::new(0).generate().is_empty());
        assert!(Hypersphere4D::new(1).generate().is_empty());

        // ⌊N/2⌋ = 1: one azimuth row, no division by zero
        for n in [2, 3] {
            let wf = Hypersphere4D::new(n).generate();
            assert_eq!(wf.vertex_count(), n * n);
            assert!(wf.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
            assert!(wf.edges.iter().all(|e| e.is_within(wf.vertex_count())));
        }
    }
}
