//! 5-cell (4-simplex) geometry
//!
//! The simplest regular 4D polytope: 5 vertices, 10 edges, 10 triangular
//! faces and 5 tetrahedral cells. Every pair of vertices is adjacent.

use crate::{Vec4, shape::{Shape4D, Wireframe}};

/// Unscaled seed vertices, all of non-zero length
const SEED_VERTICES: [Vec4; 5] = [
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, 1.0, -1.0, 1.0),
    Vec4::new(-1.0, -1.0, 1.0, 1.0),
    Vec4::new(0.0, 0.0, 0.0, -2.5),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simplex4D {
    circumradius: f32,
}

impl Default for Simplex4D {
    fn default() -> Self {
        Self::new(Self::CIRCUMRADIUS)
    }
}

impl Simplex4D {
    pub const CIRCUMRADIUS: f32 = 1.8;

    /// Simplex whose vertices all sit at `circumradius` from the origin
    pub fn new(circumradius: f32) -> Self {
        Self { circumradius }
    }

    #[inline]
    pub fn circumradius(&self) -> f32 {
        self.circumradius
    }
}

impl Shape4D for Simplex4D {
    fn generate(&self) -> Wireframe {
        // Each seed is rescaled on its own, not as a group
        let vertices = SEED_VERTICES
            .iter()
            .map(|v| v.normalized_to(self.circumradius))
            .collect();
        let mut wireframe = Wireframe::from_parts(vertices, Vec::with_capacity(10));
        wireframe.connect_pairs(|_, _| true);
        wireframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Edge;

    #[test]
    fn test_vertex_lengths() {
        let wf = Simplex4D::default().generate();
        assert_eq!(wf.vertex_count(), 5);
        for v in &wf.vertices {
            assert!((v.length() - 1.8).abs() < 0.0001, "length {} != 1.8", v.length());
        }
    }

    #[test]
    fn test_complete_graph() {
        let wf = Simplex4D::default().generate();
        assert_eq!(wf.edge_count(), 10);
        for i in 0..5 {
            for j in (i + 1)..5 {
                assert!(wf.edges.contains(&Edge::new(i, j)), "missing edge ({}, {})", i, j);
            }
        }
    }
}
