//! 16-cell (hyperoctahedron) geometry
//!
//! The dual of the tesseract: 8 vertices at ±r on each coordinate axis,
//! 24 edges, 32 faces and 16 tetrahedral cells. Every vertex is joined to
//! every other vertex except its antipode.

use crate::{Vec4, shape::{Shape4D, Wireframe}};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperoctahedron4D {
    radius: f32,
}

impl Default for Hyperoctahedron4D {
    fn default() -> Self {
        Self::new(Self::RADIUS)
    }
}

impl Hyperoctahedron4D {
    pub const RADIUS: f32 = 1.5;

    /// Antipodal vertices have a dot product of -r², every other pair 0.
    /// Normalised by r², anything at or above this threshold is an edge.
    const DOT_THRESHOLD: f32 = -0.5;

    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn vertices(&self) -> [Vec4; 8] {
        let r = self.radius;
        [
            Vec4::new(r, 0.0, 0.0, 0.0),
            Vec4::new(-r, 0.0, 0.0, 0.0),
            Vec4::new(0.0, r, 0.0, 0.0),
            Vec4::new(0.0, -r, 0.0, 0.0),
            Vec4::new(0.0, 0.0, r, 0.0),
            Vec4::new(0.0, 0.0, -r, 0.0),
            Vec4::new(0.0, 0.0, 0.0, r),
            Vec4::new(0.0, 0.0, 0.0, -r),
        ]
    }
}

impl Shape4D for Hyperoctahedron4D {
    fn generate(&self) -> Wireframe {
        let r2 = self.radius * self.radius;
        let mut wireframe = Wireframe::from_parts(self.vertices().to_vec(), Vec::with_capacity(24));
        wireframe.connect_pairs(|a, b| a.dot(b) / r2 >= Self::DOT_THRESHOLD);
        wireframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let wf = Hyperoctahedron4D::default().generate();
        assert_eq!(wf.vertex_count(), 8);
        assert_eq!(wf.edge_count(), 24);
    }

    #[test]
    fn test_no_antipodal_edges() {
        let wf = Hyperoctahedron4D::default().generate();
        for edge in &wf.edges {
            let [a, b] = edge.indices;
            let sum = wf.vertices[a] + wf.vertices[b];
            assert!(sum != Vec4::ZERO, "antipodal pair ({}, {}) joined", a, b);
        }
        // (1.5, 0, 0, 0) and (-1.5, 0, 0, 0) in particular
        assert!(!wf.edges.iter().any(|e| e.canonical() == (0, 1)));
    }
}
