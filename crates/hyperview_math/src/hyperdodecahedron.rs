//! Simplified hyperdodecahedron (stand-in for the 120-cell)
//!
//! The real 120-cell has 600 vertices. This shape keeps its golden-ratio
//! flavour with only 32: the 16 sign combinations of (a, a, a, a) plus 16
//! "golden" points that place (±b, ±c) on one pair of axes, where
//! φ = (1 + √5)/2, a = 1/√3, b = a/φ and c = a·φ.
//!
//! Edges join pairs whose distance falls strictly inside
//! ([`Hyperdodecahedron4D::MIN_LINK`], [`Hyperdodecahedron4D::MAX_LINK`]).

use crate::{Vec4, shape::{Shape4D, Wireframe}};

/// Axis pairs carrying the golden coordinates, lower axis first, and
/// whether the lower axis holds b (true) or c (false)
const GOLDEN_AXES: [(usize, usize, bool); 4] = [(0, 1, true), (0, 2, false), (1, 2, true), (2, 3, true)];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hyperdodecahedron4D;

impl Hyperdodecahedron4D {
    pub const MIN_LINK: f32 = 0.4;
    pub const MAX_LINK: f32 = 1.0;
    pub const VERTEX_COUNT: usize = 32;

    pub fn new() -> Self {
        Self
    }

    pub fn vertices(&self) -> Vec<Vec4> {
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let a = 1.0 / 3.0_f32.sqrt();
        let b = a / phi;
        let c = a * phi;

        let mut vertices = Vec::with_capacity(Self::VERTEX_COUNT);

        // Tesseract-like corners, first coordinate varying slowest
        for bits in 0..16u32 {
            let sign = |bit: u32| if bits & (1 << bit) == 0 { a } else { -a };
            vertices.push(Vec4::new(sign(3), sign(2), sign(1), sign(0)));
        }

        // Golden points: ±b and ±c on one axis pair, other axes zero
        for (lo, hi, b_first) in GOLDEN_AXES {
            let (lo_value, hi_value) = if b_first { (b, c) } else { (c, b) };
            for (s_lo, s_hi) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
                let mut coords = [0.0_f32; 4];
                coords[lo] = s_lo * lo_value;
                coords[hi] = s_hi * hi_value;
                vertices.push(Vec4::from_array(coords));
            }
        }

        vertices
    }
}

impl Shape4D for Hyperdodecahedron4D {
    fn generate(&self) -> Wireframe {
        let mut wireframe = Wireframe::from_parts(self.vertices(), Vec::new());
        wireframe.connect_pairs(|p, q| {
            let d = p.distance(q);
            d > Self::MIN_LINK && d < Self::MAX_LINK
        });
        wireframe
    }
}
