//! Static shape descriptions shown next to the viewport

use std::fmt;
use serde::Serialize;
use crate::shapes::ShapeKind;

/// A nominal element count: exact for fixed polytopes, symbolic for
/// parametric ones
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StatValue {
    Exact(u32),
    Symbolic(&'static str),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Exact(n) => write!(f, "{}", n),
            StatValue::Symbolic(s) => f.write_str(s),
        }
    }
}

/// Vertex, edge, face and cell counts of the ideal shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NominalStats {
    pub vertices: StatValue,
    pub edges: StatValue,
    pub faces: StatValue,
    pub cells: StatValue,
}

impl NominalStats {
    const fn exact(vertices: u32, edges: u32, faces: u32, cells: u32) -> Self {
        Self {
            vertices: StatValue::Exact(vertices),
            edges: StatValue::Exact(edges),
            faces: StatValue::Exact(faces),
            cells: StatValue::Exact(cells),
        }
    }
}

/// Display metadata for one shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub name: &'static str,
    pub description: &'static str,
    pub stats: NominalStats,
    /// The generator only approximates the shape named here, so
    /// [`ShapeDescriptor::stats`] will not match the generated counts
    pub approximate: bool,
}

static SHAPES: [ShapeDescriptor; 7] = [
    ShapeDescriptor {
        kind: ShapeKind::Tesseract,
        name: "Tesseract (4D hypercube)",
        description: "Eight 3D cubes joined along their faces in four-dimensional space",
        stats: NominalStats::exact(16, 32, 24, 8),
        approximate: false,
    },
    ShapeDescriptor {
        kind: ShapeKind::Hypersphere,
        name: "Hypersphere",
        description: "The surface of a ball in four-dimensional space",
        stats: NominalStats {
            vertices: StatValue::Symbolic("~N²"),
            edges: StatValue::Symbolic("~N²"),
            faces: StatValue::Symbolic("~N²"),
            cells: StatValue::Exact(1),
        },
        approximate: false,
    },
    ShapeDescriptor {
        kind: ShapeKind::Simplex,
        name: "Simplex (5-cell)",
        description: "The simplest regular 4D polytope, bounded by five tetrahedra",
        stats: NominalStats::exact(5, 10, 10, 5),
        approximate: false,
    },
    ShapeDescriptor {
        kind: ShapeKind::Hyperoctahedron,
        name: "Hyperoctahedron (16-cell)",
        description: "Dual of the tesseract, with a vertex on each coordinate half-axis",
        stats: NominalStats::exact(8, 24, 32, 16),
        approximate: false,
    },
    ShapeDescriptor {
        kind: ShapeKind::Hyperdodecahedron,
        name: "Hyperdodecahedron (120-cell)",
        description: "The most intricate regular 4D polytope, built on the golden ratio",
        stats: NominalStats::exact(600, 1200, 720, 120),
        approximate: true,
    },
    ShapeDescriptor {
        kind: ShapeKind::Duocylinder,
        name: "Duocylinder",
        description: "Cartesian product of two circles, a torus living in 4D",
        stats: NominalStats {
            vertices: StatValue::Symbolic("N²"),
            edges: StatValue::Symbolic("2N²"),
            faces: StatValue::Symbolic("N²"),
            cells: StatValue::Exact(1),
        },
        approximate: false,
    },
    ShapeDescriptor {
        kind: ShapeKind::Custom,
        name: "Custom shape",
        description: "User-defined torus that wobbles through the fourth dimension",
        stats: NominalStats {
            vertices: StatValue::Symbolic("?"),
            edges: StatValue::Symbolic("?"),
            faces: StatValue::Symbolic("?"),
            cells: StatValue::Symbolic("?"),
        },
        approximate: false,
    },
];

/// Every shape descriptor, in menu order
pub fn list_shapes() -> &'static [ShapeDescriptor] {
    &SHAPES
}

impl ShapeKind {
    /// Static description of this shape
    pub fn descriptor(self) -> &'static ShapeDescriptor {
        // SHAPES is declared in ShapeKind::ALL order
        &SHAPES[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_kinds() {
        assert_eq!(list_shapes().len(), ShapeKind::ALL.len());
        for kind in ShapeKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_exact_stats_match_generators() {
        let params = crate::scene::SceneParameters::default();
        for descriptor in list_shapes().iter().filter(|d| !d.approximate) {
            if let (StatValue::Exact(v), StatValue::Exact(e)) =
                (descriptor.stats.vertices, descriptor.stats.edges)
            {
                let wf = descriptor.kind.generate(&params);
                assert_eq!(wf.vertex_count(), v as usize, "{}", descriptor.name);
                assert_eq!(wf.edge_count(), e as usize, "{}", descriptor.name);
            }
        }
    }

    #[test]
    fn test_hyperdodecahedron_flagged() {
        let d = ShapeKind::Hyperdodecahedron.descriptor();
        assert!(d.approximate);
        assert_eq!(d.stats.vertices, StatValue::Exact(600));
    }

    #[test]
    fn test_stat_display() {
        assert_eq!(StatValue::Exact(16).to_string(), "16");
        assert_eq!(StatValue::Symbolic("2N²").to_string(), "2N²");
    }
}
