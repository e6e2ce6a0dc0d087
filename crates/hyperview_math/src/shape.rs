//! Shape traits and primitives for 4D wireframes
//!
//! This module provides the core shape abstraction for 4D objects.
//! Shapes are pure geometric data - no colors, styles, or rendering info.

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// An edge between two vertices, stored as indices into the vertex list
///
/// Edges are unordered: `(i, j)` and `(j, i)` describe the same segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Indices into the parent wireframe's vertex array
    pub indices: [usize; 2],
}

impl Edge {
    /// Create a new edge between two vertex indices
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }

    /// Get the indices as a sorted pair (canonical form)
    ///
    /// Useful for deduplication and comparison.
    #[inline]
    pub fn canonical(&self) -> (usize, usize) {
        let [a, b] = self.indices;
        if a <= b { (a, b) } else { (b, a) }
    }

    /// True when both endpoints index into a vertex list of length `len`
    #[inline]
    pub fn is_within(&self, len: usize) -> bool {
        self.indices[0] < len && self.indices[1] < len
    }
}

/// Vertex and edge counts of a wireframe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireframeStats {
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Count the vertices and edges of a wireframe
pub fn compute_stats(vertices: &[Vec4], edges: &[Edge]) -> WireframeStats {
    WireframeStats {
        vertex_count: vertices.len(),
        edge_count: edges.len(),
    }
}

/// The output of a generator: 4D vertices plus their connectivity
///
/// A wireframe is always replaced as a whole when regenerated; it is never
/// patched in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    pub vertices: Vec<Vec4>,
    pub edges: Vec<Edge>,
}

impl Wireframe {
    /// Create an empty wireframe
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wireframe from already-built parts
    pub fn from_parts(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// True when there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn stats(&self) -> WireframeStats {
        compute_stats(&self.vertices, &self.edges)
    }

    /// The vertex buffer as raw native-endian `f32` bytes, x y z w per vertex
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Connect every pair `i < j` for which `connect(v_i, v_j)` holds
    ///
    /// Quadratic in the vertex count.
    pub fn connect_pairs<F>(&mut self, mut connect: F)
    where
        F: FnMut(Vec4, Vec4) -> bool,
    {
        let n = self.vertices.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if connect(self.vertices[i], self.vertices[j]) {
                    self.edges.push(Edge::new(i, j));
                }
            }
        }
    }

    /// Connect every vertex of a row-major `n × n` grid to its successor in
    /// both directions, wrapping around at the borders (torus topology)
    ///
    /// Emits two edges per grid point. A grid of size 1 would wrap onto
    /// itself, so it produces no edges.
    pub fn connect_toroidal_grid(&mut self, n: usize) {
        if n < 2 {
            return;
        }
        self.edges.reserve(2 * n * n);
        for i in 0..n {
            for j in 0..n {
                let idx = i * n + j;
                let next_i = ((i + 1) % n) * n + j;
                let next_j = i * n + (j + 1) % n;
                self.edges.push(Edge::new(idx, next_i));
                self.edges.push(Edge::new(idx, next_j));
            }
        }
    }
}

/// Capability shared by every shape generator
///
/// A generator owns its parameters and builds a fresh wireframe on each
/// call; no state from a previous call leaks into the next.
pub trait Shape4D: Send + Sync {
    /// Build the vertices and edges of this shape
    fn generate(&self) -> Wireframe;
}
