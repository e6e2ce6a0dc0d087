//! Depth ordering and depth-driven styling
//!
//! Depth is `z + w/2` of the rotated point. Edges are drawn in ascending
//! depth, and both edges and vertices get brighter, wider and bluer
//! (edges) or larger and yellower (vertices) as depth decreases.

use hyperview_math::{Edge, Vec4};
use crate::canvas::{CircleStyle, Hsla, LineStyle};

/// Depths are clamped to `[-DEPTH_RANGE, DEPTH_RANGE]` before styling
pub const DEPTH_RANGE: f32 = 4.0;

/// Depth of a rotated 4D point
#[inline]
pub fn depth_of(v: Vec4) -> f32 {
    v.z + v.w * 0.5
}

#[inline]
pub fn clamp_depth(depth: f32) -> f32 {
    depth.clamp(-DEPTH_RANGE, DEPTH_RANGE)
}

/// An edge together with the mean depth of its endpoints
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthEdge {
    pub edge: Edge,
    pub depth: f32,
}

/// Pair each edge with its depth and sort ascending
///
/// Edges with an endpoint outside `rotated` are dropped. The sort is
/// stable, so equal depths keep their input order.
pub fn sort_edges_by_depth(rotated: &[Vec4], edges: &[Edge]) -> Vec<DepthEdge> {
    let mut sorted: Vec<DepthEdge> = edges
        .iter()
        .filter(|e| e.is_within(rotated.len()))
        .map(|&edge| {
            let [i, j] = edge.indices;
            let depth = (depth_of(rotated[i]) + depth_of(rotated[j])) / 2.0;
            DepthEdge { edge, depth }
        })
        .collect();
    sorted.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    sorted
}

/// Stroke for an edge at the given (unclamped) depth
pub fn edge_style(depth: f32) -> LineStyle {
    let d = clamp_depth(depth);
    let alpha = ((d + 6.0) / 10.0).clamp(0.15, 1.0);
    LineStyle {
        color: Hsla::new(200.0 + d * 25.0, 70.0, 65.0, alpha),
        width: (alpha * 2.5).max(0.5),
    }
}

/// Radius and paint for a vertex at the given (unclamped) depth
pub fn vertex_style(depth: f32) -> (f32, CircleStyle) {
    let d = clamp_depth(depth);
    let radius = (8.0 - d).max(2.0);
    let alpha = ((d + 6.0) / 10.0).clamp(0.4, 1.0);
    let hue = 60.0 + d * 30.0;
    let style = CircleStyle {
        fill: Hsla::new(hue, 85.0, 70.0, alpha),
        stroke: Hsla::new(hue, 85.0, 90.0, alpha * 0.8),
        stroke_width: 1.5,
    };
    (radius, style)
}
