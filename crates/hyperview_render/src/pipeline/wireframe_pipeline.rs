//! Frame rendering
//!
//! One frame is: clear, rotate every vertex, project it, sort the edges
//! back to front, stroke the edges, then dot the vertices on top. Points
//! that land far outside the canvas are skipped rather than clipped.

use hyperview_core::{SceneParameters, SceneState};
use hyperview_math::{Edge, RotationState, Vec2, Vec4, Wireframe};
use crate::canvas::Canvas;
use crate::error::RenderError;
use super::depth::{depth_of, edge_style, sort_edges_by_depth, vertex_style};
use super::projection::Projector;

/// How far past the canvas border an edge endpoint may land and still be drawn
pub const EDGE_CULL_MARGIN: f32 = 100.0;
/// How far past the canvas border a vertex may land and still be drawn
pub const VERTEX_CULL_MARGIN: f32 = 50.0;

/// What happened while drawing one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges_drawn: usize,
    pub edges_culled: usize,
    /// Edges whose indices did not fit the vertex list
    pub edges_skipped: usize,
    pub vertices_drawn: usize,
    pub vertices_culled: usize,
}

/// Draws wireframes onto any [`Canvas`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireframeRenderer {
    pub edge_margin: f32,
    pub vertex_margin: f32,
}

impl Default for WireframeRenderer {
    fn default() -> Self {
        Self {
            edge_margin: EDGE_CULL_MARGIN,
            vertex_margin: VERTEX_CULL_MARGIN,
        }
    }
}

impl WireframeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the off-canvas tolerance for edge endpoints
    pub fn with_edge_margin(mut self, margin: f32) -> Self {
        self.edge_margin = margin;
        self
    }

    /// Set the off-canvas tolerance for vertices
    pub fn with_vertex_margin(mut self, margin: f32) -> Self {
        self.vertex_margin = margin;
        self
    }

    /// Draw a wireframe with the rotation and parameters of a scene
    pub fn render_frame<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        wireframe: &Wireframe,
        state: &SceneState,
    ) -> Result<FrameStats, RenderError> {
        self.render(canvas, &wireframe.vertices, &wireframe.edges, &state.rotation, &state.params)
    }

    /// Draw one frame
    ///
    /// An empty vertex list clears the canvas and draws nothing.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        vertices: &[Vec4],
        edges: &[Edge],
        rotation: &RotationState,
        params: &SceneParameters,
    ) -> Result<FrameStats, RenderError> {
        let (width, height) = (canvas.width(), canvas.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(RenderError::EmptySurface { width, height });
        }

        canvas.clear(canvas.bounds())?;

        let mut stats = FrameStats::default();
        if vertices.is_empty() {
            return Ok(stats);
        }

        let rotated = rotation.rotate_all(vertices);
        let projector = Projector::new(params, width, height);
        let projected = projector.project_all(&rotated);

        let sorted = sort_edges_by_depth(&rotated, edges);
        stats.edges_skipped = edges.len() - sorted.len();

        for depth_edge in &sorted {
            let [i, j] = depth_edge.edge.indices;
            let (from, to) = (projected[i], projected[j]);
            if !self.is_visible(from, width, height, self.edge_margin)
                || !self.is_visible(to, width, height, self.edge_margin)
            {
                stats.edges_culled += 1;
                continue;
            }
            canvas.draw_line(from, to, &edge_style(depth_edge.depth))?;
            stats.edges_drawn += 1;
        }

        for (point, vertex) in projected.iter().zip(&rotated) {
            if !self.is_visible(*point, width, height, self.vertex_margin) {
                stats.vertices_culled += 1;
                continue;
            }
            let (radius, style) = vertex_style(depth_of(*vertex));
            canvas.draw_filled_circle(*point, radius, &style)?;
            stats.vertices_drawn += 1;
        }

        log::trace!(
            "Frame: {} edges drawn ({} culled, {} skipped), {} vertices drawn ({} culled)",
            stats.edges_drawn,
            stats.edges_culled,
            stats.edges_skipped,
            stats.vertices_drawn,
            stats.vertices_culled
        );

        Ok(stats)
    }

    fn is_visible(&self, p: Vec2, width: f32, height: f32, margin: f32) -> bool {
        p.x.is_finite()
            && p.y.is_finite()
            && p.x >= -margin
            && p.x <= width + margin
            && p.y >= -margin
            && p.y <= height + margin
    }
}
