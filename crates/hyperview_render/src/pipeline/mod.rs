//! Per-frame pipeline: projection, depth ordering and drawing

pub mod projection;
pub mod depth;
pub mod wireframe_pipeline;

pub use projection::{Projector, FOCAL_LENGTH, DEPTH_SCALE};
pub use depth::{depth_of, clamp_depth, sort_edges_by_depth, edge_style, vertex_style, DepthEdge, DEPTH_RANGE};
pub use wireframe_pipeline::{WireframeRenderer, FrameStats, EDGE_CULL_MARGIN, VERTEX_CULL_MARGIN};
