//! Wireframe rendering for 4D shapes
//!
//! This crate turns a rotated wireframe into 2D draw calls on an abstract
//! [`canvas::Canvas`].
//!
//! ## Key Components
//!
//! - [`pipeline::Projector`] - 4D → 3D → 2D projection
//! - [`pipeline::WireframeRenderer`] - Depth-sorted edge and vertex drawing
//! - [`svg_canvas::SvgCanvas`] - Canvas that writes SVG documents
//! - [`recording_canvas::RecordingCanvas`] - Canvas that records draw calls

pub mod canvas;
pub mod error;
pub mod pipeline;
pub mod recording_canvas;
pub mod svg_canvas;

pub use canvas::{Canvas, CircleStyle, Hsla, LineStyle, Rect};
pub use error::{CanvasError, RenderError};
pub use pipeline::{FrameStats, Projector, WireframeRenderer};
pub use recording_canvas::{DrawCommand, RecordingCanvas};
pub use svg_canvas::SvgCanvas;
