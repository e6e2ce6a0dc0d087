//! Error types for drawing surfaces and the frame renderer

use std::fmt;

/// A drawing surface refused a command
#[derive(Debug)]
pub enum CanvasError {
    /// Formatting into an in-memory document failed
    Format(fmt::Error),
    /// Writing the finished surface out failed
    Io(std::io::Error),
    /// Any other backend failure
    Backend(String),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Format(e) => write!(f, "Canvas formatting error: {}", e),
            CanvasError::Io(e) => write!(f, "Canvas IO error: {}", e),
            CanvasError::Backend(msg) => write!(f, "Canvas error: {}", msg),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Format(e) => Some(e),
            CanvasError::Io(e) => Some(e),
            CanvasError::Backend(_) => None,
        }
    }
}

impl From<fmt::Error> for CanvasError {
    fn from(e: fmt::Error) -> Self {
        CanvasError::Format(e)
    }
}

impl From<std::io::Error> for CanvasError {
    fn from(e: std::io::Error) -> Self {
        CanvasError::Io(e)
    }
}

/// A frame could not be drawn
#[derive(Debug)]
pub enum RenderError {
    /// The canvas failed while the frame was being drawn
    Canvas(CanvasError),
    /// The canvas has no drawable area
    EmptySurface { width: f32, height: f32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Canvas(e) => write!(f, "Render error: {}", e),
            RenderError::EmptySurface { width, height } => {
                write!(f, "Render error: canvas is {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Canvas(e) => Some(e),
            RenderError::EmptySurface { .. } => None,
        }
    }
}

impl From<CanvasError> for RenderError {
    fn from(e: CanvasError) -> Self {
        RenderError::Canvas(e)
    }
}
