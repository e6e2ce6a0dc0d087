//! SVG output
//!
//! Each draw call appends one element to an in-memory document. Clearing
//! the full surface starts a new document; clearing a smaller region
//! paints the background over it.

use std::fmt::Write;
use std::path::Path;
use hyperview_math::Vec2;
use crate::canvas::{Canvas, CircleStyle, LineStyle, Rect};
use crate::error::CanvasError;

/// A canvas that renders to an SVG document
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    background: String,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_background(width, height, "#000")
    }

    pub fn with_background(width: f32, height: f32, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
            body: String::new(),
        }
    }

    /// The complete document for everything drawn so far
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        // Writing into a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }

    fn is_full_surface(&self, region: &Rect) -> bool {
        region.x <= 0.0
            && region.y <= 0.0
            && region.x + region.width >= self.width
            && region.y + region.height >= self.height
    }
}

impl Canvas for SvgCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) -> Result<(), CanvasError> {
        if self.is_full_surface(&region) {
            self.body.clear();
        }
        writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            region.x, region.y, region.width, region.height, self.background
        )?;
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) -> Result<(), CanvasError> {
        writeln!(
            self.body,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-linecap="round"/>"#,
            from.x, from.y, to.x, to.y, style.color, style.width
        )?;
        Ok(())
    }

    fn draw_filled_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        style: &CircleStyle,
    ) -> Result<(), CanvasError> {
        writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{:.2}"/>"#,
            center.x, center.y, radius, style.fill, style.stroke, style.stroke_width
        )?;
        Ok(())
    }
}
