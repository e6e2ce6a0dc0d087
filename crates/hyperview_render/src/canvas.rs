//! The abstract 2D drawing surface
//!
//! The renderer only ever clears the surface, strokes lines and fills
//! circles, so any backend that can do those three things can display a
//! frame. Colors are carried as HSLA and formatted the way CSS expects.

use std::fmt;
use hyperview_math::Vec2;
use crate::error::CanvasError;

/// Hue in degrees, saturation and lightness in percent, alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self { hue, saturation, lightness, alpha }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            round_to(self.hue.rem_euclid(360.0), 2),
            round_to(self.saturation, 2),
            round_to(self.lightness, 2),
            round_to(self.alpha, 3),
        )
    }
}

fn round_to(value: f32, digits: i32) -> f32 {
    let factor = 10f32.powi(digits);
    (value * factor).round() / factor
}

/// Stroke settings for a line segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Hsla,
    /// Stroke width in pixels
    pub width: f32,
}

/// Fill and outline settings for a dot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub fill: Hsla,
    pub stroke: Hsla,
    pub stroke_width: f32,
}

/// An axis-aligned pixel rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// A drawing surface with a pixel size
///
/// Coordinates grow right and down from the top-left corner. Line caps
/// are expected to be round.
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// The whole surface as a rectangle
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }

    /// Erase a region back to the background
    fn clear(&mut self, region: Rect) -> Result<(), CanvasError>;

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) -> Result<(), CanvasError>;

    fn draw_filled_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        style: &CircleStyle,
    ) -> Result<(), CanvasError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsla_display() {
        let color = Hsla::new(200.0, 70.0, 65.0, 0.5);
        assert_eq!(color.to_string(), "hsla(200, 70%, 65%, 0.5)");
    }

    #[test]
    fn test_hsla_display_wraps_negative_hue() {
        let color = Hsla::new(-60.0, 85.0, 70.0, 1.0);
        assert_eq!(color.to_string(), "hsla(300, 85%, 70%, 1)");
    }

    #[test]
    fn test_with_alpha() {
        let color = Hsla::new(10.0, 20.0, 30.0, 1.0).with_alpha(0.25);
        assert_eq!(color.alpha, 0.25);
        assert_eq!(color.hue, 10.0);
    }
}
