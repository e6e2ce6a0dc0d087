//! A canvas that only remembers what it was asked to draw

use hyperview_math::Vec2;
use crate::canvas::{Canvas, CircleStyle, LineStyle, Rect};
use crate::error::CanvasError;

/// One call made against a [`RecordingCanvas`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Line { from: Vec2, to: Vec2, style: LineStyle },
    Circle { center: Vec2, radius: f32, style: CircleStyle },
}

/// In-memory canvas that records every draw call in order
///
/// Clearing does not discard earlier commands; use [`RecordingCanvas::take`]
/// between frames.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, &LineStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, style } => Some((*from, *to, style)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, &CircleStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, style } => Some((*center, *radius, style)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Clear(region));
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Line { from, to, style: *style });
        Ok(())
    }

    fn draw_filled_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        style: &CircleStyle,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Circle { center, radius, style: *style });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Hsla;

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        let style = LineStyle { color: Hsla::new(0.0, 0.0, 0.0, 1.0), width: 1.0 };
        canvas.clear(canvas.bounds()).unwrap();
        canvas.draw_line(Vec2::ZERO, Vec2::new(10.0, 10.0), &style).unwrap();

        assert_eq!(canvas.commands().len(), 2);
        assert_eq!(canvas.commands()[0], DrawCommand::Clear(Rect::new(0.0, 0.0, 100.0, 50.0)));
        assert_eq!(canvas.line_count(), 1);
        assert_eq!(canvas.circle_count(), 0);

        let taken = canvas.take();
        assert_eq!(taken.len(), 2);
        assert!(canvas.commands().is_empty());
    }
}
