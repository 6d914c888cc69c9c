//! Command-recording render target.

use kurbo::Point;
use peniko::Color;
use starband_core::{FillTreatment, RenderTarget};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillPolygon {
        points: Vec<Point>,
        fill: FillTreatment,
    },
    StrokePolygon {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
}

/// A render target that records commands instead of drawing.
///
/// Hosts can replay the list against their own drawing API; tests compare
/// lists to check frame contents and idempotence. `clear` starts a fresh
/// frame, so rendering repeatedly into the same list never accumulates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands for the current frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the list, yielding the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderTarget for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, points: &[Point], fill: &FillTreatment) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            fill: *fill,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
        });
    }
}
