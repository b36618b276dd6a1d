use protocol::{Rgb, Tool};

use crate::canvas::{Brush, Point};
use crate::consts::*;

/// The artist's current tool selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Rgb,
    pub line_width: u8,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            color: Rgb::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ToolState {
    pub fn set_line_width(&mut self, width: u8) {
        self.line_width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
    }

    /// The eraser ignores the selected width.
    pub fn brush(&self) -> Brush {
        let width = match self.tool {
            Tool::Pencil => self.line_width as f32,
            Tool::Eraser => ERASER_WIDTH,
        };
        Brush {
            tool: self.tool,
            color: self.color,
            width,
        }
    }
}

/// A stroke in progress. The brush is fixed when the stroke begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveStroke {
    pub brush: Brush,
    pub last: Point,
}
