//! Recording canvas - keeps the exact sequence of drawing calls

use super::{Backend, Canvas, Font, TextAlign};
use crate::data::Color;
use serde::Serialize;

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    SetFont {
        font: String,
    },
    SetFillStyle {
        color: Color,
    },
    SetStrokeStyle {
        color: Color,
    },
    SetTextAlign {
        align: TextAlign,
    },
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    Stroke,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        max_width: Option<f32>,
    },
}

/// Canvas that records calls instead of drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingCanvas {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Text of every `fill_text` call, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Segments `((x0, y0), (x1, y1))` of every stroked `move_to`/`line_to` pair
    pub fn stroked_lines(&self) -> Vec<((f32, f32), (f32, f32))> {
        let mut lines = Vec::new();
        let mut pending = Vec::new();
        let mut cursor = None;

        for cmd in &self.commands {
            match cmd {
                DrawCommand::MoveTo { x, y } => cursor = Some((*x, *y)),
                DrawCommand::LineTo { x, y } => {
                    if let Some(from) = cursor {
                        pending.push((from, (*x, *y)));
                    }
                    cursor = Some((*x, *y));
                }
                DrawCommand::Stroke => {
                    lines.append(&mut pending);
                    cursor = None;
                }
                _ => {}
            }
        }

        lines
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_font(&mut self, font: &Font) {
        self.commands.push(DrawCommand::SetFont {
            font: font.to_string(),
        });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle { color });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeStyle { color });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::SetTextAlign { align });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
    }
}

/// Backend producing [`RecordingCanvas`] surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingBackend;

impl Backend for RecordingBackend {
    type Canvas = RecordingCanvas;

    fn allocate(&self, width: u32, height: u32) -> RecordingCanvas {
        RecordingCanvas::new(width, height)
    }
}
