//! Context state shared by the concrete backends

use super::{Font, TextAlign};
use crate::data::constants::{DEFAULT_FONT_FAMILY, TEXT_FONT_SIZE};
use crate::data::Color;

/// One segment command of the current path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

/// Current drawing state of a canvas context
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub font: Font,
    pub fill: Color,
    pub stroke: Color,
    pub align: TextAlign,
    pub path: Vec<PathOp>,
}

impl Default for DrawState {
    fn default() -> Self {
        DrawState {
            font: Font::new(TEXT_FONT_SIZE, DEFAULT_FONT_FAMILY),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            align: TextAlign::Left,
            path: Vec::new(),
        }
    }
}

impl DrawState {
    /// Take the current path, leaving it empty
    pub fn take_path(&mut self) -> Vec<PathOp> {
        std::mem::take(&mut self.path)
    }
}
