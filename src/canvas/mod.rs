//! Drawing surfaces
//!
//! The layout engine talks to a [`Canvas`]: a small, stateful 2D drawing
//! interface with the capability set of an HTML canvas context restricted to
//! what a table needs (paths, rectangles, text with a font, fill style and
//! alignment). A [`Backend`] allocates a fresh canvas per render call.
//!
//! Backends:
//! - [`RecordingBackend`]: keeps every call as a [`DrawCommand`]
//! - [`SvgBackend`]: emits an SVG document
//! - [`RasterBackend`]: tiny-skia pixmap with resvg text (feature `raster`)

mod font;
mod recorder;
mod state;
mod svg;

#[cfg(feature = "raster")]
mod raster;

pub use font::{Font, FontStyle};
pub use recorder::{DrawCommand, RecordingBackend, RecordingCanvas};
pub use state::{DrawState, PathOp};
pub use svg::{SvgBackend, SvgCanvas};

#[cfg(feature = "raster")]
pub use raster::{RasterBackend, RasterCanvas};

use crate::data::Color;
use serde::{Deserialize, Serialize};

/// Horizontal text anchoring relative to the `x` passed to `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Parse canvas `textAlign` values; `start`/`end` map to left/right
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(TextAlign::Left),
            "right" | "end" => Some(TextAlign::Right),
            "center" => Some(TextAlign::Center),
            _ => None,
        }
    }

    /// Span `[start, end)` occupied by text of `width` anchored at `x`
    pub fn span(&self, x: f32, width: f32) -> (f32, f32) {
        match self {
            TextAlign::Left => (x, x + width),
            TextAlign::Right => (x - width, x),
            TextAlign::Center => (x - width / 2.0, x + width / 2.0),
        }
    }
}

/// A 2D drawing surface
///
/// Calls mirror an HTML canvas context: style setters change the current
/// state, `move_to`/`line_to` extend the current path and `stroke` draws it.
/// Unlike a browser canvas, `stroke` also clears the path so later strokes
/// never redraw earlier segments.
pub trait Canvas {
    /// Pixel width of the surface
    fn width(&self) -> u32;

    /// Pixel height of the surface
    fn height(&self) -> u32;

    fn set_font(&mut self, font: &Font);

    fn set_fill_style(&mut self, color: Color);

    fn set_stroke_style(&mut self, color: Color);

    fn set_text_align(&mut self, align: TextAlign);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Stroke the current path with the stroke style, then clear it
    fn stroke(&mut self);

    /// Fill a rectangle with the fill style
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draw `text` with its baseline at `y`, anchored at `x` per the text
    /// alignment. With `max_width`, nothing outside the anchored span of that
    /// width is painted.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>);
}

/// Allocates canvases for render calls
pub trait Backend {
    type Canvas: Canvas;

    /// Allocate a blank surface of `width` x `height` pixels
    fn allocate(&self, width: u32, height: u32) -> Self::Canvas;
}
