//! Default option values and fixed styling constants

use super::colors::Color;

/// Default width of a content column without an explicit width
pub const DEFAULT_CELL_WIDTH: f32 = 100.0;
/// Height of a content row, the header band and the title line
pub const DEFAULT_CELL_HEIGHT: f32 = 40.0;
/// Horizontal text inset from the column edge
pub const DEFAULT_OFFSET_LEFT: f32 = 8.0;
/// Baseline offset from the top of a cell
pub const DEFAULT_OFFSET_TOP: f32 = 26.0;
/// Vertical gap between stacked tables
pub const DEFAULT_SPACING: f32 = 20.0;
/// Gap between the title line and the header/body
pub const DEFAULT_TITLE_SPACING: f32 = 10.0;
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// Width/height contributed by a separator column/row
pub const SEPARATOR_EXTENT: f32 = 1.0;

/// Background bleed beyond each outer canvas edge
pub const BACKGROUND_BLEED: f32 = 10.0;

pub const LINE_COLOR: Color = Color::BLACK;
pub const LINE_WIDTH: f32 = 1.0;

pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const TITLE_COLOR: Color = Color::BLACK;

pub const TEXT_FONT_SIZE: f32 = 16.0;
pub const TEXT_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);
