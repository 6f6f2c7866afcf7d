//! Render options shared by the geometry calculator and the painters

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::canvas::Font;
use crate::data::constants::*;
use crate::data::Color;
use crate::utils::error::{RenderError, RenderResult};

/// Engine-wide configuration, fixed when a [`crate::TableRenderer`] is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Width of content columns that do not declare one
    pub cell_width: f32,
    /// Height of content rows, the header band and the title line
    pub cell_height: f32,
    /// Horizontal text inset inside a column
    pub offset_left: f32,
    /// Baseline offset from the top of a cell
    pub offset_top: f32,
    /// Vertical gap between stacked tables
    pub spacing: f32,
    /// Gap between the title line and the rest of the table
    pub title_spacing: f32,
    pub font_family: String,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub background_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            offset_left: DEFAULT_OFFSET_LEFT,
            offset_top: DEFAULT_OFFSET_TOP,
            spacing: DEFAULT_SPACING,
            title_spacing: DEFAULT_TITLE_SPACING,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            padding_vertical: 0.0,
            padding_horizontal: 0.0,
            background_color: DEFAULT_BACKGROUND,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tighter cells for dense reports
    pub fn compact() -> Self {
        Self {
            cell_width: 80.0,
            cell_height: 28.0,
            offset_left: 6.0,
            offset_top: 19.0,
            spacing: 12.0,
            title_spacing: 6.0,
            ..Default::default()
        }
    }

    /// Default layout with the same padding on every side
    pub fn padded(padding: f32) -> Self {
        Self::default().with_padding(padding)
    }

    pub fn with_cell_width(mut self, width: f32) -> Self {
        self.cell_width = width;
        self
    }

    pub fn with_cell_height(mut self, height: f32) -> Self {
        self.cell_height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_title_spacing(mut self, spacing: f32) -> Self {
        self.title_spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding_vertical = padding;
        self.padding_horizontal = padding;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Default title font: `bold 24px <family>`
    pub fn title_font(&self) -> Font {
        Font::new(TITLE_FONT_SIZE, self.font_family.clone()).bold()
    }

    /// Header and body font: `normal 16px <family>`
    pub fn text_font(&self) -> Font {
        Font::new(TEXT_FONT_SIZE, self.font_family.clone())
    }

    pub fn from_json_str(input: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    #[cfg(feature = "data-loading")]
    pub fn from_toml_str(input: &str) -> RenderResult<Self> {
        Ok(toml::from_str(input)?)
    }

    #[cfg(feature = "data-loading")]
    pub fn to_toml_string(&self) -> RenderResult<String> {
        toml::to_string_pretty(self).map_err(|e| RenderError::encode(e.to_string()))
    }

    /// Load options from a `.toml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| RenderError::io(path, source))?;

        match extension_of(path).as_deref() {
            Some("json") => Self::from_json_str(&content),
            #[cfg(feature = "data-loading")]
            Some("toml") => Self::from_toml_str(&content),
            other => Err(RenderError::unsupported(other.unwrap_or("<none>"))),
        }
    }
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}
