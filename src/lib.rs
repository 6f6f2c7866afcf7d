//! # tabraster
//!
//! Render tabular reports (an optional title, a header row, data rows and
//! hairline separators) to PNG or SVG images.
//!
//! ## Features
//!
//! - **Declarative tables**: columns with widths, alignment and affixes; rows
//!   keyed by `dataIndex`; `"|"` / `"-"` separator markers
//! - **Stacking**: several tables on one canvas, evenly spaced
//! - **Pluggable surfaces**: raster (tiny-skia + resvg), SVG, or a recording
//!   canvas for inspection
//! - **Documents**: JSON/YAML tables and JSON/TOML options
//!
//! ## Usage Examples
//!
//! ### Building a table
//!
//! ```rust
//! use tabraster::{render_svg, ContentColumn, RenderOptions, Row, Table};
//!
//! let table = Table::new()
//!     .with_title("Marketing Summary")
//!     .column(ContentColumn::new("campaign").title("Campaign").width(200.0))
//!     .separator_column()
//!     .column(ContentColumn::new("install").title("Install").right())
//!     .separator_row()
//!     .row(Row::record([("campaign", "Google CPC"), ("install", "12")]));
//!
//! let svg = render_svg(&table.into(), &RenderOptions::default());
//! assert!(svg.contains("Google CPC"));
//! ```
//!
//! ### Loading a document
//!
//! ```rust
//! use tabraster::canvas::RecordingBackend;
//! use tabraster::{TableInput, TableRenderer};
//!
//! let input = TableInput::from_json_str(r#"[
//!     { "title": "Revenue", "columns": [{ "title": "Country", "dataIndex": "country" }],
//!       "dataSource": ["-", { "country": "France" }] },
//!     { "columns": ["|"], "dataSource": [] }
//! ]"#).unwrap();
//!
//! let canvas = TableRenderer::default().render(&RecordingBackend, &input);
//! assert_eq!(canvas.texts(), vec!["Revenue", "Country", "France"]);
//! ```

/// Core table modules: model, options, layout and rendering
pub mod core;

/// Drawing surfaces and backends
pub mod canvas;

/// Data layer - colours and constants
pub mod data;

/// Utility modules
pub mod utils;

use std::path::Path;

// Re-export core types
pub use core::layout::{Geometry, GeometryWindow, StackLayout};
pub use core::model::{
    Column, ColumnAlign, ContentColumn, Row, Table, TableInput, TitleStyle, COLUMN_SEPARATOR,
    ROW_SEPARATOR,
};
pub use core::options::RenderOptions;
pub use core::render::{compose, TablePainter, TableRenderer};

// Re-export drawing surfaces
pub use canvas::{Backend, Canvas, Font, TextAlign};

// Re-export data modules
pub use data::constants;
pub use data::Color;

// Re-export utilities
pub use utils::error::{RenderError, RenderResult};
pub use utils::files::{persist, Encode, OutputFormat};

/// Render `input` as an SVG document
pub fn render_svg(input: &TableInput, options: &RenderOptions) -> String {
    TableRenderer::new(options.clone())
        .render(&canvas::SvgBackend, input)
        .to_svg_string()
}

/// Render `input` as PNG bytes, using the system fonts
#[cfg(feature = "raster")]
pub fn render_png(input: &TableInput, options: &RenderOptions) -> RenderResult<Vec<u8>> {
    TableRenderer::new(options.clone())
        .render(&canvas::RasterBackend::new(), input)
        .encode()
}

/// Render `input` with `renderer` and persist it to `path` as `format`
///
/// `fonts` is only consulted for PNG output.
pub fn render_to_path(
    renderer: &TableRenderer,
    input: &TableInput,
    format: OutputFormat,
    path: impl AsRef<Path>,
    fonts: &[&Path],
) -> RenderResult<()> {
    match format {
        OutputFormat::Svg => persist(&renderer.render(&canvas::SvgBackend, input), path),
        #[cfg(feature = "raster")]
        OutputFormat::Png => {
            let mut backend = canvas::RasterBackend::new();
            for dir in fonts {
                backend.load_fonts_dir(dir);
            }
            persist(&renderer.render(&backend, input), path)
        }
        #[cfg(not(feature = "raster"))]
        OutputFormat::Png => {
            let _ = fonts;
            Err(RenderError::unsupported("png (built without `raster`)"))
        }
    }
}
