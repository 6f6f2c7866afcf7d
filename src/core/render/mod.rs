//! Table Renderer
//!
//! Issues canvas calls for tables placed by the layout engine. Painting is
//! backend-agnostic: the same calls drive the recording, SVG and raster
//! canvases.
//!
//! # Architecture
//!
//! ```text
//! TableInput -> TableRenderer::layout -> StackLayout
//!            -> Backend::allocate -> compose (background, then TablePainter per table)
//! ```
//!
//! Per table the drawing order is: horizontal separators, vertical
//! separators, title, header, body.
//!
//! # Example
//!
//! ```
//! use tabraster::canvas::RecordingBackend;
//! use tabraster::{ContentColumn, RenderOptions, Row, Table, TableRenderer};
//!
//! let table = Table::new()
//!     .column(ContentColumn::new("name").title("Name"))
//!     .row(Row::record([("name", "Ada")]));
//!
//! let renderer = TableRenderer::new(RenderOptions::default());
//! let canvas = renderer.render_table(&RecordingBackend, &table);
//! assert_eq!(canvas.texts(), vec!["Name", "Ada"]);
//! ```

mod painter;
mod renderer;


// Re-export public API
pub use painter::TablePainter;
pub use renderer::{compose, TableRenderer};
