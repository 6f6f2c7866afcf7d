//! Table Layout Engine
//!
//! Turns table descriptions into absolute canvas offsets. Everything here is
//! pure arithmetic over [`RenderOptions`](crate::RenderOptions); nothing
//! touches a drawing surface.
//!
//! # Architecture
//!
//! ```text
//! Table -> Geometry (widths, heights, prefix-sum offsets) -> GeometryWindow
//! [Table] -> StackLayout (tops, canvas size) -> [GeometryWindow]
//! ```
//!
//! Separator columns and rows contribute exactly one unit; content columns
//! their width (or the configured cell width) and content rows one cell
//! height. The header band exists only when some content column has a title.

mod geometry;
mod stack;


// Re-export public API
pub use geometry::{Geometry, GeometryWindow};
pub use stack::StackLayout;
