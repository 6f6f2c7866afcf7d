//! Core table modules
//!
//! This module contains the table pipeline:
//! - `model`: table, column and row descriptions
//! - `options`: engine-wide render options
//! - `layout`: geometry and stacking arithmetic
//! - `render`: drawing calls against a canvas

pub mod layout;
pub mod model;
pub mod options;
pub mod render;

// Re-export main types
pub use layout::{Geometry, GeometryWindow, StackLayout};
pub use model::{
    Column, ColumnAlign, ContentColumn, Row, Table, TableInput, TitleStyle, COLUMN_SEPARATOR,
    ROW_SEPARATOR,
};
pub use options::RenderOptions;
pub use render::{compose, TablePainter, TableRenderer};
