//! Vertical stacking of several tables on one canvas

use serde::Serialize;

use super::geometry::{Geometry, GeometryWindow};
use crate::core::model::Table;

/// Canvas size and per-table windows for a stack of tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackLayout {
    /// Widest table plus both horizontal paddings
    pub width: f32,
    /// Summed heights, gaps and both vertical paddings
    pub height: f32,
    pub windows: Vec<GeometryWindow>,
}

impl StackLayout {
    /// Lay out `tables` top to bottom, `spacing` apart
    pub fn compute(geometry: &Geometry<'_>, tables: &[Table]) -> Self {
        let options = geometry.options();

        let max_width = tables
            .iter()
            .map(|t| geometry.table_width(&t.columns))
            .fold(0.0_f32, f32::max);

        let mut windows = Vec::with_capacity(tables.len());
        let mut top = options.padding_vertical;
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                top += options.spacing;
            }
            let window = geometry.window(table, top);
            log::trace!("Table {} placed at top {} (height {})", i, top, window.height);
            top += window.height;
            windows.push(window);
        }

        let content_height: f32 = windows.iter().map(|w| w.height).sum();
        let gaps = tables.len().saturating_sub(1) as f32 * options.spacing;

        StackLayout {
            width: max_width + 2.0 * options.padding_horizontal,
            height: content_height + gaps + 2.0 * options.padding_vertical,
            windows,
        }
    }

    /// Canvas size and window for one table rendered on its own
    pub fn single(geometry: &Geometry<'_>, table: &Table) -> Self {
        let options = geometry.options();
        let window = geometry.window(table, options.padding_vertical);

        StackLayout {
            width: window.width + 2.0 * options.padding_horizontal,
            height: window.height + 2.0 * options.padding_vertical,
            windows: vec![window],
        }
    }

    /// Canvas size rounded up to whole pixels; degenerate sizes become 0
    pub fn canvas_size(&self) -> (u32, u32) {
        (pixel_extent(self.width), pixel_extent(self.height))
    }

    /// Table tops in stacking order
    pub fn tops(&self) -> Vec<f32> {
        self.windows.iter().map(|w| w.top).collect()
    }
}

fn pixel_extent(extent: f32) -> u32 {
    if extent.is_finite() && extent > 0.0 {
        extent.ceil() as u32
    } else {
        0
    }
}
