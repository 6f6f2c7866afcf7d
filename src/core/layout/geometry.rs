//! Geometry calculator for a single table

use serde::Serialize;

use crate::core::model::{has_header, Column, Row, Table};
use crate::core::options::RenderOptions;
use crate::data::constants::SEPARATOR_EXTENT;

/// Resolved placement of one table on the canvas
///
/// All values are absolute canvas units. `column_offsets` already include the
/// horizontal padding and `row_offsets` the table top, title and header bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryWindow {
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub title_height: f32,
    pub header_height: f32,
    pub column_offsets: Vec<f32>,
    pub row_offsets: Vec<f32>,
}

impl GeometryWindow {
    /// Top of the header band (the body top when there is no header)
    pub fn body_top(&self) -> f32 {
        self.top + self.title_height
    }

    /// Top of the first body row
    pub fn rows_top(&self) -> f32 {
        self.body_top() + self.header_height
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Pure size and offset arithmetic over [`RenderOptions`]
#[derive(Debug, Clone, Copy)]
pub struct Geometry<'a> {
    options: &'a RenderOptions,
}

impl<'a> Geometry<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Geometry { options }
    }

    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// Width contribution of one column
    pub fn column_width(&self, column: &Column) -> f32 {
        match column {
            Column::Separator => SEPARATOR_EXTENT,
            Column::Content(col) => col.width.unwrap_or(self.options.cell_width),
        }
    }

    /// Height contribution of one row
    pub fn row_height(&self, row: &Row) -> f32 {
        match row {
            Row::Separator => SEPARATOR_EXTENT,
            Row::Record(_) => self.options.cell_height,
        }
    }

    /// Summed column widths; a table without columns still gets one cell width
    pub fn table_width(&self, columns: &[Column]) -> f32 {
        if columns.is_empty() {
            return self.options.cell_width;
        }
        columns.iter().map(|col| self.column_width(col)).sum()
    }

    /// Title line plus title spacing, or 0 without a title
    pub fn title_height(&self, title: Option<&str>) -> f32 {
        match title {
            Some(t) if !t.is_empty() => self.options.cell_height + self.options.title_spacing,
            _ => 0.0,
        }
    }

    /// One cell height when any content column has a title, else 0
    pub fn header_height(&self, columns: &[Column]) -> f32 {
        if has_header(columns) {
            self.options.cell_height
        } else {
            0.0
        }
    }

    /// Summed row heights
    pub fn body_height(&self, data_source: &[Row]) -> f32 {
        data_source.iter().map(|row| self.row_height(row)).sum()
    }

    pub fn table_height_parts(
        &self,
        title: Option<&str>,
        columns: &[Column],
        data_source: &[Row],
    ) -> f32 {
        self.title_height(title) + self.header_height(columns) + self.body_height(data_source)
    }

    pub fn table_height(&self, table: &Table) -> f32 {
        self.table_height_parts(table.title.as_deref(), &table.columns, &table.data_source)
    }

    /// x of each column's left edge
    pub fn column_offsets(&self, columns: &[Column]) -> Vec<f32> {
        prefix_offsets(
            self.options.padding_horizontal,
            columns.iter().map(|col| self.column_width(col)),
        )
    }

    /// y of each row's top edge, below the title and header bands
    pub fn row_offsets(
        &self,
        title: Option<&str>,
        columns: &[Column],
        data_source: &[Row],
        top: f32,
    ) -> Vec<f32> {
        let origin = top + self.title_height(title) + self.header_height(columns);
        prefix_offsets(origin, data_source.iter().map(|row| self.row_height(row)))
    }

    /// Full geometry window for `table` placed at `top`
    pub fn window(&self, table: &Table, top: f32) -> GeometryWindow {
        let title = table.title.as_deref();
        GeometryWindow {
            top,
            width: self.table_width(&table.columns),
            height: self.table_height(table),
            title_height: self.title_height(title),
            header_height: self.header_height(&table.columns),
            column_offsets: self.column_offsets(&table.columns),
            row_offsets: self.row_offsets(title, &table.columns, &table.data_source, top),
        }
    }
}

/// Exclusive prefix sums of `extents` starting at `origin`
fn prefix_offsets(origin: f32, extents: impl Iterator<Item = f32>) -> Vec<f32> {
    extents
        .scan(origin, |acc, extent| {
            let offset = *acc;
            *acc += extent;
            Some(offset)
        })
        .collect()
}
