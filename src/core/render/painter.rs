//! Single-table painter: turns a geometry window into canvas calls

use crate::canvas::{Canvas, TextAlign};
use crate::core::layout::GeometryWindow;
use crate::core::model::{ColumnAlign, ContentColumn, Row, Table};
use crate::core::options::RenderOptions;
use crate::data::constants::{BACKGROUND_BLEED, LINE_COLOR, TEXT_COLOR, TITLE_COLOR};

/// Issues the drawing primitives of one table
///
/// Drawing order is fixed: horizontal separators, vertical separators,
/// title, header, body. The background is not part of a table; the caller
/// fills it once per canvas with [`TablePainter::background`].
pub struct TablePainter<'a, C: Canvas> {
    canvas: &'a mut C,
    options: &'a RenderOptions,
}

impl<'a, C: Canvas> TablePainter<'a, C> {
    pub fn new(canvas: &'a mut C, options: &'a RenderOptions) -> Self {
        TablePainter { canvas, options }
    }

    /// Fill the `width` x `height` canvas extent plus the bleed margin
    pub fn background(&mut self, width: f32, height: f32) {
        self.canvas.set_fill_style(self.options.background_color);
        self.canvas.set_stroke_style(self.options.background_color);
        self.canvas.fill_rect(
            -BACKGROUND_BLEED,
            -BACKGROUND_BLEED,
            width + 2.0 * BACKGROUND_BLEED,
            height + 2.0 * BACKGROUND_BLEED,
        );
    }

    /// Draw `table` inside `window`
    pub fn paint(&mut self, table: &Table, window: &GeometryWindow) {
        self.horizontal_lines(&table.data_source, window);
        self.vertical_lines(table, window);
        self.title(table, window);
        self.header(table, window);
        self.body(table, window);
    }

    fn horizontal_lines(&mut self, rows: &[Row], window: &GeometryWindow) {
        self.canvas.set_stroke_style(LINE_COLOR);
        let left = self.options.padding_horizontal;

        for (row, &y) in rows.iter().zip(&window.row_offsets) {
            if !row.is_separator() {
                continue;
            }
            self.canvas.move_to(left, y);
            self.canvas.line_to(left + window.width, y);
            self.canvas.stroke();
        }
    }

    /// Separator columns span the header and body bands, never the title
    fn vertical_lines(&mut self, table: &Table, window: &GeometryWindow) {
        self.canvas.set_stroke_style(LINE_COLOR);
        let (top, bottom) = (window.body_top(), window.bottom());

        for (col, &x) in table.columns.iter().zip(&window.column_offsets) {
            if !col.is_separator() {
                continue;
            }
            self.canvas.move_to(x, top);
            self.canvas.line_to(x, bottom);
            self.canvas.stroke();
        }
    }

    fn title(&mut self, table: &Table, window: &GeometryWindow) {
        let Some(title) = table.title.as_deref() else {
            return;
        };
        let style = &table.title_style;

        let font = style
            .font
            .clone()
            .unwrap_or_else(|| self.options.title_font());
        self.canvas.set_font(&font);
        self.canvas.set_fill_style(style.fill.unwrap_or(TITLE_COLOR));
        self.canvas
            .set_text_align(style.align.unwrap_or(TextAlign::Left));
        self.canvas.fill_text(
            title,
            self.options.padding_horizontal + self.options.offset_left,
            window.top + self.options.offset_top + style.offset_top,
            None,
        );
    }

    /// Header labels; also selects the text style the body reuses
    fn header(&mut self, table: &Table, window: &GeometryWindow) {
        self.canvas.set_font(&self.options.text_font());
        self.canvas.set_fill_style(TEXT_COLOR);

        let y = window.body_top() + self.options.offset_top;
        for (i, col) in table.content_columns() {
            let Some(title) = col.title.as_deref() else {
                continue;
            };
            let x = self.text_x(col, window.column_offsets[i]);
            self.canvas.set_text_align(col.align.text_align());
            self.canvas.fill_text(title, x, y, None);
        }
    }

    fn body(&mut self, table: &Table, window: &GeometryWindow) {
        for (row, &row_y) in table.data_source.iter().zip(&window.row_offsets) {
            if row.is_separator() {
                continue;
            }
            let y = row_y + self.options.offset_top;

            for (j, col) in table.content_columns() {
                let Some(value) = row.value_for(col) else {
                    continue;
                };
                let x = self.text_x(col, window.column_offsets[j]);
                let max_width = self.column_width(col) - 2.0 * self.options.offset_left;
                self.canvas.set_text_align(col.align.text_align());
                self.canvas
                    .fill_text(&col.decorate(value), x, y, Some(max_width));
            }
        }
    }

    fn column_width(&self, col: &ContentColumn) -> f32 {
        col.width.unwrap_or(self.options.cell_width)
    }

    /// Text anchor inside a column starting at `x`
    fn text_x(&self, col: &ContentColumn, x: f32) -> f32 {
        match col.align {
            ColumnAlign::Left => x + self.options.offset_left,
            ColumnAlign::Right => x + self.column_width(col) - self.options.offset_left,
        }
    }
}
