//! Render entry point: layout, canvas allocation and composition

use super::painter::TablePainter;
use crate::canvas::{Backend, Canvas};
use crate::core::layout::{Geometry, StackLayout};
use crate::core::model::{Table, TableInput};
use crate::core::options::RenderOptions;

/// Paint `tables` onto `canvas` at the windows of `layout`
///
/// The background is filled once for the whole canvas, then every table is
/// painted in stacking order.
pub fn compose<C: Canvas>(
    canvas: &mut C,
    options: &RenderOptions,
    tables: &[Table],
    layout: &StackLayout,
) {
    let mut painter = TablePainter::new(canvas, options);
    painter.background(layout.width, layout.height);
    for (table, window) in tables.iter().zip(&layout.windows) {
        painter.paint(table, window);
    }
}

/// Renders tables to any [`Backend`] with a fixed set of options
///
/// Each render call allocates a fresh canvas and never mutates the engine,
/// so one renderer can be reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    options: RenderOptions,
}

impl TableRenderer {
    pub fn new(options: RenderOptions) -> Self {
        TableRenderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn geometry(&self) -> Geometry<'_> {
        Geometry::new(&self.options)
    }

    /// Canvas size and table windows for `input`
    pub fn layout(&self, input: &TableInput) -> StackLayout {
        let geometry = self.geometry();
        match input {
            TableInput::One(table) => StackLayout::single(&geometry, table),
            TableInput::Many(tables) => StackLayout::compute(&geometry, tables),
        }
    }

    /// Render a single table or a stack of tables
    pub fn render<B: Backend>(&self, backend: &B, input: &TableInput) -> B::Canvas {
        self.paint_layout(backend, input.tables(), &self.layout(input))
    }

    /// Render one table on a canvas sized to it
    pub fn render_table<B: Backend>(&self, backend: &B, table: &Table) -> B::Canvas {
        let layout = StackLayout::single(&self.geometry(), table);
        self.paint_layout(backend, std::slice::from_ref(table), &layout)
    }

    /// Render `tables` stacked top to bottom on one canvas
    pub fn render_tables<B: Backend>(&self, backend: &B, tables: &[Table]) -> B::Canvas {
        let layout = StackLayout::compute(&self.geometry(), tables);
        self.paint_layout(backend, tables, &layout)
    }

    fn paint_layout<B: Backend>(
        &self,
        backend: &B,
        tables: &[Table],
        layout: &StackLayout,
    ) -> B::Canvas {
        let (width, height) = layout.canvas_size();
        log::debug!(
            "Rendering {} table(s) on a {}x{} canvas",
            tables.len(),
            width,
            height
        );

        let mut canvas = backend.allocate(width, height);
        compose(&mut canvas, &self.options, tables, layout);
        canvas
    }
}
