//! Integration tests for tabraster document loading, layout and rendering

use std::path::PathBuf;

use tabraster::canvas::{DrawCommand, RecordingBackend, SvgBackend};
use tabraster::{
    persist, render_svg, Column, ContentColumn, OutputFormat, RenderError, RenderOptions, Row,
    Table, TableInput, TableRenderer,
};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

// ============================================================================
// Document Loading
// ============================================================================

mod documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_demo_loads_as_single_table() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let TableInput::One(table) = &input else {
            panic!("expected a single table, got {:?}", input);
        };

        assert_eq!(table.title.as_deref(), Some("Marketing Summary"));
        assert_eq!(table.columns.len(), 5);
        assert!(table.columns[1].is_separator());
        assert_eq!(table.data_source.len(), 8);
        assert_eq!(table.data_source[7].get("cost"), Some("$ 1,690"));
    }

    #[test]
    fn test_yaml_demo_stringifies_numbers() {
        let input = TableInput::from_path(demo("multiple-tables.yaml")).unwrap();
        let tables = input.tables();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].data_source[1].get("amount"), Some("12"));
        assert_eq!(tables[1].title.as_deref(), Some("Marketing Cost"));
    }

    #[test]
    fn test_options_demo() {
        let options = RenderOptions::from_path(demo("options.toml")).unwrap();
        assert_eq!(options.padding_vertical, 20.0);
        assert_eq!(options.padding_horizontal, 20.0);
        assert_eq!(options.cell_width, 100.0);
        assert_eq!(options.spacing, 20.0);
    }

    #[test]
    fn test_missing_sequences_are_empty() {
        let input = TableInput::from_json_str(r#"{ "title": "Nothing yet" }"#).unwrap();
        let table = &input.tables()[0];
        assert!(table.columns.is_empty());
        assert!(table.data_source.is_empty());
    }

    #[test]
    fn test_bad_marker_is_invalid_input() {
        let err = TableInput::from_json_str(r#"{ "columns": ["||"], "dataSource": [] }"#)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput { .. }));
        assert!(err.to_string().contains("unknown column marker '||'"), "{}", err);

        let err = TableInput::from_json_str(r#"{ "columns": [], "dataSource": ["="] }"#)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput { .. }));
        assert!(err.to_string().contains("unknown row marker '='"), "{}", err);
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        std::fs::write(&path, "a,b").unwrap();

        let err = TableInput::from_path(&path).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TableInput::from_path(demo("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}

// ============================================================================
// Layout
// ============================================================================

mod layout {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_demo_canvas_size() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let layout = TableRenderer::default().layout(&input);

        // 200 + 1 + 100 + 1 + 100
        assert_eq!(layout.width, 402.0);
        // title 50 + header 40 + 4 separators + 4 rows of 40
        assert_eq!(layout.height, 254.0);
        assert_eq!(layout.canvas_size(), (402, 254));
    }

    #[test]
    fn test_multiple_tables_demo_stack() {
        let input = TableInput::from_path(demo("multiple-tables.yaml")).unwrap();
        let options = RenderOptions::from_path(demo("options.toml")).unwrap();
        let layout = TableRenderer::new(options).layout(&input);

        assert_eq!(layout.tops(), vec![20.0, 292.0]);
        assert_eq!(layout.width, 440.0);
        assert_eq!(layout.height, 252.0 + 252.0 + 20.0 + 40.0);
    }

    #[test]
    fn test_fractional_sizes_round_up() {
        let table = Table::new().column(ContentColumn::new("a").width(10.5));
        let layout = TableRenderer::default().layout(&table.into());
        assert_eq!(layout.canvas_size(), (11, 0));
    }

    #[test]
    fn test_layout_serializes_to_json() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let layout = TableRenderer::default().layout(&input);
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["width"], 402.0);
        assert_eq!(json["windows"][0]["column_offsets"][1], 200.0);
    }
}

// ============================================================================
// Rendering
// ============================================================================

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_demo_draw_calls() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let canvas = TableRenderer::default().render(&RecordingBackend, &input);

        // 4 horizontal + 2 vertical separators
        assert_eq!(canvas.stroked_lines().len(), 6);
        // title + 3 headers + 4 rows of 3 cells
        assert_eq!(canvas.texts().len(), 16);
        assert_eq!(canvas.texts()[..4], ["Marketing Summary", "Campaign", "Install", "Cost"]);
    }

    #[test]
    fn test_document_and_builder_render_identically() {
        let document = TableInput::from_json_str(
            r#"{
                "title": "Summary",
                "columns": [{ "title": "Name", "dataIndex": "name" }, "|",
                            { "title": "Qty", "dataIndex": "qty", "align": "right", "width": 60 }],
                "dataSource": ["-", { "name": "Bolts", "qty": 40 }]
            }"#,
        )
        .unwrap();
        let built: TableInput = Table::new()
            .with_title("Summary")
            .column(ContentColumn::new("name").title("Name"))
            .column(Column::Separator)
            .column(ContentColumn::new("qty").title("Qty").right().width(60.0))
            .separator_row()
            .row(Row::record([("name", "Bolts"), ("qty", "40")]))
            .into();

        assert_eq!(document, built);
        let renderer = TableRenderer::default();
        assert_eq!(
            renderer.render(&RecordingBackend, &document),
            renderer.render(&RecordingBackend, &built)
        );
    }

    #[test]
    fn test_only_one_background_fill() {
        let input = TableInput::from_path(demo("multiple-tables.yaml")).unwrap();
        let canvas = TableRenderer::default().render(&RecordingBackend, &input);

        let fills = canvas
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, 1);
    }

    #[test]
    fn test_svg_output_has_clipped_body_cells() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let svg = render_svg(&input, &RenderOptions::default());

        // one clip per body cell, none for the title and header
        assert_eq!(svg.matches("<clipPath").count(), 12);
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(">$ 1,230</text>"));
    }

    #[cfg(feature = "raster")]
    #[test]
    fn test_png_default_options_draw_text() {
        use tabraster::canvas::RasterBackend;
        use tabraster::Canvas;

        let backend = RasterBackend::new();
        if backend.font_count() == 0 {
            eprintln!("no system fonts installed, skipping");
            return;
        }

        // no separators, so every dark pixel belongs to a glyph
        let table = Table::new()
            .with_title("Revenue")
            .column(ContentColumn::new("country").title("Country"))
            .row(Row::record([("country", "France")]));
        let canvas = TableRenderer::default().render(&backend, &table.into());

        let dark = (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter_map(|(x, y)| canvas.pixel(x, y))
            .filter(|c| c.r < 128)
            .count();
        assert!(dark > 0, "no text pixels on a {}x{} canvas", canvas.width(), canvas.height());
    }

    #[test]
    fn test_svg_canvas_matches_layout() {
        let input = TableInput::from_path(demo("lines.json")).unwrap();
        let renderer = TableRenderer::new(RenderOptions::padded(10.0));
        let canvas = renderer.render(&SvgBackend, &input);

        let svg = canvas.to_svg_string();
        assert!(svg.contains(r#"viewBox="0 0 422 274""#));
    }
}

// ============================================================================
// Persistence
// ============================================================================

mod persistence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_persist_svg_demo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.svg");
        let input = TableInput::from_path(demo("lines.json")).unwrap();

        let canvas = TableRenderer::default().render(&SvgBackend, &input);
        persist(&canvas, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, canvas.to_svg_string());
        assert_eq!(OutputFormat::from_path(&path), Some(OutputFormat::Svg));
    }

    #[cfg(feature = "raster")]
    #[test]
    fn test_png_demo_round_trip_dimensions() {
        use tabraster::canvas::RasterBackend;
        use tabraster::Color;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multiple-tables.png");
        let input = TableInput::from_path(demo("multiple-tables.yaml")).unwrap();
        let options = RenderOptions::from_path(demo("options.toml")).unwrap();

        let canvas =
            TableRenderer::new(options).render(&RasterBackend::without_system_fonts(), &input);
        // padding stays background
        assert_eq!(canvas.pixel(2, 2), Some(Color::WHITE));
        persist(&canvas, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // IHDR width and height, big endian
        assert_eq!(&bytes[16..20], &440u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &564u32.to_be_bytes());
    }
}
