//! Raster canvas - tiny-skia pixmap surface
//!
//! Paths and rectangles are drawn directly with tiny-skia. Text goes through
//! resvg: each `fill_text` call becomes a one-element SVG document that usvg
//! lays out against the shared font database and resvg composites onto the
//! pixmap. Text shaping and font fallback are therefore entirely delegated.
//!
//! The generic CSS families (`sans-serif`, `serif`, `monospace`) are pointed
//! at installed faces whenever the font database changes, since fontdb's
//! built-in names (Arial, Times New Roman, Courier New) are often missing.

use std::path::Path;
use std::sync::Arc;

use resvg::usvg::{self, fontdb};
use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::svg::text_markup;
use super::{Backend, Canvas, DrawState, Font, PathOp, TextAlign};
use crate::data::constants::LINE_WIDTH;
use crate::data::Color;

/// Canvas backed by a premultiplied RGBA8 pixmap
///
/// A zero-sized canvas has no pixmap: drawing is a no-op and the pixel
/// buffer is empty.
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixmap: Option<Pixmap>,
    state: DrawState,
    text_options: usvg::Options<'static>,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, fontdb: Arc<fontdb::Database>) -> Self {
        let pixmap = Pixmap::new(width, height);
        if pixmap.is_none() && width > 0 && height > 0 {
            log::warn!(
                "Cannot allocate a {}x{} pixmap, drawing will be skipped",
                width,
                height
            );
        }

        let mut text_options = usvg::Options::default();
        text_options.fontdb = fontdb;

        RasterCanvas {
            width,
            height,
            pixmap,
            state: DrawState::default(),
            text_options,
        }
    }

    /// Premultiplied RGBA8 pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.as_ref().map(|p| p.data()).unwrap_or(&[])
    }

    /// Straight-alpha colour of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn into_pixmap(self) -> Option<Pixmap> {
        self.pixmap
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }
}

impl std::fmt::Debug for RasterCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.state.path.push(PathOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.state.path.push(PathOp::LineTo(x, y));
    }

    fn stroke(&mut self) {
        let ops = self.state.take_path();
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };

        let mut pb = PathBuilder::new();
        for op in ops {
            match op {
                PathOp::MoveTo(x, y) => pb.move_to(x, y),
                PathOp::LineTo(x, y) => pb.line_to(x, y),
            }
        }
        // Paths with fewer than two points have nothing to stroke
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width: LINE_WIDTH,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &path,
            &Self::paint(self.state.stroke),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            pixmap.fill_rect(rect, &Self::paint(self.state.fill), Transform::identity(), None);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>) {
        if text.is_empty() {
            return;
        }
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };

        let (clip, element) = text_markup(
            &self.state,
            text,
            x,
            y,
            max_width.map(|w| (w, "clip", self.height)),
        );
        let document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><defs>{}</defs>{}</svg>"#,
            clip.unwrap_or_default(),
            element,
            w = self.width,
            h = self.height
        );

        match usvg::Tree::from_str(&document, &self.text_options) {
            Ok(tree) => resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut()),
            Err(err) => log::warn!("Skipping text {:?}: {}", text, err),
        }
    }
}

/// Backend producing [`RasterCanvas`] surfaces that share one font database
#[derive(Clone)]
pub struct RasterBackend {
    fontdb: Arc<fontdb::Database>,
}

impl RasterBackend {
    /// Backend with the system fonts loaded
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} system font faces", db.len());
        Self::with_database(db)
    }

    /// Backend with an empty font database; text renders only after fonts
    /// are added with [`RasterBackend::load_fonts_dir`]
    pub fn without_system_fonts() -> Self {
        Self::with_database(fontdb::Database::new())
    }

    pub fn with_database(mut db: fontdb::Database) -> Self {
        resolve_generic_families(&mut db);
        RasterBackend {
            fontdb: Arc::new(db),
        }
    }

    /// Add every font file found under `dir`
    pub fn load_fonts_dir(&mut self, dir: impl AsRef<Path>) {
        let db = Arc::make_mut(&mut self.fontdb);
        let before = db.len();
        db.load_fonts_dir(dir.as_ref());
        log::debug!(
            "Loaded {} font faces from {}",
            db.len() - before,
            dir.as_ref().display()
        );
        resolve_generic_families(db);
    }

    /// Face family currently used for `family`
    pub fn generic_family<'a>(&'a self, family: &'a fontdb::Family<'a>) -> &'a str {
        self.fontdb.family_name(family)
    }

    /// Number of font faces available to text rendering
    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for RasterBackend {
    type Canvas = RasterCanvas;

    fn allocate(&self, width: u32, height: u32) -> RasterCanvas {
        RasterCanvas::new(width, height, Arc::clone(&self.fontdb))
    }
}

const SANS_SERIF_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
];
const SERIF_FAMILIES: &[&str] = &[
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "Times New Roman",
];
const MONOSPACE_FAMILIES: &[&str] = &[
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Noto Sans Mono",
    "Courier New",
];

/// Map the generic families onto faces present in `db`
///
/// A family that is already installed is kept; otherwise the first installed
/// preferred family wins, and failing that the first loaded face.
fn resolve_generic_families(db: &mut fontdb::Database) {
    if db.len() == 0 {
        return;
    }

    let faces: Vec<(String, bool)> = db
        .faces()
        .flat_map(|face| {
            face.families
                .iter()
                .map(move |(name, _)| (name.clone(), face.monospaced))
        })
        .collect();
    let all: Vec<&str> = faces.iter().map(|(name, _)| name.as_str()).collect();
    let mono: Vec<&str> = faces
        .iter()
        .filter(|(_, monospaced)| *monospaced)
        .map(|(name, _)| name.as_str())
        .collect();

    let sans = pick_family(
        &all,
        db.family_name(&fontdb::Family::SansSerif),
        SANS_SERIF_FAMILIES,
    );
    let serif = pick_family(&all, db.family_name(&fontdb::Family::Serif), SERIF_FAMILIES);
    let current_mono = db.family_name(&fontdb::Family::Monospace);
    let monospace = pick_family(&mono, current_mono, MONOSPACE_FAMILIES)
        .or_else(|| pick_family(&all, current_mono, MONOSPACE_FAMILIES));

    if let Some(name) = sans {
        log::debug!("sans-serif resolves to '{}'", name);
        db.set_sans_serif_family(name);
    }
    if let Some(name) = serif {
        log::debug!("serif resolves to '{}'", name);
        db.set_serif_family(name);
    }
    if let Some(name) = monospace {
        log::debug!("monospace resolves to '{}'", name);
        db.set_monospace_family(name);
    }
}

fn pick_family(installed: &[&str], current: &str, preferred: &[&str]) -> Option<String> {
    std::iter::once(current)
        .chain(preferred.iter().copied())
        .find_map(|want| {
            installed
                .iter()
                .find(|name| name.eq_ignore_ascii_case(want))
        })
        .or_else(|| installed.first())
        .map(|name| name.to_string())
}
