//! SVG canvas - vector backend emitting an SVG document

use super::{Backend, Canvas, DrawState, Font, PathOp, TextAlign};
use crate::data::Color;
use std::fmt::Write;

/// Canvas that accumulates SVG elements
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    state: DrawState,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        SvgCanvas {
            width,
            height,
            state: DrawState::default(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements (paths, rectangles, text)
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the drawing as a standalone SVG document
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for def in &self.defs {
                out.push_str(def);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
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
        let path = self.state.take_path();
        if let Some(element) = path_element(&path, self.state.stroke, 1.0) {
            self.elements.push(element);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            x,
            y,
            width,
            height,
            paint_attrs("fill", self.state.fill)
        ));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, max_width: Option<f32>) {
        let clip_id = format!("clip{}", self.defs.len());
        let (clip, element) = text_markup(
            &self.state,
            text,
            x,
            y,
            max_width.map(|w| (w, clip_id.as_str(), self.height)),
        );
        if let Some(clip) = clip {
            self.defs.push(clip);
        }
        self.elements.push(element);
    }
}

/// Backend producing [`SvgCanvas`] surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgBackend;

impl Backend for SvgBackend {
    type Canvas = SvgCanvas;

    fn allocate(&self, width: u32, height: u32) -> SvgCanvas {
        SvgCanvas::new(width, height)
    }
}

/// `<path>` for a stroked path, `None` when it has no drawable segment
pub(crate) fn path_element(path: &[PathOp], color: Color, width: f32) -> Option<String> {
    if !path.iter().any(|op| matches!(op, PathOp::LineTo(..))) {
        return None;
    }

    let mut d = String::new();
    for (i, op) in path.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let _ = match op {
            PathOp::MoveTo(x, y) => write!(d, "M{} {}", x, y),
            PathOp::LineTo(x, y) => write!(d, "L{} {}", x, y),
        };
    }

    Some(format!(
        r#"<path d="{}" fill="none" stroke-width="{}"{}/>"#,
        d,
        width,
        paint_attrs("stroke", color)
    ))
}

/// `<text>` element for the current state, plus the `<clipPath>` definition
/// when a clip `(max_width, id, canvas_height)` is requested
pub(crate) fn text_markup(
    state: &DrawState,
    text: &str,
    x: f32,
    y: f32,
    clip: Option<(f32, &str, u32)>,
) -> (Option<String>, String) {
    let font = &state.font;
    let anchor = match state.align {
        TextAlign::Left => "start",
        TextAlign::Right => "end",
        TextAlign::Center => "middle",
    };

    let (clip_def, clip_attr) = match clip {
        Some((max_width, id, canvas_height)) => {
            let (start, _) = state.align.span(x, max_width.max(0.0));
            let def = format!(
                r#"<clipPath id="{}"><rect x="{}" y="0" width="{}" height="{}"/></clipPath>"#,
                id,
                start,
                max_width.max(0.0),
                canvas_height
            );
            (Some(def), format!(r#" clip-path="url(#{})""#, id))
        }
        None => (None, String::new()),
    };

    let element = format!(
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" font-style="{}" text-anchor="{}"{}{}>{}</text>"#,
        x,
        y,
        escape_xml(&font.family),
        font.size,
        font.weight,
        font.style.as_css(),
        anchor,
        paint_attrs("fill", state.fill),
        clip_attr,
        escape_xml(text)
    );

    (clip_def, element)
}

/// ` fill="#rrggbb"` (plus opacity when translucent) for `attr`
fn paint_attrs(attr: &str, color: Color) -> String {
    let opaque = Color::rgb(color.r, color.g, color.b);
    if color.a == 0xff {
        format!(r#" {}="{}""#, attr, opaque.to_hex())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            opaque.to_hex(),
            color.opacity(),
            attr = attr
        )
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let canvas = SvgBackend.allocate(301, 122);
        let svg = canvas.to_svg_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="301" height="122""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_stroke_emits_path_and_clears() {
        let mut canvas = SvgCanvas::new(100, 100);
        canvas.move_to(0.0, 40.0);
        canvas.line_to(100.0, 40.0);
        canvas.stroke();
        canvas.stroke();

        let svg = canvas.to_svg_string();
        assert_eq!(canvas.element_count(), 1);
        assert!(svg.contains(r#"d="M0 40 L100 40""#));
        assert!(svg.contains(r##"stroke="#000000""##));
    }

    #[test]
    fn test_text_is_escaped_and_anchored() {
        let mut canvas = SvgCanvas::new(100, 40);
        canvas.set_text_align(TextAlign::Right);
        canvas.fill_text("A & <B>", 92.0, 26.0, None);

        let svg = canvas.to_svg_string();
        assert!(svg.contains("A &amp; &lt;B&gt;"));
        assert!(svg.contains(r#"text-anchor="end""#));
    }

    #[test]
    fn test_max_width_adds_clip_path() {
        let mut canvas = SvgCanvas::new(200, 40);
        canvas.set_text_align(TextAlign::Right);
        canvas.fill_text("long", 192.0, 26.0, Some(184.0));

        let svg = canvas.to_svg_string();
        assert!(svg.contains(r#"<clipPath id="clip0"><rect x="8" y="0" width="184" height="40"/></clipPath>"#));
        assert!(svg.contains(r#"clip-path="url(#clip0)""#));
    }

    #[test]
    fn test_translucent_fill_uses_opacity() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.set_fill_style(Color::rgba(255, 0, 0, 0));
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0);
        assert!(canvas
            .to_svg_string()
            .contains(r##"fill="#ff0000" fill-opacity="0""##));
    }
}
