//! Font descriptors in CSS shorthand form (`bold 24px sans-serif`)

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref FONT_SHORTHAND: Regex = Regex::new(
        r"^(?:(normal|italic|oblique)\s+)?(?:(normal|bold|bolder|lighter|[1-9]00)\s+)?(\d+(?:\.\d+)?)px\s+(.+)$"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

/// Font description handed to a canvas; backends resolve the family themselves
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub style: FontStyle,
    /// CSS numeric weight (400 normal, 700 bold)
    pub weight: u16,
    /// Size in pixels
    pub size: f32,
    pub family: String,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Font {
            style: FontStyle::Normal,
            weight: 400,
            size,
            family: family.into(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = 700;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }

    /// Parse a `[style] [weight] <size>px <family>` shorthand.
    ///
    /// Returns `None` for anything outside that grammar; callers fall back
    /// to their default font.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = FONT_SHORTHAND.captures(input.trim())?;

        let style = match caps.get(1).map(|m| m.as_str()) {
            Some("italic") => FontStyle::Italic,
            Some("oblique") => FontStyle::Oblique,
            _ => FontStyle::Normal,
        };
        let weight = match caps.get(2).map(|m| m.as_str()) {
            None | Some("normal") => 400,
            Some("bold") => 700,
            Some("bolder") => 900,
            Some("lighter") => 300,
            Some(numeric) => numeric.parse().ok()?,
        };
        let size: f32 = caps.get(3)?.as_str().parse().ok()?;
        let family = caps.get(4)?.as_str().trim().to_string();

        Some(Font {
            style,
            weight,
            size,
            family,
        })
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = match self.weight {
            400 => "normal".to_string(),
            700 => "bold".to_string(),
            w => w.to_string(),
        };
        write!(
            f,
            "{} {} {}px {}",
            self.style.as_css(),
            weight,
            self.size,
            self.family
        )
    }
}
