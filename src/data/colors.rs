//! Colour support for fill and stroke styles
//! Parses the CSS colour notations accepted in options and title styles

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// CSS named colours (CSS Color Module Level 4 basic set plus common extended names)
    pub static ref NAMED_COLORS: HashMap<&'static str, (u8, u8, u8)> = {
        let mut m = HashMap::new();

        // Basic colours
        m.insert("black", (0x00, 0x00, 0x00));
        m.insert("white", (0xff, 0xff, 0xff));
        m.insert("red", (0xff, 0x00, 0x00));
        m.insert("green", (0x00, 0x80, 0x00));
        m.insert("blue", (0x00, 0x00, 0xff));
        m.insert("yellow", (0xff, 0xff, 0x00));
        m.insert("cyan", (0x00, 0xff, 0xff));
        m.insert("aqua", (0x00, 0xff, 0xff));
        m.insert("magenta", (0xff, 0x00, 0xff));
        m.insert("fuchsia", (0xff, 0x00, 0xff));
        m.insert("orange", (0xff, 0xa5, 0x00));
        m.insert("purple", (0x80, 0x00, 0x80));
        m.insert("pink", (0xff, 0xc0, 0xcb));
        m.insert("brown", (0xa5, 0x2a, 0x2a));
        m.insert("gray", (0x80, 0x80, 0x80));
        m.insert("grey", (0x80, 0x80, 0x80));
        m.insert("lime", (0x00, 0xff, 0x00));
        m.insert("olive", (0x80, 0x80, 0x00));
        m.insert("teal", (0x00, 0x80, 0x80));
        m.insert("navy", (0x00, 0x00, 0x80));
        m.insert("maroon", (0x80, 0x00, 0x00));
        m.insert("silver", (0xc0, 0xc0, 0xc0));

        // Extended names that show up in report styling
        m.insert("darkgray", (0xa9, 0xa9, 0xa9));
        m.insert("darkgrey", (0xa9, 0xa9, 0xa9));
        m.insert("dimgray", (0x69, 0x69, 0x69));
        m.insert("dimgrey", (0x69, 0x69, 0x69));
        m.insert("lightgray", (0xd3, 0xd3, 0xd3));
        m.insert("lightgrey", (0xd3, 0xd3, 0xd3));
        m.insert("gainsboro", (0xdc, 0xdc, 0xdc));
        m.insert("whitesmoke", (0xf5, 0xf5, 0xf5));
        m.insert("slategray", (0x70, 0x80, 0x90));
        m.insert("darkslategray", (0x2f, 0x4f, 0x4f));
        m.insert("darkred", (0x8b, 0x00, 0x00));
        m.insert("crimson", (0xdc, 0x14, 0x3c));
        m.insert("firebrick", (0xb2, 0x22, 0x22));
        m.insert("tomato", (0xff, 0x63, 0x47));
        m.insert("coral", (0xff, 0x7f, 0x50));
        m.insert("darkorange", (0xff, 0x8c, 0x00));
        m.insert("gold", (0xff, 0xd7, 0x00));
        m.insert("khaki", (0xf0, 0xe6, 0x8c));
        m.insert("darkgreen", (0x00, 0x64, 0x00));
        m.insert("forestgreen", (0x22, 0x8b, 0x22));
        m.insert("seagreen", (0x2e, 0x8b, 0x57));
        m.insert("limegreen", (0x32, 0xcd, 0x32));
        m.insert("darkblue", (0x00, 0x00, 0x8b));
        m.insert("mediumblue", (0x00, 0x00, 0xcd));
        m.insert("royalblue", (0x41, 0x69, 0xe1));
        m.insert("steelblue", (0x46, 0x82, 0xb4));
        m.insert("dodgerblue", (0x1e, 0x90, 0xff));
        m.insert("skyblue", (0x87, 0xce, 0xeb));
        m.insert("lightblue", (0xad, 0xd8, 0xe6));
        m.insert("midnightblue", (0x19, 0x19, 0x70));
        m.insert("indigo", (0x4b, 0x00, 0x82));
        m.insert("violet", (0xee, 0x82, 0xee));
        m.insert("orchid", (0xda, 0x70, 0xd6));
        m.insert("beige", (0xf5, 0xf5, 0xdc));
        m.insert("ivory", (0xff, 0xff, 0xf0));
        m.insert("linen", (0xfa, 0xf0, 0xe6));
        m.insert("snow", (0xff, 0xfa, 0xfa));

        m
    };

    static ref RGB_FUNCTION: Regex = Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
}

/// An 8-bit RGBA colour (straight alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parse a CSS colour: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` or a named colour.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if lower == "transparent" {
            return Some(Color::TRANSPARENT);
        }
        if let Some(&(r, g, b)) = NAMED_COLORS.get(lower.as_str()) {
            return Some(Color::rgb(r, g, b));
        }

        let caps = RGB_FUNCTION.captures(&lower)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u16>().ok().filter(|v| *v <= 255);
        let alpha = match caps.get(4) {
            Some(m) => {
                let a: f32 = m.as_str().parse().ok()?;
                (a.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 0xff,
        };
        Some(Color::rgba(
            channel(1)? as u8,
            channel(2)? as u8,
            channel(3)? as u8,
            alpha,
        ))
    }

    /// Hex notation, `#rrggbb` when opaque and `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Alpha as a 0..=1 opacity
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| format!("unrecognized colour '{}'", s))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#ffffff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#333"), Some(Color::rgb(0x33, 0x33, 0x33)));
        assert_eq!(Color::parse("#00000080"), Some(Color::rgba(0, 0, 0, 0x80)));
        assert_eq!(Color::parse("#f008"), Some(Color::rgba(0xff, 0, 0, 0x88)));
    }

    #[test]
    fn test_parse_named_and_functional() {
        assert_eq!(Color::parse("Black"), Some(Color::BLACK));
        assert_eq!(Color::parse("steelblue"), Some(Color::rgb(0x46, 0x82, 0xb4)));
        assert_eq!(Color::parse("rgb(10, 20, 30)"), Some(Color::rgb(10, 20, 30)));
        assert_eq!(
            Color::parse("rgba(10, 20, 30, 0.5)"),
            Some(Color::rgba(10, 20, 30, 128))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("#gggggg"), None);
        assert_eq!(Color::parse("rgb(300, 0, 0)"), None);
        assert_eq!(Color::parse("not-a-colour"), None);
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Color::rgb(0x33, 0x33, 0x33).to_hex(), "#333333");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_serde_as_string() {
        let c: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(c, Color::rgb(255, 0, 0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0000\"");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
