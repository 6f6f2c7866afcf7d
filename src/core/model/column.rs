//! Column types for table layout

use serde::de::{self, value::MapAccessDeserializer, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::canvas::TextAlign;

/// Marker string for a separator column in table documents
pub const COLUMN_SEPARATOR: &str = "|";

/// Horizontal alignment of header and body text within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Right,
}

impl ColumnAlign {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(ColumnAlign::Left),
            "right" => Some(ColumnAlign::Right),
            _ => None,
        }
    }

    pub fn text_align(&self) -> TextAlign {
        match self {
            ColumnAlign::Left => TextAlign::Left,
            ColumnAlign::Right => TextAlign::Right,
        }
    }
}

/// A data-carrying column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentColumn {
    /// Explicit width; `None` uses the configured cell width
    pub width: Option<f32>,
    /// Header label; never `Some("")`
    pub title: Option<String>,
    /// Key looked up in each record row
    pub data_index: String,
    pub align: ColumnAlign,
    pub prefix: String,
    pub suffix: String,
}

impl ContentColumn {
    pub fn new(data_index: impl Into<String>) -> Self {
        ContentColumn {
            data_index: data_index.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn right(self) -> Self {
        self.align(ColumnAlign::Right)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Cell text for `value`: `prefix + value + suffix`
    pub fn decorate(&self, value: &str) -> String {
        let mut text = String::with_capacity(self.prefix.len() + value.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(value);
        text.push_str(&self.suffix);
        text
    }
}

/// A table column: a hairline separator or a content column
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ColumnRepr")]
pub enum Column {
    Separator,
    Content(ContentColumn),
}

impl Column {
    pub fn separator() -> Self {
        Column::Separator
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Column::Separator)
    }

    pub fn as_content(&self) -> Option<&ContentColumn> {
        match self {
            Column::Content(col) => Some(col),
            Column::Separator => None,
        }
    }

    /// Header label of a content column
    pub fn title(&self) -> Option<&str> {
        self.as_content().and_then(|col| col.title.as_deref())
    }
}

impl From<ContentColumn> for Column {
    fn from(col: ContentColumn) -> Self {
        Column::Content(col)
    }
}

/// Document form: `"|"` or a column object
enum ColumnRepr {
    Marker(String),
    Content(ContentColumnRepr),
}

/// Dispatches on the document shape so errors inside a column object keep
/// their own message and location
impl<'de> Deserialize<'de> for ColumnRepr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnVisitor;

        impl<'de> Visitor<'de> for ColumnVisitor {
            type Value = ColumnRepr;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "'{}' or a column object", COLUMN_SEPARATOR)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ColumnRepr, E> {
                Ok(ColumnRepr::Marker(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ColumnRepr, A::Error> {
                ContentColumnRepr::deserialize(MapAccessDeserializer::new(map))
                    .map(ColumnRepr::Content)
            }
        }

        deserializer.deserialize_any(ColumnVisitor)
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ContentColumnRepr {
    width: Option<f32>,
    title: Option<String>,
    data_index: Option<String>,
    align: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl TryFrom<ColumnRepr> for Column {
    type Error = String;

    fn try_from(repr: ColumnRepr) -> Result<Self, Self::Error> {
        match repr {
            ColumnRepr::Marker(marker) if marker == COLUMN_SEPARATOR => Ok(Column::Separator),
            ColumnRepr::Marker(marker) => Err(format!(
                "unknown column marker '{}', expected '{}' or a column object",
                marker, COLUMN_SEPARATOR
            )),
            ColumnRepr::Content(c) => {
                let align = match c.align.as_deref() {
                    None => ColumnAlign::Left,
                    Some(raw) => ColumnAlign::parse(raw).unwrap_or_else(|| {
                        log::warn!("Unknown column alignment '{}', using left", raw);
                        ColumnAlign::Left
                    }),
                };
                Ok(Column::Content(ContentColumn {
                    width: c.width,
                    title: c.title.and_then(non_empty),
                    data_index: c.data_index.unwrap_or_default(),
                    align,
                    prefix: c.prefix.unwrap_or_default(),
                    suffix: c.suffix.unwrap_or_default(),
                }))
            }
        }
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
