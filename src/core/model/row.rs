//! Row types for table layout

use indexmap::IndexMap;
use serde::de::{self, value::MapAccessDeserializer, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use super::column::ContentColumn;

/// Marker string for a separator row in table documents
pub const ROW_SEPARATOR: &str = "-";

/// A table row: a hairline separator or a record keyed by `data_index`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RowRepr")]
pub enum Row {
    Separator,
    Record(IndexMap<String, String>),
}

impl Row {
    pub fn separator() -> Self {
        Row::Separator
    }

    /// Build a record row from `(key, value)` pairs
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Row::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Row::Separator)
    }

    /// Raw value stored under `key`; separators have none
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Row::Record(fields) => fields.get(key).map(String::as_str),
            Row::Separator => None,
        }
    }

    /// Non-empty value for a column, i.e. a value that produces a text draw
    pub fn value_for(&self, column: &ContentColumn) -> Option<&str> {
        self.get(&column.data_index).filter(|v| !v.is_empty())
    }
}

/// Document form: `"-"` or a mapping of scalars
enum RowRepr {
    Marker(String),
    Record(IndexMap<String, Option<CellText>>),
}

impl<'de> Deserialize<'de> for RowRepr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = RowRepr;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "'{}' or a record", ROW_SEPARATOR)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RowRepr, E> {
                Ok(RowRepr::Marker(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<RowRepr, A::Error> {
                IndexMap::deserialize(MapAccessDeserializer::new(map)).map(RowRepr::Record)
            }
        }

        deserializer.deserialize_any(RowVisitor)
    }
}

/// Cell values are strings in documents; numbers and booleans are accepted
/// and rendered with their usual textual form
struct CellText(String);

impl<'de> Deserialize<'de> for CellText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl<'de> Visitor<'de> for CellVisitor {
            type Value = CellText;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean cell value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CellText, E> {
                Ok(CellText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CellText, E> {
                Ok(CellText(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<CellText, E> {
                Ok(CellText(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CellText, E> {
                Ok(CellText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CellText, E> {
                Ok(CellText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CellText, E> {
                Ok(CellText(v.to_string()))
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

impl TryFrom<RowRepr> for Row {
    type Error = String;

    fn try_from(repr: RowRepr) -> Result<Self, Self::Error> {
        match repr {
            RowRepr::Marker(marker) if marker == ROW_SEPARATOR => Ok(Row::Separator),
            RowRepr::Marker(marker) => Err(format!(
                "unknown row marker '{}', expected '{}' or a record",
                marker, ROW_SEPARATOR
            )),
            RowRepr::Record(fields) => Ok(Row::Record(
                fields
                    .into_iter()
                    .filter_map(|(k, v)| v.map(|CellText(text)| (k, text)))
                    .collect(),
            )),
        }
    }
}
