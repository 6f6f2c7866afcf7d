//! Table and title style types, and the one-or-many render input

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

use super::column::{non_empty, Column, ContentColumn};
use super::row::Row;
use crate::canvas::{Font, TextAlign};
use crate::core::options::extension_of;
use crate::data::Color;
use crate::utils::error::{RenderError, RenderResult};

/// Title overrides; unset fields use the engine defaults
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TitleStyle {
    pub font: Option<Font>,
    pub fill: Option<Color>,
    pub align: Option<TextAlign>,
    /// Added to the title baseline
    pub offset_top: f32,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct TitleStyleRepr {
    font: Option<String>,
    fill_style: Option<String>,
    text_align: Option<String>,
    offset_top: Option<f32>,
}

impl From<TitleStyleRepr> for TitleStyle {
    fn from(repr: TitleStyleRepr) -> Self {
        let font = repr.font.and_then(|raw| {
            let font = Font::parse(&raw);
            if font.is_none() {
                log::warn!("Unparsable title font '{}', using default", raw);
            }
            font
        });
        let fill = repr.fill_style.and_then(|raw| {
            let color = Color::parse(&raw);
            if color.is_none() {
                log::warn!("Unparsable title fill '{}', using default", raw);
            }
            color
        });
        let align = repr.text_align.and_then(|raw| {
            let align = TextAlign::parse(&raw);
            if align.is_none() {
                log::warn!("Unknown title alignment '{}', using default", raw);
            }
            align
        });

        TitleStyle {
            font,
            fill,
            align,
            offset_top: repr.offset_top.unwrap_or(0.0),
        }
    }
}

/// A table description: optional title, columns and rows
///
/// Absent `columns`/`dataSource` in a document are read as empty sequences
/// and an empty title as no title.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "TableRepr")]
pub struct Table {
    pub title: Option<String>,
    pub title_style: TitleStyle,
    pub columns: Vec<Column>,
    pub data_source: Vec<Row>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct TableRepr {
    title: Option<String>,
    title_style: Option<TitleStyleRepr>,
    columns: Option<Vec<Column>>,
    data_source: Option<Vec<Row>>,
}

impl From<TableRepr> for Table {
    fn from(repr: TableRepr) -> Self {
        Table {
            title: repr.title.and_then(non_empty),
            title_style: repr.title_style.map(TitleStyle::from).unwrap_or_default(),
            columns: repr.columns.unwrap_or_default(),
            data_source: repr.data_source.unwrap_or_default(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    pub fn with_title_style(mut self, style: TitleStyle) -> Self {
        self.title_style = style;
        self
    }

    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn separator_column(mut self) -> Self {
        self.columns.push(Column::Separator);
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.data_source.push(row);
        self
    }

    pub fn separator_row(mut self) -> Self {
        self.data_source.push(Row::Separator);
        self
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    /// True when at least one content column carries a title
    pub fn has_header(&self) -> bool {
        has_header(&self.columns)
    }

    /// Content columns with their position in `columns`
    pub fn content_columns(&self) -> impl Iterator<Item = (usize, &ContentColumn)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(i, col)| col.as_content().map(|c| (i, c)))
    }
}

pub(crate) fn has_header(columns: &[Column]) -> bool {
    columns.iter().any(|col| col.title().is_some())
}

/// Render input: a single table or a stack of tables
#[derive(Debug, Clone, PartialEq)]
pub enum TableInput {
    Many(Vec<Table>),
    One(Table),
}

/// A sequence is a stack and a mapping a single table; either way, errors
/// inside a table are reported as is
impl<'de> Deserialize<'de> for TableInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputVisitor;

        impl<'de> Visitor<'de> for InputVisitor {
            type Value = TableInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table object or a list of tables")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<TableInput, A::Error> {
                Vec::deserialize(SeqAccessDeserializer::new(seq)).map(TableInput::Many)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<TableInput, A::Error> {
                Table::deserialize(MapAccessDeserializer::new(map)).map(TableInput::One)
            }
        }

        deserializer.deserialize_any(InputVisitor)
    }
}

impl TableInput {
    /// The tables in stacking order
    pub fn tables(&self) -> &[Table] {
        match self {
            TableInput::Many(tables) => tables,
            TableInput::One(table) => std::slice::from_ref(table),
        }
    }

    pub fn from_json_str(input: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    #[cfg(feature = "data-loading")]
    pub fn from_yaml_str(input: &str) -> RenderResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load a document by extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| RenderError::io(path, source))?;

        match extension_of(path).as_deref() {
            Some("json") => Self::from_json_str(&content),
            #[cfg(feature = "data-loading")]
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            other => Err(RenderError::unsupported(other.unwrap_or("<none>"))),
        }
    }
}

impl From<Table> for TableInput {
    fn from(table: Table) -> Self {
        TableInput::One(table)
    }
}

impl From<Vec<Table>> for TableInput {
    fn from(tables: Vec<Table>) -> Self {
        TableInput::Many(tables)
    }
}
