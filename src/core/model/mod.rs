//! Table data model
//!
//! Caller-constructed, immutable input for the layout engine. Document
//! markers (`"|"` columns, `"-"` rows) are resolved into tagged variants once,
//! at deserialization or construction time, and optional fields are resolved
//! to their defaults there as well:
//!
//! ```text
//! JSON/YAML document -> Table { columns: [Column], data_source: [Row] } -> Geometry
//! ```
//!
//! # Example
//!
//! ```
//! use tabraster::{ContentColumn, Row, Table};
//!
//! let table = Table::new()
//!     .with_title("Marketing Summary")
//!     .column(ContentColumn::new("campaign").title("Campaign").width(200.0))
//!     .separator_column()
//!     .column(ContentColumn::new("install").title("Install").right())
//!     .separator_row()
//!     .row(Row::record([("campaign", "Google CPC"), ("install", "12")]));
//!
//! assert!(table.has_header());
//! ```

mod column;
mod row;
mod table;


// Re-export public API
pub use column::{Column, ColumnAlign, ContentColumn, COLUMN_SEPARATOR};
pub use row::{Row, ROW_SEPARATOR};
pub use table::{Table, TableInput, TitleStyle};

pub(crate) use table::has_header;
