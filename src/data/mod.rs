//! Data layer - Static tables and constants
//!
//! This module contains the static data used while rendering:
//! - Named colours and colour parsing
//! - Default option values and fixed styling constants

pub mod colors;
pub mod constants;

// Re-export commonly used items
pub use colors::{Color, NAMED_COLORS};
