//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Encoding and atomic persisting of rendered surfaces

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{RenderError, RenderResult};
pub use files::{persist, write_atomic, Encode, OutputFormat};
