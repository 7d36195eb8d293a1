//! Output formatting module

pub mod formatter;
pub mod human;
pub mod json;

pub use formatter::{format_catalog, format_info, OutputFormat};
