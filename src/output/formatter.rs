//! Output formatting

use crate::container::ContainerInfo;
use crate::output::human::{format_catalog_human, format_info_human};
use crate::output::json::{format_catalog_json, format_info_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_info(info: &ContainerInfo, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_info_human(info),
        OutputFormat::Json => format_info_json(info),
    }
}

pub fn format_catalog(entries: &[(String, ContainerInfo)], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_catalog_human(entries),
        OutputFormat::Json => format_catalog_json(entries),
    }
}
