//! Human-readable output formatting

use crate::container::{ContainerInfo, InfoValue, LifecycleState};

pub fn format_info_human(info: &ContainerInfo) -> String {
    let mut output = format!("state: {}", info.state);
    for (key, value) in &info.fields {
        output.push_str(&format!("\n{key}: {}", render_value(value)));
    }
    output
}

pub fn format_catalog_human(entries: &[(String, ContainerInfo)]) -> String {
    let mut lines = Vec::new();
    for (name, info) in entries {
        lines.push(format!("{name}  {}", summary(info)));
    }
    lines.join("\n")
}

fn summary(info: &ContainerInfo) -> String {
    if info.state == LifecycleState::Absent && info.fields.is_empty() {
        return info.state.to_string();
    }
    let mut parts = vec![info.state.to_string()];
    for (key, value) in &info.fields {
        parts.push(format!("{key}={}", render_value(value)));
    }
    parts.join("  ")
}

fn render_value(value: &InfoValue) -> String {
    match value {
        InfoValue::One(v) => v.clone(),
        InfoValue::Many(values) => values.join(","),
    }
}
