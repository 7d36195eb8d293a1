//! JSON output formatting

use serde_json::{json, Map, Value};

use crate::container::{ContainerInfo, InfoValue};

pub fn format_info_json(info: &ContainerInfo) -> String {
    serde_json::to_string_pretty(&info_value(info)).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_catalog_json(entries: &[(String, ContainerInfo)]) -> String {
    let mut map = Map::new();
    for (name, info) in entries {
        map.insert(name.clone(), info_value(info));
    }
    serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_else(|_| "{}".to_string())
}

fn info_value(info: &ContainerInfo) -> Value {
    let mut map = Map::new();
    map.insert("state".to_string(), json!(info.state));
    for (key, value) in &info.fields {
        let rendered = match value {
            InfoValue::One(v) => json!(v),
            InfoValue::Many(values) => json!(values),
        };
        map.insert(key.clone(), rendered);
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_json_shape() {
        let info = ContainerInfo::parse("State: RUNNING\nIP: 10.0.0.2\nPID: 1234\n");
        let parsed: Value = serde_json::from_str(&format_info_json(&info)).unwrap();
        assert_eq!(parsed["state"], "running");
        assert_eq!(parsed["ip"], "10.0.0.2");
        assert_eq!(parsed["pid"], "1234");
    }

    #[test]
    fn test_repeated_keys_become_arrays() {
        let info = ContainerInfo::parse("State: RUNNING\nIP: 10.0.0.2\nIP: fe80::1\n");
        let parsed: Value = serde_json::from_str(&format_info_json(&info)).unwrap();
        assert_eq!(parsed["ip"], json!(["10.0.0.2", "fe80::1"]));
    }

    #[test]
    fn test_catalog_json_maps_names() {
        let entries = vec![
            ("web".to_string(), ContainerInfo::parse("State: RUNNING\n")),
            ("db".to_string(), ContainerInfo::absent()),
        ];
        let parsed: Value = serde_json::from_str(&format_catalog_json(&entries)).unwrap();
        assert_eq!(parsed["web"]["state"], "running");
        assert_eq!(parsed["db"]["state"], "absent");
    }
}
