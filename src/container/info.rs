//! Parsed container attributes
//!
//! The runtime's inspection command prints line-oriented `Key: value`
//! output. `ContainerInfo` keeps whatever attributes the runtime reported,
//! in the order it reported them, with the state normalized into
//! [`LifecycleState`].

use super::state::LifecycleState;

/// Value of one reported attribute. The runtime repeats a key (several
/// `IP:` lines) when a container has more than one value for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    One(String),
    Many(Vec<String>),
}

impl InfoValue {
    fn push(&mut self, value: String) {
        match self {
            InfoValue::One(first) => {
                *self = InfoValue::Many(vec![std::mem::take(first), value]);
            }
            InfoValue::Many(values) => values.push(value),
        }
    }
}

/// Attributes of one container at probe time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub state: LifecycleState,
    /// Non-state attributes in first-seen order, keys lower-cased.
    pub fields: Vec<(String, InfoValue)>,
}

impl ContainerInfo {
    /// Info for a container the runtime has no record of. Extended fields
    /// would be meaningless, so there are none.
    pub fn absent() -> Self {
        Self {
            state: LifecycleState::Absent,
            fields: Vec::new(),
        }
    }

    /// Parse inspection output. Lines split on the first colon only, so
    /// IPv6 values keep theirs; keys and values are lower-cased; repeated
    /// keys collect into a list preserving first-seen order.
    pub fn parse(text: &str) -> Self {
        let mut state = LifecycleState::Absent;
        let mut fields: Vec<(String, InfoValue)> = Vec::new();

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            if key == "state" {
                state = LifecycleState::from_label(&value);
                continue;
            }
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => existing.push(value),
                None => fields.push((key, InfoValue::One(value))),
            }
        }

        Self { state, fields }
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_ip_pid() {
        let info = ContainerInfo::parse("State: RUNNING\nIP: 10.0.0.2\nPID: 1234\n");
        assert_eq!(info.state, LifecycleState::Running);
        assert_eq!(info.get("ip"), Some(&InfoValue::One("10.0.0.2".into())));
        assert_eq!(info.get("pid"), Some(&InfoValue::One("1234".into())));
    }

    #[test]
    fn test_repeated_keys_collect_in_order() {
        let info = ContainerInfo::parse("State: RUNNING\nIP: 10.0.0.2\nIP: fe80::1\n");
        assert_eq!(
            info.get("ip"),
            Some(&InfoValue::Many(vec!["10.0.0.2".into(), "fe80::1".into()]))
        );
    }

    #[test]
    fn test_ipv6_value_keeps_colons() {
        let info = ContainerInfo::parse("IP: fe80::1\n");
        assert_eq!(info.get("ip"), Some(&InfoValue::One("fe80::1".into())));
    }

    #[test]
    fn test_unknown_state_label_is_absent() {
        let info = ContainerInfo::parse("State: FROZEN\n");
        assert_eq!(info.state, LifecycleState::Absent);
    }

    #[test]
    fn test_absent_has_no_fields() {
        let info = ContainerInfo::absent();
        assert_eq!(info.state, LifecycleState::Absent);
        assert!(info.fields.is_empty());
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let info = ContainerInfo::parse("garbage line\nState: STOPPED\n");
        assert_eq!(info.state, LifecycleState::Stopped);
        assert!(info.fields.is_empty());
    }
}
