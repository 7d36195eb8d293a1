//! Container lifecycle states

use std::fmt;

use serde::Serialize;

/// The three states the lifecycle logic distinguishes. `Absent` covers
/// everything the runtime cannot positively report as running or stopped,
/// including a failing inspection command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Running,
    Stopped,
    Absent,
}

impl LifecycleState {
    /// Map a runtime state label onto the closed set. Total: labels the
    /// runtime may emit but lxcm does not model (STARTING, FROZEN, ...)
    /// collapse to `Absent` rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "running" => LifecycleState::Running,
            "stopped" => LifecycleState::Stopped,
            _ => LifecycleState::Absent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Running => "running",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Absent => "absent",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
