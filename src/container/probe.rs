//! State probing
//!
//! Read-only queries against the runtime's inspection command. Nothing
//! here is cached: every call re-execs `lxc-info` so decisions are made on
//! fresh state. A failing inspection means the container is absent; only a
//! missing runtime binary is an actual error.

use crate::error::{LxcmError, Result};
use crate::runner::{BindMode, CommandRunner};

use super::info::ContainerInfo;
use super::state::LifecycleState;

/// Probe the current lifecycle state of `name`.
pub fn state(runner: &dyn CommandRunner, name: &str) -> Result<LifecycleState> {
    let argv = info_argv(name, false);
    match runner.run(&argv, BindMode::Batch) {
        Ok(out) => Ok(ContainerInfo::parse(&out).state),
        Err(LxcmError::DelegationFailed { .. }) => Ok(LifecycleState::Absent),
        Err(err) => Err(err),
    }
}

/// Probe state plus extended attributes (IP addresses, init pid).
pub fn info(runner: &dyn CommandRunner, name: &str) -> Result<ContainerInfo> {
    let argv = info_argv(name, true);
    match runner.run(&argv, BindMode::Batch) {
        Ok(out) => Ok(ContainerInfo::parse(&out)),
        Err(LxcmError::DelegationFailed { .. }) => Ok(ContainerInfo::absent()),
        Err(err) => Err(err),
    }
}

fn info_argv(name: &str, extended: bool) -> Vec<String> {
    let mut argv = vec!["lxc-info".to_string(), "--state".to_string()];
    if extended {
        argv.push("--ips".to_string());
        argv.push("--pid".to_string());
    }
    argv.push("--name".to_string());
    argv.push(name.to_string());
    argv
}
