//! Container enumeration
//!
//! Lists every container the runtime knows about and aggregates their
//! probed info. Work grows linearly with container count; each probe is
//! independent and read-only.

use crate::error::Result;
use crate::runner::{BindMode, CommandRunner};

use super::info::ContainerInfo;
use super::probe;
use super::types::Container;

/// All containers on the system, one per `lxc-ls --line` output line, in
/// runtime order.
pub fn list_all(runner: &dyn CommandRunner) -> Result<Vec<Container>> {
    let argv = vec!["lxc-ls".to_string(), "--line".to_string()];
    let out = runner.run(&argv, BindMode::Batch)?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Container::new)
        .collect())
}

/// Probed info for every listed container, preserving list order.
pub fn list_info(runner: &dyn CommandRunner) -> Result<Vec<(String, ContainerInfo)>> {
    let mut infos = Vec::new();
    for container in list_all(runner)? {
        let info = probe::info(runner, &container.name)?;
        infos.push((container.name, info));
    }
    Ok(infos)
}
