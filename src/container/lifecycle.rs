//! Lifecycle state machine
//!
//! The only decision logic in the crate. Every operation probes the
//! container's state immediately before deciding, then either reports the
//! goal as already met, refuses without an explicit override, or delegates
//! one or more runtime commands through the supervisor wrapper. Composite
//! operations (start implies create, destroy implies stop) go through the
//! public sub-operation, so each step re-probes on its own.

use crate::error::{LxcmError, Result};
use crate::runner::{supervised, BindMode, CommandRunner};

use super::probe;
use super::state::LifecycleState;
use super::types::Container;

/// What a mutating operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One or more runtime commands were delegated.
    Performed,
    /// The goal state already held; nothing was delegated.
    Unchanged,
}

/// Drives containers between states by delegating to the runtime's tools.
pub struct Lifecycle<'r> {
    runner: &'r dyn CommandRunner,
    dry_run: bool,
}

impl<'r> Lifecycle<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self {
            runner,
            dry_run: false,
        }
    }

    /// Probe and decide as usual, but issue no runtime command.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Create the container from its download template. Requires all three
    /// template parameters, checked before anything else runs.
    pub fn create(&self, container: &Container) -> Result<Transition> {
        let (Some(dist), Some(release), Some(arch)) = (
            container.distribution.as_deref(),
            container.release.as_deref(),
            container.architecture.as_deref(),
        ) else {
            return Err(LxcmError::MissingParameters);
        };

        if probe::state(self.runner, &container.name)? != LifecycleState::Absent {
            return Ok(Transition::Unchanged);
        }

        let command = string_vec(&[
            "lxc-create",
            "--template",
            "download",
            "--name",
            &container.name,
            "--",
            "--dist",
            dist,
            "--release",
            release,
            "--arch",
            arch,
        ]);
        self.delegate("lxc-create", &container.name, &command, BindMode::Batch)?;
        Ok(Transition::Performed)
    }

    /// Start the container. An absent container is only created first when
    /// `force` is set, and creation then needs the template parameters.
    pub fn start(&self, container: &Container, force: bool) -> Result<Transition> {
        match probe::state(self.runner, &container.name)? {
            LifecycleState::Running => return Ok(Transition::Unchanged),
            LifecycleState::Absent if !force => return Err(LxcmError::MustForce),
            LifecycleState::Absent => {
                self.create(container)?;
            }
            LifecycleState::Stopped => {}
        }

        let command = string_vec(&["lxc-start", "--name", &container.name]);
        self.delegate("lxc-start", &container.name, &command, BindMode::Batch)?;
        Ok(Transition::Performed)
    }

    /// Stop the container. Safe from any state: anything not running is
    /// already stopped as far as the caller cares.
    pub fn stop(&self, container: &Container) -> Result<Transition> {
        if probe::state(self.runner, &container.name)? != LifecycleState::Running {
            return Ok(Transition::Unchanged);
        }

        let command = string_vec(&["lxc-stop", "--name", &container.name]);
        self.delegate("lxc-stop", &container.name, &command, BindMode::Batch)?;
        Ok(Transition::Performed)
    }

    /// Destroy the container. A container that is not stopped needs
    /// `force`, which implies stopping it first.
    pub fn destroy(&self, container: &Container, force: bool) -> Result<Transition> {
        let state = probe::state(self.runner, &container.name)?;
        if state == LifecycleState::Absent {
            return Ok(Transition::Unchanged);
        }
        if state != LifecycleState::Stopped && !force {
            return Err(LxcmError::MustForce);
        }

        self.stop(container)?;

        let command = string_vec(&["lxc-destroy", "--name", &container.name]);
        self.delegate("lxc-destroy", &container.name, &command, BindMode::Batch)?;
        Ok(Transition::Performed)
    }

    /// Stop then start. Start's own force/create semantics apply.
    pub fn restart(&self, container: &Container, force: bool) -> Result<Transition> {
        self.stop(container)?;
        self.start(container, force)
    }

    /// Run a command inside the container, or a shell when `inner` is
    /// empty. Attaching to a container that is not running needs
    /// `force_run` (or `force`, which additionally permits creation).
    pub fn attach(
        &self,
        container: &Container,
        inner: &[String],
        mode: BindMode,
        force_run: bool,
        force: bool,
    ) -> Result<Transition> {
        let force_run = force_run || force;
        if probe::state(self.runner, &container.name)? != LifecycleState::Running && !force_run {
            return Err(LxcmError::MustForce);
        }

        // No-op when already running.
        self.start(container, force)?;

        let mut command = string_vec(&["lxc-attach", "--name", &container.name]);
        if !inner.is_empty() {
            command.push("--".to_string());
            command.extend_from_slice(inner);
        }
        self.delegate("lxc-attach", &container.name, &command, mode)?;
        Ok(Transition::Performed)
    }

    fn delegate(&self, tool: &str, name: &str, command: &[String], mode: BindMode) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        let unit = format!("{tool}-{name}");
        self.runner.run(&supervised(&unit, command), mode)?;
        Ok(())
    }
}

fn string_vec(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
