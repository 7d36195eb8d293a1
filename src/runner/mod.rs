//! External command execution
//!
//! Everything lxcm does to the system goes through [`CommandRunner`]: a
//! single trait seam between the lifecycle logic and the OS. The production
//! implementation spawns real processes; tests substitute a scripted runner.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{LxcmError, Result};

/// How a child process's stdio is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Child inherits the caller's stdin/stdout/stderr; nothing is captured.
    Interactive,
    /// Child runs without a terminal; stdout and stderr are captured.
    Batch,
}

/// Executes an external command to completion.
pub trait CommandRunner {
    /// Run `argv`. Returns captured stdout in batch mode, an empty string
    /// in interactive mode. A non-zero exit maps to
    /// [`LxcmError::DelegationFailed`]; failing to spawn the program at all
    /// maps to [`LxcmError::ToolUnavailable`].
    fn run(&self, argv: &[String], mode: BindMode) -> Result<String>;
}

/// Production runner backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], mode: BindMode) -> Result<String> {
        let Some((program, args)) = argv.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector").into());
        };

        match mode {
            BindMode::Interactive => {
                // The child owns the terminal; signals reach it directly.
                let status = Command::new(program)
                    .args(args)
                    .status()
                    .map_err(|e| spawn_error(program, e))?;
                if !status.success() {
                    return Err(LxcmError::DelegationFailed {
                        command: argv.to_vec(),
                        output: String::new(),
                    });
                }
                Ok(String::new())
            }
            BindMode::Batch => {
                let out = Command::new(program)
                    .args(args)
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| spawn_error(program, e))?;
                if !out.status.success() {
                    let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
                    text.push_str(&String::from_utf8_lossy(&out.stderr));
                    return Err(LxcmError::DelegationFailed {
                        command: argv.to_vec(),
                        output: text.trim().to_string(),
                    });
                }
                Ok(String::from_utf8_lossy(&out.stdout).into_owned())
            }
        }
    }
}

fn spawn_error(program: &str, err: io::Error) -> LxcmError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            LxcmError::ToolUnavailable(program.to_string())
        }
        _ => LxcmError::Io(err),
    }
}

/// Wrap a runtime command in the systemd-run supervisor so it runs in its
/// own user scope with delegated cgroup control. `unit` must be unique per
/// invocation; convention is `<tool>-<container-name>`.
pub fn supervised(unit: &str, command: &[String]) -> Vec<String> {
    let mut argv: Vec<String> = [
        "systemd-run",
        "--unit",
        unit,
        "--user",
        "--scope",
        "-p",
        "Delegate=yes",
        "--",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    argv.extend_from_slice(command);
    argv
}
