//! lxcm - Manage LXC containers under systemd-run supervision
//!
//! lxcm delegates container operations to the LXC command-line tools,
//! wrapping every mutating command in a `systemd-run` user scope so the
//! supervisor accounts for and cleans up each one. Container state is
//! never cached: every operation re-probes the runtime right before it
//! decides what to do.
//!
//! # Example
//!
//! ```no_run
//! use lxcm::{Container, Lifecycle, SystemRunner};
//!
//! let runner = SystemRunner::new();
//! let lifecycle = Lifecycle::new(&runner);
//! lifecycle.start(&Container::new("web"), false).unwrap();
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod output;
pub mod runner;

pub use container::{Container, ContainerInfo, InfoValue, Lifecycle, LifecycleState, Transition};
pub use error::{LxcmError, Result};
pub use output::{format_catalog, format_info, OutputFormat};
pub use runner::{supervised, BindMode, CommandRunner, SystemRunner};
