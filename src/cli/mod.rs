//! CLI argument parsing and terminal glue

pub mod args;
pub mod pager;

pub use args::{Args, ContainerOp, SubCommand};
