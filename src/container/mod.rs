//! Container identity, probing, and the lifecycle state machine

pub mod catalog;
pub mod info;
pub mod lifecycle;
pub mod probe;
pub mod state;
pub mod types;

pub use info::{ContainerInfo, InfoValue};
pub use lifecycle::{Lifecycle, Transition};
pub use state::LifecycleState;
pub use types::Container;
