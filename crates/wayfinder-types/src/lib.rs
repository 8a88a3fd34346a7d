//! Shared types for the Wayfinder command discovery engine.

mod command;
mod search;
mod suggestion;
mod usage;
mod workflow;

pub use command::*;
pub use search::*;
pub use suggestion::*;
pub use usage::*;
pub use workflow::*;
