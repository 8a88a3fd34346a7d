//! Core command discovery engine for Wayfinder.

mod categorizer;
mod config;
mod engine;
mod error;
mod ledger;
mod related;
mod repository;
mod search;
mod suggest;
mod workflow;

pub use categorizer::{categorize, lookup_name};
pub use config::DiscoveryConfig;
pub use engine::DiscoveryEngine;
pub use error::DiscoveryError;
pub use ledger::UsageLedger;
pub use related::related_commands;
pub use repository::CommandRepository;
pub use search::search_commands;
pub use suggest::suggest_commands;
pub use workflow::plan_workflow;

/// Result type for Wayfinder operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
