//! Search result types.

use crate::Command;
use serde::{Deserialize, Serialize};

/// A command matched by a free-text search.
///
/// Scores are additive sums of fixed per-signal weights; commands that
/// score zero are dropped before results are returned, so a result's
/// score is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched command.
    pub command: Command,
    /// Relevance score; higher is more relevant.
    pub relevance_score: u32,
}
