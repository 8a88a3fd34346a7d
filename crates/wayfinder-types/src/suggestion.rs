//! Context-aware suggestion types.

use serde::{Deserialize, Serialize};

/// Coarse experience level of the user asking for suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Still learning which commands exist.
    Newcomer,
    /// Comfortable with the day-to-day commands.
    Regular,
    /// Knows the whole surface; wants shortcuts, not tours.
    PowerUser,
}

/// Context the suggestion rules evaluate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionContext {
    /// Free-text description of what the user is working on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    /// Names of commands the user ran recently.
    #[serde(default)]
    pub recent_commands: Vec<String>,
    /// User type, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

impl SuggestionContext {
    /// Context carrying only a task description.
    pub fn for_task(task: impl Into<String>) -> Self {
        Self {
            current_task: Some(task.into()),
            ..Self::default()
        }
    }
}

/// A single ranked command suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested command name.
    pub command: String,
    /// Human-readable reason the producing rule fired.
    pub reason: String,
    /// Static confidence of the producing rule, in (0, 1].
    pub confidence: f64,
}
