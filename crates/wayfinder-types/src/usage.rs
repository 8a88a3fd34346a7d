//! Usage ledger types: recorded discovery events and derived analytics.
//!
//! Events are append-only. Every aggregate below is recomputed from the
//! event list on demand; nothing here is stored independently.

use crate::{Category, UserType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Kind of discovery interaction an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageAction {
    /// Free-text search over the command set.
    Search,
    /// Browsing a category listing.
    BrowseCategory,
    /// Asking for workflow guidance.
    WorkflowLookup,
    /// Acting on an offered suggestion.
    Suggestion,
}

/// One recorded discovery interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// Unique identifier for this event.
    pub id: Uuid,
    /// What kind of interaction happened.
    pub action: UsageAction,
    /// Category involved, for category browses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Query text, for searches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Command the user ended up selecting, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_command: Option<String>,
    /// Whether the user marked the interaction as helpful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_helpful: Option<bool>,
    /// User type at the time of the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
}

impl UsageEvent {
    /// Create an event of the given kind with a fresh id and timestamp.
    ///
    /// All optional fields start empty; callers fill in whichever ones the
    /// interaction produced.
    pub fn new(action: UsageAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            category: None,
            search_query: None,
            selected_command: None,
            was_helpful: None,
            user_type: None,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate statistics over all recorded events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryAnalytics {
    /// Total recorded events.
    pub total_events: usize,
    /// Event counts grouped by category.
    pub popular_categories: BTreeMap<Category, usize>,
    /// Distinct search queries, in first-seen order.
    pub search_patterns: Vec<String>,
    /// Distinct commands selected in interactions marked helpful.
    pub effective_commands: Vec<String>,
}

/// Usage patterns derived from the ledger, the raw material for "learning"
/// which commands work for which users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryPatterns {
    /// Distinct search queries, in first-seen order.
    pub popular_searches: Vec<String>,
    /// Distinct commands selected in interactions marked helpful.
    pub effective_commands: Vec<String>,
    /// Commands selected by each user type, in recording order.
    pub user_preferences: BTreeMap<UserType, Vec<String>>,
}

/// How often searches led to something the user found helpful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchEffectiveness {
    /// Number of search events recorded.
    pub total_searches: usize,
    /// Search events marked helpful.
    pub helpful_searches: usize,
    /// helpful / total; 0.0 when no searches were recorded.
    pub effectiveness: f64,
}
