//! In-memory, append-only ledger of discovery usage events.

use std::collections::BTreeMap;
use tracing::debug;
use wayfinder_types::{
    DiscoveryAnalytics, DiscoveryPatterns, SearchEffectiveness, UsageAction, UsageEvent, UserType,
};

/// Accumulates usage events and derives aggregate views from them.
///
/// Events are never mutated or pruned; every aggregation is a fresh pass
/// over the full list, so the views stay consistent with each other.
#[derive(Default)]
pub struct UsageLedger {
    events: Vec<UsageEvent>,
}

impl UsageLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.
    pub fn record(&mut self, event: UsageEvent) {
        debug!(
            target: "wayfinder::ledger",
            "Recorded {:?} event {}",
            event.action,
            event.id
        );
        self.events.push(event);
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Aggregate statistics over all recorded events.
    pub fn analytics(&self) -> DiscoveryAnalytics {
        let mut popular_categories = BTreeMap::new();
        for event in &self.events {
            if let Some(category) = event.category {
                *popular_categories.entry(category).or_insert(0) += 1;
            }
        }

        DiscoveryAnalytics {
            total_events: self.events.len(),
            popular_categories,
            search_patterns: self.search_patterns(),
            effective_commands: self.effective_commands(),
        }
    }

    /// Derived usage patterns: searches, effective commands, preferences.
    pub fn patterns(&self) -> DiscoveryPatterns {
        DiscoveryPatterns {
            popular_searches: self.search_patterns(),
            effective_commands: self.effective_commands(),
            user_preferences: self.preferences_by_user_type(),
        }
    }

    /// Commands each user type selected, in recording order.
    pub fn preferences_by_user_type(&self) -> BTreeMap<UserType, Vec<String>> {
        let mut preferences: BTreeMap<UserType, Vec<String>> = BTreeMap::new();
        for event in &self.events {
            if let (Some(user_type), Some(command)) = (event.user_type, &event.selected_command) {
                preferences
                    .entry(user_type)
                    .or_default()
                    .push(command.clone());
            }
        }
        preferences
    }

    /// Fraction of search events the user marked helpful.
    ///
    /// With no recorded searches the ratio is zero, not an error: an
    /// empty ledger is the normal state of a fresh engine.
    pub fn search_effectiveness(&self) -> SearchEffectiveness {
        let total_searches = self
            .events
            .iter()
            .filter(|e| e.action == UsageAction::Search)
            .count();
        let helpful_searches = self
            .events
            .iter()
            .filter(|e| e.action == UsageAction::Search && e.was_helpful == Some(true))
            .count();

        let effectiveness = if total_searches == 0 {
            0.0
        } else {
            helpful_searches as f64 / total_searches as f64
        };

        SearchEffectiveness {
            total_searches,
            helpful_searches,
            effectiveness,
        }
    }

    /// Distinct search queries in first-seen order.
    fn search_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = Vec::new();
        for event in &self.events {
            if let Some(query) = &event.search_query {
                if !patterns.iter().any(|p| p == query) {
                    patterns.push(query.clone());
                }
            }
        }
        patterns
    }

    /// Distinct commands selected in interactions marked helpful.
    fn effective_commands(&self) -> Vec<String> {
        let mut commands: Vec<String> = Vec::new();
        for event in &self.events {
            if event.was_helpful == Some(true) {
                if let Some(command) = &event.selected_command {
                    if !commands.iter().any(|c| c == command) {
                        commands.push(command.clone());
                    }
                }
            }
        }
        commands
    }
}
