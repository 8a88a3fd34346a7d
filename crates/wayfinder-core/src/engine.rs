//! The discovery engine facade.
//!
//! One engine instance owns the command repository and the usage ledger;
//! callers drive everything through it. Queries over commands take `&mut
//! self` because the first one after an invalidation refills the cache.

use crate::{related, search, suggest, workflow};
use crate::{CommandRepository, DiscoveryConfig, UsageLedger};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;
use wayfinder_types::{
    Category, CategoryOverview, Command, CommandDetails, DiscoveryAnalytics, DiscoveryPatterns,
    SearchEffectiveness, SearchResult, Suggestion, SuggestionContext, UsageEvent, UserType,
    WorkflowGuidance,
};

/// Entry point for command discovery queries.
pub struct DiscoveryEngine {
    repository: CommandRepository,
    ledger: UsageLedger,
}

impl DiscoveryEngine {
    /// Create an engine from a configuration.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            repository: CommandRepository::new(&config),
            ledger: UsageLedger::new(),
        }
    }

    /// Engine over a specific command directory, defaults elsewhere.
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DiscoveryConfig::for_dir(dir))
    }

    /// All commands in load order.
    pub fn list_commands(&mut self) -> Vec<Command> {
        self.repository.load().to_vec()
    }

    /// Command names grouped by category. Every category is present in
    /// the result, even when it holds no commands.
    pub fn list_categories(&mut self) -> BTreeMap<Category, Vec<String>> {
        let mut categories: BTreeMap<Category, Vec<String>> = Category::all()
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();
        for command in self.repository.load() {
            categories
                .entry(command.category)
                .or_default()
                .push(command.name.clone());
        }
        categories
    }

    /// One category with its blurb and commands; `None` for unknown names.
    pub fn explore_category(&mut self, name: &str) -> Option<CategoryOverview> {
        let category = Category::from_name(name)?;
        let commands = self
            .repository
            .load()
            .iter()
            .filter(|command| command.category == category)
            .cloned()
            .collect();
        Some(CategoryOverview {
            category,
            description: category.blurb().to_string(),
            commands,
        })
    }

    /// One command with its related commands; `None` for unknown names.
    pub fn command_details(&mut self, name: &str) -> Option<CommandDetails> {
        let commands = self.repository.load();
        let command = commands.iter().find(|c| c.name == name)?.clone();
        let related = related::related_commands(name, commands);
        Some(CommandDetails { command, related })
    }

    /// Relevance-ranked search over all commands.
    pub fn search(&mut self, query: &str) -> Vec<SearchResult> {
        search::search_commands(query, self.repository.load())
    }

    /// Context-aware suggestions; independent of the loaded command set.
    pub fn suggest(&self, context: &SuggestionContext) -> Vec<Suggestion> {
        suggest::suggest_commands(context)
    }

    /// Workflow guidance for a scenario description.
    pub fn plan_workflow(&self, scenario: &str) -> WorkflowGuidance {
        workflow::plan_workflow(scenario)
    }

    /// Names of commands related to `name`.
    pub fn related_to(&mut self, name: &str) -> Vec<String> {
        related::related_commands(name, self.repository.load())
    }

    /// Record one usage event in the ledger.
    pub fn record_usage(&mut self, event: UsageEvent) {
        self.ledger.record(event);
    }

    /// Aggregate usage statistics.
    pub fn analytics(&self) -> DiscoveryAnalytics {
        self.ledger.analytics()
    }

    /// Derived usage patterns.
    pub fn discovery_patterns(&self) -> DiscoveryPatterns {
        self.ledger.patterns()
    }

    /// Commands each user type selected.
    pub fn preferences_by_user_type(&self) -> BTreeMap<UserType, Vec<String>> {
        self.ledger.preferences_by_user_type()
    }

    /// Search helpfulness ratio.
    pub fn search_effectiveness(&self) -> SearchEffectiveness {
        self.ledger.search_effectiveness()
    }

    /// Drop the command cache; the next query re-reads the filesystem.
    pub fn invalidate_cache(&mut self) {
        debug!(target: "wayfinder::engine", "Command cache invalidated");
        self.repository.invalidate();
    }
}
