//! Integration tests for the command discovery flow.
//!
//! These tests drive a `DiscoveryEngine` over a real temporary command
//! directory: documents are parsed, categorized, searched, and the usage
//! ledger is fed the way an interactive caller would feed it.

use std::fs;
use tempfile::TempDir;
use wayfinder_core::DiscoveryEngine;
use wayfinder_types::{Category, SuggestionContext, UsageAction, UsageEvent, UserType};

/// Write one command document into the fixture directory.
fn write_doc(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

/// Build a command directory with the standard workflow commands.
fn standard_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_doc(
        &dir,
        "dev.md",
        "---\ndescription: Test-driven development\nargument-hint: \"[task]\"\n---\n\
         # TDD workflow\n\nDrive the implementation with tests.\n\n/dev <task>\n",
    );
    write_doc(
        &dir,
        "check.md",
        "# Quality checks\n\nRun linting and coverage.\n\n/check --fix\n",
    );
    write_doc(
        &dir,
        "ship.md",
        "# Commit changes\n\nFinalize and commit the work.\n\n/ship \"message\"\n",
    );
    dir
}

/// Engine over the standard fixture; the `TempDir` must stay alive.
fn standard_engine() -> (TempDir, DiscoveryEngine) {
    let dir = standard_fixture();
    let engine = DiscoveryEngine::for_dir(dir.path());
    (dir, engine)
}

#[test]
fn test_discovers_and_parses_command_documents() {
    let (_dir, mut engine) = standard_engine();
    let commands = engine.list_commands();

    assert_eq!(commands.len(), 3);

    let dev = commands.iter().find(|c| c.name == "dev").unwrap();
    assert_eq!(dev.description, "TDD workflow");
    assert_eq!(dev.category, Category::Development);
    assert_eq!(dev.usage, "/dev <task>");
    assert_eq!(dev.argument_hint, Some("[task]".to_string()));
    assert!(dev.source.ends_with("dev.md"));

    let check = commands.iter().find(|c| c.name == "check").unwrap();
    assert_eq!(check.description, "Quality checks");
    assert_eq!(check.category, Category::Quality);

    let ship = commands.iter().find(|c| c.name == "ship").unwrap();
    assert_eq!(ship.category, Category::Completion);
    assert_eq!(ship.usage, "/ship \"message\"");
}

#[test]
fn test_commands_load_in_file_name_order() {
    let (_dir, mut engine) = standard_engine();
    let names: Vec<String> = engine
        .list_commands()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["check", "dev", "ship"]);
}

#[test]
fn test_search_ranks_quality_query_first() {
    let (_dir, mut engine) = standard_engine();
    let results = engine.search("quality");

    assert!(!results.is_empty());
    assert_eq!(results[0].command.name, "check");
    assert!(results[0].relevance_score >= 30);
}

#[test]
fn test_search_understands_intent_keywords() {
    let (_dir, mut engine) = standard_engine();

    // "commit" never appears in ship's name; the keyword table maps it.
    let results = engine.search("commit");
    assert_eq!(results[0].command.name, "ship");
}

#[test]
fn test_search_returns_empty_for_blank_and_unmatched_queries() {
    let (_dir, mut engine) = standard_engine();
    assert!(engine.search("").is_empty());
    assert!(engine.search("   ").is_empty());
    assert!(engine.search("kubernetes").is_empty());
}

#[test]
fn test_plan_workflow_for_a_bug_fix() {
    let (_dir, engine) = standard_engine();
    let guidance = engine.plan_workflow("fix a bug");

    assert_eq!(guidance.step_commands(), vec!["debug", "check", "ship"]);
    assert!(!guidance.alternatives.is_empty());
}

#[test]
fn test_related_commands_for_dev_point_onward() {
    let (_dir, mut engine) = standard_engine();
    let related = engine.related_to("dev");

    assert!(related.iter().any(|r| r == "check" || r == "ship"));
    assert!(!related.iter().any(|r| r == "dev"));
    assert!(related.len() <= 4);
}

#[test]
fn test_newcomer_suggestions_include_help() {
    let (_dir, engine) = standard_engine();
    let context = SuggestionContext {
        current_task: None,
        recent_commands: Vec::new(),
        user_type: Some(UserType::Newcomer),
    };
    let suggestions = engine.suggest(&context);

    assert!(suggestions.iter().any(|s| s.command == "help"));
}

#[test]
fn test_category_listing_covers_every_category() {
    let (_dir, mut engine) = standard_engine();
    let categories = engine.list_categories();

    assert_eq!(categories.len(), 4);
    assert_eq!(categories[&Category::Development], vec!["dev"]);
    assert_eq!(categories[&Category::Quality], vec!["check"]);
    assert_eq!(categories[&Category::Completion], vec!["ship"]);
    assert!(categories[&Category::System].is_empty());
}

#[test]
fn test_explore_category_returns_full_commands() {
    let (_dir, mut engine) = standard_engine();
    let overview = engine.explore_category("development").unwrap();

    assert_eq!(overview.commands.len(), 1);
    assert_eq!(overview.commands[0].name, "dev");
    assert!(overview
        .commands
        .iter()
        .all(|c| c.category == Category::Development));
    assert!(!overview.description.is_empty());
}

#[test]
fn test_query_results_serialize_for_the_presentation_layer() {
    let (_dir, mut engine) = standard_engine();

    let results = serde_json::to_value(engine.search("quality")).unwrap();
    assert_eq!(results[0]["command"]["name"], "check");
    assert_eq!(results[0]["command"]["category"], "quality");
    assert!(results[0]["relevance_score"].as_u64().unwrap() > 0);
    // check.md carries no hint; the field is omitted rather than null.
    assert!(results[0]["command"].get("argument_hint").is_none());

    let details = serde_json::to_value(engine.command_details("dev").unwrap()).unwrap();
    assert_eq!(details["command"]["argument_hint"], "[task]");
    assert!(details["related"].is_array());
}

#[test]
fn test_missing_directory_degrades_to_empty_results() {
    let dir = TempDir::new().unwrap();
    let mut engine = DiscoveryEngine::for_dir(dir.path().join("never-created"));

    assert!(engine.list_commands().is_empty());
    assert!(engine.search("dev").is_empty());
    assert!(engine.related_to("dev").iter().all(|r| r != "dev"));
    assert_eq!(engine.list_categories().len(), 4);
}

#[test]
fn test_reserved_document_is_not_a_command() {
    let dir = standard_fixture();
    write_doc(&dir, "README.md", "# All commands, indexed\n");

    let mut engine = DiscoveryEngine::for_dir(dir.path());
    assert!(engine.list_commands().iter().all(|c| c.name != "README"));
}

#[test]
fn test_invalidation_reload_is_deep_equal_when_unchanged() {
    let (_dir, mut engine) = standard_engine();
    let before = engine.list_commands();

    engine.invalidate_cache();
    let after = engine.list_commands();

    assert_eq!(before, after);
}

#[test]
fn test_cache_holds_until_invalidated() {
    let (dir, mut engine) = standard_engine();
    assert_eq!(engine.list_commands().len(), 3);

    write_doc(&dir, "plan.md", "# Plan the approach\n");
    assert_eq!(engine.list_commands().len(), 3);

    engine.invalidate_cache();
    assert_eq!(engine.list_commands().len(), 4);
}

#[test]
fn test_malformed_documents_do_not_poison_the_scan() {
    let dir = standard_fixture();
    fs::write(dir.path().join("broken.md"), [0xf0u8, 0x28, 0x8c, 0x28]).unwrap();
    write_doc(&dir, "odd.md", "---\nnever closed frontmatter\n");

    let mut engine = DiscoveryEngine::for_dir(dir.path());
    let commands = engine.list_commands();

    // The unreadable document is skipped; the odd one degrades to defaults.
    assert_eq!(commands.len(), 4);
    let odd = commands.iter().find(|c| c.name == "odd").unwrap();
    assert_eq!(odd.description, "No description");
}

#[test]
fn test_full_discovery_session() {
    let (_dir, mut engine) = standard_engine();

    // A newcomer searches, picks the top hit, and finds it helpful.
    let results = engine.search("tdd");
    assert_eq!(results[0].command.name, "dev");

    let mut event = UsageEvent::new(UsageAction::Search);
    event.search_query = Some("tdd".to_string());
    event.selected_command = Some(results[0].command.name.clone());
    event.was_helpful = Some(true);
    event.user_type = Some(UserType::Newcomer);
    engine.record_usage(event);

    // Later they browse the quality category.
    let mut event = UsageEvent::new(UsageAction::BrowseCategory);
    event.category = Some(Category::Quality);
    event.user_type = Some(UserType::Newcomer);
    engine.record_usage(event);

    let analytics = engine.analytics();
    assert_eq!(analytics.total_events, 2);
    assert_eq!(analytics.search_patterns, vec!["tdd"]);
    assert_eq!(analytics.effective_commands, vec!["dev"]);
    assert_eq!(
        analytics.popular_categories.get(&Category::Quality),
        Some(&1)
    );

    let effectiveness = engine.search_effectiveness();
    assert_eq!(effectiveness.total_searches, 1);
    assert_eq!(effectiveness.helpful_searches, 1);
    assert_eq!(effectiveness.effectiveness, 1.0);

    let preferences = engine.preferences_by_user_type();
    assert_eq!(preferences[&UserType::Newcomer], vec!["dev"]);
}
