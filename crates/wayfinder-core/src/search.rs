//! Free-text relevance scoring over the command set.

use once_cell::sync::Lazy;
use wayfinder_types::{Command, SearchResult};

/// Score for the query appearing in a command name.
const NAME_WEIGHT: u32 = 50;
/// Score for the query appearing in a description.
const DESCRIPTION_WEIGHT: u32 = 30;
/// Score for the query appearing in any example.
const EXAMPLE_WEIGHT: u32 = 20;
/// Score per intent-keyword pair matched by the query.
const HINT_WEIGHT: u32 = 40;

/// Intent keywords mapped to the command that usually serves them. Every
/// pair whose keyword appears in the query adds `HINT_WEIGHT` to the
/// mapped command's score.
static QUERY_HINTS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("bug", "debug"),
        ("fix", "debug"),
        ("error", "debug"),
        ("broken", "debug"),
        ("commit", "ship"),
        ("push", "ship"),
        ("done", "ship"),
        ("test", "dev"),
        ("tdd", "dev"),
        ("feature", "dev"),
        ("implement", "dev"),
        ("quality", "check"),
        ("lint", "check"),
        ("verify", "check"),
        ("improve", "refactor"),
        ("cleanup", "refactor"),
        ("simplify", "refactor"),
        ("strategy", "plan"),
        ("approach", "plan"),
    ]
});

/// Score every command against a free-text query.
///
/// Results are sorted by descending score; ties keep load order because
/// the sort is stable. Zero-score commands are dropped. Blank queries
/// match nothing: "" is a substring of everything and would otherwise
/// rank the entire command set.
pub fn search_commands(query: &str, commands: &[Command]) -> Vec<SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = commands
        .iter()
        .filter_map(|command| {
            let score = score_command(&query, command);
            (score > 0).then(|| SearchResult {
                command: command.clone(),
                relevance_score: score,
            })
        })
        .collect();

    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results
}

/// Additive relevance score of one command for a lowercased query.
fn score_command(query: &str, command: &Command) -> u32 {
    let mut score = 0;

    if command.name.to_lowercase().contains(query) {
        score += NAME_WEIGHT;
    }
    if command.description.to_lowercase().contains(query) {
        score += DESCRIPTION_WEIGHT;
    }
    if command
        .examples
        .iter()
        .any(|example| example.to_lowercase().contains(query))
    {
        score += EXAMPLE_WEIGHT;
    }

    for (keyword, target) in QUERY_HINTS.iter() {
        if query.contains(keyword) && command.name.eq_ignore_ascii_case(target) {
            score += HINT_WEIGHT;
        }
    }

    score
}
