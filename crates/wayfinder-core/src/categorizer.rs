//! Command categorization.
//!
//! A static name table is consulted first, then content keywords, then the
//! catch-all. Naming conventions outrank content inference so a command
//! called "check" stays in quality even when its body talks about tests.

use once_cell::sync::Lazy;
use wayfinder_types::Category;

/// Known command names and the category each belongs to.
static NAME_TABLE: Lazy<Vec<(&'static str, Category)>> = Lazy::new(|| {
    vec![
        ("plan", Category::Development),
        ("dev", Category::Development),
        ("debug", Category::Development),
        ("refactor", Category::Development),
        ("check", Category::Quality),
        ("review", Category::Quality),
        ("ship", Category::Completion),
        ("deploy", Category::Completion),
        ("help", Category::System),
        ("config", Category::System),
    ]
});

/// Content keywords per category, evaluated in order; first hit wins.
static CONTENT_RULES: Lazy<Vec<(Category, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            Category::Development,
            &["test", "debug", "tdd", "implement", "build"],
        ),
        (
            Category::Quality,
            &["quality", "lint", "coverage", "standards"],
        ),
        (
            Category::Completion,
            &["commit", "ship", "release", "finish"],
        ),
    ]
});

/// Assign a category to a command from its name and document content.
pub fn categorize(name: &str, content: &str) -> Category {
    if let Some(category) = lookup_name(name) {
        return category;
    }

    let content = content.to_lowercase();
    for (category, keywords) in CONTENT_RULES.iter() {
        if keywords.iter().any(|kw| content.contains(kw)) {
            return *category;
        }
    }

    Category::System
}

/// Category for a known command name, `None` for names outside the table.
pub fn lookup_name(name: &str) -> Option<Category> {
    let name = name.to_lowercase();
    NAME_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, category)| *category)
}
