//! Types for commands discovered from a command-definition directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Category of a discoverable command.
///
/// The taxonomy is closed: every command lands in exactly one of these four
/// buckets, with `System` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Planning, implementing, and debugging work
    Development,
    /// Quality gates: checks, linting, review
    Quality,
    /// Finishing work: commits, shipping
    Completion,
    /// Everything else: help, configuration, utilities
    System,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Development,
            Category::Quality,
            Category::Completion,
            Category::System,
        ]
    }

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Quality => "quality",
            Category::Completion => "completion",
            Category::System => "system",
        }
    }

    /// One-line blurb describing what lives in this category.
    pub fn blurb(&self) -> &'static str {
        match self {
            Category::Development => "Commands for planning, implementing, and debugging code",
            Category::Quality => "Commands that check, lint, and review work in progress",
            Category::Completion => "Commands that finish and ship completed work",
            Category::System => "Help, configuration, and other utility commands",
        }
    }

    /// Parse a category from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim().to_lowercase().as_str() {
            "development" => Some(Category::Development),
            "quality" => Some(Category::Quality),
            "completion" => Some(Category::Completion),
            "system" => Some(Category::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A discoverable command, parsed from one definition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name without leading slash, derived from the document file name.
    pub name: String,
    /// One-line description, taken from the document's first heading.
    pub description: String,
    /// Category assigned during parsing.
    pub category: Category,
    /// Usage syntax (e.g. "/dev [options]").
    pub usage: String,
    /// Up to three invocation examples from the document body.
    pub examples: Vec<String>,
    /// Hint for expected arguments from frontmatter (e.g. "[file-path]").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
    /// Path of the originating document. Kept for re-reading, not identity.
    pub source: PathBuf,
}

/// YAML frontmatter optionally present at the top of a definition document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandFrontmatter {
    pub description: Option<String>,
    #[serde(rename = "argument-hint")]
    pub argument_hint: Option<String>,
}

/// A category with its blurb and member commands, for category browsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOverview {
    pub category: Category,
    pub description: String,
    pub commands: Vec<Command>,
}

/// A single command plus the names of commands related to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDetails {
    pub command: Command,
    pub related: Vec<String>,
}
