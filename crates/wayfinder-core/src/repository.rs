//! Discovery and parsing of command-definition documents.
//!
//! Commands live as Markdown documents in a single flat directory, one
//! command per document. Parsing is tolerant: a document that cannot be
//! read is skipped with a debug log, and a missing directory yields an
//! empty command set rather than an error.

use crate::{categorizer, DiscoveryConfig, DiscoveryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use wayfinder_types::{Command, CommandFrontmatter};

/// Placeholder description for documents with no heading.
const DEFAULT_DESCRIPTION: &str = "No description";

/// How many body lines are scanned for the description heading.
const DESCRIPTION_SCAN_LINES: usize = 10;

/// Maximum number of examples extracted per document.
const MAX_EXAMPLES: usize = 3;

/// Maximum description length before truncation.
const MAX_DESCRIPTION_LEN: usize = 100;

/// Matches a Markdown heading line; the capture is the heading text.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+(.+)$").expect("Invalid heading regex"));

/// Matches a command invocation line such as "/dev --tdd".
static INVOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[A-Za-z0-9][\w:-]*").expect("Invalid invocation regex"));

/// Reads command-definition documents and caches the parsed result.
pub struct CommandRepository {
    commands_dir: PathBuf,
    reserved_doc: String,
    cache: Option<Vec<Command>>,
}

impl CommandRepository {
    /// Create a repository over the configured command directory.
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            commands_dir: config.commands_dir.clone(),
            reserved_doc: config.reserved_doc.clone(),
            cache: None,
        }
    }

    /// Load all commands, reading the filesystem only on a cold cache.
    pub fn load(&mut self) -> &[Command] {
        if self.cache.is_none() {
            let commands = self.scan_dir();
            info!(
                target: "wayfinder::repository",
                "Loaded {} commands from {}",
                commands.len(),
                self.commands_dir.display()
            );
            self.cache = Some(commands);
        }
        self.cache.as_deref().unwrap_or_default()
    }

    /// Drop the cache so the next `load` re-reads the filesystem.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    fn scan_dir(&self) -> Vec<Command> {
        let entries = match fs::read_dir(&self.commands_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    target: "wayfinder::repository",
                    "Command directory {} not readable: {}",
                    self.commands_dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        // Sort by file name so load order (and therefore search tie order)
        // does not depend on the platform's read_dir order.
        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| self.is_command_doc(path))
            .collect();
        paths.sort();

        let mut commands = Vec::new();
        for path in paths {
            match parse_document(&path) {
                Ok(command) => commands.push(command),
                Err(e) => {
                    debug!(
                        target: "wayfinder::repository",
                        "Skipping command document {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }
        commands
    }

    fn is_command_doc(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        if !path.extension().map(|e| e == "md").unwrap_or(false) {
            return false;
        }
        // The reserved index document is never a command.
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| !n.eq_ignore_ascii_case(&self.reserved_doc))
            .unwrap_or(false)
    }
}

/// Parse one definition document into a `Command`.
fn parse_document(path: &Path) -> Result<Command> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(String::from)
        .ok_or_else(|| DiscoveryError::InvalidDocumentName(path.to_path_buf()))?;

    let content = fs::read_to_string(path)?;
    let (frontmatter, body) = parse_frontmatter(&content);

    let description = extract_description(body)
        .or(frontmatter.description)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let description = truncate_description(description);

    let usage =
        extract_usage(&name, body).unwrap_or_else(|| format!("/{} [options]", name));
    let examples = extract_examples(body);
    let category = categorizer::categorize(&name, body);

    Ok(Command {
        name,
        description,
        category,
        usage,
        examples,
        argument_hint: frontmatter.argument_hint,
        source: path.to_path_buf(),
    })
}

/// Parse YAML frontmatter from document content.
///
/// Malformed frontmatter degrades to "no frontmatter": the original text
/// is returned unchanged so the line scans still see the document.
fn parse_frontmatter(content: &str) -> (CommandFrontmatter, &str) {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return (CommandFrontmatter::default(), content);
    }

    // Find the closing ---
    let rest = &content[3..];
    if let Some(end_idx) = rest.find("\n---") {
        let yaml_content = &rest[..end_idx];
        let remaining = &rest[end_idx + 4..];

        match serde_yaml::from_str::<CommandFrontmatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                debug!(
                    target: "wayfinder::repository",
                    "Failed to parse YAML frontmatter: {}",
                    e
                );
                (CommandFrontmatter::default(), content)
            }
        }
    } else {
        (CommandFrontmatter::default(), content)
    }
}

/// First heading within the opening lines of the body.
fn extract_description(body: &str) -> Option<String> {
    body.lines().take(DESCRIPTION_SCAN_LINES).find_map(|line| {
        HEADING_RE
            .captures(line.trim())
            .map(|caps| caps[1].trim().to_string())
    })
}

/// Truncate long descriptions, keeping whole characters.
fn truncate_description(description: String) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_LEN {
        return description;
    }
    let kept: String = description.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
    format!("{}...", kept)
}

/// First line spelling out the command's own invocation syntax.
fn extract_usage(name: &str, body: &str) -> Option<String> {
    let prefix = format!("/{}", name);
    body.lines().map(str::trim).find_map(|line| {
        let rest = line.strip_prefix(prefix.as_str())?;
        // Require a word boundary so "/dev" does not claim "/devops" lines.
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(line.to_string())
        } else {
            None
        }
    })
}

/// Collect up to `MAX_EXAMPLES` example lines: non-empty lines inside
/// fenced code blocks plus invocation lines in regular prose.
fn extract_examples(body: &str) -> Vec<String> {
    let mut examples = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }

        let is_example = if in_fence {
            !trimmed.is_empty()
        } else {
            INVOCATION_RE.is_match(trimmed)
        };

        if is_example {
            examples.push(trimmed.to_string());
            if examples.len() == MAX_EXAMPLES {
                break;
            }
        }
    }

    examples
}
