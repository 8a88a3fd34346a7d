//! Related-command resolution.

use wayfinder_types::Command;

/// Maximum number of related commands returned.
const MAX_RELATED: usize = 4;

/// Canonical next steps after each command in the standard workflow.
const NEXT_STEPS: &[(&str, &[&str])] = &[
    ("plan", &["dev"]),
    ("dev", &["check", "ship"]),
    ("debug", &["check", "ship"]),
    ("refactor", &["check"]),
    ("check", &["ship"]),
    ("ship", &["plan"]),
];

/// Commands related to `name`: same-category commands first, then the
/// static workflow adjacency, deduplicated and capped at `MAX_RELATED`.
///
/// Unknown names with no adjacency entry produce an empty list.
pub fn related_commands(name: &str, commands: &[Command]) -> Vec<String> {
    let mut related: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if related.len() < MAX_RELATED
            && candidate != name
            && !related.iter().any(|r| r == candidate)
        {
            related.push(candidate.to_string());
        }
    };

    if let Some(command) = commands.iter().find(|c| c.name == name) {
        for other in commands.iter().filter(|c| c.category == command.category) {
            push(&other.name);
        }
    }

    if let Some((_, next)) = NEXT_STEPS.iter().find(|(cmd, _)| *cmd == name) {
        for candidate in next.iter() {
            push(candidate);
        }
    }

    related
}
