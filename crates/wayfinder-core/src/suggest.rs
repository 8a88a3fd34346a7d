//! Context-aware command suggestions.
//!
//! A fixed, priority-ordered rule table. Each rule inspects the context
//! and contributes at most one suggestion with a static confidence; the
//! usage ledger never feeds back into these rules.

use crate::categorizer;
use wayfinder_types::{Category, Suggestion, SuggestionContext, UserType};

/// What makes a rule fire.
enum Trigger {
    /// The task description mentions any of these words.
    TaskMentions(&'static [&'static str]),
    /// A recently used command belongs to one of these categories.
    RecentIn(&'static [Category]),
    /// The user is of this type.
    UserIs(UserType),
}

/// One suggestion rule: a trigger and the fixed suggestion it produces.
struct Rule {
    trigger: Trigger,
    command: &'static str,
    reason: &'static str,
    confidence: f64,
}

/// Rules in priority order. Several rules may fire for one context.
const RULES: &[Rule] = &[
    Rule {
        trigger: Trigger::TaskMentions(&["feature", "implement"]),
        command: "dev",
        reason: "Start a test-driven cycle for the new feature",
        confidence: 0.9,
    },
    Rule {
        trigger: Trigger::TaskMentions(&["bug", "fix", "debug"]),
        command: "debug",
        reason: "Reproduce the failure before changing any code",
        confidence: 0.9,
    },
    Rule {
        trigger: Trigger::TaskMentions(&["refactor", "improve"]),
        command: "refactor",
        reason: "Restructure with the safety net of existing tests",
        confidence: 0.85,
    },
    Rule {
        trigger: Trigger::TaskMentions(&["plan", "strategy"]),
        command: "plan",
        reason: "Map the approach before writing code",
        confidence: 0.85,
    },
    Rule {
        trigger: Trigger::RecentIn(&[Category::Development]),
        command: "check",
        reason: "Recent development work has not been quality-checked yet",
        confidence: 0.7,
    },
    Rule {
        trigger: Trigger::RecentIn(&[Category::Development, Category::Quality]),
        command: "ship",
        reason: "Checked work is ready to be committed",
        confidence: 0.6,
    },
    Rule {
        trigger: Trigger::UserIs(UserType::Newcomer),
        command: "help",
        reason: "See the full command list while learning the tool",
        confidence: 0.5,
    },
];

/// Evaluate the rule table against a context.
///
/// Returns suggestions sorted by descending confidence; rule order breaks
/// ties because the sort is stable. An empty context fires no rules.
pub fn suggest_commands(context: &SuggestionContext) -> Vec<Suggestion> {
    let task = context
        .current_task
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let recent_categories: Vec<Category> = context
        .recent_commands
        .iter()
        .filter_map(|name| categorizer::lookup_name(name))
        .collect();

    let mut suggestions: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| rule.fires(&task, &recent_categories, context.user_type))
        .map(|rule| Suggestion {
            command: rule.command.to_string(),
            reason: rule.reason.to_string(),
            confidence: rule.confidence,
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions
}

impl Rule {
    fn fires(&self, task: &str, recent: &[Category], user_type: Option<UserType>) -> bool {
        match &self.trigger {
            Trigger::TaskMentions(words) => {
                !task.is_empty() && words.iter().any(|word| task.contains(word))
            }
            Trigger::RecentIn(categories) => {
                recent.iter().any(|category| categories.contains(category))
            }
            Trigger::UserIs(wanted) => user_type == Some(*wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_task_suggests_dev_first() {
        let context = SuggestionContext::for_task("implement the new login feature");
        let suggestions = suggest_commands(&context);

        assert_eq!(suggestions[0].command, "dev");
        assert_eq!(suggestions[0].confidence, 0.9);
    }

    #[test]
    fn test_bug_task_suggests_debug() {
        let context = SuggestionContext::for_task("fix the crash on startup");
        let suggestions = suggest_commands(&context);

        assert_eq!(suggestions[0].command, "debug");
    }

    #[test]
    fn test_recent_development_work_suggests_check_then_ship() {
        let context = SuggestionContext {
            current_task: None,
            recent_commands: vec!["dev".to_string()],
            user_type: None,
        };
        let suggestions = suggest_commands(&context);

        let commands: Vec<&str> = suggestions.iter().map(|s| s.command.as_str()).collect();
        assert_eq!(commands, vec!["check", "ship"]);
        assert!(suggestions[0].confidence > suggestions[1].confidence);
    }

    #[test]
    fn test_quality_work_suggests_ship_but_not_check() {
        let context = SuggestionContext {
            current_task: None,
            recent_commands: vec!["check".to_string()],
            user_type: None,
        };
        let suggestions = suggest_commands(&context);

        let commands: Vec<&str> = suggestions.iter().map(|s| s.command.as_str()).collect();
        assert_eq!(commands, vec!["ship"]);
    }

    #[test]
    fn test_newcomers_are_pointed_at_help() {
        let context = SuggestionContext {
            current_task: None,
            recent_commands: Vec::new(),
            user_type: Some(UserType::Newcomer),
        };
        let suggestions = suggest_commands(&context);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].command, "help");
        assert_eq!(suggestions[0].confidence, 0.5);
    }

    #[test]
    fn test_empty_context_yields_no_suggestions() {
        let context = SuggestionContext {
            current_task: None,
            recent_commands: Vec::new(),
            user_type: None,
        };
        assert!(suggest_commands(&context).is_empty());
    }

    #[test]
    fn test_unknown_recent_commands_are_ignored() {
        let context = SuggestionContext {
            current_task: None,
            recent_commands: vec!["espresso".to_string()],
            user_type: None,
        };
        assert!(suggest_commands(&context).is_empty());
    }

    #[test]
    fn test_task_and_history_rules_combine() {
        let context = SuggestionContext {
            current_task: Some("improve the parser".to_string()),
            recent_commands: vec!["dev".to_string()],
            user_type: Some(UserType::Regular),
        };
        let suggestions = suggest_commands(&context);

        let commands: Vec<&str> = suggestions.iter().map(|s| s.command.as_str()).collect();
        assert_eq!(commands, vec!["refactor", "check", "ship"]);
    }

    #[test]
    fn test_suggestions_sorted_by_confidence() {
        let context = SuggestionContext {
            current_task: Some("plan the bug fix".to_string()),
            recent_commands: vec!["dev".to_string()],
            user_type: Some(UserType::Newcomer),
        };
        let suggestions = suggest_commands(&context);

        assert!(suggestions
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }
}
