//! Scenario-to-workflow planning.
//!
//! A decision table maps scenario descriptions onto ordered command
//! sequences. Matching is first-hit, and unmatched scenarios fall back to
//! a generic orientation workflow instead of failing.

use wayfinder_types::{AlternativeWorkflow, WorkflowGuidance, WorkflowStep};

/// A step as stored in the tables: (command, description, rationale).
type StepEntry = (&'static str, &'static str, &'static str);

const PLAN_STEP: StepEntry = (
    "plan",
    "Map out the approach and break the work into pieces",
    "A concrete plan keeps the implementation focused",
);
const DEV_STEP: StepEntry = (
    "dev",
    "Implement with a test-driven red-green cycle",
    "Tests written first pin the intended behavior down",
);
const DEBUG_STEP: StepEntry = (
    "debug",
    "Reproduce the failure and isolate its cause",
    "A reliable reproduction turns guessing into verification",
);
const REFACTOR_STEP: StepEntry = (
    "refactor",
    "Restructure the code without changing behavior",
    "Existing tests act as the safety net for the rewrite",
);
const CHECK_STEP: StepEntry = (
    "check",
    "Run the quality checks over the changed code",
    "Catching lint and coverage gaps now is cheaper than later",
);
const SHIP_STEP: StepEntry = (
    "ship",
    "Commit the finished work with a clear message",
    "Small, complete commits keep the history reviewable",
);
const HELP_STEP: StepEntry = (
    "help",
    "List the available commands",
    "An overview shows which workflow fits the situation",
);

/// A workflow template: trigger words and the steps they select.
struct Template {
    triggers: &'static [&'static str],
    steps: &'static [StepEntry],
}

/// Scenario decision table, checked in order; first match wins.
const TEMPLATES: &[Template] = &[
    Template {
        triggers: &["new feature", "implement"],
        steps: &[PLAN_STEP, DEV_STEP, CHECK_STEP, SHIP_STEP],
    },
    Template {
        triggers: &["bug", "fix"],
        steps: &[DEBUG_STEP, CHECK_STEP, SHIP_STEP],
    },
    Template {
        triggers: &["refactor", "improve"],
        steps: &[REFACTOR_STEP, CHECK_STEP, SHIP_STEP],
    },
];

/// Steps for scenarios no template matches.
const FALLBACK_STEPS: &[StepEntry] = &[HELP_STEP, PLAN_STEP];

/// Build workflow guidance for a scenario description.
///
/// The scenario is matched case-insensitively against the template table.
/// Alternatives depend only on which primary steps were chosen, never on
/// the scenario text itself.
pub fn plan_workflow(scenario: &str) -> WorkflowGuidance {
    let lowered = scenario.to_lowercase();
    let entries = TEMPLATES
        .iter()
        .find(|template| template.triggers.iter().any(|t| lowered.contains(t)))
        .map(|template| template.steps)
        .unwrap_or(FALLBACK_STEPS);

    let steps: Vec<WorkflowStep> = entries
        .iter()
        .map(|(command, description, rationale)| WorkflowStep {
            command: command.to_string(),
            description: description.to_string(),
            rationale: rationale.to_string(),
        })
        .collect();

    WorkflowGuidance {
        scenario: scenario.to_string(),
        alternatives: derive_alternatives(&steps),
        steps,
    }
}

/// Alternatives as a static function of the chosen primary steps.
fn derive_alternatives(steps: &[WorkflowStep]) -> Vec<AlternativeWorkflow> {
    let has = |name: &str| steps.iter().any(|step| step.command == name);
    let mut alternatives = Vec::new();

    if has("dev") {
        alternatives.push(AlternativeWorkflow {
            description: "Small change that needs no formal planning".to_string(),
            steps: vec!["dev".to_string(), "ship".to_string()],
        });
    }
    if has("debug") {
        alternatives.push(AlternativeWorkflow {
            description: "Treat it as a code smell rather than a bug".to_string(),
            steps: vec!["refactor".to_string(), "check".to_string()],
        });
    }

    alternatives
}
