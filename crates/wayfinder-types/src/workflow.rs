//! Workflow guidance types.

use serde::{Deserialize, Serialize};

/// One step in a recommended workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Command to run for this step.
    pub command: String,
    /// What the step does.
    pub description: String,
    /// Why the step belongs in the workflow.
    pub rationale: String,
}

/// An alternative command sequence for the same scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeWorkflow {
    /// When this alternative applies.
    pub description: String,
    /// Command names in order.
    pub steps: Vec<String>,
}

/// Recommended workflow for a described scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGuidance {
    /// The scenario text the guidance was produced for.
    pub scenario: String,
    /// Ordered steps of the primary workflow.
    pub steps: Vec<WorkflowStep>,
    /// Alternatives derived from the primary workflow's steps.
    pub alternatives: Vec<AlternativeWorkflow>,
}

impl WorkflowGuidance {
    /// Command names of the primary steps, in order.
    pub fn step_commands(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.command.as_str()).collect()
    }
}
