//! Assessment routing - from progress to the next offered actions.
//!
//! The router is a pure function of an [`AssessmentProgress`] snapshot.
//! Dimension offers come first, in canonical order, followed by whichever
//! milestone actions the completion count has unlocked.

use serde::Serialize;

use crate::domain::foundation::Dimension;
use crate::domain::profile::AssessmentProgress;

/// Completions required before the insights milestone unlocks.
pub const INSIGHTS_THRESHOLD: usize = 3;

/// Completions required before the action-plan milestone unlocks.
pub const ACTION_PLAN_THRESHOLD: usize = 8;

/// One action the user can take next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Start (or continue to) an open assessment dimension.
    Dimension { key: Dimension },
    /// Review preliminary career insights.
    Insights,
    /// Generate the full career action plan.
    ActionPlan,
}

/// Returns the ordered actions available at the given progress.
///
/// One `Dimension` action per remaining key, then `Insights` once at
/// least [`INSIGHTS_THRESHOLD`] dimensions are complete, then
/// `ActionPlan` once [`ACTION_PLAN_THRESHOLD`] are. The output is fully
/// determined by the input snapshot.
pub fn next_actions(progress: &AssessmentProgress) -> Vec<Action> {
    let mut actions: Vec<Action> = progress
        .remaining()
        .iter()
        .map(|dim| Action::Dimension { key: *dim })
        .collect();

    if progress.completed_count() >= INSIGHTS_THRESHOLD {
        actions.push(Action::Insights);
    }
    if progress.completed_count() >= ACTION_PLAN_THRESHOLD {
        actions.push(Action::ActionPlan);
    }

    actions
}
