//! NextSteps - Query handler for the actions a user can take next.
//!
//! Pairs the router's output with the display metadata the chat layer
//! shows when offering each action.

use std::sync::Arc;

use crate::domain::assessment::{next_actions, Action};
use crate::domain::foundation::ProfileId;
use crate::domain::profile::AssessmentProgress;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Query for a profile's next available steps.
#[derive(Debug, Clone)]
pub struct NextStepsQuery {
    pub profile_id: ProfileId,
}

/// One offered step with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub action: Action,
    pub title: String,
    pub description: String,
}

/// Progress plus the ordered steps available at that progress.
#[derive(Debug, Clone)]
pub struct NextStepsResult {
    pub progress: AssessmentProgress,
    pub steps: Vec<NextStep>,
}

/// Handler for computing next steps.
pub struct NextStepsHandler {
    store: Arc<dyn ProfileStore>,
}

impl NextStepsHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: NextStepsQuery) -> Result<NextStepsResult, ProfileStoreError> {
        let profile = self.store.get_profile(query.profile_id).await?;
        let progress = AssessmentProgress::for_profile(&profile);

        let steps = next_actions(&progress)
            .into_iter()
            .map(Self::describe)
            .collect();

        Ok(NextStepsResult { progress, steps })
    }

    fn describe(action: Action) -> NextStep {
        match action {
            Action::Dimension { key } => NextStep {
                action,
                title: key.display_name().to_string(),
                description: key.description().to_string(),
            },
            Action::Insights => NextStep {
                action,
                title: "Get Career Insights".to_string(),
                description: "Review your progress and get preliminary insights".to_string(),
            },
            Action::ActionPlan => NextStep {
                action,
                title: "Generate Career Action Plan".to_string(),
                description: "Create your personalized career development roadmap".to_string(),
            },
        }
    }
}
