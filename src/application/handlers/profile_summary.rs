//! ProfileSummary - Query handler for a user's overall status.
//!
//! Combines identity, assessment progress, conversation statistics, and
//! simple next-step recommendations into one report for the chat layer.

use std::sync::Arc;

use crate::domain::foundation::{Dimension, ProfileId, Timestamp};
use crate::domain::profile::AssessmentProgress;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Query for a profile's summary report.
#[derive(Debug, Clone)]
pub struct ProfileSummaryQuery {
    pub profile_id: ProfileId,
}

/// One completed dimension in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDimension {
    pub dimension: Dimension,
    pub summary: String,
    pub completed_at: Timestamp,
}

/// Aggregate statistics over a profile's sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStats {
    pub total_sessions: usize,
    pub total_turns: usize,
    pub last_activity: Option<Timestamp>,
}

/// The full summary report.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub profile_id: ProfileId,
    pub name: String,
    pub created_at: Timestamp,
    pub progress: AssessmentProgress,
    pub completed: Vec<CompletedDimension>,
    pub conversation: ConversationStats,
    pub recommendations: Vec<String>,
}

/// Handler for building profile summaries.
pub struct ProfileSummaryHandler {
    store: Arc<dyn ProfileStore>,
}

impl ProfileSummaryHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ProfileSummaryQuery,
    ) -> Result<ProfileSummary, ProfileStoreError> {
        let profile = self.store.get_profile(query.profile_id).await?;
        let sessions = self.store.list_sessions(query.profile_id).await?;

        let progress = AssessmentProgress::for_profile(&profile);

        let completed = progress
            .completed()
            .iter()
            .filter_map(|dim| {
                profile.dimension(*dim).map(|result| CompletedDimension {
                    dimension: *dim,
                    summary: result.summary().to_string(),
                    completed_at: *result.completed_at(),
                })
            })
            .collect();

        let conversation = ConversationStats {
            total_sessions: sessions.len(),
            total_turns: sessions.iter().map(|s| s.len()).sum(),
            last_activity: sessions.iter().map(|s| *s.last_activity()).max(),
        };

        let recommendations = Self::recommendations(&progress);

        Ok(ProfileSummary {
            profile_id: profile.id(),
            name: profile.name().to_string(),
            created_at: *profile.created_at(),
            progress,
            completed,
            conversation,
            recommendations,
        })
    }

    fn recommendations(progress: &AssessmentProgress) -> Vec<String> {
        let remaining = progress.remaining();
        match remaining.len() {
            0 => vec![
                "Excellent! Your profile is complete. Ready for comprehensive career \
                 recommendations."
                    .to_string(),
                "Schedule a follow-up session to explore specific career paths in detail."
                    .to_string(),
            ],
            12 => vec![format!(
                "Begin your career assessment journey with the {} assessment",
                remaining[0].display_name()
            )],
            n if n > 6 => vec![format!(
                "Continue your assessment by completing: {}",
                remaining[0].display_name()
            )],
            _ => {
                let next_few: Vec<&str> = remaining
                    .iter()
                    .take(3)
                    .map(|d| d.display_name())
                    .collect();
                vec![format!(
                    "You're making great progress! Complete these remaining assessments: {}",
                    next_few.join(", ")
                )]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStore;
    use crate::domain::conversation::ConversationTurn;
    use crate::domain::foundation::SessionId;
    use crate::domain::profile::DimensionResult;
    use serde_json::json;

    async fn store_with_profile() -> (Arc<InMemoryProfileStore>, ProfileId) {
        let store = Arc::new(InMemoryProfileStore::new());
        let profile = store.create_profile("Afrin").await.unwrap();
        (store, profile.id())
    }

    async fn complete(store: &InMemoryProfileStore, id: ProfileId, count: usize) {
        for dim in Dimension::all().iter().take(count) {
            store
                .complete_dimension(
                    id,
                    *dim,
                    DimensionResult::new("done", vec![], vec![], vec![], vec![]).unwrap(),
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn summary_reports_identity_and_progress() {
        let (store, profile_id) = store_with_profile().await;
        complete(&store, profile_id, 3).await;
        let handler = ProfileSummaryHandler::new(store);

        let summary = handler
            .handle(ProfileSummaryQuery { profile_id })
            .await
            .unwrap();

        assert_eq!(summary.name, "Afrin");
        assert_eq!(summary.progress.percentage().value(), 25);
        assert_eq!(summary.completed.len(), 3);
        assert_eq!(summary.completed[0].dimension, Dimension::Personality);
    }

    #[tokio::test]
    async fn summary_counts_sessions_and_turns() {
        let (store, profile_id) = store_with_profile().await;
        let session = SessionId::default_session();
        for msg in ["A", "B", "C"] {
            store
                .append_turn(
                    profile_id,
                    &session,
                    ConversationTurn::new(msg, json!(null)).unwrap(),
                )
                .await
                .unwrap();
        }
        let handler = ProfileSummaryHandler::new(store);

        let summary = handler
            .handle(ProfileSummaryQuery { profile_id })
            .await
            .unwrap();

        assert_eq!(summary.conversation.total_sessions, 1);
        assert_eq!(summary.conversation.total_turns, 3);
        assert!(summary.conversation.last_activity.is_some());
    }

    #[tokio::test]
    async fn fresh_profile_is_pointed_at_the_first_dimension() {
        let (store, profile_id) = store_with_profile().await;
        let handler = ProfileSummaryHandler::new(store);

        let summary = handler
            .handle(ProfileSummaryQuery { profile_id })
            .await
            .unwrap();

        assert_eq!(summary.recommendations.len(), 1);
        assert!(summary.recommendations[0].contains("Personality"));
    }

    #[tokio::test]
    async fn nearly_done_profile_lists_remaining_assessments() {
        let (store, profile_id) = store_with_profile().await;
        complete(&store, profile_id, 9).await;
        let handler = ProfileSummaryHandler::new(store);

        let summary = handler
            .handle(ProfileSummaryQuery { profile_id })
            .await
            .unwrap();

        assert!(summary.recommendations[0].contains("great progress"));
        assert!(summary.recommendations[0].contains("Emotional Intelligence"));
    }

    #[tokio::test]
    async fn complete_profile_gets_wrap_up_recommendations() {
        let (store, profile_id) = store_with_profile().await;
        complete(&store, profile_id, 12).await;
        let handler = ProfileSummaryHandler::new(store);

        let summary = handler
            .handle(ProfileSummaryQuery { profile_id })
            .await
            .unwrap();

        assert_eq!(summary.recommendations.len(), 2);
        assert!(summary.recommendations[0].contains("complete"));
    }
}
