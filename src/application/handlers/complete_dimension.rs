//! CompleteDimension - Command handler for recording an assessment result.
//!
//! The external responder hands back an opaque JSON payload; this handler
//! parses it into a typed [`DimensionResult`] at the boundary before
//! anything is persisted, so malformed output never reaches the store.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{Dimension, ProfileId};
use crate::domain::profile::{AssessmentProgress, DimensionResult, UserProfile};
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to record a completed dimension for a profile.
#[derive(Debug, Clone)]
pub struct CompleteDimensionCommand {
    pub profile_id: ProfileId,
    /// The dimension key as supplied by the caller, e.g. `"personality"`.
    pub dimension_key: String,
    /// The raw payload from the external responder.
    pub payload: Value,
}

/// Result of a dimension completion attempt.
#[derive(Debug, Clone)]
pub struct CompleteDimensionResult {
    pub profile: UserProfile,
    pub progress: AssessmentProgress,
}

/// Handler for completing dimensions.
pub struct CompleteDimensionHandler {
    store: Arc<dyn ProfileStore>,
}

impl CompleteDimensionHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CompleteDimensionCommand,
    ) -> Result<CompleteDimensionResult, ProfileStoreError> {
        let dimension: Dimension = cmd.dimension_key.parse()?;
        let result = DimensionResult::from_value(&cmd.payload)?;

        let profile = self
            .store
            .complete_dimension(cmd.profile_id, dimension, result)
            .await?;
        let progress = AssessmentProgress::for_profile(&profile);

        tracing::debug!(
            profile_id = %profile.id(),
            dimension = dimension.key(),
            percentage = %progress.percentage(),
            "Recorded dimension completion"
        );

        Ok(CompleteDimensionResult { profile, progress })
    }
}
