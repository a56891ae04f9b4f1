//! In-Memory Profile Store Adapter
//!
//! Holds profiles and session logs in memory behind the same port as the
//! filesystem store. Useful for testing and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{ConversationTurn, SessionLog};
use crate::domain::foundation::{Dimension, ProfileId, SessionId};
use crate::domain::profile::{DimensionResult, DimensionWrite, UserProfile};
use crate::ports::{ProfileRecord, ProfileStore, ProfileStoreError};

/// In-memory storage for profiles and session transcripts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<ProfileId, UserProfile>>>,
    sessions: Arc<RwLock<HashMap<(ProfileId, SessionId), SessionLog>>>,
}

impl InMemoryProfileStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored profiles.
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }

    async fn require_profile(&self, id: ProfileId) -> Result<UserProfile, ProfileStoreError> {
        self.profiles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ProfileStoreError::NotFound(id))
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create_profile(&self, name: &str) -> Result<UserProfile, ProfileStoreError> {
        let profile = UserProfile::new(name)?;
        self.profiles
            .write()
            .await
            .insert(profile.id(), profile.clone());
        Ok(profile)
    }

    async fn get_profile(&self, id: ProfileId) -> Result<UserProfile, ProfileStoreError> {
        self.require_profile(id).await
    }

    async fn complete_dimension(
        &self,
        id: ProfileId,
        dimension: Dimension,
        result: DimensionResult,
    ) -> Result<UserProfile, ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or(ProfileStoreError::NotFound(id))?;

        if profile.complete_dimension(dimension, result) == DimensionWrite::AlreadyComplete {
            tracing::warn!(
                profile_id = %id,
                dimension = dimension.key(),
                "Dimension already complete; keeping stored result"
            );
        }
        Ok(profile.clone())
    }

    async fn append_turn(
        &self,
        id: ProfileId,
        session_id: &SessionId,
        turn: ConversationTurn,
    ) -> Result<(), ProfileStoreError> {
        self.require_profile(id).await?;

        let mut sessions = self.sessions.write().await;
        sessions
            .entry((id, session_id.clone()))
            .or_insert_with(|| SessionLog::new(session_id.clone()))
            .append(turn);
        Ok(())
    }

    async fn load_session(
        &self,
        id: ProfileId,
        session_id: &SessionId,
    ) -> Result<SessionLog, ProfileStoreError> {
        self.require_profile(id).await?;

        self.sessions
            .read()
            .await
            .get(&(id, session_id.clone()))
            .cloned()
            .ok_or_else(|| ProfileStoreError::SessionNotFound {
                profile_id: id,
                session_id: session_id.clone(),
            })
    }

    async fn list_sessions(&self, id: ProfileId) -> Result<Vec<SessionLog>, ProfileStoreError> {
        self.require_profile(id).await?;

        let mut logs: Vec<SessionLog> = self
            .sessions
            .read()
            .await
            .iter()
            .filter(|((profile_id, _), _)| *profile_id == id)
            .map(|(_, log)| log.clone())
            .collect();

        logs.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(logs)
    }

    async fn exists(&self, id: ProfileId) -> Result<bool, ProfileStoreError> {
        Ok(self.profiles.read().await.contains_key(&id))
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, ProfileStoreError> {
        let mut records: Vec<ProfileRecord> = self
            .profiles
            .read()
            .await
            .values()
            .map(|profile| ProfileRecord {
                id: profile.id(),
                name: profile.name().to_string(),
                created_at: *profile.created_at(),
            })
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_result(summary: &str) -> DimensionResult {
        DimensionResult::new(summary, vec![], vec![], vec![], vec![]).unwrap()
    }

    fn test_turn(message: &str) -> ConversationTurn {
        ConversationTurn::new(message, json!({"reply": "ok"})).unwrap()
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let store = InMemoryProfileStore::new();

        let created = store.create_profile("Afrin").await.unwrap();
        let loaded = store.get_profile(created.id()).await.unwrap();

        assert_eq!(loaded, created);
        assert_eq!(store.profile_count().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = InMemoryProfileStore::new();
        let result = store.get_profile(ProfileId::new()).await;
        assert!(matches!(result, Err(ProfileStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn complete_dimension_is_write_once() {
        let store = InMemoryProfileStore::new();
        let profile = store.create_profile("Afrin").await.unwrap();

        store
            .complete_dimension(profile.id(), Dimension::Interests, test_result("First"))
            .await
            .unwrap();
        let second = store
            .complete_dimension(profile.id(), Dimension::Interests, test_result("Second"))
            .await
            .unwrap();

        assert_eq!(
            second.dimension(Dimension::Interests).unwrap().summary(),
            "First"
        );
    }

    #[tokio::test]
    async fn append_turn_requires_existing_profile() {
        let store = InMemoryProfileStore::new();

        let result = store
            .append_turn(
                ProfileId::new(),
                &SessionId::default_session(),
                test_turn("hi"),
            )
            .await;

        assert!(matches!(result, Err(ProfileStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn append_and_list_preserve_order() {
        let store = InMemoryProfileStore::new();
        let profile = store.create_profile("Afrin").await.unwrap();
        let session = SessionId::default_session();

        store.append_turn(profile.id(), &session, test_turn("A")).await.unwrap();
        store.append_turn(profile.id(), &session, test_turn("B")).await.unwrap();

        let log = store.load_session(profile.id(), &session).await.unwrap();
        let messages: Vec<&str> = log.turns().iter().map(|t| t.user_message()).collect();
        assert_eq!(messages, ["A", "B"]);

        let sessions = store.list_sessions(profile.id()).await.unwrap();
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn list_profiles_returns_roster() {
        let store = InMemoryProfileStore::new();
        store.create_profile("One").await.unwrap();
        store.create_profile("Two").await.unwrap();

        let roster = store.list_profiles().await.unwrap();
        assert_eq!(roster.len(), 2);
    }
}
