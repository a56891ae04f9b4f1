//! Profile Store Port - Interface for persisting profiles and transcripts.
//!
//! This port defines how user profiles and their session logs are
//! stored and retrieved, supporting both filesystem and in-memory
//! implementations.

use async_trait::async_trait;

use crate::domain::conversation::{ConversationTurn, SessionLog};
use crate::domain::foundation::{
    Dimension, ProfileId, SessionId, Timestamp, ValidationError,
};
use crate::domain::profile::{DimensionResult, UserProfile};

/// Errors that can occur during profile store operations.
///
/// Every store failure maps to exactly one of these; callers never see
/// an unclassified error. The `SerializationFailed`,
/// `DeserializationFailed`, and `Io` variants are storage faults and are
/// not retried by the store - retry policy, if any, belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Profile not found: {0}")]
    NotFound(ProfileId),

    #[error("Session '{session_id}' not found for profile {profile_id}")]
    SessionNotFound {
        profile_id: ProfileId,
        session_id: SessionId,
    },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// A roster entry describing one stored profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Port for persisting and loading user profiles and session logs.
///
/// The store assumes at most one in-flight mutating call per profile id;
/// concurrent writers to the same id may race on the backing storage.
/// Distinct profile ids are fully independent.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create a new profile from a display name.
    ///
    /// The name is sanitized before use; all 12 dimension slots start
    /// empty. The record is durable before the call returns.
    ///
    /// # Errors
    /// Returns `Validation` if the name is empty after sanitization.
    async fn create_profile(&self, name: &str) -> Result<UserProfile, ProfileStoreError>;

    /// Load a profile by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no record matches the id.
    async fn get_profile(&self, id: ProfileId) -> Result<UserProfile, ProfileStoreError>;

    /// Record a result for one dimension, write-once.
    ///
    /// If the dimension already holds a result the call is a no-op that
    /// returns the stored profile unchanged. On a real write the
    /// profile's `updated_at` is refreshed before persisting.
    ///
    /// # Errors
    /// Returns `NotFound` if no record matches the id.
    async fn complete_dimension(
        &self,
        id: ProfileId,
        dimension: Dimension,
        result: DimensionResult,
    ) -> Result<UserProfile, ProfileStoreError>;

    /// Append a turn to a session log, creating the log if absent.
    ///
    /// Turns are preserved in append order.
    ///
    /// # Errors
    /// Returns `NotFound` if no record matches the id.
    async fn append_turn(
        &self,
        id: ProfileId,
        session_id: &SessionId,
        turn: ConversationTurn,
    ) -> Result<(), ProfileStoreError>;

    /// Load one session log.
    ///
    /// # Errors
    /// Returns `SessionNotFound` if the profile has no such session.
    async fn load_session(
        &self,
        id: ProfileId,
        session_id: &SessionId,
    ) -> Result<SessionLog, ProfileStoreError>;

    /// Load all session logs for a profile, newest first.
    ///
    /// Returns an empty vec when the profile has no sessions yet.
    ///
    /// # Errors
    /// Returns `NotFound` if no record matches the id.
    async fn list_sessions(&self, id: ProfileId) -> Result<Vec<SessionLog>, ProfileStoreError>;

    /// Check whether a profile exists.
    async fn exists(&self, id: ProfileId) -> Result<bool, ProfileStoreError>;

    /// List all stored profiles, newest first.
    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, ProfileStoreError>;
}
