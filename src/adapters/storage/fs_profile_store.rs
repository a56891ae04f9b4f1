//! Filesystem Profile Store Adapter
//!
//! Stores each profile as a JSON record in its own directory, with
//! session transcripts as one JSON file per session:
//!
//! ```text
//! {base_dir}/users/{slug}_{id8}/profile.json
//! {base_dir}/users/{slug}_{id8}/sessions/{session_id}.json
//! ```
//!
//! `{slug}` is the lowercased profile name and `{id8}` the first 8 hex
//! characters of the profile id; lookups scan for the `_{id8}` suffix and
//! confirm the full id from the loaded record.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::conversation::{ConversationTurn, SessionLog};
use crate::domain::foundation::{Dimension, ProfileId, SessionId};
use crate::domain::profile::{DimensionResult, DimensionWrite, UserProfile};
use crate::ports::{ProfileRecord, ProfileStore, ProfileStoreError};

/// File-based storage for profiles and session transcripts.
#[derive(Debug, Clone)]
pub struct FsProfileStore {
    base_dir: PathBuf,
}

impl FsProfileStore {
    /// Create a new file store rooted at a base directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = FsProfileStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one subdirectory per user.
    fn users_dir(&self) -> PathBuf {
        self.base_dir.join("users")
    }

    /// Directory name for a profile: `{slug}_{id8}`.
    fn profile_dir_name(profile: &UserProfile) -> String {
        format!("{}_{}", profile.slug(), profile.id().short())
    }

    fn profile_file(dir: &Path) -> PathBuf {
        dir.join("profile.json")
    }

    fn sessions_dir(dir: &Path) -> PathBuf {
        dir.join("sessions")
    }

    fn session_file(dir: &Path, session_id: &SessionId) -> PathBuf {
        Self::sessions_dir(dir).join(format!("{}.json", session_id.as_str()))
    }

    /// SHA-256 hex digest of a record's content.
    pub fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Locate a profile's directory by the `_{id8}` suffix convention,
    /// confirming the full id from the record inside.
    async fn find_profile_dir(&self, id: ProfileId) -> Result<PathBuf, ProfileStoreError> {
        let users_dir = self.users_dir();
        if !users_dir.exists() {
            return Err(ProfileStoreError::NotFound(id));
        }

        let suffix = format!("_{}", id.short());
        let mut entries = fs::read_dir(&users_dir)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list users: {}", e)))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list users: {}", e)))?
        {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.ends_with(&suffix) {
                continue;
            }

            // Short-prefix collisions are possible; the record decides.
            let dir = entry.path();
            match self.read_profile(&dir).await {
                Ok(profile) if profile.id() == id => return Ok(dir),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable profile directory");
                    continue;
                }
            }
        }

        Err(ProfileStoreError::NotFound(id))
    }

    async fn read_profile(&self, dir: &Path) -> Result<UserProfile, ProfileStoreError> {
        let file_path = Self::profile_file(dir);
        let json = fs::read_to_string(&file_path)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to read profile: {}", e)))?;

        let mut profile: UserProfile = serde_json::from_str(&json)
            .map_err(|e| ProfileStoreError::DeserializationFailed(e.to_string()))?;
        profile.normalize();
        Ok(profile)
    }

    async fn write_profile(
        &self,
        dir: &Path,
        profile: &UserProfile,
    ) -> Result<(), ProfileStoreError> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;

        self.write_atomic(&Self::profile_file(dir), &json).await?;
        tracing::debug!(
            profile_id = %profile.id(),
            checksum = %Self::compute_checksum(&json),
            "Wrote profile record"
        );
        Ok(())
    }

    async fn read_session(&self, path: &Path) -> Result<SessionLog, ProfileStoreError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to read session: {}", e)))?;

        serde_json::from_str(&json)
            .map_err(|e| ProfileStoreError::DeserializationFailed(e.to_string()))
    }

    /// Write a file atomically via a temporary file and rename.
    async fn write_atomic(&self, path: &Path, content: &str) -> Result<(), ProfileStoreError> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to write temporary file: {}", e)))?;

        fs::rename(&temp_path, path)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to rename file: {}", e)))
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), ProfileStoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to create directory: {}", e)))
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn create_profile(&self, name: &str) -> Result<UserProfile, ProfileStoreError> {
        let profile = UserProfile::new(name)?;

        let dir = self.users_dir().join(Self::profile_dir_name(&profile));
        self.ensure_dir(&Self::sessions_dir(&dir)).await?;
        self.write_profile(&dir, &profile).await?;

        tracing::info!(profile_id = %profile.id(), name = %profile.name(), "Created profile");
        Ok(profile)
    }

    async fn get_profile(&self, id: ProfileId) -> Result<UserProfile, ProfileStoreError> {
        let dir = self.find_profile_dir(id).await?;
        self.read_profile(&dir).await
    }

    async fn complete_dimension(
        &self,
        id: ProfileId,
        dimension: Dimension,
        result: DimensionResult,
    ) -> Result<UserProfile, ProfileStoreError> {
        let dir = self.find_profile_dir(id).await?;
        let mut profile = self.read_profile(&dir).await?;

        match profile.complete_dimension(dimension, result) {
            DimensionWrite::Recorded => {
                self.write_profile(&dir, &profile).await?;
                Ok(profile)
            }
            DimensionWrite::AlreadyComplete => {
                tracing::warn!(
                    profile_id = %id,
                    dimension = dimension.key(),
                    "Dimension already complete; keeping stored result"
                );
                Ok(profile)
            }
        }
    }

    async fn append_turn(
        &self,
        id: ProfileId,
        session_id: &SessionId,
        turn: ConversationTurn,
    ) -> Result<(), ProfileStoreError> {
        let dir = self.find_profile_dir(id).await?;
        let sessions_dir = Self::sessions_dir(&dir);
        self.ensure_dir(&sessions_dir).await?;

        let path = Self::session_file(&dir, session_id);
        let mut log = if path.exists() {
            self.read_session(&path).await?
        } else {
            SessionLog::new(session_id.clone())
        };

        log.append(turn);

        let json = serde_json::to_string_pretty(&log)
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;
        self.write_atomic(&path, &json).await
    }

    async fn load_session(
        &self,
        id: ProfileId,
        session_id: &SessionId,
    ) -> Result<SessionLog, ProfileStoreError> {
        let dir = self.find_profile_dir(id).await?;
        let path = Self::session_file(&dir, session_id);

        if !path.exists() {
            return Err(ProfileStoreError::SessionNotFound {
                profile_id: id,
                session_id: session_id.clone(),
            });
        }

        self.read_session(&path).await
    }

    async fn list_sessions(&self, id: ProfileId) -> Result<Vec<SessionLog>, ProfileStoreError> {
        let dir = self.find_profile_dir(id).await?;
        let sessions_dir = Self::sessions_dir(&dir);
        if !sessions_dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&sessions_dir)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list sessions: {}", e)))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list sessions: {}", e)))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }

        let mut logs = futures::future::try_join_all(
            paths.iter().map(|path| self.read_session(path)),
        )
        .await?;

        logs.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(logs)
    }

    async fn exists(&self, id: ProfileId) -> Result<bool, ProfileStoreError> {
        match self.find_profile_dir(id).await {
            Ok(_) => Ok(true),
            Err(ProfileStoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, ProfileStoreError> {
        let users_dir = self.users_dir();
        if !users_dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut entries = fs::read_dir(&users_dir)
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list users: {}", e)))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ProfileStoreError::Io(format!("Failed to list users: {}", e)))?
        {
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }

            match self.read_profile(&dir).await {
                Ok(profile) => records.push(ProfileRecord {
                    id: profile.id(),
                    name: profile.name().to_string(),
                    created_at: *profile.created_at(),
                }),
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable profile directory");
                }
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
