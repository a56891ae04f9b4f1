//! UserProfile aggregate root.
//!
//! The durable record of one user's identity and assessment results.
//! A profile always carries exactly 12 dimension slots; slots only ever
//! transition from empty to filled, never back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Dimension, ProfileId, Timestamp, ValidationError};
use crate::domain::profile::DimensionResult;

/// Outcome of a dimension write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionWrite {
    /// The slot was empty and the result has been recorded.
    Recorded,
    /// The slot was already filled; the stored result is unchanged.
    AlreadyComplete,
}

/// A user's profile: identity plus the 12 assessment dimension slots.
///
/// # Invariants
///
/// - `name` is sanitized (letters, digits, and single spaces) and non-empty
/// - `dimensions` holds exactly one slot per [`Dimension`], forever
/// - a filled slot is never overwritten or cleared
/// - `updated_at` is refreshed on every successful dimension write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier, generated at creation, immutable.
    id: ProfileId,

    /// Sanitized display name.
    name: String,

    /// When the profile was created.
    created_at: Timestamp,

    /// When the profile last changed.
    updated_at: Timestamp,

    /// One slot per assessment dimension.
    #[serde(default)]
    dimensions: BTreeMap<Dimension, Option<DimensionResult>>,
}

impl UserProfile {
    /// Creates a new profile with a fresh id and all 12 slots empty.
    ///
    /// The name is sanitized first: characters outside letters, digits,
    /// and whitespace are stripped, runs of whitespace collapse to a
    /// single space, and the result is trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty after sanitization
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = Self::sanitize_name(name);
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: ProfileId::new(),
            name,
            created_at: now,
            updated_at: now,
            dimensions: Self::empty_slots(),
        })
    }

    /// Reconstitutes a profile from persistence (no validation).
    pub fn reconstitute(
        id: ProfileId,
        name: String,
        created_at: Timestamp,
        updated_at: Timestamp,
        dimensions: BTreeMap<Dimension, Option<DimensionResult>>,
    ) -> Self {
        let mut profile = Self {
            id,
            name,
            created_at,
            updated_at,
            dimensions,
        };
        profile.normalize();
        profile
    }

    /// Fills any dimension keys absent from a persisted record with empty
    /// slots, restoring the exactly-12-slots invariant.
    pub fn normalize(&mut self) {
        for dim in Dimension::all() {
            self.dimensions.entry(*dim).or_insert(None);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the result stored for a dimension, if completed.
    pub fn dimension(&self, dim: Dimension) -> Option<&DimensionResult> {
        self.dimensions.get(&dim).and_then(Option::as_ref)
    }

    /// Returns true if the given dimension has been completed.
    pub fn is_dimension_complete(&self, dim: Dimension) -> bool {
        self.dimension(dim).is_some()
    }

    /// Returns the number of completed dimensions.
    pub fn completed_count(&self) -> usize {
        self.dimensions
            .values()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// The lowercase directory-friendly form of the name: whitespace
    /// becomes underscores.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a result for a dimension, write-once.
    ///
    /// If the slot is already filled the call is a no-op and the stored
    /// result stays as it was; callers can tell from the returned
    /// [`DimensionWrite`] which case occurred.
    pub fn complete_dimension(
        &mut self,
        dim: Dimension,
        result: DimensionResult,
    ) -> DimensionWrite {
        let slot = self.dimensions.entry(dim).or_insert(None);
        if slot.is_some() {
            return DimensionWrite::AlreadyComplete;
        }

        *slot = Some(result);
        self.updated_at = Timestamp::now();
        DimensionWrite::Recorded
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn sanitize_name(raw: &str) -> String {
        let stripped: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn empty_slots() -> BTreeMap<Dimension, Option<DimensionResult>> {
        Dimension::all().iter().map(|d| (*d, None)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_result(summary: &str) -> DimensionResult {
        DimensionResult::new(summary, vec![], vec![], vec![], vec![]).unwrap()
    }

    #[test]
    fn new_profile_has_12_empty_slots() {
        let profile = UserProfile::new("Afrin").unwrap();

        assert_eq!(profile.completed_count(), 0);
        for dim in Dimension::all() {
            assert!(profile.dimension(*dim).is_none());
        }
    }

    #[test]
    fn new_profile_generates_unique_ids() {
        let p1 = UserProfile::new("Afrin").unwrap();
        let p2 = UserProfile::new("Afrin").unwrap();
        assert_ne!(p1.id(), p2.id());
    }

    #[test]
    fn name_is_sanitized_at_creation() {
        let profile = UserProfile::new("  Afrin  O'Neill-42! ").unwrap();
        assert_eq!(profile.name(), "Afrin ONeill42");
    }

    #[test]
    fn name_whitespace_runs_collapse() {
        let profile = UserProfile::new("Jo \t  Anne").unwrap();
        assert_eq!(profile.name(), "Jo Anne");
    }

    #[test]
    fn rejects_name_empty_after_sanitization() {
        for raw in ["", "   ", "!!!", "@#$%"] {
            let result = UserProfile::new(raw);
            assert!(
                matches!(result, Err(ValidationError::EmptyField { .. })),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn slug_is_lowercase_with_underscores() {
        let profile = UserProfile::new("Jo Anne Smith").unwrap();
        assert_eq!(profile.slug(), "jo_anne_smith");
    }

    #[test]
    fn complete_dimension_records_result() {
        let mut profile = UserProfile::new("Afrin").unwrap();

        let write = profile.complete_dimension(Dimension::Personality, test_result("Curious"));

        assert_eq!(write, DimensionWrite::Recorded);
        assert_eq!(
            profile.dimension(Dimension::Personality).unwrap().summary(),
            "Curious"
        );
        assert_eq!(profile.completed_count(), 1);
    }

    #[test]
    fn complete_dimension_is_write_once() {
        let mut profile = UserProfile::new("Afrin").unwrap();
        profile.complete_dimension(Dimension::Skills, test_result("First"));
        let updated_after_first = *profile.updated_at();

        let write = profile.complete_dimension(Dimension::Skills, test_result("Second"));

        assert_eq!(write, DimensionWrite::AlreadyComplete);
        assert_eq!(
            profile.dimension(Dimension::Skills).unwrap().summary(),
            "First"
        );
        assert_eq!(profile.updated_at(), &updated_after_first);
    }

    #[test]
    fn complete_dimension_refreshes_updated_at() {
        let mut profile = UserProfile::new("Afrin").unwrap();
        let created = *profile.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(10));

        profile.complete_dimension(Dimension::Interests, test_result("Engaged"));

        assert!(profile.updated_at().is_after(&created));
    }

    #[test]
    fn normalize_restores_missing_slots() {
        let mut profile = UserProfile::new("Afrin").unwrap();
        // Simulate an older record missing some keys.
        profile.dimensions.remove(&Dimension::Constraints);
        profile.dimensions.remove(&Dimension::TrackRecord);

        profile.normalize();

        assert_eq!(profile.dimensions.len(), Dimension::COUNT);
        assert!(profile.dimension(Dimension::Constraints).is_none());
    }

    #[test]
    fn serde_round_trip_preserves_profile() {
        let mut profile = UserProfile::new("Afrin").unwrap();
        profile.complete_dimension(Dimension::Personality, test_result("Curious"));

        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(back, profile);
    }

    #[test]
    fn serialized_record_contains_all_dimension_keys() {
        let profile = UserProfile::new("Afrin").unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        let dims = json["dimensions"].as_object().unwrap();
        assert_eq!(dims.len(), 12);
        assert!(dims["personality"].is_null());
        assert!(dims["constraints"].is_null());
    }
}
