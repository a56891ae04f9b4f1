//! AssessmentProgress value object - completion tracking for a profile.
//!
//! A read-only snapshot derived from a [`UserProfile`]: which dimensions
//! are done, which remain, and the overall percentage. Pure computation,
//! no side effects.

use crate::domain::foundation::{Dimension, Percentage};
use crate::domain::profile::UserProfile;

/// A snapshot of assessment completion across all 12 dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentProgress {
    completed: Vec<Dimension>,
    remaining: Vec<Dimension>,
    percentage: Percentage,
}

impl AssessmentProgress {
    /// Computes the progress snapshot for a profile.
    ///
    /// Both lists come back in canonical dimension order, so the same
    /// profile always yields the same snapshot.
    pub fn for_profile(profile: &UserProfile) -> Self {
        let (completed, remaining): (Vec<_>, Vec<_>) = Dimension::all()
            .iter()
            .partition(|dim| profile.is_dimension_complete(**dim));

        let completed: Vec<Dimension> = completed.into_iter().copied().collect();
        let remaining: Vec<Dimension> = remaining.into_iter().copied().collect();
        let percentage = Percentage::from_ratio(completed.len(), Dimension::COUNT);

        Self {
            completed,
            remaining,
            percentage,
        }
    }

    /// Dimensions with a recorded result, in canonical order.
    pub fn completed(&self) -> &[Dimension] {
        &self.completed
    }

    /// Dimensions still open, in canonical order.
    pub fn remaining(&self) -> &[Dimension] {
        &self.remaining
    }

    /// Overall completion percentage (0-100, rounded).
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Number of completed dimensions.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns true when all 12 dimensions are complete.
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The first open dimension in canonical order, if any.
    pub fn next_dimension(&self) -> Option<Dimension> {
        self.remaining.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DimensionResult;
    use proptest::prelude::*;

    fn test_result() -> DimensionResult {
        DimensionResult::new("done", vec![], vec![], vec![], vec![]).unwrap()
    }

    fn profile_with(dims: &[Dimension]) -> UserProfile {
        let mut profile = UserProfile::new("Test User").unwrap();
        for dim in dims {
            profile.complete_dimension(*dim, test_result());
        }
        profile
    }

    #[test]
    fn empty_profile_is_zero_percent() {
        let progress = AssessmentProgress::for_profile(&profile_with(&[]));

        assert_eq!(progress.percentage(), Percentage::ZERO);
        assert!(progress.completed().is_empty());
        assert_eq!(progress.remaining().len(), 12);
        assert!(!progress.is_complete());
    }

    #[test]
    fn full_profile_is_one_hundred_percent() {
        let progress = AssessmentProgress::for_profile(&profile_with(Dimension::all()));

        assert_eq!(progress.percentage(), Percentage::HUNDRED);
        assert_eq!(progress.completed().len(), 12);
        assert!(progress.remaining().is_empty());
        assert!(progress.is_complete());
        assert_eq!(progress.next_dimension(), None);
    }

    #[test]
    fn three_of_twelve_is_twenty_five_percent() {
        let progress = AssessmentProgress::for_profile(&profile_with(&[
            Dimension::Personality,
            Dimension::Interests,
            Dimension::Skills,
        ]));

        assert_eq!(progress.percentage().value(), 25);
        assert_eq!(progress.completed_count(), 3);
        assert_eq!(progress.remaining().len(), 9);
    }

    #[test]
    fn lists_follow_canonical_order() {
        // Complete out of canonical order on purpose.
        let progress = AssessmentProgress::for_profile(&profile_with(&[
            Dimension::Constraints,
            Dimension::Personality,
            Dimension::PhysicalContext,
        ]));

        assert_eq!(
            progress.completed(),
            [
                Dimension::Personality,
                Dimension::PhysicalContext,
                Dimension::Constraints,
            ]
        );
        assert_eq!(progress.remaining()[0], Dimension::Interests);
    }

    #[test]
    fn next_dimension_is_first_open_in_order() {
        let progress =
            AssessmentProgress::for_profile(&profile_with(&[Dimension::Personality]));
        assert_eq!(progress.next_dimension(), Some(Dimension::Interests));
    }

    #[test]
    fn same_profile_yields_identical_snapshots() {
        let profile = profile_with(&[Dimension::Aspirations, Dimension::TrackRecord]);

        let first = AssessmentProgress::for_profile(&profile);
        let second = AssessmentProgress::for_profile(&profile);

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn completed_and_remaining_always_partition_the_set(mask in prop::collection::vec(any::<bool>(), 12)) {
            let dims: Vec<Dimension> = Dimension::all()
                .iter()
                .zip(&mask)
                .filter(|(_, done)| **done)
                .map(|(d, _)| *d)
                .collect();

            let progress = AssessmentProgress::for_profile(&profile_with(&dims));

            prop_assert_eq!(
                progress.completed().len() + progress.remaining().len(),
                12
            );
            prop_assert!(progress.percentage().value() <= 100);
        }

        #[test]
        fn percentage_is_monotone_in_completions(mask in prop::collection::vec(any::<bool>(), 12)) {
            let dims: Vec<Dimension> = Dimension::all()
                .iter()
                .zip(&mask)
                .filter(|(_, done)| **done)
                .map(|(d, _)| *d)
                .collect();

            let mut profile = profile_with(&dims);
            let before = AssessmentProgress::for_profile(&profile).percentage();

            if let Some(next) = AssessmentProgress::for_profile(&profile).next_dimension() {
                profile.complete_dimension(next, test_result());
                let after = AssessmentProgress::for_profile(&profile).percentage();
                prop_assert!(after >= before);
            }
        }
    }
}
