//! Dimension enum representing the 12 assessment dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The 12 fixed career-assessment dimensions.
///
/// Declaration order is the canonical order: it drives the sequence in
/// which dimensions are offered to the user and every deterministic
/// iteration over the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Personality,
    Interests,
    Aspirations,
    Skills,
    MotivationsValues,
    CognitiveAbilities,
    LearningPreferences,
    PhysicalContext,
    StrengthsWeaknesses,
    EmotionalIntelligence,
    TrackRecord,
    Constraints,
}

impl Dimension {
    /// Number of dimensions in a complete assessment.
    pub const COUNT: usize = 12;

    /// Returns all dimensions in canonical order.
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Personality,
            Dimension::Interests,
            Dimension::Aspirations,
            Dimension::Skills,
            Dimension::MotivationsValues,
            Dimension::CognitiveAbilities,
            Dimension::LearningPreferences,
            Dimension::PhysicalContext,
            Dimension::StrengthsWeaknesses,
            Dimension::EmotionalIntelligence,
            Dimension::TrackRecord,
            Dimension::Constraints,
        ]
    }

    /// Returns the 0-based index of this dimension in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|d| d == self)
            .expect("Dimension must be in all() array")
    }

    /// Returns the snake_case key used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Personality => "personality",
            Dimension::Interests => "interests",
            Dimension::Aspirations => "aspirations",
            Dimension::Skills => "skills",
            Dimension::MotivationsValues => "motivations_values",
            Dimension::CognitiveAbilities => "cognitive_abilities",
            Dimension::LearningPreferences => "learning_preferences",
            Dimension::PhysicalContext => "physical_context",
            Dimension::StrengthsWeaknesses => "strengths_weaknesses",
            Dimension::EmotionalIntelligence => "emotional_intelligence",
            Dimension::TrackRecord => "track_record",
            Dimension::Constraints => "constraints",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Personality => "Personality",
            Dimension::Interests => "Career Interests",
            Dimension::Aspirations => "Career Aspirations",
            Dimension::Skills => "Skills Inventory",
            Dimension::MotivationsValues => "Values & Motivations",
            Dimension::CognitiveAbilities => "Cognitive Abilities",
            Dimension::LearningPreferences => "Learning Preferences",
            Dimension::PhysicalContext => "Work Environment",
            Dimension::StrengthsWeaknesses => "Strengths & Growth Areas",
            Dimension::EmotionalIntelligence => "Emotional Intelligence",
            Dimension::TrackRecord => "Track Record",
            Dimension::Constraints => "Practical Considerations",
        }
    }

    /// Returns a one-line description shown when the dimension is offered.
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Personality => "Discover your natural work style and preferences",
            Dimension::Interests => "Explore what truly engages and motivates you",
            Dimension::Aspirations => "Define your career goals and future vision",
            Dimension::Skills => "Evaluate your current abilities and strengths",
            Dimension::MotivationsValues => "Identify your core values and what drives you",
            Dimension::CognitiveAbilities => "Understand your thinking and problem-solving style",
            Dimension::LearningPreferences => {
                "Discover how you learn and process information best"
            }
            Dimension::PhysicalContext => "Identify your ideal work setting and conditions",
            Dimension::StrengthsWeaknesses => {
                "Honest assessment of abilities and development areas"
            }
            Dimension::EmotionalIntelligence => "Assess your interpersonal and emotional skills",
            Dimension::TrackRecord => "Review your achievements and success patterns",
            Dimension::Constraints => "Identify factors that influence your career choices",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|d| d.key() == s)
            .copied()
            .ok_or_else(|| ValidationError::unknown_dimension(s))
    }
}
