//! DimensionResult value object.
//!
//! The outcome of one completed assessment dimension. Results are
//! write-once: `completed_at` is set at construction and the record is
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{Timestamp, ValidationError};

/// The analyzed outcome of one assessment dimension.
///
/// # Invariants
///
/// - `summary` is non-empty (validated at construction)
/// - `completed_at` is set exactly once and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionResult {
    /// Free-text synthesis of the user's responses.
    summary: String,

    /// Specific strengths surfaced by the assessment.
    strengths: Vec<String>,

    /// Recurring patterns across the user's answers.
    themes: Vec<String>,

    /// How the findings connect to career opportunities.
    career_implications: Vec<String>,

    /// Suggested areas for growth.
    development_suggestions: Vec<String>,

    /// When the dimension was completed.
    completed_at: Timestamp,
}

impl DimensionResult {
    /// Creates a new result, stamping `completed_at` with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if summary is empty or whitespace-only
    pub fn new(
        summary: impl Into<String>,
        strengths: Vec<String>,
        themes: Vec<String>,
        career_implications: Vec<String>,
        development_suggestions: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let summary = summary.into();
        if summary.trim().is_empty() {
            return Err(ValidationError::empty_field("summary"));
        }

        Ok(Self {
            summary,
            strengths,
            themes,
            career_implications,
            development_suggestions,
            completed_at: Timestamp::now(),
        })
    }

    /// Parses the opaque payload returned by the external responder.
    ///
    /// The responder contract is a JSON object with a `summary` string and
    /// optional string arrays `strengths`, `themes`, `career_implications`,
    /// and `development_suggestions`. Absent arrays are treated as empty;
    /// anything else is rejected so untyped data never crosses the boundary.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or_else(|| {
            ValidationError::invalid_format("dimension_result", "expected a JSON object")
        })?;

        let summary = obj
            .get("summary")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ValidationError::invalid_format("summary", "expected a string field")
            })?;

        Self::new(
            summary,
            Self::string_list(obj.get("strengths"), "strengths")?,
            Self::string_list(obj.get("themes"), "themes")?,
            Self::string_list(obj.get("career_implications"), "career_implications")?,
            Self::string_list(
                obj.get("development_suggestions"),
                "development_suggestions",
            )?,
        )
    }

    /// Reconstitutes a result from persistence (no validation).
    pub fn reconstitute(
        summary: String,
        strengths: Vec<String>,
        themes: Vec<String>,
        career_implications: Vec<String>,
        development_suggestions: Vec<String>,
        completed_at: Timestamp,
    ) -> Self {
        Self {
            summary,
            strengths,
            themes,
            career_implications,
            development_suggestions,
            completed_at,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn career_implications(&self) -> &[String] {
        &self.career_implications
    }

    pub fn development_suggestions(&self) -> &[String] {
        &self.development_suggestions
    }

    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }

    fn string_list(value: Option<&Value>, field: &str) -> Result<Vec<String>, ValidationError> {
        match value {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ValidationError::invalid_format(field, "expected an array of strings")
                    })
                })
                .collect(),
            Some(_) => Err(ValidationError::invalid_format(
                field,
                "expected an array of strings",
            )),
        }
    }
}
