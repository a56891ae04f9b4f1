//! Profile module - the user profile aggregate and derived progress.

mod dimension_result;
mod profile;
mod progress;

pub use dimension_result::DimensionResult;
pub use profile::{DimensionWrite, UserProfile};
pub use progress::AssessmentProgress;
