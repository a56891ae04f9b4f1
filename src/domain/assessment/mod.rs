//! Assessment module - routing and per-dimension interview guides.

mod guide;
mod router;

pub use guide::{guide_for, DimensionGuide};
pub use router::{next_actions, Action, ACTION_PLAN_THRESHOLD, INSIGHTS_THRESHOLD};
