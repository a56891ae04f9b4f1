//! Application command and query handlers.

mod complete_dimension;
mod next_steps;
mod profile_summary;
mod record_turn;
mod register_user;

pub use complete_dimension::{
    CompleteDimensionCommand, CompleteDimensionHandler, CompleteDimensionResult,
};
pub use next_steps::{NextStep, NextStepsHandler, NextStepsQuery, NextStepsResult};
pub use profile_summary::{
    CompletedDimension, ConversationStats, ProfileSummary, ProfileSummaryHandler,
    ProfileSummaryQuery,
};
pub use record_turn::{RecordTurnCommand, RecordTurnHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
