//! ConversationTurn entity.
//!
//! One exchange in a counselling session: the user's message and the
//! responder's payload. Turns are immutable records; the log they live
//! in is append-only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{Timestamp, ValidationError};

/// An immutable user/responder exchange.
///
/// The responder payload is kept opaque: this core never interprets it,
/// it only stores and returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// When the turn was recorded.
    timestamp: Timestamp,

    /// What the user said.
    user_message: String,

    /// The structured payload produced by the external responder.
    system_response: Value,
}

impl ConversationTurn {
    /// Creates a new turn stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the user message is empty or whitespace-only
    pub fn new(
        user_message: impl Into<String>,
        system_response: Value,
    ) -> Result<Self, ValidationError> {
        let user_message = user_message.into();
        if user_message.trim().is_empty() {
            return Err(ValidationError::empty_field("user_message"));
        }

        Ok(Self {
            timestamp: Timestamp::now(),
            user_message,
            system_response,
        })
    }

    /// Reconstitutes a turn from persistence (no validation).
    pub fn reconstitute(
        timestamp: Timestamp,
        user_message: String,
        system_response: Value,
    ) -> Self {
        Self {
            timestamp,
            user_message,
            system_response,
        }
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn system_response(&self) -> &Value {
        &self.system_response
    }
}
