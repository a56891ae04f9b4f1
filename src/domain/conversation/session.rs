//! SessionLog entity - one ordered conversation transcript.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{SessionId, Timestamp};

/// An append-only transcript of one counselling session.
///
/// # Invariants
///
/// - turns are in append order; existing turns are never edited or removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Which session this transcript belongs to.
    session_id: SessionId,

    /// When the session was opened.
    created_at: Timestamp,

    /// The ordered turns.
    turns: Vec<ConversationTurn>,
}

impl SessionLog {
    /// Opens a new empty session log.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            created_at: Timestamp::now(),
            turns: Vec::new(),
        }
    }

    /// Reconstitutes a log from persistence.
    pub fn reconstitute(
        session_id: SessionId,
        created_at: Timestamp,
        turns: Vec<ConversationTurn>,
    ) -> Self {
        Self {
            session_id,
            created_at,
            turns,
        }
    }

    /// Appends a turn to the end of the log. The only mutator.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The timestamp of the most recent activity: the last turn, or the
    /// session opening when no turns exist yet.
    pub fn last_activity(&self) -> &Timestamp {
        self.turns
            .last()
            .map(ConversationTurn::timestamp)
            .unwrap_or(&self.created_at)
    }
}
