//! RecordTurn - Command handler for appending a conversation turn.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{ProfileId, SessionId};
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to append one exchange to a session transcript.
#[derive(Debug, Clone)]
pub struct RecordTurnCommand {
    pub profile_id: ProfileId,
    /// Session label; `None` records into the default session.
    pub session_id: Option<String>,
    pub user_message: String,
    /// The structured payload from the external responder.
    pub system_response: Value,
}

/// Handler for recording conversation turns.
pub struct RecordTurnHandler {
    store: Arc<dyn ProfileStore>,
}

impl RecordTurnHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordTurnCommand) -> Result<(), ProfileStoreError> {
        let session_id = match cmd.session_id {
            Some(label) => SessionId::new(label)?,
            None => SessionId::default_session(),
        };

        let turn = ConversationTurn::new(cmd.user_message, cmd.system_response)?;
        self.store
            .append_turn(cmd.profile_id, &session_id, turn)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStore;
    use serde_json::json;

    async fn setup() -> (Arc<InMemoryProfileStore>, RecordTurnHandler, ProfileId) {
        let store = Arc::new(InMemoryProfileStore::new());
        let profile = store.create_profile("Afrin").await.unwrap();
        let handler = RecordTurnHandler::new(store.clone());
        (store, handler, profile.id())
    }

    #[tokio::test]
    async fn records_into_default_session_when_unnamed() {
        let (store, handler, profile_id) = setup().await;

        handler
            .handle(RecordTurnCommand {
                profile_id,
                session_id: None,
                user_message: "Hello".to_string(),
                system_response: json!({"reply": "Hi"}),
            })
            .await
            .unwrap();

        let log = store
            .load_session(profile_id, &SessionId::default_session())
            .await
            .unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.turns()[0].user_message(), "Hello");
    }

    #[tokio::test]
    async fn records_into_named_session() {
        let (store, handler, profile_id) = setup().await;

        handler
            .handle(RecordTurnCommand {
                profile_id,
                session_id: Some("intake".to_string()),
                user_message: "Hello".to_string(),
                system_response: json!(null),
            })
            .await
            .unwrap();

        let log = store
            .load_session(profile_id, &SessionId::new("intake").unwrap())
            .await
            .unwrap();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_session_label() {
        let (_, handler, profile_id) = setup().await;

        let result = handler
            .handle(RecordTurnCommand {
                profile_id,
                session_id: Some("../escape".to_string()),
                user_message: "Hello".to_string(),
                system_response: json!(null),
            })
            .await;

        assert!(matches!(result, Err(ProfileStoreError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_empty_user_message() {
        let (_, handler, profile_id) = setup().await;

        let result = handler
            .handle(RecordTurnCommand {
                profile_id,
                session_id: None,
                user_message: "   ".to_string(),
                system_response: json!(null),
            })
            .await;

        assert!(matches!(result, Err(ProfileStoreError::Validation(_))));
    }
}
